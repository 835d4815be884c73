use anyhow::Result;
use tracing_subscriber::EnvFilter;

use studylog_store::resolve_data_dir;

use crate::args::{Cli, Commands, GoalCommand, SessionCommand};
use crate::context::ExecutionContext;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(&cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir);

    match cli.command {
        Commands::Init => handlers::init::handle(&ctx),

        Commands::Log {
            subject,
            duration,
            date,
            notes,
            difficulty,
        } => handlers::log::handle(&ctx, subject, duration, date, notes, difficulty),

        Commands::Session { command } => match command {
            SessionCommand::List {
                subject,
                search,
                sort,
                limit,
                format,
            } => handlers::session_list::handle(&ctx, subject, search, sort, limit, format),
            SessionCommand::Delete { id } => handlers::session_delete::handle(&ctx, &id),
        },

        Commands::Sessions {
            subject,
            search,
            sort,
            limit,
            format,
        } => handlers::session_list::handle(&ctx, subject, search, sort, limit, format),

        Commands::Goal { command } => match command {
            GoalCommand::Add {
                title,
                target,
                description,
                deadline,
            } => handlers::goal::handle_add(&ctx, title, target, description, deadline),
            GoalCommand::List { format } => handlers::goal::handle_list(&ctx, format),
            GoalCommand::Bump { id } => handlers::goal::handle_bump(&ctx, &id),
            GoalCommand::Set {
                id,
                progress,
                title,
                description,
                target,
                deadline,
            } => handlers::goal::handle_set(&ctx, &id, progress, title, description, target, deadline),
            GoalCommand::Delete { id } => handlers::goal::handle_delete(&ctx, &id),
        },

        Commands::Dashboard { format } => handlers::dashboard::handle(&ctx, format),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
