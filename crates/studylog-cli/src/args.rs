use clap::{Parser, Subcommand, ValueEnum};

use studylog_engine::SessionSort;
use studylog_types::Difficulty;

#[derive(Parser)]
#[command(name = "studylog")]
#[command(about = "Track study sessions and goals from your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory override (default: the system data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize the data directory, config and sample data")]
    Init,

    #[command(about = "Log a study session")]
    Log {
        /// Subject studied, e.g. "Mathematics"
        subject: String,

        /// Minutes spent
        #[arg(long)]
        duration: u32,

        /// Session date (YYYY-MM-DD or RFC 3339), defaults to now
        #[arg(long)]
        date: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Difficulty: easy, medium or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    #[command(about = "Manage and view study sessions")]
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    #[command(about = "List study sessions (alias for 'session list')")]
    Sessions {
        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        sort: Option<SessionSort>,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Manage study goals")]
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },

    #[command(about = "Show aggregated study statistics")]
    Dashboard {
        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum SessionCommand {
    #[command(about = "List sessions with filtering and sorting")]
    List {
        /// Keep only sessions with this exact subject
        #[arg(long)]
        subject: Option<String>,

        /// Case-insensitive search over subject and notes
        #[arg(long)]
        search: Option<String>,

        /// Sort key: date-desc, date-asc, duration-desc, duration-asc, subject-asc
        #[arg(long)]
        sort: Option<SessionSort>,

        /// Show at most this many sessions
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Delete a session by id")]
    Delete {
        /// Session id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum GoalCommand {
    #[command(about = "Add a new goal")]
    Add {
        /// Goal title, e.g. "Master Calculus"
        title: String,

        /// Success criterion, e.g. "Score 90% on final exam"
        #[arg(long)]
        target: String,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// Deadline (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        deadline: Option<String>,
    },

    #[command(about = "List goals with their progress")]
    List {
        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Increment a goal's progress by one step")]
    Bump {
        /// Goal id
        id: String,
    },

    #[command(about = "Update fields of an existing goal")]
    Set {
        /// Goal id
        id: String,

        #[arg(long)]
        progress: Option<u8>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        target: Option<String>,

        /// Deadline (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        deadline: Option<String>,
    },

    #[command(about = "Delete a goal by id")]
    Delete {
        /// Goal id
        id: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}
