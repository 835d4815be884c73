use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use studylog_engine::{
    SessionQuery, SessionSort, filter_sessions, format_duration, sort_sessions, total_duration,
};
use studylog_types::StudySession;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::format::format_relative_time;

pub fn handle(
    ctx: &ExecutionContext,
    subject: Option<String>,
    search: Option<String>,
    sort: Option<SessionSort>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut query = SessionQuery::new();
    let filtering = subject.is_some() || search.is_some();
    if let Some(subject) = subject {
        query = query.subject(subject);
    }
    if let Some(search) = search {
        query = query.search(search);
    }

    let sessions = ctx.store().list_sessions()?;
    let filtered = filter_sessions(&sessions, &query);

    let sort = match sort {
        Some(sort) => sort,
        None => ctx.config()?.default_sort,
    };
    let mut sorted = sort_sessions(&filtered, sort);
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&sorted)?);
        return Ok(());
    }

    if sorted.is_empty() {
        if filtering {
            println!("No sessions match the current filters");
        } else {
            println!("No study sessions recorded yet. Start tracking your study time!");
        }
        return Ok(());
    }

    let use_color = std::io::stdout().is_terminal();
    for session in &sorted {
        print_session(session, use_color);
    }

    println!();
    println!(
        "{} sessions · total {}",
        sorted.len(),
        format_duration(total_duration(&sorted))
    );
    Ok(())
}

fn print_session(session: &StudySession, use_color: bool) {
    let duration = format_duration(u64::from(session.duration));
    let when = format_relative_time(session.date);
    let difficulty = session
        .difficulty
        .map(|d| format!("[{}]  ", d))
        .unwrap_or_default();
    let id = format!("(id {})", session.id);

    if use_color {
        println!(
            "{}  {}  {}{}  {}",
            session.subject.bold(),
            duration.yellow(),
            difficulty,
            when,
            id.dimmed()
        );
    } else {
        println!(
            "{}  {}  {}{}  {}",
            session.subject, duration, difficulty, when, id
        );
    }

    if let Some(notes) = &session.notes {
        println!("    {}", notes);
    }
}
