use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use studylog_engine::{
    SubjectTotal, duration_by_subject, format_duration, is_complete, recent_sessions,
    total_duration,
};
use studylog_types::{Goal, StudySession};

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::format::{duration_bar, format_relative_time, progress_bar};

#[derive(Serialize)]
struct DashboardOutput<'a> {
    total_minutes: u64,
    total_time: String,
    session_count: usize,
    by_subject: Vec<SubjectTotal>,
    recent_sessions: &'a [StudySession],
    goals: &'a [Goal],
}

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let store = ctx.store();
    let sessions = store.list_sessions()?;
    let goals = store.list_goals()?;

    let total_minutes = total_duration(&sessions);
    let by_subject = duration_by_subject(&sessions);
    let recent = recent_sessions(&sessions, ctx.config()?.recent_limit);

    if format.is_json() {
        let output = DashboardOutput {
            total_minutes,
            total_time: format_duration(total_minutes),
            session_count: sessions.len(),
            by_subject,
            recent_sessions: recent,
            goals: &goals,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let use_color = std::io::stdout().is_terminal();

    print_header("Study Dashboard", use_color);
    println!(
        "Total study time: {} across {} sessions",
        format_duration(total_minutes),
        sessions.len()
    );
    println!();

    print_header("Study time by subject", use_color);
    if by_subject.is_empty() {
        println!("No study data available yet");
    } else {
        let max_minutes = by_subject.iter().map(|t| t.minutes).max().unwrap_or(0);
        let width = by_subject
            .iter()
            .map(|t| t.subject.len())
            .max()
            .unwrap_or(0);
        for total in &by_subject {
            let bar = duration_bar(total.minutes, max_minutes, 30);
            println!(
                "  {:<width$}  {:<30}  {}",
                total.subject,
                bar,
                format_duration(total.minutes),
            );
        }
    }
    println!();

    print_header("Recent sessions", use_color);
    if recent.is_empty() {
        println!("No study sessions recorded yet. Start tracking your study time!");
    } else {
        for session in recent {
            println!(
                "  {}  {}  {}",
                session.subject,
                format_duration(u64::from(session.duration)),
                format_relative_time(session.date)
            );
        }
    }
    println!();

    print_header("Goals", use_color);
    if goals.is_empty() {
        println!("No goals set yet");
    } else {
        for goal in &goals {
            let head = format!("{} {:>3}%", progress_bar(goal.progress, 10), goal.progress);
            if use_color && is_complete(goal) {
                println!("  {}  {}", head.green(), goal.title.green());
            } else {
                println!("  {}  {}", head, goal.title);
            }
        }
    }

    Ok(())
}

fn print_header(title: &str, use_color: bool) {
    if use_color {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
}
