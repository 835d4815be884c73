use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use studylog_engine::{PROGRESS_STEP, clamped_progress, is_complete};
use studylog_types::{Goal, GoalPatch};

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::format::progress_bar;
use crate::handlers::parse_timestamp;

pub fn handle_add(
    ctx: &ExecutionContext,
    title: String,
    target: String,
    description: Option<String>,
    deadline: Option<String>,
) -> Result<()> {
    let mut goal = Goal::new(title, target);
    if let Some(description) = description {
        goal = goal.with_description(description);
    }
    if let Some(deadline) = &deadline {
        goal = goal.with_deadline(parse_timestamp(deadline)?);
    }

    goal.validate()?;
    ctx.store().add_goal(goal.clone())?;

    println!("Goal \"{}\" added (id {})", goal.title, goal.id);
    Ok(())
}

pub fn handle_list(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let goals = ctx.store().list_goals()?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&goals)?);
        return Ok(());
    }

    if goals.is_empty() {
        println!("No goals set yet");
        return Ok(());
    }

    let use_color = std::io::stdout().is_terminal();
    for goal in &goals {
        print_goal(goal, use_color);
    }

    let complete = goals.iter().filter(|g| is_complete(g)).count();
    println!();
    println!("{} goals · {} complete", goals.len(), complete);
    Ok(())
}

pub fn handle_bump(ctx: &ExecutionContext, id: &str) -> Result<()> {
    let goals = ctx.store().list_goals()?;
    let Some(goal) = goals.iter().find(|g| g.id == id) else {
        bail!("goal not found: {}", id);
    };

    let next = clamped_progress(goal, PROGRESS_STEP);
    ctx.store().update_goal(id, &GoalPatch::progress(next))?;

    println!("{}: {}% -> {}%", goal.title, goal.progress, next);
    Ok(())
}

pub fn handle_set(
    ctx: &ExecutionContext,
    id: &str,
    progress: Option<u8>,
    title: Option<String>,
    description: Option<String>,
    target: Option<String>,
    deadline: Option<String>,
) -> Result<()> {
    let deadline = match deadline {
        Some(raw) => Some(parse_timestamp(&raw)?),
        None => None,
    };

    let patch = GoalPatch {
        title,
        description,
        target,
        deadline,
        progress,
    };
    if patch.is_empty() {
        bail!("nothing to update: pass at least one of --progress, --title, --description, --target, --deadline");
    }

    let goals = ctx.store().list_goals()?;
    let Some(goal) = goals.iter().find(|g| g.id == id) else {
        bail!("goal not found: {}", id);
    };

    // Validate the merged record before touching the store.
    let mut updated = goal.clone();
    patch.apply(&mut updated);
    updated.validate()?;

    ctx.store().update_goal(id, &patch)?;
    println!("Goal \"{}\" updated", updated.title);
    Ok(())
}

pub fn handle_delete(ctx: &ExecutionContext, id: &str) -> Result<()> {
    ctx.store().delete_goal(id)?;
    println!("Goal deleted");
    Ok(())
}

fn print_goal(goal: &Goal, use_color: bool) {
    let bar = progress_bar(goal.progress, 10);
    let head = format!("{} {:>3}%", bar, goal.progress);
    let id = format!("(id {})", goal.id);

    if use_color {
        if is_complete(goal) {
            println!("{}  {}  {}", head.green(), goal.title.green().bold(), id.dimmed());
        } else {
            println!("{}  {}  {}", head, goal.title.bold(), id.dimmed());
        }
    } else {
        println!("{}  {}  {}", head, goal.title, id);
    }

    println!("    target: {}", goal.target);
    if let Some(description) = &goal.description {
        println!("    {}", description);
    }
    if let Some(deadline) = goal.deadline {
        println!("    deadline: {}", deadline.format("%Y-%m-%d"));
    }
}
