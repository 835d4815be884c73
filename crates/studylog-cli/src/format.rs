use chrono::{DateTime, Utc};

/// Format a timestamp as relative time ("2 min ago", "yesterday")
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(ts);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        let weeks = days / 7;
        format!("{} weeks ago", weeks)
    } else if days < 365 {
        let months = days / 30;
        format!("{} months ago", months)
    } else {
        let years = days / 365;
        format!("{} years ago", years)
    }
}

/// Render a progress percentage as a fixed-width bar, e.g. `[######----]`.
pub fn progress_bar(progress: u8, width: usize) -> String {
    let filled = (usize::from(progress.min(100)) * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Render minutes as a horizontal bar scaled against the largest group.
pub fn duration_bar(minutes: u64, max_minutes: u64, width: usize) -> String {
    if max_minutes == 0 {
        return String::new();
    }
    let len = ((minutes * width as u64) / max_minutes).max(1) as usize;
    "#".repeat(len)
}
