pub mod dashboard;
pub mod goal;
pub mod init;
pub mod log;
pub mod session_delete;
pub mod session_list;

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// Parse a user-supplied timestamp: RFC 3339 first, then a plain
/// YYYY-MM-DD date taken as midnight UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| anyhow!("invalid date '{}': expected YYYY-MM-DD or RFC 3339", raw))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dates_parse_to_midnight_utc() {
        let parsed = parse_timestamp("2026-03-14").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-03-14T00:00:00+00:00");
    }

    #[test]
    fn rfc3339_timestamps_pass_through() {
        let parsed = parse_timestamp("2026-03-14T09:30:00Z").unwrap();
        assert_eq!(parsed.timestamp(), 1773480600);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_timestamp("next tuesday").is_err());
    }
}
