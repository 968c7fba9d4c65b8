use regex::Regex;
use std::{fmt, sync::LazyLock};

const MAX_COMPONENT: u32 = 59;

static TIME_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{1,2})$").unwrap());

/// A track length written as `m[m]:s[s]`, both parts in 0..=59.
///
/// The raw text is kept so labels and diagnostics show the token exactly as
/// it appeared in the playlist (`3:5` stays `3:5`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeCode {
    raw: String,
    minutes: u32,
    seconds: u32,
}

impl TimeCode {
    pub fn parse(token: &str) -> Option<Self> {
        let caps = TIME_CODE_RE.captures(token)?;
        let minutes: u32 = caps.get(1)?.as_str().parse().ok()?;
        let seconds: u32 = caps.get(2)?.as_str().parse().ok()?;
        if minutes > MAX_COMPONENT || seconds > MAX_COMPONENT {
            return None;
        }
        Some(TimeCode {
            raw: token.to_string(),
            minutes,
            seconds,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

pub fn is_valid_time_code(token: &str) -> bool {
    TimeCode::parse(token).is_some()
}
