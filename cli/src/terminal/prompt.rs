use std::time::Duration;

use netkit_common::error::InputError;

const MAX_PING_COUNT: u32 = 100;
const MAX_SAMPLE_SECS: f64 = 3_600.0;

/// Outcome of reading an optional value that has a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer<T> {
    Given(T),
    Empty,
    Invalid,
}

impl<T> Answer<T> {
    pub fn or(self, default: T) -> T {
        match self {
            Answer::Given(value) => value,
            Answer::Empty | Answer::Invalid => default,
        }
    }
}

pub fn parse_host(raw: &str) -> Result<String, InputError> {
    let host: &str = raw.trim();
    if host.is_empty() {
        return Err(InputError::EmptyHost);
    }
    Ok(host.to_string())
}

pub fn parse_port(raw: &str) -> Result<u16, InputError> {
    let trimmed: &str = raw.trim();
    trimmed
        .parse::<u16>()
        .map_err(|_| InputError::InvalidPort(trimmed.to_string()))
}

/// Number of echo requests, 1 to 100.
pub fn parse_count(raw: &str) -> Answer<u32> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Answer::Empty;
    }
    match trimmed.parse::<u32>() {
        Ok(n) if (1..=MAX_PING_COUNT).contains(&n) => Answer::Given(n),
        _ => Answer::Invalid,
    }
}

/// Sampling window in seconds; fractions allowed, capped at one hour.
pub fn parse_duration(raw: &str) -> Answer<Duration> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Answer::Empty;
    }
    let Ok(secs) = trimmed.parse::<f64>() else {
        return Answer::Invalid;
    };
    if !(0.0..=MAX_SAMPLE_SECS).contains(&secs) {
        return Answer::Invalid;
    }
    Duration::try_from_secs_f64(secs).map_or(Answer::Invalid, Answer::Given)
}

pub fn is_yes(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_is_trimmed_and_required() {
        assert_eq!(parse_host("  example.org \n"), Ok("example.org".to_string()));
        assert_eq!(parse_host("   "), Err(InputError::EmptyHost));
    }

    #[test]
    fn ports_must_fit_in_sixteen_bits() {
        assert_eq!(parse_port(" 22 "), Ok(22));
        assert_eq!(parse_port("0"), Ok(0));
        assert_eq!(parse_port("65535"), Ok(65535));
        assert_eq!(parse_port("65536"), Err(InputError::InvalidPort("65536".into())));
        assert_eq!(parse_port("-1"), Err(InputError::InvalidPort("-1".into())));
        assert_eq!(parse_port("http"), Err(InputError::InvalidPort("http".into())));
    }

    #[test]
    fn count_falls_back_to_default() {
        assert_eq!(parse_count("4"), Answer::Given(4));
        assert_eq!(parse_count(""), Answer::Empty);
        assert_eq!(parse_count("0"), Answer::Invalid);
        assert_eq!(parse_count("101"), Answer::Invalid);
        assert_eq!(parse_count("three"), Answer::Invalid);
        assert_eq!(parse_count("abc").or(1), 1);
    }

    #[test]
    fn duration_accepts_fractions_and_rejects_negatives() {
        assert_eq!(parse_duration("2"), Answer::Given(Duration::from_secs(2)));
        assert_eq!(parse_duration("0.5"), Answer::Given(Duration::from_millis(500)));
        assert_eq!(parse_duration("0"), Answer::Given(Duration::ZERO));
        assert_eq!(parse_duration("-3"), Answer::Invalid);
        assert_eq!(parse_duration("NaN"), Answer::Invalid);
        assert_eq!(parse_duration("inf"), Answer::Invalid);
        assert_eq!(parse_duration("7200"), Answer::Invalid);
        assert_eq!(parse_duration(""), Answer::Empty);
    }

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("sure"));
    }
}
