//! Helpers for reading typed settings from environment variables.

use std::str::FromStr;

/// A configuration value was present but could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Read `var` from the environment, falling back to `default` when unset.
pub fn env_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    parse_or(var, env_opt(var), default)
}

/// Read an optional string variable, treating an empty value as unset.
pub fn env_opt(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}

/// Parse an already looked-up value, falling back to `default` when absent.
///
/// A present but unparseable value is an error rather than a silent fallback.
pub fn parse_or<T: FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_value() {
        let port: u16 = parse_or("PORT", Some(" 8080 ".into()), 3000).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn absent_value_uses_default() {
        let port: u16 = parse_or("PORT", None, 3000).unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn rejects_unparseable_value() {
        let err = parse_or::<u16>("PORT", Some("eighty".into()), 3000).unwrap_err();
        assert_eq!(err.to_string(), "PORT has an invalid value: \"eighty\"");
    }
}
