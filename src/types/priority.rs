use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority the service attaches to a reply.
///
/// High-priority replies are rendered with emergency styling regardless of
/// their category.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// An ordinary reply.
    #[default]
    Normal,

    /// An emergency reply that warrants an alert.
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Normal => write!(f, "NORMAL"),
            Priority::High => write!(f, "HIGH"),
        }
    }
}

/// Error returned when parsing an invalid priority string.
#[derive(Debug)]
pub struct PriorityParseError {
    /// The invalid string value that could not be parsed.
    pub invalid_value: String,
}

impl fmt::Display for PriorityParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown priority: {}", self.invalid_value)
    }
}

impl std::error::Error for PriorityParseError {}

impl FromStr for Priority {
    type Err = PriorityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(Priority::Normal),
            "HIGH" => Ok(Priority::High),
            _ => Err(PriorityParseError {
                invalid_value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization() {
        assert_eq!(serde_json::to_string(&Priority::Normal).unwrap(), r#""NORMAL""#);
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), r#""HIGH""#);
    }

    #[test]
    fn deserialization() {
        let priority: Priority = serde_json::from_str(r#""HIGH""#).unwrap();
        assert_eq!(priority, Priority::High);
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn parse_round_trip() {
        assert_eq!("NORMAL".parse::<Priority>().unwrap(), Priority::Normal);
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }
}
