use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Team identifier as used by the fixture provider.
///
/// Names are the join key between roster configuration and fixtures, so they
/// are trimmed on construction and compared case-sensitively.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Create a team name, trimming surrounding whitespace.
    ///
    /// Fails if nothing is left after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidTeamName(raw.as_ref().to_string()));
        }
        Ok(TeamName(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether two names differ only by letter case.
    pub fn loosely_matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl TryFrom<String> for TeamName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        TeamName::new(value)
    }
}

impl From<TeamName> for String {
    fn from(value: TeamName) -> Self {
        value.0
    }
}

impl Deref for TeamName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TeamName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TeamName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TeamName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let name = TeamName::new("  Uruguay ").unwrap();
        assert_eq!(name.as_str(), "Uruguay");
        assert_eq!(name, "Uruguay");
    }

    #[test]
    fn test_rejects_blank() {
        assert!(matches!(TeamName::new("   "), Err(Error::InvalidTeamName(_))));
        assert!(TeamName::new("").is_err());
    }

    #[test]
    fn test_case_sensitive_equality() {
        let name = TeamName::new("Denmark").unwrap();
        assert_ne!(name, "denmark");
        assert!(name.loosely_matches(" denmark"));
    }

    #[test]
    fn test_deserialize_validates() {
        let name: TeamName = serde_json::from_str("\" Spain\"").unwrap();
        assert_eq!(name, "Spain");
        assert!(serde_json::from_str::<TeamName>("\"\"").is_err());
    }
}
