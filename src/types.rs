use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// API key passed as the `key` query parameter on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for an empty (or all-whitespace) key.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Outcome of a single endpoint check.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    Success(Value),
    Failure {
        status: String,
        message: Option<String>,
    },
    TransportError(String),
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        matches!(self, CheckResult::Success(_))
    }
}

/// Per-run mapping of check identifier to pass/fail, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(String, bool)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome. Re-recording an id overwrites it in place.
    pub fn record(&mut self, id: &str, passed: bool) {
        match self.entries.iter_mut().find(|(name, _)| name == id) {
            Some(entry) => entry.1 = passed,
            None => self.entries.push((id.to_string(), passed)),
        }
    }

    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, passed)| *passed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn passed_count(&self) -> usize {
        self.entries.iter().filter(|(_, passed)| *passed).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, passed)| (name.as_str(), *passed))
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, passed) in &self.entries {
            map.serialize_entry(name, passed)?;
        }
        map.end()
    }
}

struct ResultSetVisitor;

impl<'de> Visitor<'de> for ResultSetVisitor {
    type Value = ResultSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of check names to booleans")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ResultSet, A::Error> {
        let mut set = ResultSet::new();
        while let Some((name, passed)) = access.next_entry::<String, bool>()? {
            set.record(&name, passed);
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for ResultSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResultSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_rejects_blank() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   \n").is_none());
    }

    #[test]
    fn test_credential_trims_and_redacts() {
        let cred = Credential::new("  AIzaSecret \n").unwrap();
        assert_eq!(cred.expose(), "AIzaSecret");
        assert!(!format!("{cred:?}").contains("AIzaSecret"));
    }

    #[test]
    fn test_check_result_passed() {
        assert!(CheckResult::Success(Value::Null).passed());
        assert!(
            !CheckResult::Failure {
                status: "REQUEST_DENIED".to_string(),
                message: None,
            }
            .passed()
        );
        assert!(!CheckResult::TransportError("refused".to_string()).passed());
    }

    #[test]
    fn test_result_set_keeps_insertion_order() {
        let mut set = ResultSet::new();
        set.record("places", true);
        set.record("geocoding", false);
        set.record("places", false);

        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["places", "geocoding"]);
        assert_eq!(set.get("places"), Some(false));
        assert_eq!(set.len(), 2);
        assert_eq!(set.passed_count(), 0);
    }

    #[test]
    fn test_result_set_json_preserves_order() {
        let mut set = ResultSet::new();
        set.record("geocoding", true);
        set.record("places", false);
        set.record("directions", true);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"geocoding":true,"places":false,"directions":true}"#);

        let back: ResultSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_result_set_rejects_non_boolean_values() {
        let result: Result<ResultSet, _> = serde_json::from_str(r#"{"geocoding":"yes"}"#);
        assert!(result.is_err());
    }
}
