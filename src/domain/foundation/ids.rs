//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an alternative (vendor candidate) in a ranking session.
///
/// Generated once at creation and never reused, even after the alternative
/// is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternativeId(Uuid);

impl AlternativeId {
    /// Creates a new random AlternativeId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an AlternativeId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AlternativeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlternativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AlternativeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a persisted ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingRunId(Uuid);

impl RankingRunId {
    /// Creates a new random RankingRunId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RankingRunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RankingRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RankingRunId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternative_id_generates_unique_values() {
        let id1 = AlternativeId::new();
        let id2 = AlternativeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn alternative_id_parses_from_valid_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: AlternativeId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn alternative_id_rejects_invalid_string() {
        let result: Result<AlternativeId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn alternative_id_serializes_transparently() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = AlternativeId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }

    #[test]
    fn ranking_run_id_roundtrips_through_display() {
        let id = RankingRunId::new();
        let parsed: RankingRunId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
