//! Alternative - one vendor candidate and its answers to the criteria.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, ValidationError};

use super::Response;

/// Display colours assigned to new alternatives in creation order.
pub const ALTERNATIVE_COLORS: [&str; 8] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
];

/// Returns the palette colour for the alternative at `position`.
pub fn palette_color(position: usize) -> &'static str {
    ALTERNATIVE_COLORS[position % ALTERNATIVE_COLORS.len()]
}

/// A vendor candidate being scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub name: String,
    /// One entry per criterion, in criterion order.
    pub responses: Vec<Response>,
    pub color: String,
}

impl Alternative {
    /// Creates an alternative with every response unanswered.
    pub fn new(name: impl Into<String>, criteria_count: usize, color: impl Into<String>) -> Self {
        Self {
            id: AlternativeId::new(),
            name: name.into(),
            responses: vec![Response::Unanswered; criteria_count],
            color: color.into(),
        }
    }

    /// Creates an alternative with the given responses.
    pub fn with_responses(
        name: impl Into<String>,
        responses: Vec<Response>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: AlternativeId::new(),
            name: name.into(),
            responses,
            color: color.into(),
        }
    }

    /// Creates an alternative from raw sentinel-encoded values (-1, 0, 1).
    pub fn from_raw(
        name: impl Into<String>,
        raw: &[i8],
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let responses = raw
            .iter()
            .map(|&value| Response::try_from_i8(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_responses(name, responses, color))
    }

    /// Number of answered criteria.
    pub fn answered_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_answered()).count()
    }

    /// Index of the first unanswered criterion, if any.
    pub fn first_unanswered(&self) -> Option<usize> {
        self.responses.iter().position(|r| !r.is_answered())
    }

    /// Returns true when every criterion is answered.
    pub fn is_complete(&self) -> bool {
        self.first_unanswered().is_none()
    }

    /// Raw 0/1 scores; unanswered entries are skipped.
    pub fn scores(&self) -> Vec<u8> {
        self.responses.iter().filter_map(Response::score).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alternative_is_fully_unanswered() {
        let alt = Alternative::new("Vendor 1", 8, palette_color(0));
        assert_eq!(alt.responses.len(), 8);
        assert_eq!(alt.answered_count(), 0);
        assert_eq!(alt.first_unanswered(), Some(0));
        assert_eq!(alt.color, "#3B82F6");
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(8), palette_color(0));
        assert_eq!(palette_color(9), "#EF4444");
    }

    #[test]
    fn from_raw_parses_sentinel_values() {
        let alt = Alternative::from_raw("Caterer", &[1, 0, -1], "#000000").unwrap();
        assert_eq!(alt.answered_count(), 2);
        assert_eq!(alt.first_unanswered(), Some(2));
        assert_eq!(alt.scores(), vec![1, 0]);
    }

    #[test]
    fn from_raw_rejects_invalid_values() {
        assert!(Alternative::from_raw("Caterer", &[1, 5], "#000000").is_err());
    }

    #[test]
    fn complete_alternative_has_no_unanswered() {
        let alt = Alternative::with_responses(
            "DJ",
            vec![Response::Yes, Response::No],
            palette_color(1),
        );
        assert!(alt.is_complete());
    }

    #[test]
    fn ids_are_unique_per_alternative() {
        let a = Alternative::new("Same", 2, "#fff");
        let b = Alternative::new("Same", 2, "#fff");
        assert_ne!(a.id, b.id);
    }
}
