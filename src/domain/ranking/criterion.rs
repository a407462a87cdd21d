//! Criteria - the fixed, weighted questions every alternative is scored on.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A weighted yes/no evaluation criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Human-readable question.
    pub text: String,
    /// Relative importance; weights are used as given, never renormalized.
    pub weight: f64,
    /// `true` when a higher raw value is better, `false` for cost criteria.
    pub benefit: bool,
    /// Display-only grouping label.
    pub category: String,
    /// Display-only explanation of the question.
    #[serde(default)]
    pub tooltip: String,
}

impl Criterion {
    /// Creates a validated criterion.
    pub fn new(
        text: impl Into<String>,
        weight: f64,
        benefit: bool,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let criterion = Self {
            text: text.into(),
            weight,
            benefit,
            category: category.into(),
            tooltip: String::new(),
        };
        criterion.validate()?;
        Ok(criterion)
    }

    /// Returns true for a cost criterion (lower raw value is better).
    pub fn is_cost(&self) -> bool {
        !self.benefit
    }

    /// Checks text is present and weight is a finite non-negative number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion.text"));
        }
        if !self.weight.is_finite() {
            return Err(ValidationError::invalid_format(
                "criterion.weight",
                "must be a finite number",
            ));
        }
        if self.weight < 0.0 {
            return Err(ValidationError::out_of_range(
                "criterion.weight",
                0.0,
                f64::MAX,
                self.weight,
            ));
        }
        Ok(())
    }
}

/// Ordered, immutable list of criteria for one ranking session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Criterion>", into = "Vec<Criterion>")]
pub struct CriteriaSet(Vec<Criterion>);

impl CriteriaSet {
    /// Creates a criteria set, validating every criterion.
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        for criterion in &criteria {
            criterion.validate()?;
        }
        Ok(Self(criteria))
    }

    /// The eight-question wedding vendor criteria.
    pub fn vendor() -> Self {
        VENDOR_CRITERIA.clone()
    }

    /// Number of criteria (n).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a criterion by position.
    pub fn get(&self, index: usize) -> Option<&Criterion> {
        self.0.get(index)
    }

    /// Iterates criteria in fixed order.
    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.0.iter()
    }

    /// Weight vector in criterion order.
    pub fn weights(&self) -> Vec<f64> {
        self.0.iter().map(|c| c.weight).collect()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.0.iter().map(|c| c.weight).sum()
    }

    /// Short column labels `Q1..Qn`.
    pub fn labels(&self) -> Vec<String> {
        (1..=self.0.len()).map(|i| format!("Q{}", i)).collect()
    }
}

impl TryFrom<Vec<Criterion>> for CriteriaSet {
    type Error = ValidationError;

    fn try_from(criteria: Vec<Criterion>) -> Result<Self, Self::Error> {
        CriteriaSet::new(criteria)
    }
}

impl From<CriteriaSet> for Vec<Criterion> {
    fn from(set: CriteriaSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a CriteriaSet {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn vendor_criterion(
    text: &str,
    weight: f64,
    benefit: bool,
    category: &str,
    tooltip: &str,
) -> Criterion {
    Criterion {
        text: text.to_string(),
        weight,
        benefit,
        category: category.to_string(),
        tooltip: tooltip.to_string(),
    }
}

static VENDOR_CRITERIA: Lazy<CriteriaSet> = Lazy::new(|| {
    CriteriaSet(vec![
        vendor_criterion(
            "Price within couple's budget?",
            0.2,
            true,
            "Cost",
            "Whether the vendor's pricing aligns with the couple's allocated budget",
        ),
        vendor_criterion(
            "Available on wedding date?",
            0.15,
            true,
            "Availability",
            "Vendor has confirmed availability for the specific wedding date",
        ),
        vendor_criterion(
            "Positive reviews (4.5+ stars)?",
            0.1,
            true,
            "Reputation",
            "Vendor has consistently high ratings from previous clients",
        ),
        vendor_criterion(
            "Experience (5+ years)?",
            0.1,
            true,
            "Experience",
            "Vendor has significant experience in the wedding industry",
        ),
        vendor_criterion(
            "Offers customization options?",
            0.15,
            true,
            "Flexibility",
            "Ability to tailor services to couple's specific preferences and needs",
        ),
        vendor_criterion(
            "Requires large deposit (>50%)?",
            0.1,
            false,
            "Payment Terms",
            "Vendor requires a substantial upfront payment",
        ),
        vendor_criterion(
            "Provides liability insurance?",
            0.1,
            true,
            "Security",
            "Vendor has proper insurance coverage for their services",
        ),
        vendor_criterion(
            "Located within 30km of venue?",
            0.1,
            true,
            "Location",
            "Vendor's proximity to the wedding venue",
        ),
    ])
});
