//! RankingSession - mutable input state for one vendor comparison.
//!
//! Owns the fixed criteria and the list of alternatives being scored, and
//! tracks which analysis step the session is in so a second run cannot be
//! started while one is in flight. Ranking itself is delegated to the pure
//! functions in `domain::analysis`; the session only hands out snapshots.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{run_ranking, validate_responses, RankingResult};
use crate::domain::foundation::{AlternativeId, Percentage, ValidationError};

use super::{palette_color, Alternative, CriteriaSet, RankingError, Response};

/// Progress of a session through setup, analysis and results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStep {
    #[default]
    Setup,
    Analysis,
    Results,
}

impl AnalysisStep {
    /// One-based step number for progress indicators.
    pub fn number(&self) -> u8 {
        match self {
            AnalysisStep::Setup => 1,
            AnalysisStep::Analysis => 2,
            AnalysisStep::Results => 3,
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisStep::Setup => "Setup",
            AnalysisStep::Analysis => "Analysis",
            AnalysisStep::Results => "Results",
        }
    }
}

/// Session state: criteria, alternatives, current step and last results.
#[derive(Debug, Clone)]
pub struct RankingSession {
    criteria: CriteriaSet,
    alternatives: Vec<Alternative>,
    step: AnalysisStep,
    results: Vec<RankingResult>,
}

impl RankingSession {
    /// Creates a session holding one blank alternative.
    pub fn new(criteria: CriteriaSet) -> Self {
        let mut session = Self {
            criteria,
            alternatives: Vec::new(),
            step: AnalysisStep::Setup,
            results: Vec::new(),
        };
        session.add_alternative();
        session
    }

    /// Creates a session from existing alternatives.
    ///
    /// Fails if the list is empty or any response vector has the wrong length.
    pub fn from_alternatives(
        criteria: CriteriaSet,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, RankingError> {
        if alternatives.is_empty() {
            return Err(RankingError::MinimumAlternatives);
        }
        for alt in &alternatives {
            if alt.responses.len() != criteria.len() {
                return Err(RankingError::ResponseCountMismatch {
                    alternative_name: alt.name.clone(),
                    expected: criteria.len(),
                    actual: alt.responses.len(),
                });
            }
        }
        Ok(Self {
            criteria,
            alternatives,
            step: AnalysisStep::Setup,
            results: Vec::new(),
        })
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn step(&self) -> AnalysisStep {
        self.step
    }

    /// Results of the last completed run (empty before the first run).
    pub fn results(&self) -> &[RankingResult] {
        &self.results
    }

    /// Finds an alternative by ID.
    pub fn find_alternative(&self, id: AlternativeId) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.id == id)
    }

    /// Appends a blank alternative named `Vendor {k}` and returns its ID.
    pub fn add_alternative(&mut self) -> AlternativeId {
        let position = self.alternatives.len();
        let alt = Alternative::new(
            format!("Vendor {}", position + 1),
            self.criteria.len(),
            palette_color(position),
        );
        let id = alt.id;
        self.alternatives.push(alt);
        id
    }

    /// Removes an alternative; the last remaining one cannot be removed.
    pub fn remove_alternative(&mut self, id: AlternativeId) -> Result<Alternative, RankingError> {
        if self.alternatives.len() <= 1 {
            return Err(RankingError::MinimumAlternatives);
        }
        let index = self.index_of(id)?;
        Ok(self.alternatives.remove(index))
    }

    /// Overwrites one response of an alternative with a yes or no answer.
    ///
    /// `Response::Unanswered` is rejected; answers cannot be withdrawn.
    pub fn set_response(
        &mut self,
        id: AlternativeId,
        criterion_index: usize,
        response: Response,
    ) -> Result<(), RankingError> {
        let count = self.criteria.len();
        if criterion_index >= count {
            return Err(RankingError::CriterionOutOfRange {
                index: criterion_index,
                count,
            });
        }
        if !response.is_answered() {
            return Err(ValidationError::invalid_format("response", "must be yes or no").into());
        }
        let index = self.index_of(id)?;
        self.alternatives[index].responses[criterion_index] = response;
        Ok(())
    }

    /// Renames an alternative.
    pub fn rename_alternative(
        &mut self,
        id: AlternativeId,
        name: impl Into<String>,
    ) -> Result<(), RankingError> {
        let index = self.index_of(id)?;
        self.alternatives[index].name = name.into();
        Ok(())
    }

    /// Answered responses across all alternatives over `alternatives × n`.
    pub fn completion_percentage(&self) -> Percentage {
        let answered: usize = self.alternatives.iter().map(|a| a.answered_count()).sum();
        Percentage::of(answered, self.alternatives.len() * self.criteria.len())
    }

    /// Returns true when a run may be started.
    pub fn can_run(&self) -> bool {
        self.step != AnalysisStep::Analysis && self.completion_percentage().is_complete()
    }

    /// Validates the matrix and moves to the Analysis step.
    ///
    /// Returns a snapshot of the alternatives for the run to read.
    pub fn begin_analysis(&mut self) -> Result<Vec<Alternative>, RankingError> {
        if self.step == AnalysisStep::Analysis {
            return Err(RankingError::RunInProgress);
        }
        validate_responses(&self.alternatives, self.criteria.len())?;
        self.step = AnalysisStep::Analysis;
        Ok(self.alternatives.clone())
    }

    /// Stores results of the in-flight run and moves to the Results step.
    pub fn complete_analysis(&mut self, results: Vec<RankingResult>) -> Result<(), RankingError> {
        if self.step != AnalysisStep::Analysis {
            return Err(RankingError::NoActiveRun);
        }
        self.results = results;
        self.step = AnalysisStep::Results;
        Ok(())
    }

    /// Abandons the in-flight run and returns to Setup.
    pub fn abort_analysis(&mut self) {
        if self.step == AnalysisStep::Analysis {
            self.step = AnalysisStep::Setup;
        }
    }

    /// Runs the full ranking synchronously and stores the results.
    pub fn rank(&mut self) -> Result<&[RankingResult], RankingError> {
        let snapshot = self.begin_analysis()?;
        match run_ranking(&snapshot, &self.criteria) {
            Ok(results) => {
                self.complete_analysis(results)?;
                Ok(&self.results)
            }
            Err(err) => {
                self.abort_analysis();
                Err(err)
            }
        }
    }

    /// Clears alternatives and results, then adds one fresh alternative.
    pub fn reset(&mut self) {
        self.alternatives.clear();
        self.results.clear();
        self.step = AnalysisStep::Setup;
        self.add_alternative();
    }

    fn index_of(&self, id: AlternativeId) -> Result<usize, RankingError> {
        self.alternatives
            .iter()
            .position(|a| a.id == id)
            .ok_or(RankingError::AlternativeNotFound(id))
    }
}

impl TryFrom<(CriteriaSet, Vec<Vec<i8>>)> for RankingSession {
    type Error = RankingError;

    /// Builds a session from raw response rows, naming alternatives `Vendor {k}`.
    fn try_from((criteria, rows): (CriteriaSet, Vec<Vec<i8>>)) -> Result<Self, Self::Error> {
        let alternatives = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Alternative::from_raw(format!("Vendor {}", i + 1), row, palette_color(i))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;
        RankingSession::from_alternatives(criteria, alternatives)
    }
}
