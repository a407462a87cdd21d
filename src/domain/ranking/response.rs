//! Response value object for binary criterion answers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Answer to one yes/no criterion: unanswered (-1), no (0) or yes (1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum Response {
    #[default]
    Unanswered = -1,
    No = 0,
    Yes = 1,
}

impl Response {
    /// Creates a Response from an integer, returning error if out of range.
    pub fn try_from_i8(value: i8) -> Result<Self, ValidationError> {
        match value {
            -1 => Ok(Response::Unanswered),
            0 => Ok(Response::No),
            1 => Ok(Response::Yes),
            _ => Err(ValidationError::out_of_range(
                "response",
                -1.0,
                1.0,
                f64::from(value),
            )),
        }
    }

    /// Returns the raw sentinel-encoded value.
    pub fn raw(&self) -> i8 {
        *self as i8
    }

    /// Returns the 0/1 score, or `None` when unanswered.
    pub fn score(&self) -> Option<u8> {
        match self {
            Response::Unanswered => None,
            Response::No => Some(0),
            Response::Yes => Some(1),
        }
    }

    /// Returns true if this criterion has been answered.
    pub fn is_answered(&self) -> bool {
        !matches!(self, Response::Unanswered)
    }
}

impl From<bool> for Response {
    fn from(value: bool) -> Self {
        if value {
            Response::Yes
        } else {
            Response::No
        }
    }
}

impl TryFrom<i8> for Response {
    type Error = ValidationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Response::try_from_i8(value)
    }
}

impl From<Response> for i8 {
    fn from(response: Response) -> Self {
        response.raw()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}
