//! Teacher (roster entry) model.
//!
//! A teacher is the unit of demand: it asks for a fixed number of weekly
//! classes. The engine treats the roster as a read-only snapshot per run.

use serde::{Deserialize, Serialize};

/// Roster-local teacher identifier: position in the roster slice.
///
/// Names are not required to be unique, so the position is the identity.
pub type TeacherId = usize;

/// Smallest accepted `credits_per_week`.
pub const MIN_CREDITS: u8 = 1;

/// Largest accepted `credits_per_week`.
pub const MAX_CREDITS: u8 = 8;

/// A teacher requesting weekly classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Display name.
    pub name: String,
    /// Subject taught (free text).
    pub subject: String,
    /// Required number of classes per week (1..=8).
    pub credits_per_week: u8,
}

impl Teacher {
    /// Creates a new teacher record.
    pub fn new(name: impl Into<String>, subject: impl Into<String>, credits_per_week: u8) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            credits_per_week,
        }
    }

    /// Whether `credits_per_week` lies in the accepted range.
    #[inline]
    pub fn has_valid_credits(&self) -> bool {
        (MIN_CREDITS..=MAX_CREDITS).contains(&self.credits_per_week)
    }
}

/// Total credits requested by a roster.
pub fn total_credits(roster: &[Teacher]) -> usize {
    roster.iter().map(|t| t.credits_per_week as usize).sum()
}
