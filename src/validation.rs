//! Roster feasibility checks.
//!
//! Runs before any search. Detects:
//! - Empty roster
//! - `credits_per_week` outside 1..=8
//! - Total requested credits exceeding the assignable slots
//!
//! All issues are collected, not just the first one.

use std::fmt;

use crate::models::{MAX_CREDITS, MIN_CREDITS, SlotGrid, Teacher, total_credits};

/// A single reason a roster cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterIssue {
    /// The roster has no teachers.
    EmptyRoster,
    /// A teacher's credit request is outside the accepted range.
    CreditsOutOfRange {
        index: usize,
        name: String,
        credits: u8,
    },
    /// More classes are requested than the grid can hold.
    CreditsExceedSlots { requested: usize, available: usize },
}

impl fmt::Display for RosterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterIssue::EmptyRoster => write!(f, "roster is empty"),
            RosterIssue::CreditsOutOfRange {
                index,
                name,
                credits,
            } => write!(
                f,
                "teacher #{index} '{name}' requests {credits} credits (allowed {MIN_CREDITS}..={MAX_CREDITS})"
            ),
            RosterIssue::CreditsExceedSlots {
                requested,
                available,
            } => write!(
                f,
                "{requested} credits requested but only {available} slots are assignable"
            ),
        }
    }
}

/// The roster cannot be scheduled; no search was performed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("infeasible roster: {}", join_issues(.issues))]
pub struct InfeasibleRosterError {
    /// Every detected issue.
    pub issues: Vec<RosterIssue>,
}

impl InfeasibleRosterError {
    /// Whether a specific kind of issue was detected.
    pub fn has(&self, predicate: impl Fn(&RosterIssue) -> bool) -> bool {
        self.issues.iter().any(predicate)
    }
}

fn join_issues(issues: &[RosterIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates a roster against a slot grid.
///
/// # Returns
/// `Ok(())` if the roster can be searched, `Err` with all detected issues.
pub fn validate_roster(roster: &[Teacher], grid: &SlotGrid) -> Result<(), InfeasibleRosterError> {
    let mut issues = Vec::new();

    if roster.is_empty() {
        issues.push(RosterIssue::EmptyRoster);
    }

    for (index, teacher) in roster.iter().enumerate() {
        if !teacher.has_valid_credits() {
            issues.push(RosterIssue::CreditsOutOfRange {
                index,
                name: teacher.name.clone(),
                credits: teacher.credits_per_week,
            });
        }
    }

    let requested = total_credits(roster);
    if requested > grid.len() {
        issues.push(RosterIssue::CreditsExceedSlots {
            requested,
            available: grid.len(),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(InfeasibleRosterError { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> SlotGrid {
        SlotGrid::build(5, 8, Some(4))
    }

    #[test]
    fn test_valid_roster() {
        let roster = vec![Teacher::new("Alice", "Math", 4), Teacher::new("Bob", "Physics", 4)];
        assert!(validate_roster(&roster, &grid()).is_ok());
    }

    #[test]
    fn test_empty_roster() {
        let err = validate_roster(&[], &grid()).unwrap_err();
        assert_eq!(err.issues, vec![RosterIssue::EmptyRoster]);
        assert!(err.to_string().contains("roster is empty"));
    }

    #[test]
    fn test_credits_above_range() {
        let roster = vec![Teacher::new("Carol", "Art", 9)];
        let err = validate_roster(&roster, &grid()).unwrap_err();
        assert!(err.has(|i| matches!(i, RosterIssue::CreditsOutOfRange { credits: 9, .. })));
    }

    #[test]
    fn test_zero_credits() {
        let roster = vec![Teacher::new("Dan", "Music", 0)];
        let err = validate_roster(&roster, &grid()).unwrap_err();
        assert!(err.has(|i| matches!(i, RosterIssue::CreditsOutOfRange { index: 0, .. })));
    }

    #[test]
    fn test_total_exceeds_slots() {
        let roster: Vec<Teacher> = (0..5)
            .map(|i| Teacher::new(format!("T{i}"), "X", 8))
            .collect();
        let err = validate_roster(&roster, &grid()).unwrap_err();
        assert_eq!(
            err.issues,
            vec![RosterIssue::CreditsExceedSlots {
                requested: 40,
                available: 35,
            }]
        );
    }

    #[test]
    fn test_exactly_full_grid_is_feasible() {
        let small = SlotGrid::build(2, 3, Some(1));
        let roster = vec![Teacher::new("A", "X", 2), Teacher::new("B", "Y", 2)];
        assert!(validate_roster(&roster, &small).is_ok());
    }

    #[test]
    fn test_multiple_issues_collected() {
        let small = SlotGrid::build(1, 3, None);
        let roster = vec![Teacher::new("A", "X", 0), Teacher::new("B", "Y", 8)];
        let err = validate_roster(&roster, &small).unwrap_err();
        assert_eq!(err.issues.len(), 2);
        assert!(err.to_string().contains("; "));
    }
}
