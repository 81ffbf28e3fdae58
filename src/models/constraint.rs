//! Timetabling rules, penalty weights, and penalty reports.
//!
//! Every rule is soft: a violation adds `count × weight` to the penalty.
//! A perfect timetable scores 0.
//!
//! | Rule | Violation count |
//! |------|-----------------|
//! | Credit mismatch | `|assigned − credits_per_week|` per teacher |
//! | Daily overload | `max(0, classes_that_day − 2)` per teacher per day |
//! | Consecutive | same-teacher pairs in adjacent periods of one day |
//!
//! Same-slot double booking cannot occur: each slot holds one value.

use serde::{Deserialize, Serialize};

/// Classes a teacher may take on one day before overload is penalized.
pub const MAX_DAILY_LOAD: u32 = 2;

/// A timetabling rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Assigned class count differs from `credits_per_week`.
    CreditMismatch,
    /// More than [`MAX_DAILY_LOAD`] classes on one day.
    DailyOverload,
    /// The same teacher in two adjacent periods of one day.
    Consecutive,
}

impl Rule {
    /// All rules, heaviest first.
    pub const ALL: [Rule; 3] = [Rule::CreditMismatch, Rule::DailyOverload, Rule::Consecutive];

    /// Short rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::CreditMismatch => "credit_mismatch",
            Rule::DailyOverload => "daily_overload",
            Rule::Consecutive => "consecutive",
        }
    }
}

/// Penalty weight per violation, one per [`Rule`].
///
/// Defaults: credit mismatch 10.0, daily overload 5.0, consecutive 2.0.
/// Credit mismatch is the primary objective and stays the heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyWeights {
    /// W1: per missing or surplus class.
    pub credit_mismatch: f64,
    /// W2: per class beyond the daily load limit.
    pub daily_overload: f64,
    /// W3: per same-teacher adjacent pair.
    pub consecutive: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            credit_mismatch: 10.0,
            daily_overload: 5.0,
            consecutive: 2.0,
        }
    }
}

impl PenaltyWeights {
    /// Sets the credit mismatch weight (W1).
    pub fn with_credit_mismatch(mut self, weight: f64) -> Self {
        self.credit_mismatch = weight;
        self
    }

    /// Sets the daily overload weight (W2).
    pub fn with_daily_overload(mut self, weight: f64) -> Self {
        self.daily_overload = weight;
        self
    }

    /// Sets the consecutive-period weight (W3).
    pub fn with_consecutive(mut self, weight: f64) -> Self {
        self.consecutive = weight;
        self
    }

    /// Weight of a single rule.
    pub fn weight(&self, rule: Rule) -> f64 {
        match rule {
            Rule::CreditMismatch => self.credit_mismatch,
            Rule::DailyOverload => self.daily_overload,
            Rule::Consecutive => self.consecutive,
        }
    }

    /// Whether every weight is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        Rule::ALL
            .iter()
            .all(|&r| self.weight(r).is_finite() && self.weight(r) >= 0.0)
    }
}

/// Per-rule violation counts and the weighted total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PenaltyReport {
    /// Sum of `|assigned − credits_per_week|` over teachers.
    pub credit_mismatch: u32,
    /// Sum of classes beyond the daily limit.
    pub daily_overload: u32,
    /// Number of same-teacher adjacent pairs.
    pub consecutive: u32,
    /// Weighted penalty.
    pub total: f64,
}

impl PenaltyReport {
    /// Builds a report from raw counts.
    pub fn from_counts(
        credit_mismatch: u32,
        daily_overload: u32,
        consecutive: u32,
        weights: &PenaltyWeights,
    ) -> Self {
        let total = credit_mismatch as f64 * weights.credit_mismatch
            + daily_overload as f64 * weights.daily_overload
            + consecutive as f64 * weights.consecutive;
        Self {
            credit_mismatch,
            daily_overload,
            consecutive,
            total,
        }
    }

    /// Violation count of a single rule.
    pub fn count(&self, rule: Rule) -> u32 {
        match rule {
            Rule::CreditMismatch => self.credit_mismatch,
            Rule::DailyOverload => self.daily_overload,
            Rule::Consecutive => self.consecutive,
        }
    }

    /// Whether no rule is violated.
    #[inline]
    pub fn is_perfect(&self) -> bool {
        self.credit_mismatch == 0 && self.daily_overload == 0 && self.consecutive == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_order() {
        let w = PenaltyWeights::default();
        assert!(w.credit_mismatch > w.daily_overload);
        assert!(w.daily_overload > w.consecutive);
        assert!(w.is_valid());
    }

    #[test]
    fn test_invalid_weights() {
        assert!(!PenaltyWeights::default().with_consecutive(-1.0).is_valid());
        assert!(!PenaltyWeights::default()
            .with_daily_overload(f64::NAN)
            .is_valid());
    }

    #[test]
    fn test_report_total() {
        let w = PenaltyWeights::default();
        let r = PenaltyReport::from_counts(2, 1, 3, &w);
        assert!((r.total - (20.0 + 5.0 + 6.0)).abs() < 1e-10);
        assert_eq!(r.count(Rule::Consecutive), 3);
        assert!(!r.is_perfect());
        assert!(PenaltyReport::from_counts(0, 0, 0, &w).is_perfect());
    }

    #[test]
    fn test_partial_weights_deserialize() {
        let w: PenaltyWeights = serde_json::from_str(r#"{"consecutive": 0.5}"#).unwrap();
        assert_eq!(w.credit_mismatch, 10.0);
        assert_eq!(w.consecutive, 0.5);
    }

    #[test]
    fn test_rule_names() {
        let names: Vec<&str> = Rule::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["credit_mismatch", "daily_overload", "consecutive"]);
    }
}
