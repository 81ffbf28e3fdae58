//! Weekly slot grid.
//!
//! Defines the fixed weekly geometry: `days × periods_per_day` positions,
//! with one period per day optionally reserved (lunch) and never assignable.
//!
//! # Priority Order
//! Assignable slots are enumerated period-major, day-minor: period 0 on every
//! day first (Mon→Fri), then period 1 on every day, and so on. The reserved
//! period is skipped entirely. This order is the canonical slot index used by
//! every chromosome.
//!
//! | index | 0 | 1 | 2 | 3 | 4 | 5 | ... |
//! |-------|---|---|---|---|---|---|-----|
//! | slot  | Mon/P0 | Tue/P0 | Wed/P0 | Thu/P0 | Fri/P0 | Mon/P1 | ... |

use serde::{Deserialize, Serialize};

/// A (day, period) position in the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day index (0 = first day of the week).
    pub day: usize,
    /// Period index within the day (0-based).
    pub period: usize,
    /// Whether the slot is permanently excluded from assignment.
    pub is_reserved: bool,
}

impl Slot {
    /// Creates an assignable slot.
    pub fn new(day: usize, period: usize) -> Self {
        Self {
            day,
            period,
            is_reserved: false,
        }
    }
}

/// The ordered sequence of assignable slots plus lookup tables.
///
/// Deterministic for a given `(days, periods_per_day, reserved_period)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    days: usize,
    periods_per_day: usize,
    reserved_period: Option<usize>,
    slots: Vec<Slot>,
    /// `day * periods_per_day + period` → slot index.
    index: Vec<Option<usize>>,
    /// Same-day slot pairs in consecutive periods, `(earlier, later)`.
    adjacent_pairs: Vec<(usize, usize)>,
}

impl SlotGrid {
    /// Builds the grid in priority order.
    ///
    /// A `reserved_period` outside `0..periods_per_day` reserves nothing.
    pub fn build(days: usize, periods_per_day: usize, reserved_period: Option<usize>) -> Self {
        let reserved_period = reserved_period.filter(|&p| p < periods_per_day);
        let mut slots = Vec::with_capacity(days * periods_per_day);
        let mut index = vec![None; days * periods_per_day];

        for period in 0..periods_per_day {
            if reserved_period == Some(period) {
                continue;
            }
            for day in 0..days {
                index[day * periods_per_day + period] = Some(slots.len());
                slots.push(Slot::new(day, period));
            }
        }

        let mut adjacent_pairs = Vec::new();
        for day in 0..days {
            for period in 1..periods_per_day {
                let prev = index[day * periods_per_day + period - 1];
                let curr = index[day * periods_per_day + period];
                if let (Some(a), Some(b)) = (prev, curr) {
                    adjacent_pairs.push((a, b));
                }
            }
        }

        Self {
            days,
            periods_per_day,
            reserved_period,
            slots,
            index,
            adjacent_pairs,
        }
    }

    /// Number of days in the week.
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Number of periods per day, reserved period included.
    #[inline]
    pub fn periods_per_day(&self) -> usize {
        self.periods_per_day
    }

    /// The reserved (lunch) period, if any.
    #[inline]
    pub fn reserved_period(&self) -> Option<usize> {
        self.reserved_period
    }

    /// Number of assignable slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the grid has no assignable slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Assignable slots in priority order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot at a priority index.
    #[inline]
    pub fn slot(&self, idx: usize) -> Slot {
        self.slots[idx]
    }

    /// Day of the slot at a priority index.
    #[inline]
    pub fn day_of(&self, idx: usize) -> usize {
        self.slots[idx].day
    }

    /// Priority index of `(day, period)`, or `None` if reserved or out of range.
    pub fn index_of(&self, day: usize, period: usize) -> Option<usize> {
        if day >= self.days || period >= self.periods_per_day {
            return None;
        }
        self.index[day * self.periods_per_day + period]
    }

    /// Whether `(day, period)` is the reserved period.
    pub fn is_reserved(&self, day: usize, period: usize) -> bool {
        day < self.days && self.reserved_period == Some(period)
    }

    /// Same-day slot index pairs in consecutive periods.
    ///
    /// Periods on either side of the reserved period are not adjacent.
    pub fn adjacent_pairs(&self) -> &[(usize, usize)] {
        &self.adjacent_pairs
    }

    /// Slot indices of the assignable periods immediately before and after
    /// the given slot on the same day.
    pub fn neighbors(&self, idx: usize) -> (Option<usize>, Option<usize>) {
        let Slot { day, period, .. } = self.slots[idx];
        let before = period
            .checked_sub(1)
            .and_then(|p| self.index_of(day, p));
        let after = self.index_of(day, period + 1);
        (before, after)
    }
}
