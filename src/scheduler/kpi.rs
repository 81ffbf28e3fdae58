//! Timetable quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned / required | Per-teacher class counts vs. `credits_per_week` |
//! | Satisfied teachers | Teachers whose count matches exactly |
//! | Fill rate | Assigned slots / assignable slots |
//! | Max daily load | Most classes any teacher has on one day |

use crate::models::{SlotGrid, Teacher, TeacherId};

/// Load summary for one teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherLoad {
    /// Teacher name.
    pub name: String,
    /// Classes assigned.
    pub assigned: u32,
    /// Classes requested.
    pub required: u32,
    /// Most classes on a single day.
    pub max_daily: u32,
}

impl TeacherLoad {
    /// Whether assigned equals required.
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.assigned == self.required
    }
}

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Per-teacher loads, in roster order.
    pub loads: Vec<TeacherLoad>,
    /// Number of teachers with exactly their requested classes.
    pub satisfied_teachers: usize,
    /// Fraction of assignable slots in use (0.0..1.0).
    pub fill_rate: f64,
    /// Largest single-day load of any teacher.
    pub max_daily_load: u32,
}

impl TimetableKpi {
    /// Computes KPIs from an assignment.
    ///
    /// # Panics
    /// If `genes.len() != grid.len()`.
    pub fn calculate(genes: &[Option<TeacherId>], roster: &[Teacher], grid: &SlotGrid) -> Self {
        assert_eq!(genes.len(), grid.len(), "assignment length must match the slot grid");
        let days = grid.days();
        let mut daily = vec![0u32; roster.len() * days];
        let mut used = 0usize;

        for (idx, gene) in genes.iter().enumerate() {
            if let Some(t) = *gene {
                daily[t * days + grid.day_of(idx)] += 1;
                used += 1;
            }
        }

        let loads: Vec<TeacherLoad> = roster
            .iter()
            .enumerate()
            .map(|(t, teacher)| {
                let row = &daily[t * days..(t + 1) * days];
                TeacherLoad {
                    name: teacher.name.clone(),
                    assigned: row.iter().sum(),
                    required: teacher.credits_per_week as u32,
                    max_daily: row.iter().copied().max().unwrap_or(0),
                }
            })
            .collect();

        let fill_rate = if grid.is_empty() {
            0.0
        } else {
            used as f64 / grid.len() as f64
        };

        Self {
            satisfied_teachers: loads.iter().filter(|l| l.is_satisfied()).count(),
            max_daily_load: loads.iter().map(|l| l.max_daily).max().unwrap_or(0),
            loads,
            fill_rate,
        }
    }

    /// Whether every teacher got exactly the requested classes.
    pub fn all_satisfied(&self) -> bool {
        self.satisfied_teachers == self.loads.len()
    }
}
