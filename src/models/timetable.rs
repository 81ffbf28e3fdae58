//! Formatted weekly timetable.
//!
//! The output handed to the rendering layer: a `days × periods_per_day`
//! table where each cell is reserved, empty, or an assigned class.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{SlotGrid, Teacher, TeacherId};

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One cell of the weekly table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Permanently excluded period (lunch).
    Reserved,
    /// Assignable but unused.
    Empty,
    /// A class taught by a teacher.
    Assigned {
        teacher_name: String,
        subject: String,
    },
}

impl Cell {
    /// Whether the cell holds a class.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        matches!(self, Cell::Assigned { .. })
    }

    /// Teacher name of an assigned cell.
    pub fn teacher_name(&self) -> Option<&str> {
        match self {
            Cell::Assigned { teacher_name, .. } => Some(teacher_name),
            _ => None,
        }
    }
}

/// A `days × periods_per_day` table of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Number of days.
    pub days: usize,
    /// Number of periods per day (reserved period included).
    pub periods_per_day: usize,
    /// Rows indexed by day, columns by period.
    pub cells: Vec<Vec<Cell>>,
}

impl Timetable {
    /// Maps an assignment (slot index → teacher or empty) onto the grid.
    ///
    /// # Panics
    /// If `genes.len() != grid.len()` or a gene references a teacher outside
    /// the roster.
    pub fn from_assignment(
        genes: &[Option<TeacherId>],
        roster: &[Teacher],
        grid: &SlotGrid,
    ) -> Self {
        assert_eq!(
            genes.len(),
            grid.len(),
            "assignment length must match the slot grid"
        );

        let mut cells: Vec<Vec<Cell>> = (0..grid.days())
            .map(|day| {
                (0..grid.periods_per_day())
                    .map(|period| {
                        if grid.is_reserved(day, period) {
                            Cell::Reserved
                        } else {
                            Cell::Empty
                        }
                    })
                    .collect()
            })
            .collect();

        for (idx, gene) in genes.iter().enumerate() {
            if let Some(teacher_id) = *gene {
                let teacher = &roster[teacher_id];
                let slot = grid.slot(idx);
                cells[slot.day][slot.period] = Cell::Assigned {
                    teacher_name: teacher.name.clone(),
                    subject: teacher.subject.clone(),
                };
            }
        }

        Self {
            days: grid.days(),
            periods_per_day: grid.periods_per_day(),
            cells,
        }
    }

    /// Cell at `(day, period)`.
    pub fn cell(&self, day: usize, period: usize) -> Option<&Cell> {
        self.cells.get(day).and_then(|row| row.get(period))
    }

    /// Number of cells assigned to a teacher name.
    pub fn count_for(&self, teacher_name: &str) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.teacher_name() == Some(teacher_name))
            .count()
    }

    /// Number of assigned cells.
    pub fn assigned_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_assigned()).count()
    }

    /// Number of empty (assignable, unused) cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Empty))
            .count()
    }
}

/// Formats a winning assignment as a weekly table.
pub fn to_grid(genes: &[Option<TeacherId>], roster: &[Teacher], grid: &SlotGrid) -> Timetable {
    Timetable::from_assignment(genes, roster, grid)
}

fn day_name(day: usize) -> String {
    DAY_NAMES
        .get(day)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("D{}", day + 1))
}

impl fmt::Display for Timetable {
    /// Renders periods as rows and days as columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 18;
        write!(f, "{:<6}", "")?;
        for day in 0..self.days {
            write!(f, "| {:<WIDTH$}", day_name(day))?;
        }
        writeln!(f)?;

        for period in 0..self.periods_per_day {
            write!(f, "{:<6}", format!("P{}", period + 1))?;
            for day in 0..self.days {
                let text = match &self.cells[day][period] {
                    Cell::Reserved => "LUNCH".to_string(),
                    Cell::Empty => "-".to_string(),
                    Cell::Assigned {
                        teacher_name,
                        subject,
                    } => format!("{teacher_name} ({subject})"),
                };
                write!(f, "| {text:<WIDTH$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Teacher> {
        vec![Teacher::new("Alice", "Math", 2), Teacher::new("Bob", "Physics", 1)]
    }

    #[test]
    fn test_shape_and_markers() {
        let grid = SlotGrid::build(5, 8, Some(4));
        let genes = vec![None; grid.len()];
        let table = to_grid(&genes, &roster(), &grid);

        assert_eq!(table.cells.len(), 5);
        assert!(table.cells.iter().all(|row| row.len() == 8));
        assert_eq!(table.cell(3, 4), Some(&Cell::Reserved));
        assert_eq!(table.cell(3, 5), Some(&Cell::Empty));
        assert_eq!(table.empty_count(), 35);
        assert_eq!(table.assigned_count(), 0);
    }

    #[test]
    fn test_assigned_cells_follow_priority_order() {
        let grid = SlotGrid::build(5, 8, Some(4));
        let mut genes = vec![None; grid.len()];
        genes[0] = Some(0); // Mon P0
        genes[6] = Some(1); // Tue P1
        genes[20] = Some(0); // Mon P5
        let table = to_grid(&genes, &roster(), &grid);

        assert_eq!(table.cell(0, 0).and_then(|c| c.teacher_name()), Some("Alice"));
        assert_eq!(
            table.cell(1, 1),
            Some(&Cell::Assigned {
                teacher_name: "Bob".into(),
                subject: "Physics".into(),
            })
        );
        assert_eq!(table.cell(0, 5).and_then(|c| c.teacher_name()), Some("Alice"));
        assert_eq!(table.count_for("Alice"), 2);
        assert_eq!(table.count_for("Bob"), 1);
    }

    #[test]
    #[should_panic]
    fn test_length_mismatch_panics() {
        let grid = SlotGrid::build(5, 8, Some(4));
        to_grid(&[None::<TeacherId>; 3], &roster(), &grid);
    }

    #[test]
    fn test_cell_serialization_tags() {
        let json = serde_json::to_string(&Cell::Reserved).unwrap();
        assert_eq!(json, r#"{"kind":"reserved"}"#);
        let json = serde_json::to_string(&Cell::Assigned {
            teacher_name: "Alice".into(),
            subject: "Math".into(),
        })
        .unwrap();
        assert!(json.contains(r#""kind":"assigned""#));
        assert!(json.contains(r#""teacher_name":"Alice""#));
    }

    #[test]
    fn test_display_contains_markers() {
        let grid = SlotGrid::build(2, 3, Some(1));
        let mut genes = vec![None; grid.len()];
        genes[0] = Some(0);
        let text = to_grid(&genes, &roster(), &grid).to_string();
        assert!(text.contains("Mon"));
        assert!(text.contains("Tue"));
        assert!(text.contains("LUNCH"));
        assert!(text.contains("Alice (Math)"));
        assert_eq!(text.lines().count(), 4);
    }
}
