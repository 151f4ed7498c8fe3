//! Timetable grid construction.
//!
//! Turns the flat timetable-entry list for one semester into a
//! slot × weekday matrix of discipline occupants. This is display data:
//! unknown day/slot codes are silently dropped rather than rejected, and
//! cell contents keep the insertion order of the source list.

use std::collections::HashMap;

use crate::api::types::{Discipline, TimetableEntry};

use super::taxonomy::{slots_for_period, Period, TimeSlot, Weekday, ALL_DAYS};

/// A slot × weekday matrix of scheduled disciplines.
#[derive(Debug, Clone)]
pub struct TimetableGrid {
    slots: Vec<TimeSlot>,
    cells: HashMap<TimeSlot, HashMap<Weekday, Vec<Discipline>>>,
}

impl TimetableGrid {
    /// Row order for rendering (restricted when a period filter was given).
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Occupants of one cell. Slots outside the period filter yield an
    /// empty slice.
    pub fn cell(&self, slot: TimeSlot, day: Weekday) -> &[Discipline] {
        self.cells
            .get(&slot)
            .and_then(|row| row.get(&day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of occupations placed across all cells.
    pub fn occupation_count(&self) -> usize {
        self.cells
            .values()
            .flat_map(|row| row.values())
            .map(Vec::len)
            .sum()
    }
}

/// Builds the grid for one semester.
///
/// 1. keep disciplines whose `semester` matches;
/// 2. keep timetable entries referencing a surviving discipline;
/// 3. initialize every (slot, day) cell for the (possibly period-filtered)
///    slot list;
/// 4. zip each entry's day codes with its hour codes, falling back to
///    `hours[0]` when the hours list is shorter, and append the discipline
///    to the cell when it exists.
pub fn build_grid(
    semester: u32,
    period: Option<Period>,
    disciplines: &[Discipline],
    timetables: &[TimetableEntry],
) -> TimetableGrid {
    let semester_disciplines: HashMap<i64, &Discipline> = disciplines
        .iter()
        .filter(|d| d.semester == semester)
        .map(|d| (d.id, d))
        .collect();

    let slots = slots_for_period(period);
    let mut cells: HashMap<TimeSlot, HashMap<Weekday, Vec<Discipline>>> = HashMap::new();
    for slot in &slots {
        let row = cells.entry(*slot).or_default();
        for day in ALL_DAYS {
            row.entry(day).or_default();
        }
    }

    for entry in timetables {
        let Some(discipline) = semester_disciplines.get(&entry.discipline_id) else {
            continue;
        };

        let hour_codes = entry.hour_codes();
        for (index, day_code) in entry.day_codes().iter().enumerate() {
            // Shorter hours lists fall back to the first slot code.
            let Some(hour_code) = hour_codes.get(index).or_else(|| hour_codes.first()) else {
                continue;
            };
            let (Some(slot), Some(day)) =
                (TimeSlot::from_code(hour_code), Weekday::from_code(day_code))
            else {
                continue;
            };
            if let Some(cell) = cells.get_mut(&slot).and_then(|row| row.get_mut(&day)) {
                cell.push((*discipline).clone());
            }
        }
    }

    TimetableGrid { slots, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{DisciplineKind, Educator, Workload};
    use crate::schedule::taxonomy::ALL_SLOTS;

    fn discipline(id: i64, semester: u32) -> Discipline {
        Discipline {
            id,
            name: format!("Disciplina {id}"),
            code: format!("D{id}"),
            semester,
            workload: Workload::Eighty,
            kind: DisciplineKind::Mandatory,
        }
    }

    fn entry(id: i64, discipline_id: i64, days: &str, hours: &str) -> TimetableEntry {
        TimetableEntry {
            id,
            discipline_id,
            days: days.to_string(),
            hours: hours.to_string(),
            educator: Educator {
                id: 1,
                name: "Ana".to_string(),
                lattes_link: None,
            },
            room: None,
        }
    }

    fn cell_ids(grid: &TimetableGrid, slot: TimeSlot, day: Weekday) -> Vec<i64> {
        grid.cell(slot, day).iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_places_discipline_in_each_scheduled_cell() {
        let disciplines = vec![discipline(1, 1)];
        let timetables = vec![entry(1, 1, "SEG QUA", "AB-M AB-M")];

        let grid = build_grid(1, None, &disciplines, &timetables);

        assert_eq!(cell_ids(&grid, TimeSlot::AbM, Weekday::Seg), vec![1]);
        assert_eq!(cell_ids(&grid, TimeSlot::AbM, Weekday::Qua), vec![1]);
        assert_eq!(grid.occupation_count(), 2);
    }

    #[test]
    fn test_filters_by_semester() {
        let disciplines = vec![discipline(1, 1), discipline(2, 3)];
        let timetables = vec![
            entry(1, 1, "SEG", "AB-M"),
            entry(2, 2, "TER", "CD-M"),
        ];

        let grid = build_grid(1, None, &disciplines, &timetables);

        assert_eq!(cell_ids(&grid, TimeSlot::AbM, Weekday::Seg), vec![1]);
        assert!(grid.cell(TimeSlot::CdM, Weekday::Ter).is_empty());
    }

    #[test]
    fn test_short_hours_list_falls_back_to_first() {
        let disciplines = vec![discipline(1, 1)];
        let timetables = vec![entry(1, 1, "SEG QUA", "CD-T")];

        let grid = build_grid(1, None, &disciplines, &timetables);

        assert_eq!(cell_ids(&grid, TimeSlot::CdT, Weekday::Seg), vec![1]);
        assert_eq!(cell_ids(&grid, TimeSlot::CdT, Weekday::Qua), vec![1]);
    }

    #[test]
    fn test_unknown_codes_are_dropped() {
        let disciplines = vec![discipline(1, 1)];
        let timetables = vec![entry(1, 1, "SEG DOM", "AB-M ZZ-X")];

        let grid = build_grid(1, None, &disciplines, &timetables);

        // SEG/AB-M lands; DOM and ZZ-X are unrecognized and skipped.
        assert_eq!(grid.occupation_count(), 1);
        assert_eq!(cell_ids(&grid, TimeSlot::AbM, Weekday::Seg), vec![1]);
    }

    #[test]
    fn test_period_filter_restricts_rows() {
        let disciplines = vec![discipline(1, 1)];
        let timetables = vec![entry(1, 1, "SEG QUA", "AB-M AB-N")];

        let grid = build_grid(1, Some(Period::Morning), &disciplines, &timetables);

        assert_eq!(grid.slots(), &[TimeSlot::AbM, TimeSlot::CdM]);
        assert_eq!(cell_ids(&grid, TimeSlot::AbM, Weekday::Seg), vec![1]);
        // The evening occupation has no cell under the morning filter.
        assert!(grid.cell(TimeSlot::AbN, Weekday::Qua).is_empty());
        assert_eq!(grid.occupation_count(), 1);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let disciplines = vec![discipline(1, 1), discipline(2, 1)];
        let timetables = vec![
            entry(1, 1, "SEG QUA", "AB-M AB-M"),
            entry(2, 2, "SEG", "AB-M"),
            entry(3, 1, "SEX", "CD-N"),
        ];

        let first = build_grid(1, None, &disciplines, &timetables);
        let second = build_grid(1, None, &disciplines, &timetables);

        for slot in ALL_SLOTS {
            for day in ALL_DAYS {
                assert_eq!(cell_ids(&first, slot, day), cell_ids(&second, slot, day));
            }
        }
    }

    #[test]
    fn test_cell_order_follows_source_list() {
        let disciplines = vec![discipline(1, 1), discipline(2, 1)];
        let timetables = vec![
            entry(1, 2, "SEG", "AB-M"),
            entry(2, 1, "SEG", "AB-M"),
        ];

        let grid = build_grid(1, None, &disciplines, &timetables);
        assert_eq!(cell_ids(&grid, TimeSlot::AbM, Weekday::Seg), vec![2, 1]);
    }
}
