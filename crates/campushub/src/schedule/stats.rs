//! Dashboard coverage statistics.
//!
//! Classifies each discipline by the periods its scheduled slots occupy and
//! computes how much of the catalog has a timetable at all.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::api::types::{Discipline, TimetableEntry};

use super::taxonomy::{Period, TimeSlot};

/// Periods occupied per discipline, merged across all of its entries.
/// Unrecognized slot codes contribute nothing.
pub fn periods_by_discipline(timetables: &[TimetableEntry]) -> HashMap<i64, HashSet<Period>> {
    let mut periods: HashMap<i64, HashSet<Period>> = HashMap::new();

    for entry in timetables {
        let entry_periods = periods.entry(entry.discipline_id).or_default();
        for code in entry.hour_codes() {
            if let Some(slot) = TimeSlot::from_code(code) {
                entry_periods.insert(slot.period());
            }
        }
    }

    periods
}

/// Counts of disciplines scheduled in exactly one period vs several.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodDistribution {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
    pub multiple: usize,
}

impl PeriodDistribution {
    pub fn single_period(&self) -> usize {
        self.morning + self.afternoon + self.evening
    }
}

pub fn period_distribution(timetables: &[TimetableEntry]) -> PeriodDistribution {
    let mut distribution = PeriodDistribution::default();

    for periods in periods_by_discipline(timetables).values() {
        if periods.len() == 1 {
            match periods.iter().next() {
                Some(Period::Morning) => distribution.morning += 1,
                Some(Period::Afternoon) => distribution.afternoon += 1,
                Some(Period::Evening) => distribution.evening += 1,
                None => {}
            }
        } else if periods.len() > 1 {
            distribution.multiple += 1;
        }
    }

    distribution
}

/// How much of the discipline catalog has at least one timetable entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableCoverage {
    pub with_timetables: usize,
    pub without_timetables: usize,
    /// Rounded to the nearest integer; 0 when there are no disciplines.
    pub percentage: u32,
}

pub fn coverage(disciplines: &[Discipline], timetables: &[TimetableEntry]) -> TimetableCoverage {
    let scheduled: HashSet<i64> = timetables.iter().map(|t| t.discipline_id).collect();

    let with_timetables = disciplines
        .iter()
        .filter(|d| scheduled.contains(&d.id))
        .count();
    let without_timetables = disciplines.len() - with_timetables;

    let percentage = if disciplines.is_empty() {
        0
    } else {
        ((with_timetables as f64 / disciplines.len() as f64) * 100.0).round() as u32
    };

    TimetableCoverage {
        with_timetables,
        without_timetables,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{DisciplineKind, Educator, Workload};

    fn discipline(id: i64) -> Discipline {
        Discipline {
            id,
            name: format!("Disciplina {id}"),
            code: format!("D{id}"),
            semester: 1,
            workload: Workload::Forty,
            kind: DisciplineKind::Mandatory,
        }
    }

    fn entry(id: i64, discipline_id: i64, hours: &str) -> TimetableEntry {
        TimetableEntry {
            id,
            discipline_id,
            days: "SEG".to_string(),
            hours: hours.to_string(),
            educator: Educator {
                id: 1,
                name: "Ana".to_string(),
                lattes_link: None,
            },
            room: None,
        }
    }

    #[test]
    fn test_single_period_discipline_counted_once() {
        let timetables = vec![entry(1, 10, "AB-M CD-M")];
        let distribution = period_distribution(&timetables);

        assert_eq!(
            distribution,
            PeriodDistribution {
                morning: 1,
                ..Default::default()
            }
        );
        assert_eq!(distribution.single_period(), 1);
    }

    #[test]
    fn test_periods_merge_across_entries() {
        // Two entries of the same discipline in different periods make it
        // a multi-period discipline, not two single-period ones.
        let timetables = vec![entry(1, 10, "AB-M"), entry(2, 10, "AB-N")];
        let distribution = period_distribution(&timetables);

        assert_eq!(distribution.multiple, 1);
        assert_eq!(distribution.single_period(), 0);
    }

    #[test]
    fn test_unknown_slot_codes_do_not_classify() {
        let timetables = vec![entry(1, 10, "ZZ-X")];
        let distribution = period_distribution(&timetables);
        assert_eq!(distribution, PeriodDistribution::default());
    }

    #[test]
    fn test_coverage_counts_and_percentage() {
        let disciplines = vec![discipline(1), discipline(2), discipline(3)];
        let timetables = vec![entry(1, 1, "AB-M"), entry(2, 2, "CD-T")];

        let coverage = coverage(&disciplines, &timetables);
        assert_eq!(coverage.with_timetables, 2);
        assert_eq!(coverage.without_timetables, 1);
        assert_eq!(coverage.percentage, 67);
    }

    #[test]
    fn test_coverage_with_no_disciplines_is_zero() {
        let coverage = coverage(&[], &[entry(1, 1, "AB-M")]);
        assert_eq!(coverage.percentage, 0);
        assert_eq!(coverage.with_timetables, 0);
        assert_eq!(coverage.without_timetables, 0);
    }

    #[test]
    fn test_unscheduled_discipline_lands_in_denominator_only() {
        let disciplines = vec![discipline(1)];
        let coverage = coverage(&disciplines, &[]);
        assert_eq!(coverage.with_timetables, 0);
        assert_eq!(coverage.without_timetables, 1);
        assert_eq!(coverage.percentage, 0);
    }
}
