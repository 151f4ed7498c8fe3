//! Timetable domain logic: the static time taxonomy, the display grid
//! builder, dashboard statistics, and the pair-selection helper used by
//! multi-step forms. Everything here is pure and recomputed in full from
//! its inputs.

mod grid;
mod selection;
mod stats;
mod taxonomy;

pub use grid::{build_grid, TimetableGrid};
pub use selection::{PairSelection, SelectedPair, SelectionError};
pub use stats::{
    coverage, period_distribution, periods_by_discipline, PeriodDistribution, TimetableCoverage,
};
pub use taxonomy::{slots_for_period, Period, TimeSlot, Weekday, ALL_DAYS, ALL_SLOTS};
