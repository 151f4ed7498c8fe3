//! Static time taxonomy: weekdays, teaching slots, and their periods.
//!
//! The backend keys every scheduled class by a weekday code ("SEG".."SEX")
//! and a slot code ("AB-M".."CD-N"). Both sets are closed (not
//! user-configurable) and they index the timetable grid.

use serde::{Deserialize, Serialize};

/// Teaching weekdays, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Seg,
    Ter,
    Qua,
    Qui,
    Sex,
}

/// All weekdays in grid column order.
pub const ALL_DAYS: [Weekday; 5] = [
    Weekday::Seg,
    Weekday::Ter,
    Weekday::Qua,
    Weekday::Qui,
    Weekday::Sex,
];

impl Weekday {
    /// The wire code used by the backend (e.g. `"SEG"`).
    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Seg => "SEG",
            Weekday::Ter => "TER",
            Weekday::Qua => "QUA",
            Weekday::Qui => "QUI",
            Weekday::Sex => "SEX",
        }
    }

    /// Display label (backend locale).
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Seg => "Segunda",
            Weekday::Ter => "Terça",
            Weekday::Qua => "Quarta",
            Weekday::Qui => "Quinta",
            Weekday::Sex => "Sexta",
        }
    }

    /// Resolves a wire code. Unknown codes are not an error at this layer;
    /// callers decide whether to drop or reject.
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_DAYS.iter().copied().find(|d| d.code() == code)
    }
}

/// Morning / afternoon / evening grouping of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "morning" => Some(Period::Morning),
            "afternoon" => Some(Period::Afternoon),
            "evening" => Some(Period::Evening),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
        }
    }
}

/// One of the six fixed two-hour teaching slots per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    AbM,
    CdM,
    AbT,
    CdT,
    AbN,
    CdN,
}

/// All slots in grid row order (morning, afternoon, evening).
pub const ALL_SLOTS: [TimeSlot; 6] = [
    TimeSlot::AbM,
    TimeSlot::CdM,
    TimeSlot::AbT,
    TimeSlot::CdT,
    TimeSlot::AbN,
    TimeSlot::CdN,
];

impl TimeSlot {
    /// The wire code used by the backend (e.g. `"AB-M"`).
    pub fn code(&self) -> &'static str {
        match self {
            TimeSlot::AbM => "AB-M",
            TimeSlot::CdM => "CD-M",
            TimeSlot::AbT => "AB-T",
            TimeSlot::CdT => "CD-T",
            TimeSlot::AbN => "AB-N",
            TimeSlot::CdN => "CD-N",
        }
    }

    /// Human-readable time range for the slot.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::AbM => "8:00 - 10:00",
            TimeSlot::CdM => "10:00 - 12:00",
            TimeSlot::AbT => "13:00 - 15:00",
            TimeSlot::CdT => "15:00 - 17:00",
            TimeSlot::AbN => "18:00 - 20:00",
            TimeSlot::CdN => "20:00 - 22:00",
        }
    }

    /// The period this slot belongs to.
    pub fn period(&self) -> Period {
        match self {
            TimeSlot::AbM | TimeSlot::CdM => Period::Morning,
            TimeSlot::AbT | TimeSlot::CdT => Period::Afternoon,
            TimeSlot::AbN | TimeSlot::CdN => Period::Evening,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ALL_SLOTS.iter().copied().find(|s| s.code() == code)
    }
}

/// Slots restricted to a period, in row order. `None` keeps all six.
pub fn slots_for_period(period: Option<Period>) -> Vec<TimeSlot> {
    match period {
        None => ALL_SLOTS.to_vec(),
        Some(p) => ALL_SLOTS.iter().copied().filter(|s| s.period() == p).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_codes_round_trip() {
        for slot in ALL_SLOTS {
            assert_eq!(TimeSlot::from_code(slot.code()), Some(slot));
        }
        assert_eq!(TimeSlot::from_code("XY-Z"), None);
    }

    #[test]
    fn test_day_codes_round_trip() {
        for day in ALL_DAYS {
            assert_eq!(Weekday::from_code(day.code()), Some(day));
        }
        assert_eq!(Weekday::from_code("DOM"), None);
    }

    #[test]
    fn test_two_slots_per_period() {
        for period in [Period::Morning, Period::Afternoon, Period::Evening] {
            assert_eq!(slots_for_period(Some(period)).len(), 2);
        }
        assert_eq!(slots_for_period(None).len(), 6);
    }

    #[test]
    fn test_evening_slots_map_to_evening() {
        assert_eq!(TimeSlot::AbN.period(), Period::Evening);
        assert_eq!(TimeSlot::CdN.period(), Period::Evening);
    }
}
