//! Time slot style categories
//!
//! Slots are classified by substring containment against a fixed set of
//! session start times, so "08:30-09:30" still lands in the morning band.

/// Style category for a time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlotStyle {
    Morning,
    LateMorning,
    Midday,
    Afternoon,
    Other,
}

/// Known session starts, checked in order
const KNOWN_SLOTS: [(&str, TimeSlotStyle); 4] = [
    ("08:30", TimeSlotStyle::Morning),
    ("10:30", TimeSlotStyle::LateMorning),
    ("12:30", TimeSlotStyle::Midday),
    ("14:30", TimeSlotStyle::Afternoon),
];

impl TimeSlotStyle {
    /// Classify a time slot label. Always returns a category.
    pub fn for_slot(time: &str) -> Self {
        KNOWN_SLOTS
            .iter()
            .find(|(known, _)| time.contains(known))
            .map(|(_, style)| *style)
            .unwrap_or(TimeSlotStyle::Other)
    }

    pub fn label(&self) -> &str {
        match self {
            TimeSlotStyle::Morning => "Morning",
            TimeSlotStyle::LateMorning => "Late morning",
            TimeSlotStyle::Midday => "Midday",
            TimeSlotStyle::Afternoon => "Afternoon",
            TimeSlotStyle::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_known_slots() {
        assert_eq!(TimeSlotStyle::for_slot("08:30"), TimeSlotStyle::Morning);
        assert_eq!(TimeSlotStyle::for_slot("10:30"), TimeSlotStyle::LateMorning);
        assert_eq!(TimeSlotStyle::for_slot("12:30"), TimeSlotStyle::Midday);
        assert_eq!(TimeSlotStyle::for_slot("14:30"), TimeSlotStyle::Afternoon);
    }

    #[test]
    fn test_ranges_match_by_containment() {
        assert_eq!(TimeSlotStyle::for_slot("08:30-09:30"), TimeSlotStyle::Morning);
        assert_eq!(TimeSlotStyle::for_slot("from 14:30"), TimeSlotStyle::Afternoon);
    }

    #[test]
    fn test_first_known_slot_wins() {
        // Contains both 10:30 and 12:30; the earlier entry in the table wins
        assert_eq!(TimeSlotStyle::for_slot("10:30-12:30"), TimeSlotStyle::LateMorning);
    }

    #[test]
    fn test_unknown_slots_fall_back() {
        assert_eq!(TimeSlotStyle::for_slot("16:00"), TimeSlotStyle::Other);
        assert_eq!(TimeSlotStyle::for_slot(""), TimeSlotStyle::Other);
        assert_eq!(TimeSlotStyle::for_slot("9:30"), TimeSlotStyle::Other);
    }
}
