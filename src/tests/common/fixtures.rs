use crate::models::meeting::{Card, Slot, TimeRange};
use crate::services::renderer::render;

/// The single-block response used across scenarios
pub const ONE_SLOT_BODY: &str = "Slot 1\nMon Jan 6\nMonday | 09:00-09:30 | 14:00-14:30 UTC";

/// Two well-formed blocks separated by a blank line
pub const TWO_SLOT_BODY: &str = "Slot 1\nMon Jan 6\nMonday | 09:00-09:30 | 14:00-14:30 UTC\n\nSlot 2\nTue Jan 7\nTuesday | 13:00-14:00 | 18:00-19:00 UTC";

/// Build a slot for tests that don't go through the parser
pub fn generate_test_slot(index: usize, date_label: &str, start: &str, end: &str) -> Slot {
    Slot {
        index,
        date_label: date_label.to_string(),
        day_of_week: "Monday".to_string(),
        local_range: TimeRange {
            start: start.to_string(),
            end: end.to_string(),
        },
        utc_range: format!("{}-{} UTC", start, end),
    }
}

/// Two available cards, indices 1 and 2
pub fn generate_test_cards() -> Vec<Card> {
    render(&[
        generate_test_slot(1, "Mon Jan 6", "09:00", "09:30"),
        generate_test_slot(2, "Tue Jan 7", "13:00", "14:00"),
    ])
}
