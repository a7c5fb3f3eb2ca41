use crate::models::meeting::{BookAction, Card, CardState, Slot};

// Project slots onto display cards. Pure: no counters, no I/O.
pub fn render(slots: &[Slot]) -> Vec<Card> {
    slots.iter().map(render_card).collect()
}

pub fn render_card(slot: &Slot) -> Card {
    Card {
        index: slot.index,
        date_label: slot.date_label.clone(),
        time_line: slot.time_line(),
        action: BookAction {
            slot: slot.clone(),
            enabled: true,
        },
        state: CardState::Available,
    }
}
