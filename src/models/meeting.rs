use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// Wall-clock range as given by the backend, split but not parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// One candidate meeting opening returned by the slot search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub index: usize,
    pub date_label: String,
    pub day_of_week: String,
    pub local_range: TimeRange,
    pub utc_range: String,
}

impl Slot {
    /// The composite time line in the backend's `day | start-end | utc` layout
    pub fn time_line(&self) -> String {
        format!(
            "{} | {}-{} | {}",
            self.day_of_week, self.local_range.start, self.local_range.end, self.utc_range
        )
    }

    // Combined date+time strings used when asking for an event
    pub fn start_label(&self) -> String {
        format!("{} {}", self.date_label, self.local_range.start)
    }

    pub fn end_label(&self) -> String {
        format!("{} {}", self.date_label, self.local_range.end)
    }
}

// The "book" affordance bound to one slot's date/time pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookAction {
    pub slot: Slot,
    pub enabled: bool,
}

impl BookAction {
    pub fn start(&self) -> String {
        self.slot.start_label()
    }

    pub fn end(&self) -> String {
        self.slot.end_label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CardState {
    Available,
    Booked {
        attendee_count: usize,
        booked_at: DateTime<Utc>,
    },
}

/// A rendered slot with its booking action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub index: usize,
    pub date_label: String,
    pub time_line: String,
    pub action: BookAction,
    pub state: CardState,
}

impl Card {
    pub fn slot(&self) -> &Slot {
        &self.action.slot
    }

    pub fn is_booked(&self) -> bool {
        matches!(self.state, CardState::Booked { .. })
    }

    /// Flip the card to its booked visual state and disable its action
    pub fn mark_booked(&mut self, attendee_count: usize) {
        self.state = CardState::Booked {
            attendee_count,
            booked_at: Utc::now(),
        };
        self.action.enabled = false;
    }

    /// Annotation shown on a booked card, e.g. "Booked (2 attendees)"
    pub fn booked_label(&self) -> Option<String> {
        match self.state {
            CardState::Booked { attendee_count, .. } => {
                let noun = if attendee_count == 1 { "attendee" } else { "attendees" };
                Some(format!("Booked ({} {})", attendee_count, noun))
            }
            CardState::Available => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.index, self.date_label)?;
        write!(f, "    {}", self.time_line)?;
        match self.booked_label() {
            Some(label) => write!(f, "\n    {}", label),
            None => write!(f, "\n    book {}", self.index),
        }
    }
}
