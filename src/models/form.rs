use serde::{Deserialize, Serialize};

const DEFAULT_TITLE: &str = "Meeting";

/// Fields captured by the booking modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub title: String,
    pub attendees: Vec<String>,
}

impl FormFields {
    /// Capture raw modal input: the title as typed and a comma-separated attendee list
    pub fn capture(title: &str, attendees_raw: &str) -> Self {
        let title = title.trim();
        Self {
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            attendees: split_attendees(attendees_raw),
        }
    }
}

// Split on commas, trim each entry, drop the empty ones
pub fn split_attendees(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
