use thiserror::Error;
use tracing::{debug, warn};

use crate::models::meeting::{Slot, TimeRange};

/// Body the backend sends when the search matched nothing
pub const NO_RESULTS_SENTINEL: &str = "No available slots found.";

const HEADER_PREFIX: &str = "Slot";

// Why a block was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("expected 3 lines, found {0}")]
    LineCount(usize),

    #[error("header {0:?} is not \"Slot <n>\"")]
    Header(String),

    #[error("time line has {0} bar-delimited fields, expected 3")]
    TimeFields(usize),

    #[error("local range {0:?} is not a start-end pair")]
    LocalRange(String),
}

/// A block that was skipped, with its 1-based position among all blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    pub position: usize,
    pub reason: BlockError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub slots: Vec<Slot>,
    pub skipped: Vec<SkippedBlock>,
}

/// Turns a find-slots response body into slots.
///
/// Implementations must be pure: the same text always yields the same slots.
pub trait SlotParser: Send + Sync {
    fn parse_with_report(&self, text: &str) -> ParseReport;

    fn parse(&self, text: &str) -> Vec<Slot> {
        self.parse_with_report(text).slots
    }
}

/// Parser for the plain-text block format:
///
/// ```text
/// Slot 1
/// Mon Jan 6
/// Monday | 09:00-09:30 | 14:00-14:30 UTC
/// ```
///
/// Blocks are separated by a blank line. Malformed blocks are skipped and
/// reported; the rest of the batch still parses.
#[derive(Debug, Clone)]
pub struct TextSlotParser {
    sentinel: String,
}

impl Default for TextSlotParser {
    fn default() -> Self {
        Self::new(NO_RESULTS_SENTINEL)
    }
}

impl TextSlotParser {
    pub fn new(sentinel: &str) -> Self {
        Self {
            sentinel: sentinel.trim().to_string(),
        }
    }

    /// Whether the body means "no results" without needing a parse
    pub fn is_empty_response(&self, text: &str) -> bool {
        let trimmed = text.trim();
        trimmed.is_empty() || trimmed == self.sentinel
    }
}

impl SlotParser for TextSlotParser {
    fn parse_with_report(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();
        if self.is_empty_response(text) {
            return report;
        }

        for (i, block) in split_blocks(text).iter().enumerate() {
            let position = i + 1;
            let index = report.slots.len() + 1;
            match parse_block(block, index) {
                Ok(slot) => {
                    debug!("Parsed slot {} from block {}", index, position);
                    report.slots.push(slot);
                }
                Err(reason) => {
                    warn!("Skipping malformed slot block {}: {}", position, reason);
                    report.skipped.push(SkippedBlock { position, reason });
                }
            }
        }

        report
    }
}

// Group non-blank lines into blocks; any run of blank lines is one separator
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        // `lines` already strips a trailing '\r'
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_block(lines: &[&str], index: usize) -> Result<Slot, BlockError> {
    let [header, date_line, time_line] = lines else {
        return Err(BlockError::LineCount(lines.len()));
    };

    if !is_slot_header(header) {
        return Err(BlockError::Header(header.to_string()));
    }

    let fields: Vec<&str> = time_line.split('|').map(str::trim).collect();
    let [day_of_week, local, utc] = fields.as_slice() else {
        return Err(BlockError::TimeFields(fields.len()));
    };

    Ok(Slot {
        index,
        date_label: date_line.to_string(),
        day_of_week: day_of_week.to_string(),
        local_range: parse_local_range(local)?,
        utc_range: utc.to_string(),
    })
}

// "Slot <n>", optionally followed by ':'
fn is_slot_header(header: &str) -> bool {
    let Some(rest) = header.strip_prefix(HEADER_PREFIX) else {
        return false;
    };
    let rest = rest.strip_suffix(':').unwrap_or(rest);
    rest.starts_with(char::is_whitespace) && rest.trim().parse::<u32>().is_ok()
}

fn parse_local_range(raw: &str) -> Result<TimeRange, BlockError> {
    let parts: Vec<&str> = raw.split('-').map(str::trim).collect();
    match parts.as_slice() {
        [start, end] if !start.is_empty() && !end.is_empty() => Ok(TimeRange {
            start: start.to_string(),
            end: end.to_string(),
        }),
        _ => Err(BlockError::LocalRange(raw.to_string())),
    }
}
