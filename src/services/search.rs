use tracing::{debug, info, warn};

use crate::client::SchedulerApi;
use crate::error::{ErrorKind, MSG_EMPTY_PROMPT};
use crate::models::common::OperationStatus;
use crate::models::meeting::Card;
use crate::services::renderer::render;
use crate::services::slot_parser::{SlotParser, TextSlotParser};

pub const MSG_SEARCHING: &str = "Finding available slots...";

/// What the page shows after a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    // Empty prompt, rejected without a network call
    Rejected,
    Slots(Vec<Card>),
    Failed(ErrorKind),
}

impl SearchOutcome {
    pub fn message(&self) -> Option<String> {
        match self {
            SearchOutcome::Rejected => Some(MSG_EMPTY_PROMPT.to_string()),
            SearchOutcome::Slots(_) => None,
            SearchOutcome::Failed(kind) => Some(kind.user_message()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub status: OperationStatus,
    pub message: Option<String>,
}

impl SearchState {
    pub fn loading(&self) -> bool {
        self.status.is_in_flight()
    }

    pub fn search_enabled(&self) -> bool {
        self.status.control_enabled()
    }
}

/// Drives one find-slots request/response cycle at a time
pub struct SearchController<P: SlotParser = TextSlotParser> {
    parser: P,
    state: SearchState,
}

impl Default for SearchController<TextSlotParser> {
    fn default() -> Self {
        Self::new(TextSlotParser::default())
    }
}

impl<P: SlotParser> SearchController<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub async fn search<A>(&mut self, api: &A, prompt: &str) -> SearchOutcome
    where
        A: SchedulerApi + ?Sized,
    {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            debug!("Rejecting empty prompt locally");
            self.state = SearchState {
                status: OperationStatus::Ready,
                message: Some(MSG_EMPTY_PROMPT.to_string()),
            };
            return SearchOutcome::Rejected;
        }

        self.state = SearchState {
            status: OperationStatus::InFlight,
            message: Some(MSG_SEARCHING.to_string()),
        };
        info!("Searching for slots matching {:?}", prompt);

        let outcome = match api.find_free_slots(prompt).await {
            Ok(body) => self.interpret(&body),
            Err(err) => {
                warn!("Free slots request failed: {}", err);
                SearchOutcome::Failed(ErrorKind::from(&err))
            }
        };

        // Every branch lands here, so the trigger is always re-enabled
        self.state = SearchState {
            status: match &outcome {
                SearchOutcome::Failed(kind) => OperationStatus::Retryable(kind.clone()),
                _ => OperationStatus::Done,
            },
            message: outcome.message(),
        };
        outcome
    }

    fn interpret(&self, body: &str) -> SearchOutcome {
        let report = self.parser.parse_with_report(body);
        if !report.skipped.is_empty() {
            warn!("{} slot block(s) could not be parsed", report.skipped.len());
        }

        // "Parsed to nothing" reads the same as an explicit no-results answer
        if report.slots.is_empty() {
            info!("No slots in response");
            return SearchOutcome::Failed(ErrorKind::NoResults);
        }

        info!("Found {} slot(s)", report.slots.len());
        SearchOutcome::Slots(render(&report.slots))
    }
}
