use tracing::{debug, info};

use crate::client::SchedulerApi;
use crate::error::WorkflowError;
use crate::models::booking::BookingState;
use crate::models::meeting::{Card, Slot};
use crate::services::booking::{BookingOutcome, BookingWorkflow};
use crate::services::search::{SearchController, SearchOutcome, SearchState};
use crate::services::slot_parser::{SlotParser, TextSlotParser};

/// Page state: the current cards plus the search and booking workflows.
///
/// Constructed explicitly and owned by the front end, so tests can build a
/// fresh one and assert on it directly.
pub struct Assistant<A: SchedulerApi, P: SlotParser = TextSlotParser> {
    api: A,
    search: SearchController<P>,
    booking: BookingWorkflow,
    cards: Vec<Card>,
    authorize_url: String,
}

impl<A: SchedulerApi, P: SlotParser> Assistant<A, P> {
    pub fn new(api: A, parser: P, authorize_url: impl Into<String>) -> Self {
        Self {
            api,
            search: SearchController::new(parser),
            booking: BookingWorkflow::new(),
            cards: Vec::new(),
            authorize_url: authorize_url.into(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn search_state(&self) -> &SearchState {
        self.search.state()
    }

    pub fn booking_state(&self) -> &BookingState {
        self.booking.state()
    }

    // Where the login button navigates
    pub fn authorize_url(&self) -> &str {
        &self.authorize_url
    }

    /// Run a search and replace the displayed cards with its result
    pub async fn search(&mut self, prompt: &str) -> SearchOutcome {
        if self.booking.cancel() {
            debug!("Closed open booking modal before searching again");
        }

        let outcome = self.search.search(&self.api, prompt).await;
        match &outcome {
            SearchOutcome::Slots(cards) => self.cards = cards.clone(),
            // A rejected prompt leaves the previous results on screen
            SearchOutcome::Rejected => {}
            SearchOutcome::Failed(_) => self.cards.clear(),
        }
        outcome
    }

    /// Open the booking modal for the card with display index `index`
    pub fn book(&mut self, index: usize) -> Result<Slot, WorkflowError> {
        let active = self.booking.open(&self.cards, index)?;
        Ok(active.slot.clone())
    }

    pub fn cancel(&mut self) -> bool {
        self.booking.cancel()
    }

    /// Submit the modal form for the active slot
    pub async fn submit(&mut self, title: &str, attendees_raw: &str) -> BookingOutcome {
        let outcome = self
            .booking
            .submit(&self.api, &mut self.cards, title, attendees_raw)
            .await;
        info!("Booking submission finished: {:?}", outcome);
        outcome
    }
}
