use tracing::{debug, error, info, warn};

use crate::client::{CreateEventRequest, CreatedEvent, SchedulerApi};
use crate::error::{ApiError, ErrorKind, WorkflowError};
use crate::models::booking::{ActiveSlot, BookingState, BookingStatus};
use crate::models::common::OperationStatus;
use crate::models::form::FormFields;
use crate::models::meeting::{Card, Slot};

/// Result of driving a submission through the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    // Nothing to submit (no active slot, or not in a submittable state)
    Ignored,
    Booked {
        card_index: usize,
        attendee_count: usize,
    },
    Failed(ErrorKind),
}

// Natural-language event request: title plus combined date+time for start and end
pub fn build_event_request(form: &FormFields, slot: &Slot) -> CreateEventRequest {
    CreateEventRequest {
        prompt: format!(
            "{} from {} to {}",
            form.title,
            slot.start_label(),
            slot.end_label()
        ),
        attendees: form.attendees.clone(),
    }
}

/// State machine from slot selection to event-creation confirmation.
///
/// `Idle -> ModalOpen -> Submitting -> {Succeeded | Failed}`. The workflow is
/// the only writer of the active slot.
#[derive(Debug, Default)]
pub struct BookingWorkflow {
    state: BookingState,
}

impl BookingWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn status(&self) -> BookingStatus {
        self.state.status
    }

    pub fn active_slot(&self) -> Option<&ActiveSlot> {
        self.state.active_slot.as_ref()
    }

    /// User clicked "book" on the card with display index `index`
    pub fn open(&mut self, cards: &[Card], index: usize) -> Result<&ActiveSlot, WorkflowError> {
        if !self.state.status.accepts_new_booking() {
            let busy_with = self
                .state
                .active_slot
                .as_ref()
                .map(|active| active.card_index)
                .unwrap_or(index);
            return Err(WorkflowError::Busy(busy_with));
        }

        let card = cards
            .iter()
            .find(|card| card.index == index)
            .ok_or(WorkflowError::UnknownCard(index))?;
        if card.is_booked() || !card.action.enabled {
            return Err(WorkflowError::AlreadyBooked(index));
        }

        info!("Opening booking modal for slot {} ({})", index, card.date_label);
        self.state = BookingState {
            status: BookingStatus::ModalOpen,
            active_slot: Some(ActiveSlot {
                card_index: card.index,
                slot: card.slot().clone(),
            }),
            ..BookingState::default()
        };

        self.state
            .active_slot
            .as_ref()
            .ok_or(WorkflowError::UnknownCard(index))
    }

    /// Cancel or click outside the modal. Returns whether anything was closed.
    pub fn cancel(&mut self) -> bool {
        match self.state.status {
            BookingStatus::ModalOpen | BookingStatus::Failed => {
                info!("Booking modal closed without submitting");
                self.state = BookingState::default();
                true
            }
            BookingStatus::Submitting => {
                debug!("Ignoring cancel while a booking is being submitted");
                false
            }
            BookingStatus::Idle | BookingStatus::Succeeded => false,
        }
    }

    /// Capture the form and move to Submitting; `None` when there is nothing to submit
    pub fn begin_submit(&mut self, title: &str, attendees_raw: &str) -> Option<CreateEventRequest> {
        let Some(active) = self.state.active_slot.as_ref() else {
            debug!("Submit with no active slot, ignoring");
            return None;
        };
        if !matches!(
            self.state.status,
            BookingStatus::ModalOpen | BookingStatus::Failed
        ) {
            debug!("Submit ignored in state {:?}", self.state.status);
            return None;
        }

        let form = FormFields::capture(title, attendees_raw);
        let request = build_event_request(&form, &active.slot);
        info!(
            "Submitting booking for slot {} with {} attendee(s)",
            active.card_index,
            form.attendees.len()
        );

        self.state.form = form;
        self.state.status = BookingStatus::Submitting;
        self.state.submit = OperationStatus::InFlight;
        self.state.error = None;
        Some(request)
    }

    /// Reflect the backend's answer onto the state and the originating card
    pub fn complete(
        &mut self,
        result: Result<CreatedEvent, ApiError>,
        cards: &mut [Card],
    ) -> BookingOutcome {
        if self.state.status != BookingStatus::Submitting {
            warn!("Booking result arrived in state {:?}, ignoring", self.state.status);
            return BookingOutcome::Ignored;
        }
        let Some(active) = self.state.active_slot.clone() else {
            return BookingOutcome::Ignored;
        };

        match result {
            Ok(_) => {
                let attendee_count = self.state.form.attendees.len();
                match cards.iter_mut().find(|card| card.index == active.card_index) {
                    Some(card) => card.mark_booked(attendee_count),
                    None => warn!(
                        "Card {} is no longer displayed, booking confirmed without marking it",
                        active.card_index
                    ),
                }
                info!("Booked slot {} for {} attendee(s)", active.card_index, attendee_count);

                self.state = BookingState {
                    status: BookingStatus::Succeeded,
                    submit: OperationStatus::Done,
                    ..BookingState::default()
                };
                BookingOutcome::Booked {
                    card_index: active.card_index,
                    attendee_count,
                }
            }
            Err(err) => {
                error!("Failed to book slot {}: {}", active.card_index, err);
                let kind = ErrorKind::from(&err);

                // Modal stays open with the same slot so the user can retry
                self.state.status = BookingStatus::Failed;
                self.state.error = Some(kind.user_message());
                self.state.submit = OperationStatus::Retryable(kind.clone());
                BookingOutcome::Failed(kind)
            }
        }
    }

    /// Full submit cycle: capture, call the backend, reflect the result
    pub async fn submit<A>(
        &mut self,
        api: &A,
        cards: &mut [Card],
        title: &str,
        attendees_raw: &str,
    ) -> BookingOutcome
    where
        A: SchedulerApi + ?Sized,
    {
        let Some(request) = self.begin_submit(title, attendees_raw) else {
            return BookingOutcome::Ignored;
        };
        let result = api.create_event(&request).await;
        self.complete(result, cards)
    }
}
