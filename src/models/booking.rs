use crate::models::common::OperationStatus;
use crate::models::form::FormFields;
use crate::models::meeting::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    Idle,
    ModalOpen,
    Submitting,
    Succeeded,
    Failed,
}

impl BookingStatus {
    // Succeeded accepts new bookings exactly like Idle
    pub fn accepts_new_booking(&self) -> bool {
        matches!(self, BookingStatus::Idle | BookingStatus::Succeeded)
    }

    pub fn modal_visible(&self) -> bool {
        matches!(
            self,
            BookingStatus::ModalOpen | BookingStatus::Submitting | BookingStatus::Failed
        )
    }
}

/// The slot a booking session targets, and the card it was opened from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSlot {
    pub card_index: usize,
    pub slot: Slot,
}

/// Singleton modal session for one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingState {
    pub status: BookingStatus,
    pub active_slot: Option<ActiveSlot>,
    pub form: FormFields,
    pub error: Option<String>,
    pub submit: OperationStatus,
}

impl BookingState {
    pub fn submit_enabled(&self) -> bool {
        self.submit.control_enabled()
    }
}
