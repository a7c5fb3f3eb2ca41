use crate::error::ErrorKind;

/// Progress of a user-triggered operation (search or booking submit)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationStatus {
    #[default]
    Ready,
    InFlight,
    Done,
    Retryable(ErrorKind),
}

impl OperationStatus {
    // The triggering control is enabled whenever nothing is outstanding
    pub fn control_enabled(&self) -> bool {
        !matches!(self, OperationStatus::InFlight)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, OperationStatus::InFlight)
    }
}
