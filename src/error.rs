use thiserror::Error;

// Fixed user-facing copy for each error kind
pub const MSG_EMPTY_PROMPT: &str = "Please describe when you want to meet, e.g. \"30 minutes next Tuesday afternoon\".";
pub const MSG_UNAUTHORIZED: &str = "Not authorized - please run `login` and authorize calendar access first.";
pub const MSG_NO_SLOTS: &str = "No slots found matching your criteria.";
pub const MSG_MALFORMED: &str = "The scheduling service returned an unexpected response. Please try again.";
pub const MSG_NETWORK: &str = "An error occurred while contacting the scheduling service. Please try again.";

/// Errors raised while talking to the scheduling backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request was not authorized")]
    Unauthorized,

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::InvalidBody(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },

    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidBaseUrl { name: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Booking actions refused by the workflow
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("no card with index {0}")]
    UnknownCard(usize),

    #[error("card {0} is already booked")]
    AlreadyBooked(usize),

    #[error("a booking for card {0} is already in progress")]
    Busy(usize),
}

/// Outcome classes surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    NoResults,
    MalformedResponse,
    NetworkFailure,
    BookingRejected(String),
}

impl ErrorKind {
    /// Text shown to the user. Only `BookingRejected` carries server-supplied copy.
    pub fn user_message(&self) -> String {
        match self {
            ErrorKind::Unauthorized => MSG_UNAUTHORIZED.to_string(),
            ErrorKind::NoResults => MSG_NO_SLOTS.to_string(),
            ErrorKind::MalformedResponse => MSG_MALFORMED.to_string(),
            ErrorKind::NetworkFailure => MSG_NETWORK.to_string(),
            ErrorKind::BookingRejected(message) => message.clone(),
        }
    }
}

impl From<&ApiError> for ErrorKind {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => ErrorKind::Unauthorized,
            ApiError::Timeout | ApiError::Network(_) => ErrorKind::NetworkFailure,
            ApiError::UnexpectedStatus { .. } | ApiError::InvalidBody(_) => {
                ErrorKind::MalformedResponse
            }
            ApiError::Rejected { message, .. } => ErrorKind::BookingRejected(message.clone()),
        }
    }
}
