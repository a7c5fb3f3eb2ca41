//! Slot Assistant
//!
//! This library lets a user describe, in free text, when they want to meet,
//! asks a scheduling backend for matching free calendar slots, and books one
//! of the returned slots as a calendar event.
//!
//! # Modules
//!
//! - `client`: SchedulerClient for the `/free-slots` and `/create-event` endpoints
//! - `services::slot_parser`: turns the plain-text slot response into `Slot`s
//! - `services::renderer`: projects slots onto bookable cards
//! - `services::booking`: the booking state machine
//! - `services::search`: the find-slots request/response cycle
//! - `handlers::api`: the `Assistant` page state tying it all together
//!
//! # Response format
//!
//! The backend answers a slot search with plain text: either the sentinel
//! `No available slots found.` or blank-line separated blocks of
//! `Slot <n>`, a date line, and a `day | start-end | utc` line.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod client_mock;


// Re-export the main API types for ease of use
pub use client::{CreateEventRequest, CreatedEvent, SchedulerApi, SchedulerClient};
pub use config::AppConfig;
pub use error::{ApiError, ConfigError, ErrorKind, WorkflowError};
pub use handlers::api::Assistant;
pub use models::meeting::{Card, Slot};
pub use routes::Command;
pub use services::booking::{BookingOutcome, BookingWorkflow};
pub use services::search::{SearchController, SearchOutcome};
pub use services::slot_parser::{SlotParser, TextSlotParser};
