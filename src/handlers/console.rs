use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::SchedulerApi;
use crate::handlers::api::Assistant;
use crate::handlers::help::{examples_text, HELP_TEXT};
use crate::routes::Command;
use crate::services::booking::BookingOutcome;
use crate::services::search::{SearchOutcome, MSG_SEARCHING};
use crate::services::slot_parser::SlotParser;

// What a read from the terminal produced
enum Input {
    Line(String),
    Closed,
    Shutdown,
}

fn prompt(label: &str) {
    print!("{}", label);
    if let Err(e) = std::io::stdout().flush() {
        debug!("Failed to flush stdout: {}", e);
    }
}

/// Resolves once the shutdown flag is set; never resolves if the sender is gone
pub async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>) {
    if shutdown.wait_for(|stop| *stop).await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Terminal front end over an `Assistant`.
///
/// Every wait (reading input, searching, submitting) also watches the
/// shutdown flag, so an interrupt is honored wherever the user is.
pub struct Console<A: SchedulerApi, P: SlotParser, R> {
    assistant: Assistant<A, P>,
    lines: Lines<R>,
    shutdown: watch::Receiver<bool>,
}

impl<A, P, R> Console<A, P, R>
where
    A: SchedulerApi,
    P: SlotParser,
    R: AsyncBufRead + Unpin,
{
    pub fn new(assistant: Assistant<A, P>, input: R, shutdown: watch::Receiver<bool>) -> Self {
        Self {
            assistant,
            lines: input.lines(),
            shutdown,
        }
    }

    pub fn assistant(&self) -> &Assistant<A, P> {
        &self.assistant
    }

    pub fn assistant_mut(&mut self) -> &mut Assistant<A, P> {
        &mut self.assistant
    }

    async fn read_line(&mut self, label: &str) -> Input {
        prompt(label);
        tokio::select! {
            biased;
            _ = wait_for_shutdown(&mut self.shutdown) => Input::Shutdown,
            line = self.lines.next_line() => match line {
                Ok(Some(line)) => Input::Line(line),
                Ok(None) => Input::Closed,
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    Input::Closed
                }
            },
        }
    }

    /// Read commands until quit, end of input, or shutdown
    pub async fn run(&mut self) {
        println!("{}\n", HELP_TEXT);
        loop {
            let line = match self.read_line("> ").await {
                Input::Line(line) => line,
                Input::Closed => break,
                Input::Shutdown => {
                    info!("Received interrupt signal, shutting down");
                    break;
                }
            };
            if !self.handle(Command::parse(&line)).await {
                break;
            }
        }
    }

    /// Booking form loop. Returns `false` when the console should stop.
    pub async fn run_booking_modal(&mut self) -> bool {
        while self.assistant.booking_state().status.modal_visible() {
            let title = match self.read_line("Meeting title (blank to cancel): ").await {
                Input::Line(title) => title,
                Input::Closed | Input::Shutdown => {
                    self.assistant.cancel();
                    return false;
                }
            };
            if title.trim().is_empty() {
                self.assistant.cancel();
                println!("Booking cancelled.");
                return true;
            }

            let attendees = match self.read_line("Attendees (comma-separated emails): ").await {
                Input::Line(attendees) => attendees,
                Input::Closed | Input::Shutdown => {
                    self.assistant.cancel();
                    return false;
                }
            };

            println!("Booking...");
            let outcome = tokio::select! {
                biased;
                _ = wait_for_shutdown(&mut self.shutdown) => {
                    info!("Interrupted while a booking was being submitted");
                    return false;
                }
                outcome = self.assistant.submit(&title, &attendees) => outcome,
            };

            match outcome {
                BookingOutcome::Booked { card_index, .. } => {
                    if let Some(card) = self.assistant.cards().iter().find(|c| c.index == card_index) {
                        println!("{}\n", card);
                    }
                }
                BookingOutcome::Failed(kind) => {
                    println!("Error: {}", kind.user_message());
                    println!("You can try again or leave the title blank to cancel.");
                }
                BookingOutcome::Ignored => return true,
            }
        }
        true
    }

    async fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Help => println!("{}", HELP_TEXT),
            Command::Examples => println!("{}", examples_text()),
            Command::Login => println!(
                "Open this link to authorize calendar access:\n  {}",
                self.assistant.authorize_url()
            ),
            Command::Cancel => {
                if !self.assistant.cancel() {
                    println!("Nothing to cancel.");
                }
            }
            Command::Invalid(message) => println!("{}", message),
            Command::Book(index) => match self.assistant.book(index) {
                Ok(slot) => {
                    println!(
                        "Book slot {}: {} {}-{}",
                        index, slot.date_label, slot.local_range.start, slot.local_range.end
                    );
                    return self.run_booking_modal().await;
                }
                Err(e) => println!("{}", e),
            },
            Command::Search(text) => {
                if !text.trim().is_empty() {
                    println!("{}", MSG_SEARCHING);
                }
                let outcome = tokio::select! {
                    biased;
                    _ = wait_for_shutdown(&mut self.shutdown) => {
                        info!("Interrupted while searching");
                        return false;
                    }
                    outcome = self.assistant.search(&text) => outcome,
                };
                match &outcome {
                    SearchOutcome::Slots(_) => {
                        for card in self.assistant.cards() {
                            println!("{}\n", card);
                        }
                    }
                    _ => {
                        if let Some(message) = outcome.message() {
                            println!("{}", message);
                        }
                    }
                }
            }
        }
        true
    }
}
