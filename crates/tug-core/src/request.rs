//! Request/result state machine used by every AI-backed view.
//!
//! A [`Request`] allows at most one provider call in flight. Each call is
//! tagged with a [`Ticket`]; a result carrying any other ticket is stale and
//! dropped, which covers results that arrive after a reset or after the
//! view was left. Ticket ids are unique for the whole process, so a view
//! rebuilt from scratch still rejects results meant for its predecessor.

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::{debug, warn};

/// Period of the rotating status text shown while a request is pending.
pub const STATUS_ROTATION_PERIOD: Duration = Duration::from_millis(2500);

// =============================================================================
// STATE
// =============================================================================

/// Lifecycle of one request. Success and failure never coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Succeeded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one provider call issued by [`Request::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

impl Ticket {
    fn next() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Request state plus the ticket of the call in flight.
#[derive(Debug, Clone)]
pub struct Request<T> {
    state: RequestState<T>,
    in_flight: Option<Ticket>,
}

impl<T> Default for Request<T> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            in_flight: None,
        }
    }
}

impl<T> Request<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Start a request.
    ///
    /// Returns `None` while another call is in flight. Otherwise the previous
    /// outcome is cleared and the caller must issue exactly one provider call
    /// tagged with the returned ticket.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.in_flight.is_some() {
            debug!("Request already in flight");
            return None;
        }
        let ticket = Ticket::next();
        self.in_flight = Some(ticket);
        self.state = RequestState::Pending;
        debug!(ticket = ticket.0, "Request started");
        Some(ticket)
    }

    /// Store the outcome of the call tagged with `ticket`.
    ///
    /// Results for any ticket other than the one in flight are ignored. On
    /// failure the raw error is logged and `failure_message` is stored.
    /// Returns whether the result was applied.
    pub fn settle<E: Display>(
        &mut self,
        ticket: Ticket,
        result: Result<T, E>,
        failure_message: &str,
    ) -> bool {
        if self.in_flight != Some(ticket) {
            debug!(ticket = ticket.0, "Dropping stale result");
            return false;
        }
        self.in_flight = None;
        self.state = match result {
            Ok(data) => RequestState::Succeeded(data),
            Err(err) => {
                warn!(ticket = ticket.0, error = %err, "Provider request failed");
                RequestState::Failed(failure_message.to_string())
            }
        };
        true
    }

    /// Fail immediately without a provider call.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.in_flight = None;
        self.state = RequestState::Failed(message.into());
    }

    /// Return to idle, invalidating any call in flight.
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.state = RequestState::Idle;
    }
}

// =============================================================================
// STATUS ROTATION
// =============================================================================

/// Cycles through a fixed list of status messages.
///
/// The owner advances it on every tick of [`STATUS_ROTATION_PERIOD`] while a
/// request is pending.
#[derive(Debug, Clone, Copy)]
pub struct StatusRotation {
    messages: &'static [&'static str],
    index: usize,
}

impl StatusRotation {
    pub const fn new(messages: &'static [&'static str]) -> Self {
        Self { messages, index: 0 }
    }

    pub fn current(&self) -> &'static str {
        self.messages.get(self.index).copied().unwrap_or_default()
    }

    pub fn advance(&mut self) {
        if !self.messages.is_empty() {
            self.index = (self.index + 1) % self.messages.len();
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flight() {
        let mut req: Request<u32> = Request::new();
        let ticket = req.begin().expect("first begin");
        assert!(req.begin().is_none());
        assert!(req.settle::<String>(ticket, Ok(7), "failed"));
        assert_eq!(req.data(), Some(&7));
        assert!(req.begin().is_some());
        assert!(req.data().is_none());
    }

    #[test]
    fn test_failure_stores_fixed_message() {
        let mut req: Request<u32> = Request::new();
        let ticket = req.begin().unwrap();
        req.settle(ticket, Err("HTTP 500"), "The cosmos is quiet.");
        assert_eq!(req.state(), &RequestState::Failed("The cosmos is quiet.".to_string()));
    }

    #[test]
    fn test_stale_result_after_reset_is_dropped() {
        let mut req: Request<u32> = Request::new();
        let old = req.begin().unwrap();
        req.reset();
        let new = req.begin().unwrap();
        assert!(!req.settle::<String>(old, Ok(1), "failed"));
        assert!(req.is_pending());
        assert!(req.settle::<String>(new, Ok(2), "failed"));
        assert_eq!(req.data(), Some(&2));
    }

    #[test]
    fn test_fresh_request_rejects_old_ticket() {
        let mut req: Request<u32> = Request::new();
        let old = req.begin().unwrap();
        let mut req: Request<u32> = Request::new();
        let new = req.begin().unwrap();
        assert_ne!(old, new);
        assert!(!req.settle::<String>(old, Ok(1), "failed"));
    }

    #[test]
    fn test_rotation_wraps() {
        static MESSAGES: [&str; 2] = ["one", "two"];
        let mut rotation = StatusRotation::new(&MESSAGES);
        assert_eq!(rotation.current(), "one");
        rotation.advance();
        assert_eq!(rotation.current(), "two");
        rotation.advance();
        assert_eq!(rotation.current(), "one");
    }
}
