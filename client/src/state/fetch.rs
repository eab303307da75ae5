//! Per-component fetch lifecycle with stale-response protection.
//!
//! DESIGN
//! ======
//! Every fetch takes a ticket from its slot's [`RequestSeq`] before it is
//! dispatched. When the response arrives it is applied only if its ticket is
//! still the latest one; anything older was superseded by a newer request or
//! by [`FetchSlot::invalidate`] (called on unmount) and is dropped.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

/// `idle -> loading -> {loaded | failed}`, re-entering `loading` on refetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
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

/// Monotonic request counter; only the latest ticket is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Issue a new ticket, superseding every earlier one.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket != 0 && ticket == self.latest
    }

    /// Supersede all outstanding tickets without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// A fetch state paired with the sequence that guards it.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchSlot<T> {
    pub state: FetchState<T>,
    seq: RequestSeq,
}

// Manual impl: the derive would demand `T: Default`.
impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self { state: FetchState::Idle, seq: RequestSeq::default() }
    }
}

impl<T> FetchSlot<T> {
    /// Enter `loading` and return the ticket the response must present.
    pub fn begin(&mut self) -> u64 {
        self.state = FetchState::Loading;
        self.seq.issue()
    }

    /// Apply a response. Returns `false` (and changes nothing) for a stale
    /// ticket.
    pub fn resolve(&mut self, ticket: u64, result: Result<T, String>) -> bool {
        if !self.seq.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(message) => FetchState::Failed(message),
        };
        true
    }

    /// Drop back to `idle` and discard any in-flight response.
    pub fn reset(&mut self) {
        self.state = FetchState::Idle;
        self.seq.invalidate();
    }

    /// Discard any in-flight response, keeping the current state.
    pub fn invalidate(&mut self) {
        self.seq.invalidate();
    }
}
