//! Request Sequencing
//!
//! Overlapping fetches for the same field are not cancelled; instead each
//! request takes a token and only the latest-issued token may commit its
//! response. Resolves the last-to-resolve-wins race on cascading fetches.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic token source shared by all requests for one field.
///
/// UI-thread only; cloning shares the counter.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq(Rc<Cell<u64>>);

impl RequestSeq {
    /// Issue a new token, invalidating all previously issued ones.
    pub fn issue(&self) -> u64 {
        self.0.set(self.0.get() + 1);
        self.0.get()
    }

    /// Whether `token` is still the latest issued.
    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_stays_current_until_superseded() {
        let seq = RequestSeq::default();
        let first = seq.issue();
        assert!(seq.is_current(first));
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = RequestSeq::default();
        let token = seq.issue();
        let other = seq.clone();
        assert!(other.is_current(token));
        other.issue();
        assert!(!seq.is_current(token));
    }
}
