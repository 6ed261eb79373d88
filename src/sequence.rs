use std::cell::Cell;
use std::rc::Rc;

/// Hands out increasing tickets for requests of one kind. Only the response
/// carrying the most recently issued ticket may touch state.
#[derive(Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<Cell<u64>>,
}

impl RequestSequencer {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }

    /// Invalidates every outstanding ticket without starting a new request.
    pub fn invalidate(&self) {
        self.issue();
    }
}

impl PartialEq for RequestSequencer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latest, &other.latest)
    }
}
