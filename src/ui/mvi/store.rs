//! Intent queue with deferred, ordered application.

use std::collections::VecDeque;

use super::Reducer;

/// Committed state plus the intents dispatched since the last commit.
///
/// `dispatch` never touches the state. `flush` feeds each queued intent to
/// the reducer together with the state produced by the previous one, so a
/// burst of intents queued before a render is applied in full.
pub struct Store<R: Reducer> {
    state: R::State,
    pending: VecDeque<R::Intent>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        Self {
            state,
            pending: VecDeque::new(),
        }
    }

    /// Committed state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Queue an intent for the next flush.
    pub fn dispatch(&mut self, intent: R::Intent) {
        self.pending.push_back(intent);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply queued intents in dispatch order. Returns how many were applied.
    pub fn flush(&mut self) -> usize {
        let mut applied = 0;
        while let Some(intent) = self.pending.pop_front() {
            self.state = R::reduce(std::mem::take(&mut self.state), intent);
            applied += 1;
        }
        applied
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
