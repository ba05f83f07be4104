//! State for the counter display unit.

use crate::ui::mvi::UiState;

/// Number of increments applied since mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: u64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn value(&self) -> u64 {
        self.value
    }

    /// State after one more increment.
    pub fn incremented(self) -> Self {
        Self {
            value: self.value.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(CounterState::default().value(), 0);
    }

    #[test]
    fn incremented_adds_one() {
        let state = CounterState::default().incremented().incremented();
        assert_eq!(state.value(), 2);
    }

    #[test]
    fn incremented_saturates() {
        let state = CounterState { value: u64::MAX };
        assert_eq!(state.incremented().value(), u64::MAX);
    }
}
