//! Reducer for the counter display unit.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Both component styles route their increments through here.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => state.incremented(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_reads_previous_value() {
        let one = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
        let two = CounterReducer::reduce(one, CounterIntent::Increment);
        assert_eq!(one.value(), 1);
        assert_eq!(two.value(), 2);
    }
}
