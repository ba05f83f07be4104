//! Intents for the counter display unit.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// User activated the "Increment" control.
    Increment,
}

impl Intent for CounterIntent {}
