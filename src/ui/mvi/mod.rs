//! Unidirectional state primitives shared by every component.
//!
//! ```text
//! activation ──→ Intent ──→ Store queue ──commit──→ Reducer ──→ State ──→ View
//! ```
//!
//! Nothing mutates state except a [`Reducer`], and a [`Store`] decides when
//! queued intents reach it.

mod store;

pub use store::Store;

/// Render-ready state. Cloned into views, compared in tests, and taken out
/// of its slot (hence `Default`) while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A request for a state transition, e.g. a button activation.
pub trait Intent: Send + 'static {}

/// The single place a state transition is computed.
///
/// `reduce` must stay pure: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
