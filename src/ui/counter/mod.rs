//! Counter display unit.
//!
//! One pure core shared by both component styles:
//! - `state.rs` - Counter value
//! - `intent.rs` - Increment request
//! - `reducer.rs` - State transitions
//! - `view.rs` - View tree and rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{CounterView, INCREMENT_LABEL};
