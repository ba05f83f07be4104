//! Contract between the host and a mounted counter component.

use crate::config::Variant;
use crate::ui::class_counter::ClassCounter;
use crate::ui::counter::CounterView;
use crate::ui::function_counter::FunctionComponent;

/// Opaque configuration handed down by the parent.
///
/// Components accept it and log it on render; it never changes output.
pub type Props = serde_json::Value;

/// What the host needs from a component.
///
/// `activate` only enqueues; nothing is visible until the host calls
/// `commit` and renders again.
pub trait Component {
    fn name(&self) -> &'static str;

    /// Build the view tree from committed state.
    fn render(&mut self) -> CounterView;

    /// The user activated the "Increment" control.
    fn activate(&mut self);

    /// Apply queued transitions in order. Returns how many were applied.
    fn commit(&mut self) -> usize;

    /// Committed counter value.
    fn value(&self) -> u64;
}

/// Mount a fresh instance of the given variant.
pub fn mount(variant: Variant, props: Props) -> Box<dyn Component> {
    tracing::info!(component = variant.as_str(), "mounting component");
    match variant {
        Variant::Class => Box::new(ClassCounter::new(props)),
        Variant::Function => Box::new(FunctionComponent::counter(props)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_picks_variant() {
        assert_eq!(mount(Variant::Class, Props::Null).name(), "class");
        assert_eq!(mount(Variant::Function, Props::Null).name(), "function");
    }

    #[test]
    fn fresh_mounts_start_at_zero() {
        for variant in [Variant::Class, Variant::Function] {
            let mut component = mount(variant, Props::Null);
            assert_eq!(component.render().value, 0);
        }
    }
}
