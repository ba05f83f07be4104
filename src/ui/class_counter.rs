//! Class-style counter: a struct that owns its state and enqueues
//! transitions through its store.

use crate::ui::component::{Component, Props};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterView};
use crate::ui::mvi::Store;

pub const CLASS_TITLE: &str = "Demo of Class Component";

pub struct ClassCounter {
    props: Props,
    store: Store<CounterReducer>,
}

impl ClassCounter {
    pub fn new(props: Props) -> Self {
        Self {
            props,
            store: Store::new(),
        }
    }

    /// Queue one increment over whatever the state is when it gets applied.
    pub fn increment(&mut self) {
        self.store.dispatch(CounterIntent::Increment);
    }

    pub fn props(&self) -> &Props {
        &self.props
    }
}

impl Component for ClassCounter {
    fn name(&self) -> &'static str {
        "class"
    }

    fn render(&mut self) -> CounterView {
        tracing::debug!(component = self.name(), props = %self.props, "render");
        CounterView::new(CLASS_TITLE, self.store.state())
    }

    fn activate(&mut self) {
        tracing::trace!(component = self.name(), "activate");
        self.increment();
    }

    fn commit(&mut self) -> usize {
        self.store.flush()
    }

    fn value(&self) -> u64 {
        self.store.state().value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_class_title() {
        let mut counter = ClassCounter::new(Props::Null);
        let view = counter.render();
        assert_eq!(view.title, CLASS_TITLE);
        assert_eq!(view.value, 0);
    }

    #[test]
    fn increments_wait_for_commit() {
        let mut counter = ClassCounter::new(Props::Null);
        counter.increment();
        counter.increment();
        assert_eq!(counter.value(), 0);

        assert_eq!(counter.commit(), 2);
        assert_eq!(counter.render().value, 2);
    }

    #[test]
    fn props_do_not_affect_output() {
        let mut plain = ClassCounter::new(Props::Null);
        let mut configured = ClassCounter::new(serde_json::json!({ "label": "ignored" }));
        assert_eq!(plain.render(), configured.render());
        assert_eq!(configured.props()["label"], "ignored");
    }
}
