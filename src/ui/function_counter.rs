//! Function-style counter: a render function plus a `use_state` hook.

use std::rc::Rc;

use crate::ui::component::{Component, Props};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState, CounterView};
use crate::ui::hooks::Scope;
use crate::ui::mvi::Reducer;

pub const FUNCTION_TITLE: &str = "Demo of Functional Component";

/// Handler attached to a rendered control.
pub type Callback = Rc<dyn Fn()>;

/// Render output of a function component: the view and its handler.
pub struct CounterElement {
    pub view: CounterView,
    pub on_increment: Callback,
}

pub type RenderFn = fn(&mut Scope<CounterState>, &Props) -> CounterElement;

pub fn function_counter(scope: &mut Scope<CounterState>, props: &Props) -> CounterElement {
    let (value, set_value) = scope.use_state(CounterState::default);
    let on_increment: Callback = Rc::new(move || {
        set_value.update(|prev| CounterReducer::reduce(prev, CounterIntent::Increment));
    });

    tracing::debug!(component = "function", props = %props, "render");

    CounterElement {
        view: CounterView::new(FUNCTION_TITLE, &value),
        on_increment,
    }
}

/// Adapts a render function to the host's [`Component`] contract.
///
/// The handler from the most recent render is what an activation calls.
pub struct FunctionComponent {
    name: &'static str,
    render_fn: RenderFn,
    scope: Scope<CounterState>,
    props: Props,
    handler: Option<Callback>,
}

impl FunctionComponent {
    pub fn new(name: &'static str, render_fn: RenderFn, props: Props) -> Self {
        Self {
            name,
            render_fn,
            scope: Scope::new(),
            props,
            handler: None,
        }
    }

    pub fn counter(props: Props) -> Self {
        Self::new("function", function_counter, props)
    }
}

impl Component for FunctionComponent {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&mut self) -> CounterView {
        let element = (self.render_fn)(&mut self.scope, &self.props);
        self.handler = Some(element.on_increment);
        element.view
    }

    fn activate(&mut self) {
        tracing::trace!(component = self.name, "activate");
        if self.handler.is_none() {
            self.render();
        }
        if let Some(handler) = &self.handler {
            handler();
        }
    }

    fn commit(&mut self) -> usize {
        self.scope.commit()
    }

    fn value(&self) -> u64 {
        self.scope.current().map_or(0, CounterState::value)
    }
}
