use crate::config::Variant;
use crate::ui::component::{mount, Component, Props};
use crate::ui::counter::CounterView;

/// Host state: mounted components, focus and quit flag.
pub struct App {
    should_quit: bool,
    focus: usize,
    components: Vec<Box<dyn Component>>,
}

impl App {
    pub fn new(components: Vec<Box<dyn Component>>) -> Self {
        Self {
            should_quit: false,
            focus: 0,
            components,
        }
    }

    /// Mount one fresh instance per variant, each with its own copy of props.
    pub fn mount(variants: &[Variant], props: &Props) -> Self {
        let components = variants
            .iter()
            .map(|variant| mount(*variant, props.clone()))
            .collect();
        Self::new(components)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn components(&self) -> &[Box<dyn Component>] {
        &self.components
    }

    pub fn focus_next(&mut self) {
        if !self.components.is_empty() {
            self.focus = (self.focus + 1) % self.components.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.components.is_empty() {
            self.focus = if self.focus == 0 {
                self.components.len() - 1
            } else {
                self.focus - 1
            };
        }
    }

    /// Deliver an activation to the focused component's control.
    pub fn activate_focused(&mut self) {
        if let Some(component) = self.components.get_mut(self.focus) {
            component.activate();
        }
    }

    /// Apply every queued transition. Called once per frame, before drawing.
    pub fn commit(&mut self) -> usize {
        let applied: usize = self
            .components
            .iter_mut()
            .map(|component| component.commit())
            .sum();
        if applied > 0 {
            tracing::trace!(applied, "committed updates");
        }
        applied
    }

    /// Render every component's view tree, in mount order.
    pub fn views(&mut self) -> Vec<CounterView> {
        self.components
            .iter_mut()
            .map(|component| component.render())
            .collect()
    }
}
