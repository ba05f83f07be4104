//! Hook storage for function-style components.
//!
//! A function component keeps no fields of its own. Its state lives in a
//! [`Scope`] owned by the host adapter, and the render function reaches it
//! through [`Scope::use_state`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::ui::mvi::UiState;

type Updater<S> = Box<dyn FnOnce(S) -> S>;
type UpdateQueue<S> = Rc<RefCell<VecDeque<Updater<S>>>>;

/// Per-instance hook storage.
pub struct Scope<S: UiState> {
    state: Option<S>,
    queue: UpdateQueue<S>,
}

impl<S: UiState> Scope<S> {
    pub fn new() -> Self {
        Self {
            state: None,
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Committed state and a setter for it.
    ///
    /// `init` runs on the first call only; later renders see the committed
    /// state.
    pub fn use_state(&mut self, init: impl FnOnce() -> S) -> (S, SetState<S>) {
        let state = self.state.get_or_insert_with(init).clone();
        let setter = SetState {
            queue: Rc::clone(&self.queue),
        };
        (state, setter)
    }

    /// Committed state, if the component has rendered at least once.
    pub fn current(&self) -> Option<&S> {
        self.state.as_ref()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Apply queued updaters in order, each to the latest state.
    pub fn commit(&mut self) -> usize {
        let Some(state) = self.state.as_mut() else {
            return 0;
        };

        let mut applied = 0;
        loop {
            // Release the borrow before running the updater.
            let next = self.queue.borrow_mut().pop_front();
            let Some(updater) = next else {
                break;
            };
            *state = updater(std::mem::take(state));
            applied += 1;
        }
        applied
    }
}

impl<S: UiState> Default for Scope<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Setter returned by [`Scope::use_state`].
pub struct SetState<S: UiState> {
    queue: UpdateQueue<S>,
}

impl<S: UiState> SetState<S> {
    /// Queue a functional update. It receives the state produced by the
    /// previous update, not the value seen at render time.
    pub fn update(&self, f: impl FnOnce(S) -> S + 'static) {
        self.queue.borrow_mut().push_back(Box::new(f));
    }
}

impl<S: UiState> Clone for SetState<S> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Word(String);

    impl UiState for Word {}

    #[test]
    fn init_runs_once() {
        let mut scope = Scope::<Word>::new();
        let mut calls = 0;
        let (first, _) = scope.use_state(|| {
            calls += 1;
            Word("a".into())
        });
        let (second, _) = scope.use_state(|| {
            calls += 1;
            Word("b".into())
        });

        assert_eq!(calls, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn updates_compose_in_order() {
        let mut scope = Scope::<Word>::new();
        let (_, set) = scope.use_state(Word::default);
        set.update(|w| Word(w.0 + "x"));
        set.clone().update(|w| Word(w.0 + "y"));
        assert_eq!(scope.pending(), 2);

        assert_eq!(scope.commit(), 2);
        assert_eq!(scope.current(), Some(&Word("xy".into())));
    }

    #[test]
    fn stale_render_value_is_not_used() {
        let mut scope = Scope::<Word>::new();
        let (seen, set) = scope.use_state(|| Word("start".into()));
        set.update(|_| Word("replaced".into()));
        set.update(|w| Word(w.0 + "!"));
        scope.commit();

        assert_eq!(seen, Word("start".into()));
        assert_eq!(scope.current(), Some(&Word("replaced!".into())));
    }

    #[test]
    fn commit_before_first_render_is_noop() {
        let mut scope = Scope::<Word>::new();
        assert_eq!(scope.commit(), 0);
        assert!(scope.current().is_none());
    }
}
