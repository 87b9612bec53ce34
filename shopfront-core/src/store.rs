//! Per-resource state containers
//!
//! Each server-backed resource (cart list, user profile, order list) owns
//! one store. The store holds the resource state and provides a single
//! mutation path: dispatch an action and let the reducer fold it in.
//! [`StoreWithMiddleware`] layers dispatch observation on top, used for
//! `tracing` output in the pages.

use crate::Action;

/// Pure state-transition function.
///
/// Returns `true` when the action changed the state.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// State container for one resource.
///
/// Nothing outside [`dispatch`](Store::dispatch) writes to the state in
/// normal operation; [`state_mut`](Store::state_mut) exists for seeding
/// at startup (e.g. the signed-in user).
///
/// ```ignore
/// let mut store = Store::new(ResourceState::default(), cart_reducer);
/// store.dispatch(CartAction::CartFetch);
/// assert!(store.state().is_loading);
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
}

impl<S, A: Action> Store<S, A> {
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self { state, reducer }
    }

    /// Fold an action into the state. Returns the reducer's changed flag.
    pub fn dispatch(&mut self, action: A) -> bool {
        (self.reducer)(&mut self.state, action)
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Direct state access, for seeding only; prefer dispatching.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}

/// Observes dispatches without being able to change them.
pub trait Middleware<A: Action> {
    /// Called before the reducer runs.
    fn before(&mut self, action: &A);

    /// Called after the reducer ran, with its changed flag.
    fn after(&mut self, action: &A, state_changed: bool);
}

/// A [`Store`] whose dispatches pass through a [`Middleware`].
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = self.store.dispatch(action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

/// Logs every dispatch through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware {
    verbose: bool,
}

impl LoggingMiddleware {
    /// Log each action after it is reduced.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Additionally trace each action before the reducer runs.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.verbose {
            tracing::trace!(action = action.name(), "dispatching");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = action.name(), state_changed, "action reduced");
    }
}
