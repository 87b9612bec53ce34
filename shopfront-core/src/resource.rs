//! Server-synchronized resource state
//!
//! Every server-backed resource (cart list, user profile, order list) is
//! held in a [`ResourceState<T>`]: the authoritative data plus the request
//! lifecycle flags a consumer needs to render it. Reducers drive the state
//! through a fixed three-phase lifecycle: pending, then success or error.
//!
//! Invariant: at most one of `is_loading == true` and a non-empty
//! `error_message` holds at any time. Every transition method clears the
//! other side.

/// Request lifecycle state for one server-backed resource
///
/// `data` always holds a usable value; its `Default` is the neutral
/// "nothing loaded" value (empty list, blank profile). Consumers render
/// a loading indicator while `is_loading`, and `error_message` when it is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState<T> {
    /// Authoritative value, as last confirmed by the backend
    pub data: T,
    /// A fetch is in flight
    pub is_loading: bool,
    /// Human-readable failure message, empty when healthy
    pub error_message: String,
}

impl<T: Default> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            is_loading: false,
            error_message: String::new(),
        }
    }
}

impl<T> ResourceState<T> {
    /// Create a resource state seeded with known data
    pub fn with_data(data: T) -> Self {
        Self {
            data,
            is_loading: false,
            error_message: String::new(),
        }
    }

    /// Enter the pending phase of a fetch
    ///
    /// Data is kept so the previous value stays visible behind the
    /// loading indicator.
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error_message.clear();
    }

    /// Enter the pending phase of a mutation (delete, update)
    ///
    /// Mutations deliberately do not show a loading indicator, so
    /// `is_loading` is forced false rather than true. Data is kept.
    pub fn begin_mutation(&mut self) {
        self.is_loading = false;
        self.error_message.clear();
    }

    /// Resolve the lifecycle with a new authoritative value
    pub fn resolve(&mut self, data: T) {
        self.data = data;
        self.is_loading = false;
        self.error_message.clear();
    }

    /// Resolve the lifecycle keeping the current data
    ///
    /// Used by targeted mutations after the reducer has already patched
    /// the matching entry in place.
    pub fn settle(&mut self) {
        self.is_loading = false;
        self.error_message.clear();
    }

    /// Clear the error message without touching anything else
    pub fn clear_error(&mut self) {
        self.error_message.clear();
    }

    /// True when neither loading nor failed
    pub fn is_healthy(&self) -> bool {
        !self.is_loading && self.error_message.is_empty()
    }

    /// True when the last request failed
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Consumer-facing snapshot of this resource
    pub fn view(&self) -> ResourceView<'_, T> {
        ResourceView {
            data: &self.data,
            is_loading: self.is_loading,
            error_message: &self.error_message,
        }
    }
}

impl<T: Default> ResourceState<T> {
    /// Fail the lifecycle with a message
    ///
    /// The existing data is discarded, not preserved: a failed resource
    /// renders its neutral default behind the error message. This is a
    /// strict reset-on-error policy, distinct from keeping stale data
    /// under an error banner.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.data = T::default();
        self.is_loading = false;
        self.error_message = message.into();
    }
}

/// Borrowed view of a resource, handed to consumers
///
/// Bundles exactly what a page needs to render: the data, the loading
/// flag, and the error message.
#[derive(Debug, Clone, Copy)]
pub struct ResourceView<'a, T> {
    pub data: &'a T,
    pub is_loading: bool,
    pub error_message: &'a str,
}

impl<T> ResourceView<'_, T> {
    /// True when the view should render an error instead of data
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}
