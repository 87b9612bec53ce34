//! Task manager for async effect runners
//!
//! Effect runners perform one network call each and resolve into a
//! terminal action. The task manager owns their lifecycle:
//! - Automatic cancellation when spawning with the same key
//! - Manual cancellation, and abort of everything on drop
//!
//! # Example
//!
//! ```ignore
//! use shopfront_core::tasks::{TaskManager, TaskKey};
//!
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskManager::new(action_tx);
//!
//! // Spawn an effect - any existing task with the same key is cancelled
//! tasks.spawn(TaskKey::new("cart-fetch"), async move {
//!     match api.cart_list().await {
//!         Ok(items) => CartAction::DidFetch(items),
//!         Err(e) => CartAction::DidFetchError(e),
//!     }
//! });
//! ```

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::Action;

/// Identifies a task for cancellation and replacement.
///
/// Tasks with the same key are mutually exclusive - spawning a new task
/// with a key that's already running will cancel the existing task.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    /// Create a new task key.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the key name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Manages effect-runner lifecycle with keyed cancellation.
///
/// The manager keeps a registry of running tasks by key. Spawning with a
/// key that already exists cancels the previous task first, which gives
/// callers an opt-in guard against a stale in-flight request overwriting
/// a newer one. Callers that want the plain last-write-wins behavior use
/// distinct keys per invocation.
///
/// # Type Parameters
///
/// - `A`: The action type that tasks resolve into
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Create a new task manager.
    ///
    /// The `action_tx` channel carries terminal actions back to the
    /// owning page when tasks complete.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task, cancelling any existing task with the same key.
    ///
    /// The future resolves to exactly one action, sent to the action
    /// channel on completion. If the task is cancelled first, no action
    /// is sent.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();

        // Cancel existing task with this key
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key.
    ///
    /// If no task exists with the given key, this is a no-op.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Cancel all running tasks.
    ///
    /// Useful for page teardown.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Check if a task with the given key has been spawned and not cancelled.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }

    /// Get the number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if there are no registered tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get the keys of all registered tasks.
    pub fn running_keys(&self) -> impl Iterator<Item = &TaskKey> {
        self.tasks.keys()
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        // Abort all running tasks on drop
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone, Debug)]
    enum TestAction {
        DidResolve(usize),
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            "DidResolve"
        }
    }

    #[test]
    fn test_task_key() {
        let k1 = TaskKey::new("cart-fetch");
        let k2 = TaskKey::from("cart-fetch");
        let k3: TaskKey = "cart-fetch".into();

        assert_eq!(k1, k2);
        assert_eq!(k2, k3);
        assert_eq!(k1.name(), "cart-fetch");
    }

    #[tokio::test]
    async fn test_spawn_sends_terminal_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("cart-fetch", async { TestAction::DidResolve(42) });

        let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        assert!(matches!(action, TestAction::DidResolve(42)));
    }

    #[tokio::test]
    async fn test_spawn_cancels_previous_with_same_key() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        let counter = Arc::new(AtomicUsize::new(0));

        // First task takes a while
        let c1 = counter.clone();
        tasks.spawn("cart-fetch", async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            c1.fetch_add(1, Ordering::SeqCst);
            TestAction::DidResolve(1)
        });

        // Immediately replace it
        let c2 = counter.clone();
        tasks.spawn("cart-fetch", async move {
            c2.fetch_add(10, Ordering::SeqCst);
            TestAction::DidResolve(2)
        });

        // Only the second task completes
        let action = tokio::time::timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        assert!(matches!(action, TestAction::DidResolve(2)));
        assert_eq!(counter.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn test_distinct_keys_run_independently() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("cart-remove-1", async { TestAction::DidResolve(1) });
        tasks.spawn("cart-remove-2", async { TestAction::DidResolve(2) });

        let mut seen = Vec::new();
        for _ in 0..2 {
            let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
                .await
                .expect("timeout")
                .expect("channel closed");
            let TestAction::DidResolve(n) = action;
            seen.push(n);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("cart-fetch", async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            TestAction::DidResolve(1)
        });

        assert!(tasks.is_running(&TaskKey::new("cart-fetch")));

        tasks.cancel(&TaskKey::new("cart-fetch"));

        assert!(!tasks.is_running(&TaskKey::new("cart-fetch")));

        // No action arrives
        let result = tokio::time::timeout(Duration::from_millis(150), rx.recv()).await;
        assert!(result.is_err() || result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cancel_all() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("a", async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            TestAction::DidResolve(1)
        });
        tasks.spawn("b", async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            TestAction::DidResolve(2)
        });

        assert_eq!(tasks.len(), 2);

        tasks.cancel_all();

        assert!(tasks.is_empty());
    }
}
