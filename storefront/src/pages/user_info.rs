//! User profile page
//!
//! Layers local draft state over the user store: the uncommitted input
//! value and its client-side validation error belong to the page, not the
//! resource. The draft only reaches the network when the user confirms an
//! edit that actually changed something.

use std::sync::Arc;

use shopfront::prelude::*;
use tokio::sync::mpsc;

use crate::api::StoreApi;
use crate::error::ApiError;
use crate::models::User;
use crate::pages::{PageAlert, FATAL_ALERT};
use crate::user::{reducer, UserAction, UserState};
use crate::validate;

/// Orchestrates the user profile resource plus draft editing state.
pub struct UserInfoPage {
    api: Arc<dyn StoreApi>,
    store: StoreWithMiddleware<UserState, UserAction, LoggingMiddleware>,
    tasks: TaskManager<UserAction>,
    rx: mpsc::UnboundedReceiver<UserAction>,
    pending: usize,
    seq: u64,

    editing: bool,
    draft: String,
    validation_error: String,
    confirming_delete: bool,
    alert: Option<String>,
}

impl UserInfoPage {
    /// Create the page for a signed-in user.
    pub fn new(api: Arc<dyn StoreApi>, user: User) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let draft = user.username.clone();
        Self {
            api,
            store: StoreWithMiddleware::new(
                UserState::with_data(user),
                reducer,
                LoggingMiddleware::new(),
            ),
            tasks: TaskManager::new(tx),
            rx,
            pending: 0,
            seq: 0,
            editing: false,
            draft,
            validation_error: String::new(),
            confirming_delete: false,
            alert: None,
        }
    }

    /// Enter edit mode on the username field.
    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Track the draft value, validating on every keystroke.
    ///
    /// Invalid input is kept in the draft; only the error label changes.
    pub fn set_draft(&mut self, value: impl Into<String>) {
        let value = value.into();
        match validate::check_username(&value) {
            Ok(()) => self.validation_error.clear(),
            Err(err) => self.validation_error = err.to_string(),
        }
        self.draft = value;
    }

    /// Confirm the edit.
    ///
    /// An unchanged draft exits edit mode without any network call; a
    /// changed draft fires the rename effect runner.
    pub fn confirm_edit(&mut self) {
        if self.store.state().data.username == self.draft {
            self.editing = false;
            return;
        }

        let user = self.store.state().data.clone();
        let username = self.draft.clone();
        self.store.dispatch(UserAction::UserRename {
            username: username.clone(),
        });
        let api = Arc::clone(&self.api);
        self.spawn("user-rename", async move {
            match api
                .rename_customer(user.id, &user.access_token, &username)
                .await
            {
                Ok(username) => UserAction::UserDidRename { username },
                Err(err) => UserAction::UserDidRenameError(err),
            }
        });
    }

    /// Abandon the edit: restore the draft, drop local and server errors.
    pub fn cancel_edit(&mut self) {
        self.draft = self.store.state().data.username.clone();
        self.validation_error.clear();
        self.store.dispatch(UserAction::UserClearError);
        self.editing = false;
    }

    /// Open the delete-account confirmation modal.
    pub fn open_delete_modal(&mut self) {
        self.confirming_delete = true;
    }

    /// Close the modal, dropping any error it was showing.
    pub fn close_delete_modal(&mut self) {
        self.confirming_delete = false;
        self.validation_error.clear();
        self.store.dispatch(UserAction::UserClearError);
        self.editing = false;
    }

    /// Fire the delete-account effect runner with the typed password.
    pub fn delete_account(&mut self, password: &str) {
        let user = self.store.state().data.clone();
        let password = password.to_owned();
        self.store.dispatch(UserAction::UserDelete);
        let api = Arc::clone(&self.api);
        self.spawn("user-delete", async move {
            match api
                .delete_customer(user.id, &user.access_token, &password)
                .await
            {
                Ok(()) => UserAction::UserDidDelete,
                Err(err) => UserAction::UserDidDeleteError(err),
            }
        });
    }

    fn spawn<F>(&mut self, op: &str, future: F)
    where
        F: std::future::Future<Output = UserAction> + Send + 'static,
    {
        self.seq += 1;
        self.pending += 1;
        self.tasks.spawn(format!("{op}#{}", self.seq), future);
    }

    // Observe terminal actions for page-local flags before folding them
    // into the store.
    fn apply(&mut self, action: UserAction) {
        match &action {
            UserAction::UserDidRename { username } => {
                self.editing = false;
                self.draft = username.clone();
            }
            // The backend's own words land next to the input field
            UserAction::UserDidRenameError(ApiError::Server(message)) => {
                self.validation_error = message.clone();
            }
            // Anything else mid-rename is outside the normal lifecycle
            UserAction::UserDidRenameError(_) => {
                self.alert = Some(FATAL_ALERT.to_owned());
            }
            UserAction::UserDidDelete => {
                self.confirming_delete = false;
            }
            _ => {}
        }
        self.store.dispatch(action);
    }

    /// Fold any already-completed effect results into the store.
    pub fn pump(&mut self) -> usize {
        let mut folded = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            self.apply(action);
            folded += 1;
        }
        folded
    }

    /// Wait until every in-flight effect has resolved into state.
    pub async fn settle(&mut self) -> Result<(), PageAlert> {
        while self.pending > 0 {
            match self.rx.recv().await {
                Some(action) => {
                    self.pending -= 1;
                    self.apply(action);
                }
                None => {
                    self.alert = Some(FATAL_ALERT.to_owned());
                    return Err(PageAlert);
                }
            }
        }
        Ok(())
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> ResourceView<'_, User> {
        self.store.state().view()
    }

    pub fn editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn validation_error(&self) -> &str {
        &self.validation_error
    }

    pub fn confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// True once the session is gone (account deleted or reset); the
    /// application redirects to the root route when this flips.
    pub fn is_signed_out(&self) -> bool {
        self.store.state().data.is_signed_out()
    }
}
