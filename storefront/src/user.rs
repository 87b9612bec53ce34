//! User profile resource
//!
//! Both operations are mutations (rename, delete account), so neither
//! phase shows a loading indicator. `UserClearError` exists because the
//! profile page clears server errors when the user backs out of an edit
//! or closes the delete-account modal.

use shopfront::prelude::*;

use crate::error::ApiError;
use crate::models::User;

pub type UserState = ResourceState<User>;

#[derive(shopfront::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum UserAction {
    UserRename { username: String },
    UserDidRename { username: String },
    UserDidRenameError(ApiError),

    UserDelete,
    UserDidDelete,
    UserDidDeleteError(ApiError),

    UserClearError,
}

pub fn reducer(state: &mut UserState, action: UserAction) -> bool {
    match action {
        UserAction::UserRename { .. } | UserAction::UserDelete => {
            state.begin_mutation();
            true
        }
        UserAction::UserDidRename { username } => {
            state.data.username = username;
            state.settle();
            true
        }
        // Account gone: back to the signed-out default
        UserAction::UserDidDelete => {
            state.resolve(User::default());
            true
        }
        UserAction::UserDidRenameError(err) | UserAction::UserDidDeleteError(err) => {
            state.fail(err.to_string());
            true
        }
        UserAction::UserClearError => {
            let had_error = state.has_error();
            state.clear_error();
            had_error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> UserState {
        UserState::with_data(User {
            id: 3,
            username: "amy".into(),
            email: "amy@example.test".into(),
            access_token: "token-3".into(),
        })
    }

    #[test]
    fn test_rename_start_is_a_mutation() {
        let mut state = signed_in();
        state.is_loading = true;
        reducer(
            &mut state,
            UserAction::UserRename {
                username: "amy2".into(),
            },
        );

        assert!(!state.is_loading);
        assert_eq!(state.data.username, "amy");
    }

    #[test]
    fn test_rename_success_updates_only_username() {
        let mut state = signed_in();
        reducer(
            &mut state,
            UserAction::UserDidRename {
                username: "amy2".into(),
            },
        );

        assert_eq!(state.data.username, "amy2");
        assert_eq!(state.data.email, "amy@example.test");
        assert_eq!(state.data.access_token, "token-3");
        assert!(state.is_healthy());
    }

    #[test]
    fn test_rename_error_resets_to_signed_out() {
        let mut state = signed_in();
        reducer(
            &mut state,
            UserAction::UserDidRenameError(ApiError::Server("That username is taken.".into())),
        );

        assert_eq!(state.data, User::default());
        assert!(state.data.is_signed_out());
        assert_eq!(state.error_message, "That username is taken.");
    }

    #[test]
    fn test_delete_success_signs_out() {
        let mut state = signed_in();
        reducer(&mut state, UserAction::UserDidDelete);

        assert_eq!(state.data, User::default());
        assert!(state.is_healthy());
    }

    #[test]
    fn test_clear_error_reports_change_only_when_clearing_something() {
        let mut state = signed_in();
        assert!(!reducer(&mut state, UserAction::UserClearError));

        reducer(&mut state, UserAction::UserDidRenameError(ApiError::Transport));
        assert!(reducer(&mut state, UserAction::UserClearError));
        assert!(!reducer(&mut state, UserAction::UserClearError));
    }

    #[test]
    fn test_clear_error_touches_only_the_message() {
        let mut state = signed_in();
        reducer(
            &mut state,
            UserAction::UserDidDeleteError(ApiError::Transport),
        );
        assert!(state.has_error());

        reducer(&mut state, UserAction::UserClearError);
        assert!(!state.has_error());
        assert!(!state.is_loading);
        assert_eq!(state.data, User::default());
    }
}
