//! Client-side form validation
//!
//! Draft input is validated locally before any network call; validation
//! errors live in page state, never in resource state.

use thiserror::Error;

pub const USERNAME_MIN_LEN: usize = 2;
pub const USERNAME_MAX_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username must be between {} and {} characters.", USERNAME_MIN_LEN, USERNAME_MAX_LEN)]
    UsernameLength,

    #[error("Username cannot contain spaces.")]
    UsernameWhitespace,
}

/// Check a draft username against the signup rules.
pub fn check_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(ValidationError::UsernameLength);
    }
    if username.chars().any(char::is_whitespace) {
        return Err(ValidationError::UsernameWhitespace);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_reasonable_usernames() {
        assert!(check_username("amy").is_ok());
        assert!(check_username("ab").is_ok());
        assert!(check_username("a234567890").is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_lengths() {
        assert_eq!(check_username("a"), Err(ValidationError::UsernameLength));
        assert_eq!(
            check_username("a2345678901"),
            Err(ValidationError::UsernameLength)
        );
        assert_eq!(check_username(""), Err(ValidationError::UsernameLength));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert_eq!(
            check_username("a b"),
            Err(ValidationError::UsernameWhitespace)
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Two hangul syllables are four+ bytes but two characters.
        assert!(check_username("하니").is_ok());
    }
}
