//! Format rules for usernames and passwords.
//!
//! These only check shape. Whether the credentials are *correct* is decided by
//! the account workflows against the stored digest.

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 32;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// 3-32 characters of `[A-Za-z0-9_]`
pub fn is_valid_username(username: &str) -> bool {
    (USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// At least 8 characters once surrounding whitespace is removed
pub fn is_valid_password(password: &str) -> bool {
    password.trim().len() >= PASSWORD_MIN_LENGTH
}
