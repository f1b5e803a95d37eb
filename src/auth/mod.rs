// Account policy: password hashing and validation of new accounts

use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::AccountError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

const ALLOWED_USERNAME_SYMBOLS: &[char] = &['-', '.', '_', '@', '+'];

// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String> {
    hash(password, DEFAULT_COST).context("Failed to hash password")
}

// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    verify(password, hash).context("Failed to verify password")
}

// Validate username format
pub fn validate_username(username: &str) -> Option<AccountError> {
    let valid = !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ALLOWED_USERNAME_SYMBOLS.contains(&c));

    (!valid).then(|| AccountError::InvalidUserName(username.to_string()))
}

// Validate email shape: one '@', non-empty local part, dotted domain
pub fn validate_email(email: &str) -> Option<AccountError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    (!valid).then(|| AccountError::InvalidEmail(email.to_string()))
}

/// Validate password strength, collecting every rule the password breaks
pub fn validate_password(password: &str) -> Vec<AccountError> {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(AccountError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        errors.push(AccountError::PasswordRequiresNonAlphanumeric);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(AccountError::PasswordRequiresDigit);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(AccountError::PasswordRequiresLower);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(AccountError::PasswordRequiresUpper);
    }

    errors
}
