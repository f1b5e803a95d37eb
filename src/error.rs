// Error handling for carparts-seed

use std::fmt;

/// Reasons an account could not be created
///
/// These are validation outcomes, not faults: the seeder logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    InvalidUserName(String),
    DuplicateUserName(String),
    InvalidEmail(String),
    DuplicateEmail(String),
    PasswordTooShort(usize),
    PasswordRequiresDigit,
    PasswordRequiresLower,
    PasswordRequiresUpper,
    PasswordRequiresNonAlphanumeric,
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::InvalidUserName(name) => write!(
                f,
                "Username '{}' is invalid, can only contain letters or digits",
                name
            ),
            AccountError::DuplicateUserName(name) => {
                write!(f, "Username '{}' is already taken", name)
            }
            AccountError::InvalidEmail(email) => write!(f, "Email '{}' is invalid", email),
            AccountError::DuplicateEmail(email) => write!(f, "Email '{}' is already taken", email),
            AccountError::PasswordTooShort(min) => {
                write!(f, "Passwords must be at least {} characters", min)
            }
            AccountError::PasswordRequiresDigit => {
                write!(f, "Passwords must have at least one digit ('0'-'9')")
            }
            AccountError::PasswordRequiresLower => {
                write!(f, "Passwords must have at least one lowercase ('a'-'z')")
            }
            AccountError::PasswordRequiresUpper => {
                write!(f, "Passwords must have at least one uppercase ('A'-'Z')")
            }
            AccountError::PasswordRequiresNonAlphanumeric => {
                write!(f, "Passwords must have at least one non alphanumeric character")
            }
        }
    }
}

impl std::error::Error for AccountError {}

/// Outcome of an account operation: success, or the full list of validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountResult {
    pub errors: Vec<AccountError>,
}

impl AccountResult {
    pub fn success() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn failed(errors: Vec<AccountError>) -> Self {
        Self { errors }
    }

    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    /// All error descriptions joined with ", "
    pub fn describe_errors(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// Extension trait for database result handling
pub trait DbResultExt<T> {
    /// Map a unique-constraint violation to `Ok(None)`, passing every other error through
    fn unique_violation_as_none(self) -> Result<Option<T>, sqlx::Error>;
}

impl<T> DbResultExt<T> for Result<T, sqlx::Error> {
    fn unique_violation_as_none(self) -> Result<Option<T>, sqlx::Error> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
