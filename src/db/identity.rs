// SQLite-backed roles and accounts

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::auth;
use crate::domain::{Account, AccountProfile};
use crate::error::{AccountError, AccountResult, DbResultExt};
use crate::services::{AccountService, RoleService};

const ACCOUNT_COLUMNS: &str =
    "id, username, email, email_confirmed, first_name, last_name, country";

#[derive(Clone)]
pub struct SqliteIdentity {
    pool: SqlitePool,
}

impl SqliteIdentity {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn username_taken(&self, username: &str) -> Result<bool> {
        let taken: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(taken != 0)
    }

    async fn email_taken(&self, email: &str) -> Result<bool> {
        let taken: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(taken != 0)
    }

    async fn duplicate_errors(&self, profile: &AccountProfile) -> Result<Vec<AccountError>> {
        let mut errors = Vec::new();
        if self.username_taken(&profile.username).await? {
            errors.push(AccountError::DuplicateUserName(profile.username.clone()));
        }
        if self.email_taken(&profile.email).await? {
            errors.push(AccountError::DuplicateEmail(profile.email.clone()));
        }
        Ok(errors)
    }

    async fn role_id(&self, name: &str) -> Result<Option<String>> {
        let id: Option<String> = sqlx::query_scalar("SELECT id FROM roles WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    /// Check a password against the stored hash for an email
    pub async fn check_password(&self, email: &str, password: &str) -> Result<bool> {
        let hash: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        match hash {
            Some(hash) => auth::verify_password(password, &hash),
            None => Ok(false),
        }
    }
}

#[async_trait]
impl RoleService for SqliteIdentity {
    async fn role_exists(&self, name: &str) -> Result<bool> {
        Ok(self.role_id(name).await?.is_some())
    }

    async fn create_role(&self, name: &str) -> Result<()> {
        sqlx::query("INSERT INTO roles (id, name) VALUES (?, ?) ON CONFLICT(name) DO NOTHING")
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(name)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to create role '{}'", name))?;

        Ok(())
    }
}

#[async_trait]
impl AccountService for SqliteIdentity {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {} FROM users WHERE email = ?",
            ACCOUNT_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn create_account(
        &self,
        profile: &AccountProfile,
        password: &str,
    ) -> Result<AccountResult> {
        let mut errors = Vec::new();
        errors.extend(auth::validate_username(&profile.username));
        errors.extend(auth::validate_email(&profile.email));
        errors.extend(auth::validate_password(password));
        errors.extend(self.duplicate_errors(profile).await?);

        if !errors.is_empty() {
            return Ok(AccountResult::failed(errors));
        }

        let password_hash = auth::hash_password(password)?;

        let inserted = sqlx::query(
            "INSERT INTO users
             (id, username, email, email_confirmed, first_name, last_name, country, password_hash)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(&profile.username)
        .bind(&profile.email)
        .bind(profile.email_confirmed)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.country)
        .bind(&password_hash)
        .execute(&self.pool)
        .await
        .unique_violation_as_none()
        .context("Failed to insert user")?;

        if inserted.is_none() {
            // Another writer claimed the username or email after the checks above
            let mut errors = self.duplicate_errors(profile).await?;
            if errors.is_empty() {
                errors.push(AccountError::DuplicateEmail(profile.email.clone()));
            }
            return Ok(AccountResult::failed(errors));
        }

        Ok(AccountResult::success())
    }

    async fn assign_role(&self, account: &Account, role_name: &str) -> Result<()> {
        let Some(role_id) = self.role_id(role_name).await? else {
            bail!("Role '{}' does not exist", role_name);
        };

        sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) VALUES (?, ?)
             ON CONFLICT(user_id, role_id) DO NOTHING"
        )
        .bind(&account.id)
        .bind(&role_id)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to add '{}' to role '{}'", account.username, role_name))?;

        Ok(())
    }

    async fn roles_for(&self, account: &Account) -> Result<Vec<String>> {
        let roles: Vec<String> = sqlx::query_scalar(
            "SELECT r.name FROM roles r
             JOIN user_roles ur ON ur.role_id = r.id
             WHERE ur.user_id = ?
             ORDER BY r.name"
        )
        .bind(&account.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(roles)
    }
}
