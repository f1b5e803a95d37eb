// Collaborator contracts the seeder runs against
//
// The seeder only talks to these traits. `crate::db` provides the SQLite
// implementations; tests and other hosts can supply their own.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{Account, AccountProfile};
use crate::error::AccountResult;

/// Creates storage structures if they do not exist yet
#[async_trait]
pub trait SchemaService: Send + Sync {
    async fn ensure_created(&self) -> Result<()>;
}

#[async_trait]
pub trait RoleService: Send + Sync {
    async fn role_exists(&self, name: &str) -> Result<bool>;
    async fn create_role(&self, name: &str) -> Result<()>;
}

#[async_trait]
pub trait AccountService: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// Validation problems come back in the `AccountResult`; only faults are `Err`
    async fn create_account(&self, profile: &AccountProfile, password: &str)
        -> Result<AccountResult>;

    /// Fails if the role does not exist
    async fn assign_role(&self, account: &Account, role_name: &str) -> Result<()>;

    async fn roles_for(&self, account: &Account) -> Result<Vec<String>>;
}

/// A table of entities with staged inserts
///
/// `add_range` only stages rows; they become visible to `any`/`count`
/// after `commit`.
#[async_trait]
pub trait EntityStore<T: Send + Sync>: Send + Sync {
    async fn any(&self) -> Result<bool>;
    async fn count(&self) -> Result<i64>;
    fn add_range(&mut self, rows: Vec<T>);
    async fn commit(&mut self) -> Result<u64>;
}
