// Database seeding: roles, accounts, categories and a listing backfill
//
// Runs once at startup. Every step checks whether its target already exists,
// so running it again is harmless.

pub mod listings;

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

use crate::config::{AccountSettings, SeedSettings};
use crate::db::{SqliteIdentity, SqliteSchema, SqliteStore};
use crate::domain::{Account, Category, CategoryKind, NewListing};
use crate::services::{AccountService, EntityStore, RoleService, SchemaService};
use listings::{generate_listings, ImagePicker};

/// Collaborators the seeder runs against
pub struct SeedContext<'a> {
    pub schema: &'a dyn SchemaService,
    pub roles: &'a dyn RoleService,
    pub accounts: &'a dyn AccountService,
    pub categories: &'a mut dyn EntityStore<Category>,
    pub listings: &'a mut dyn EntityStore<NewListing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "errors", rename_all = "snake_case")]
pub enum AccountOutcome {
    Created,
    AlreadyExists,
    Failed(Vec<String>),
}

/// What each seeding step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub role_created: bool,
    pub admin: AccountOutcome,
    pub categories_created: bool,
    pub test_account: AccountOutcome,
    pub existing_listings: i64,
    pub listings_inserted: u64,
}

/// Seed a SQLite database using the bundled collaborators
pub async fn seed_database(pool: &SqlitePool, settings: &SeedSettings) -> Result<SeedReport> {
    let schema = SqliteSchema::new(pool.clone());
    let identity = SqliteIdentity::new(pool.clone());
    let mut categories = SqliteStore::<Category>::new(pool.clone());
    let mut listings = SqliteStore::<NewListing>::new(pool.clone());

    let ctx = SeedContext {
        schema: &schema,
        roles: &identity,
        accounts: &identity,
        categories: &mut categories,
        listings: &mut listings,
    };

    seed(ctx, settings).await
}

/// Run every seeding step in order.
///
/// Account validation failures are logged and reported, not returned as errors;
/// a failed test account only means the listing backfill is skipped. Any other
/// collaborator error aborts the run.
#[instrument(skip_all)]
pub async fn seed(ctx: SeedContext<'_>, settings: &SeedSettings) -> Result<SeedReport> {
    ctx.schema
        .ensure_created()
        .await
        .context("Failed to create schema")?;

    let role_created = ensure_role(ctx.roles, &settings.admin_role).await?;
    let admin = ensure_admin(ctx.accounts, &settings.admin, &settings.admin_role).await?;
    let categories_created = ensure_categories(ctx.categories).await?;
    let (test_user, test_account) = ensure_account(ctx.accounts, &settings.test_account, "Test").await?;

    let existing_listings = ctx.listings.count().await?;
    let listings_inserted = backfill_listings(
        ctx.listings,
        existing_listings,
        test_user.as_ref(),
        settings,
    )
    .await?;

    Ok(SeedReport {
        role_created,
        admin,
        categories_created,
        test_account,
        existing_listings,
        listings_inserted,
    })
}

async fn ensure_role(roles: &dyn RoleService, name: &str) -> Result<bool> {
    if roles.role_exists(name).await? {
        debug!(role = name, "Role already exists");
        return Ok(false);
    }

    roles.create_role(name).await?;
    info!(role = name, "Role created");
    Ok(true)
}

async fn ensure_admin(
    accounts: &dyn AccountService,
    admin: &AccountSettings,
    role: &str,
) -> Result<AccountOutcome> {
    let (user, outcome) = ensure_account(accounts, admin, "Admin").await?;

    // Only a freshly created admin gets the role; an existing account is left alone
    if let (AccountOutcome::Created, Some(user)) = (&outcome, &user) {
        accounts.assign_role(user, role).await?;
    }

    Ok(outcome)
}

// Find an account by email, creating it when absent
async fn ensure_account(
    accounts: &dyn AccountService,
    settings: &AccountSettings,
    label: &str,
) -> Result<(Option<Account>, AccountOutcome)> {
    if let Some(existing) = accounts.find_by_email(&settings.email).await? {
        info!("{} user already exists", label);
        return Ok((Some(existing), AccountOutcome::AlreadyExists));
    }

    let result = accounts
        .create_account(&settings.profile(), &settings.password)
        .await?;

    if !result.succeeded() {
        error!(
            "Failed to create {} user: {}",
            label.to_lowercase(),
            result.describe_errors()
        );
        let errors = result.errors.iter().map(|e| e.to_string()).collect();
        return Ok((None, AccountOutcome::Failed(errors)));
    }

    info!("{} user created successfully", label);
    let created = accounts
        .find_by_email(&settings.email)
        .await?
        .with_context(|| format!("{} user missing right after creation", label))?;

    Ok((Some(created), AccountOutcome::Created))
}

async fn ensure_categories(categories: &mut dyn EntityStore<Category>) -> Result<bool> {
    if categories.any().await? {
        debug!("Categories already seeded");
        return Ok(false);
    }

    categories.add_range(CategoryKind::ALL.into_iter().map(Category::from).collect());
    let written = categories.commit().await?;
    info!(count = written, "Categories created");
    Ok(true)
}

async fn backfill_listings(
    listings: &mut dyn EntityStore<NewListing>,
    existing: i64,
    owner: Option<&Account>,
    settings: &SeedSettings,
) -> Result<u64> {
    let target = settings.listing_target;
    if existing >= target {
        debug!(existing, target, "Listing count already at target");
        return Ok(0);
    }

    let Some(owner) = owner else {
        info!("Skipping listing backfill: no test user available");
        return Ok(0);
    };

    let mut images = ImagePicker::new(&settings.images);
    listings.add_range(generate_listings(existing + 1..=target, &owner.id, &mut images));
    let inserted = listings.commit().await?;

    info!(existing, inserted, "Listings backfilled");
    Ok(inserted)
}
