// End-to-end seeding tests against an in-memory SQLite database

mod common;

use carparts_seed::db::{self, SqliteIdentity};
use carparts_seed::domain::CategoryKind;
use carparts_seed::seed::listings::IMAGE_URLS;
use carparts_seed::services::AccountService;
use carparts_seed::{seed_database, AccountOutcome};

#[tokio::test]
async fn test_seed_empty_database() {
    let pool = common::setup_test_db().await;

    let report = seed_database(&pool, &common::test_settings()).await.unwrap();

    assert!(report.role_created);
    assert_eq!(report.admin, AccountOutcome::Created);
    assert!(report.categories_created);
    assert_eq!(report.test_account, AccountOutcome::Created);
    assert_eq!(report.existing_listings, 0);
    assert_eq!(report.listings_inserted, 30);

    let identity = SqliteIdentity::new(pool.clone());
    let test_user = identity
        .find_by_email("test@carparts.com")
        .await
        .unwrap()
        .expect("test user should exist");
    assert_eq!(test_user.username, "testuser");
    assert!(test_user.email_confirmed);
    assert_eq!(test_user.country.as_deref(), Some("North Macedonia"));

    let listings = db::list_listings(&pool).await.unwrap();
    assert_eq!(listings.len(), 30);
    assert!(listings.iter().all(|l| l.user_id == test_user.id));
    assert!(listings.iter().all(|l| l.is_active));
}

#[tokio::test]
async fn test_categories_are_fixed_rows() {
    let pool = common::setup_test_db().await;
    seed_database(&pool, &common::test_settings()).await.unwrap();

    let categories = db::list_categories(&pool).await.unwrap();
    let rows: Vec<(i64, &str, &str)> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str(), c.description.as_str()))
        .collect();

    assert_eq!(
        rows,
        vec![
            (1, "Cars", "Used cars for sale"),
            (2, "Motorcycles", "Used motorcycles for sale"),
            (3, "Parts", "Car and motorcycle parts"),
        ]
    );
}

#[tokio::test]
async fn test_seed_twice_is_idempotent() {
    let pool = common::setup_test_db().await;
    let settings = common::test_settings();

    seed_database(&pool, &settings).await.unwrap();
    let second = seed_database(&pool, &settings).await.unwrap();

    assert!(!second.role_created);
    assert_eq!(second.admin, AccountOutcome::AlreadyExists);
    assert!(!second.categories_created);
    assert_eq!(second.test_account, AccountOutcome::AlreadyExists);
    assert_eq!(second.existing_listings, 30);
    assert_eq!(second.listings_inserted, 0);

    assert_eq!(db::count_roles_named(&pool, "Admin").await.unwrap(), 1);
    assert_eq!(db::count_users_with_email(&pool, "admin@carparts.com").await.unwrap(), 1);
    assert_eq!(db::count_users_with_email(&pool, "test@carparts.com").await.unwrap(), 1);
    assert_eq!(db::list_categories(&pool).await.unwrap().len(), 3);
    assert_eq!(db::list_listings(&pool).await.unwrap().len(), 30);
}

#[tokio::test]
async fn test_backfill_from_25_adds_five() {
    let pool = common::setup_test_db().await;

    let mut settings = common::test_settings();
    settings.listing_target = 25;
    let first = seed_database(&pool, &settings).await.unwrap();
    assert_eq!(first.listings_inserted, 25);

    let second = seed_database(&pool, &common::test_settings()).await.unwrap();
    assert_eq!(second.existing_listings, 25);
    assert_eq!(second.listings_inserted, 5);

    let listings = db::list_listings(&pool).await.unwrap();
    assert_eq!(listings.len(), 30);

    let descriptions: Vec<&str> = listings[25..].iter().map(|l| l.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Auto-generated listing 26",
            "Auto-generated listing 27",
            "Auto-generated listing 28",
            "Auto-generated listing 29",
            "Auto-generated listing 30",
        ]
    );
}

#[tokio::test]
async fn test_stored_listings_follow_generation_rules() {
    let pool = common::setup_test_db().await;
    seed_database(&pool, &common::test_settings()).await.unwrap();

    for (offset, listing) in db::list_listings(&pool).await.unwrap().iter().enumerate() {
        let i = offset as i64 + 1;
        let kind = CategoryKind::from_id(listing.category_id).expect("known category");

        assert_eq!(kind, CategoryKind::for_listing_index(i));
        assert_eq!(listing.image_url, IMAGE_URLS[offset % IMAGE_URLS.len()]);

        match kind {
            CategoryKind::Parts => {
                assert_eq!(listing.make, "");
                assert_eq!(listing.price, 10 + 2 * i);
            }
            CategoryKind::Cars | CategoryKind::Motorcycles => {
                assert_eq!(listing.price, 1000 + 150 * i);
                assert!((2000..=2024).contains(&listing.year));
            }
        }
    }
}

#[tokio::test]
async fn test_admin_holds_role_and_password() {
    let pool = common::setup_test_db().await;
    seed_database(&pool, &common::test_settings()).await.unwrap();
    seed_database(&pool, &common::test_settings()).await.unwrap();

    let identity = SqliteIdentity::new(pool.clone());
    let admin = identity
        .find_by_email("admin@carparts.com")
        .await
        .unwrap()
        .expect("admin should exist");

    assert_eq!(admin.username, "admin");
    assert_eq!(admin.country, None);
    assert_eq!(identity.roles_for(&admin).await.unwrap(), vec!["Admin".to_string()]);
    assert!(identity.check_password("admin@carparts.com", "Admin@123456").await.unwrap());
    assert!(!identity.check_password("admin@carparts.com", "admin123").await.unwrap());
}

#[tokio::test]
async fn test_test_user_has_no_admin_role() {
    let pool = common::setup_test_db().await;
    seed_database(&pool, &common::test_settings()).await.unwrap();

    let identity = SqliteIdentity::new(pool.clone());
    let test_user = identity
        .find_by_email("test@carparts.com")
        .await
        .unwrap()
        .unwrap();

    assert!(identity.roles_for(&test_user).await.unwrap().is_empty());
    assert!(identity.check_password("test@carparts.com", "Test@123456").await.unwrap());
}

#[tokio::test]
async fn test_weak_admin_password_is_logged_and_seeding_continues() {
    let pool = common::setup_test_db().await;

    let mut settings = common::test_settings();
    settings.admin.password = "weak".to_string();

    let report = seed_database(&pool, &settings).await.unwrap();

    match &report.admin {
        AccountOutcome::Failed(errors) => {
            assert!(errors.iter().any(|e| e.contains("at least 6 characters")));
        }
        other => panic!("expected admin failure, got {:?}", other),
    }
    assert!(report.role_created);
    assert!(report.categories_created);
    assert_eq!(report.test_account, AccountOutcome::Created);
    assert_eq!(report.listings_inserted, 30);
    assert_eq!(db::count_users_with_email(&pool, "admin@carparts.com").await.unwrap(), 0);
}

#[tokio::test]
async fn test_failed_test_account_skips_listings() {
    let pool = common::setup_test_db().await;

    let mut settings = common::test_settings();
    settings.test_account.email = "not-an-email".to_string();

    let report = seed_database(&pool, &settings).await.unwrap();

    assert!(matches!(report.test_account, AccountOutcome::Failed(_)));
    assert_eq!(report.admin, AccountOutcome::Created);
    assert!(report.categories_created);
    assert_eq!(report.listings_inserted, 0);
    assert!(db::list_listings(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_test_account_colliding_with_admin_username_fails() {
    let pool = common::setup_test_db().await;

    let mut settings = common::test_settings();
    settings.test_account.username = "admin".to_string();

    let report = seed_database(&pool, &settings).await.unwrap();

    assert_eq!(
        report.test_account,
        AccountOutcome::Failed(vec!["Username 'admin' is already taken".to_string()])
    );
    assert_eq!(report.listings_inserted, 0);
}

#[tokio::test]
async fn test_existing_listings_at_target_are_untouched() {
    let pool = common::setup_test_db().await;
    seed_database(&pool, &common::test_settings()).await.unwrap();
    let before = db::list_listings(&pool).await.unwrap();

    let mut settings = common::test_settings();
    settings.listing_target = 10;
    let report = seed_database(&pool, &settings).await.unwrap();

    assert_eq!(report.listings_inserted, 0);
    assert_eq!(db::list_listings(&pool).await.unwrap(), before);
}

#[tokio::test]
async fn test_listing_insert_fault_propagates() {
    let pool = common::setup_test_db_with_schema().await;

    // A foreign category blocks the fixed taxonomy, so listings reference missing ids
    sqlx::query("INSERT INTO categories (id, name, description) VALUES (7, 'Boats', '')")
        .execute(&pool)
        .await
        .unwrap();

    let result = seed_database(&pool, &common::test_settings()).await;

    assert!(result.is_err());
    assert!(db::list_listings(&pool).await.unwrap().is_empty());
}
