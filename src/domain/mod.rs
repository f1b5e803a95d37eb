// Domain model for the marketplace seed data

pub mod category;

pub use category::CategoryKind;

use chrono::{DateTime, Utc};

/// A stored account
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    pub email_confirmed: bool,
    pub first_name: String,
    pub last_name: String,
    pub country: Option<String>,
}

/// Everything needed to create an account except the password
#[derive(Debug, Clone, PartialEq)]
pub struct AccountProfile {
    pub username: String,
    pub email: String,
    pub email_confirmed: bool,
    pub first_name: String,
    pub last_name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<CategoryKind> for Category {
    fn from(kind: CategoryKind) -> Self {
        Category {
            id: kind.id(),
            name: kind.name().to_string(),
            description: kind.description().to_string(),
        }
    }
}

/// A listing that has not been stored yet (the store assigns the id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub user_id: String,
    pub category_id: i64,
    pub title: String,
    pub description: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub condition: String,
    pub price: i64,
    pub currency: String,
    pub listing_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub image_url: String,
}

/// A stored listing
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    pub user_id: String,
    pub category_id: i64,
    pub title: String,
    pub description: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub condition: String,
    pub price: i64,
    pub currency: String,
    pub listing_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub image_url: String,
}
