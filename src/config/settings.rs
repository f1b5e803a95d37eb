use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::AccountProfile;

pub const DEFAULT_LISTING_TARGET: i64 = 30;

/// Seed data configuration. Every field has a default, so a YAML file only
/// needs the values it wants to change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SeedSettings {
    pub admin_role: String,
    pub admin: AccountSettings,
    pub test_account: AccountSettings,
    pub listing_target: i64,
    pub images: ImageSelection,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            admin_role: "Admin".to_string(),
            admin: AccountSettings::default_admin(),
            test_account: AccountSettings::default_test(),
            listing_target: DEFAULT_LISTING_TARGET,
            images: ImageSelection::default(),
        }
    }
}

impl SeedSettings {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Invalid seed settings")
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountSettings {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl AccountSettings {
    /// admin / admin@carparts.com / Admin@123456
    pub fn default_admin() -> Self {
        Self {
            username: "admin".to_string(),
            email: "admin@carparts.com".to_string(),
            password: "Admin@123456".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            country: None,
        }
    }

    /// testuser / test@carparts.com / Test@123456
    pub fn default_test() -> Self {
        Self {
            username: "testuser".to_string(),
            email: "test@carparts.com".to_string(),
            password: "Test@123456".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            country: Some("North Macedonia".to_string()),
        }
    }

    /// Profile for a new account; seeded accounts skip email confirmation
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            username: self.username.clone(),
            email: self.email.clone(),
            email_confirmed: true,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            country: self.country.clone(),
        }
    }
}

/// How generated listings pick their image URL
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ImageSelection {
    /// Uniform random pick; a fixed `seed` makes runs reproducible
    Random {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    /// `images[(i - 1) % images.len()]`
    Cyclic,
}

impl Default for ImageSelection {
    fn default() -> Self {
        ImageSelection::Random { seed: None }
    }
}
