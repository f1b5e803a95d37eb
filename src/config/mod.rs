pub mod settings;

pub use settings::{AccountSettings, ImageSelection, SeedSettings, DEFAULT_LISTING_TARGET};
