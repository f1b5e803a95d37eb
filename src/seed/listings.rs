// Synthetic listing generation
//
// Every field except the image URL is a pure function of the 1-based listing
// index, so a given index always produces the same make, model, year and price.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::config::ImageSelection;
use crate::domain::{CategoryKind, NewListing};

pub const IMAGE_URLS: [&str; 5] = [
    "https://images.pexels.com/photos/210019/pexels-photo-210019.jpeg",
    "https://images.pexels.com/photos/1402787/pexels-photo-1402787.jpeg",
    "https://images.pexels.com/photos/112460/pexels-photo-112460.jpeg",
    "https://images.pexels.com/photos/2449452/pexels-photo-2449452.jpeg",
    "https://images.pexels.com/photos/799443/pexels-photo-799443.jpeg",
];

const CAR_MODELS: [(&str, &str); 5] = [
    ("Toyota", "Corolla"),
    ("BMW", "3 Series"),
    ("Audi", "A4"),
    ("Ford", "Focus"),
    ("Volkswagen", "Golf"),
];

const MOTORCYCLE_MODELS: [(&str, &str); 5] = [
    ("Honda", "CBR600"),
    ("Yamaha", "MT-07"),
    ("Kawasaki", "Ninja 650"),
    ("Suzuki", "GSX-R750"),
    ("Ducati", "Monster 821"),
];

const PART_NAMES: [&str; 10] = [
    "Brake Pads",
    "Oil Filter",
    "Spark Plugs",
    "Air Filter",
    "Clutch Kit",
    "Battery",
    "Alternator",
    "Radiator",
    "Fuel Pump",
    "Headlights",
];

const BASE_YEAR: i32 = 2000;
const YEAR_SPAN: i64 = 25;

/// Chooses the image URL for each generated listing
pub enum ImagePicker {
    Random(StdRng),
    Cyclic,
}

impl ImagePicker {
    pub fn new(selection: &ImageSelection) -> Self {
        match selection {
            ImageSelection::Random { seed: Some(seed) } => {
                ImagePicker::Random(StdRng::seed_from_u64(*seed))
            }
            ImageSelection::Random { seed: None } => ImagePicker::Random(StdRng::from_entropy()),
            ImageSelection::Cyclic => ImagePicker::Cyclic,
        }
    }

    pub fn pick(&mut self, i: i64) -> &'static str {
        match self {
            ImagePicker::Random(rng) => IMAGE_URLS[rng.gen_range(0..IMAGE_URLS.len())],
            ImagePicker::Cyclic => IMAGE_URLS[cycle(i, IMAGE_URLS.len())],
        }
    }
}

// (i - 1) mod len, for 1-based indices
fn cycle(i: i64, len: usize) -> usize {
    (i - 1).rem_euclid(len as i64) as usize
}

pub fn year_for(i: i64) -> i32 {
    BASE_YEAR + i.rem_euclid(YEAR_SPAN) as i32
}

pub fn price_for(kind: CategoryKind, i: i64) -> i64 {
    match kind {
        CategoryKind::Parts => 10 + 2 * i,
        CategoryKind::Cars | CategoryKind::Motorcycles => 1000 + 150 * i,
    }
}

/// (make, model, title) for a listing index
pub fn describe(kind: CategoryKind, i: i64, year: i32) -> (String, String, String) {
    match kind {
        CategoryKind::Cars | CategoryKind::Motorcycles => {
            let table = if kind == CategoryKind::Cars {
                &CAR_MODELS
            } else {
                &MOTORCYCLE_MODELS
            };
            let (make, model) = table[cycle(i, table.len())];
            (
                make.to_string(),
                model.to_string(),
                format!("{} {} {}", make, model, year),
            )
        }
        CategoryKind::Parts => {
            let part = PART_NAMES[cycle(i, PART_NAMES.len())];
            (String::new(), part.to_string(), part.to_string())
        }
    }
}

pub fn generate_listing(
    i: i64,
    owner_id: &str,
    image_url: &str,
    created_at: DateTime<Utc>,
) -> NewListing {
    let kind = CategoryKind::for_listing_index(i);
    let year = year_for(i);
    let (make, model, title) = describe(kind, i, year);

    NewListing {
        user_id: owner_id.to_string(),
        category_id: kind.id(),
        title,
        description: format!("Auto-generated listing {}", i),
        make,
        model,
        year,
        condition: "Good".to_string(),
        price: price_for(kind, i),
        currency: "USD".to_string(),
        listing_type: "Sale".to_string(),
        is_active: true,
        created_at,
        image_url: image_url.to_string(),
    }
}

/// Generate one listing per index, stamped with the time each was built
pub fn generate_listings(
    indices: RangeInclusive<i64>,
    owner_id: &str,
    images: &mut ImagePicker,
) -> Vec<NewListing> {
    indices
        .map(|i| generate_listing(i, owner_id, images.pick(i), Utc::now()))
        .collect()
}
