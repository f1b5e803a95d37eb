// Fixed category taxonomy

/// The three seeded categories. Ids are assigned here, not by the database,
/// because generated listings reference them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Cars,
    Motorcycles,
    Parts,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 3] = [
        CategoryKind::Cars,
        CategoryKind::Motorcycles,
        CategoryKind::Parts,
    ];

    pub fn id(&self) -> i64 {
        match self {
            CategoryKind::Cars => 1,
            CategoryKind::Motorcycles => 2,
            CategoryKind::Parts => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CategoryKind::Cars => "Cars",
            CategoryKind::Motorcycles => "Motorcycles",
            CategoryKind::Parts => "Parts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CategoryKind::Cars => "Used cars for sale",
            CategoryKind::Motorcycles => "Used motorcycles for sale",
            CategoryKind::Parts => "Car and motorcycle parts",
        }
    }

    /// Category of the listing with 1-based index `i`: cycles Cars, Motorcycles, Parts
    pub fn for_listing_index(i: i64) -> Self {
        match i.rem_euclid(3) {
            1 => CategoryKind::Cars,
            2 => CategoryKind::Motorcycles,
            _ => CategoryKind::Parts,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}
