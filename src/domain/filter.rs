// src/domain/filter.rs

pub const PRICE_FLOOR: u32 = 0;
pub const PRICE_CEILING: u32 = 10_000;
pub const PRICE_STEP: u32 = 500;

/// Facility tags the filter form offers.
pub const AVAILABLE_FACILITIES: [&str; 10] = [
    "AC",
    "WiFi",
    "Laundry",
    "Geyser",
    "2 Meals",
    "TV",
    "Attached Washroom",
    "Food",
    "Parking",
    "Security",
];

/// A user-chosen price range plus the facilities a listing must have.
///
/// `min_price <= max_price` is not enforced here; a crossed range simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub min_price: u32,
    pub max_price: u32,
    pub required_facilities: Vec<String>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            min_price: PRICE_FLOOR,
            max_price: PRICE_CEILING,
            required_facilities: Vec::new(),
        }
    }
}

impl FilterSpec {
    pub fn is_default(&self) -> bool {
        *self == FilterSpec::default()
    }

    pub fn requires(&self, facility: &str) -> bool {
        self.required_facilities.iter().any(|f| f == facility)
    }
}

/// Price options for the min/max selectors.
pub fn price_steps() -> impl Iterator<Item = u32> {
    (PRICE_FLOOR..=PRICE_CEILING).step_by(PRICE_STEP as usize)
}
