// src/domain/listing.rs

pub const DEFAULT_TITLE: &str = "PG Accommodation";
pub const DEFAULT_PRICE: &str = "0";
pub const DEFAULT_LOCATION: &str = "Location not available";
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_DISTANCE: &str = "Distance not available";

/// Which home-feed section a listing is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Suggestion,
    Nearest,
}

impl Category {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "suggestion" | "featured" => Some(Category::Suggestion),
            "nearest" => Some(Category::Nearest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Suggestion => "suggestion",
            Category::Nearest => "nearest",
        }
    }
}

/// A normalized accommodation record, built once by the normalizer and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Always present; may still be non-numeric, see [`Listing::numeric_price`].
    pub price: String,
    pub location: String,
    pub images: Vec<String>,
    pub primary_image: String,
    pub facilities: Vec<String>,
    pub description: String,
    pub distance_label: String,
    pub phone: String,
    pub owner: String,
    pub category: Option<Category>,
}

impl Listing {
    /// Integer value of `price`, reading leading digits only.
    /// Anything unparseable comes back as 0.
    pub fn numeric_price(&self) -> u64 {
        parse_leading_digits(&self.price)
    }

    pub fn has_facility(&self, tag: &str) -> bool {
        self.facilities.iter().any(|f| f == tag)
    }

    pub fn tel_uri(&self) -> Option<String> {
        let phone = self.phone.trim();
        if phone.is_empty() {
            return None;
        }
        let dialable: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        Some(format!("tel:{dialable}"))
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: DEFAULT_TITLE.to_string(),
            price: DEFAULT_PRICE.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            images: Vec::new(),
            primary_image: String::new(),
            facilities: Vec::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
            distance_label: DEFAULT_DISTANCE.to_string(),
            phone: String::new(),
            owner: String::new(),
            category: None,
        }
    }
}

fn parse_leading_digits(raw: &str) -> u64 {
    let digits: &str = {
        let trimmed = raw.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    };

    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(price: &str) -> Listing {
        Listing {
            price: price.to_string(),
            ..Listing::default()
        }
    }

    #[test]
    fn numeric_price_reads_plain_integers() {
        assert_eq!(priced("6500").numeric_price(), 6500);
        assert_eq!(priced("  7200 ").numeric_price(), 7200);
    }

    #[test]
    fn numeric_price_stops_at_first_non_digit() {
        assert_eq!(priced("5000.50").numeric_price(), 5000);
        assert_eq!(priced("4500/month").numeric_price(), 4500);
    }

    #[test]
    fn numeric_price_falls_back_to_zero() {
        assert_eq!(priced("").numeric_price(), 0);
        assert_eq!(priced("call for price").numeric_price(), 0);
        assert_eq!(priced("-300").numeric_price(), 0);
        assert_eq!(priced("99999999999999999999999").numeric_price(), 0);
    }

    #[test]
    fn tel_uri_strips_formatting() {
        let listing = Listing {
            phone: "+91 98765 43210".to_string(),
            ..Listing::default()
        };
        assert_eq!(listing.tel_uri().as_deref(), Some("tel:+919876543210"));
        assert_eq!(Listing::default().tel_uri(), None);
    }

    #[test]
    fn category_tags_are_case_insensitive() {
        assert_eq!(Category::from_tag("Nearest"), Some(Category::Nearest));
        assert_eq!(Category::from_tag("featured"), Some(Category::Suggestion));
        assert_eq!(Category::from_tag("promoted"), None);
    }
}
