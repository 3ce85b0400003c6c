// src/domain/normalize.rs

use crate::domain::listing::{
    Category, Listing, DEFAULT_DESCRIPTION, DEFAULT_DISTANCE, DEFAULT_LOCATION, DEFAULT_PRICE,
    DEFAULT_TITLE,
};
use serde_json::Value;

/// Maps one loosely-typed source record onto a [`Listing`].
///
/// This is the anti-corruption layer between whatever the data source sends
/// and the rest of the app: it never fails. Missing, null, empty or
/// wrong-typed fields fall back to their defaults, and array fields may
/// arrive either as real arrays or as JSON-encoded strings.
pub fn normalize(raw: &Value) -> Listing {
    let mut images = string_list(&raw["images"]);
    if images.is_empty() {
        if let Some(single) = text(&raw["image"]) {
            images.push(single);
        }
    }
    let primary_image = images.first().cloned().unwrap_or_default();

    let category = text(&raw["type"])
        .or_else(|| text(&raw["category"]))
        .and_then(|tag| Category::from_tag(&tag));

    Listing {
        id: text(&raw["id"]).unwrap_or_default(),
        title: text(&raw["title"]).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        price: text(&raw["price"]).unwrap_or_else(|| DEFAULT_PRICE.to_string()),
        location: text(&raw["location"]).unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        images,
        primary_image,
        facilities: string_list(&raw["facilities"]),
        description: text(&raw["description"])
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        distance_label: distance_label(raw),
        phone: text(&raw["phone"]).unwrap_or_default(),
        owner: text(&raw["owner"]).unwrap_or_default(),
        category,
    }
}

pub fn normalize_all(raw: &[Value]) -> Vec<Listing> {
    raw.iter().map(normalize).collect()
}

/// Non-empty string, or a number rendered as text. Everything else is `None`.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(Value::Array(items)) => items.iter().filter_map(text).collect(),
            Ok(_) => Vec::new(),
            Err(e) => {
                tracing::debug!("Ignoring malformed list field {encoded:?}: {e}");
                Vec::new()
            }
        },
        _ => Vec::new(),
    }
}

fn distance_label(raw: &Value) -> String {
    if let Some(label) = raw["distance"].as_str().filter(|s| !s.trim().is_empty()) {
        return label.to_string();
    }

    let km = match &raw["distance_km"] {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match km {
        Some(km) if km > 0.0 => format!("{km} km"),
        _ => DEFAULT_DISTANCE.to_string(),
    }
}

/// Distance used to order the nearest feed; missing or garbage sorts first.
pub fn distance_km(raw: &Value) -> f64 {
    match &raw["distance_km"] {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
