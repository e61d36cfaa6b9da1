use chrono::{DateTime, Utc};

/// A listing image; `position` defines display order.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyImage {
    pub id: i64,
    pub url: String,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub bedrooms: i32,
    pub property_type: String,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub images: Vec<PropertyImage>,
}

/// Renders a price as `$1,234,567` for display alongside the raw value.
pub fn format_price(price: i64) -> String {
    let digits = price.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if price < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
