use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::property::application::domain::entities::format_price;

/// One append-only history record for a property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEvent {
    pub id: i64,
    pub event_type: String,
    pub data: JsonValue,
    pub created_at: DateTime<Utc>,
}

/// The stored `data` blob keyed by `event_type`. Only two types have defined
/// shapes; everything else is carried opaquely and rendered generically.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    PriceChanged { old_price: i64, new_price: i64 },
    Sold { sold_price: i64, sold_date: String },
    Other { event_type: String, data: JsonValue },
}

#[derive(Deserialize)]
struct PriceChangedData {
    #[serde(default)]
    old_price: i64,
    #[serde(default)]
    new_price: i64,
}

#[derive(Deserialize)]
struct SoldData {
    sold_price: i64,
    sold_date: String,
}

impl EventPayload {
    /// Decodes lazily; a known type whose blob doesn't match its shape falls
    /// back to the generic variant rather than failing.
    pub fn decode(event_type: &str, data: &JsonValue) -> EventPayload {
        match event_type {
            "price_changed" => {
                if let Ok(parsed) = serde_json::from_value::<PriceChangedData>(data.clone()) {
                    return EventPayload::PriceChanged {
                        old_price: parsed.old_price,
                        new_price: parsed.new_price,
                    };
                }
            }
            "sold" => {
                if let Ok(parsed) = serde_json::from_value::<SoldData>(data.clone()) {
                    return EventPayload::Sold {
                        sold_price: parsed.sold_price,
                        sold_date: parsed.sold_date,
                    };
                }
            }
            _ => {}
        }

        EventPayload::Other {
            event_type: event_type.to_string(),
            data: data.clone(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            EventPayload::PriceChanged { .. } => "Price Changed".to_string(),
            EventPayload::Sold { .. } => "Sold".to_string(),
            EventPayload::Other { event_type, .. } => title_case(event_type),
        }
    }

    pub fn details(&self) -> String {
        match self {
            EventPayload::PriceChanged {
                old_price,
                new_price,
            } => format!(
                "From {} to {}",
                format_price(*old_price),
                format_price(*new_price)
            ),
            EventPayload::Sold {
                sold_price,
                sold_date,
            } => format!("Sold for {} on {}", format_price(*sold_price), sold_date),
            EventPayload::Other { data, .. } => data.to_string(),
        }
    }
}

fn title_case(event_type: &str) -> String {
    event_type
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_price_changed() {
        let payload =
            EventPayload::decode("price_changed", &json!({"old_price": 450000, "new_price": 500000}));

        assert_eq!(
            payload,
            EventPayload::PriceChanged {
                old_price: 450000,
                new_price: 500000
            }
        );
        assert_eq!(payload.label(), "Price Changed");
        assert_eq!(payload.details(), "From $450,000 to $500,000");
    }

    #[test]
    fn test_decode_price_changed_missing_fields_default_to_zero() {
        let payload = EventPayload::decode("price_changed", &json!({"new_price": 500000}));

        assert_eq!(
            payload,
            EventPayload::PriceChanged {
                old_price: 0,
                new_price: 500000
            }
        );
    }

    #[test]
    fn test_decode_sold() {
        let payload = EventPayload::decode(
            "sold",
            &json!({"sold_price": 500000, "sold_date": "2025-08-01T00:00:00Z"}),
        );

        assert_eq!(payload.label(), "Sold");
        assert_eq!(
            payload.details(),
            "Sold for $500,000 on 2025-08-01T00:00:00Z"
        );
    }

    #[test]
    fn test_decode_sold_with_bad_shape_falls_back() {
        let payload = EventPayload::decode("sold", &json!({"note": "handshake deal"}));

        assert!(matches!(payload, EventPayload::Other { .. }));
    }

    #[test]
    fn test_decode_unknown_type_title_cases_label() {
        let payload = EventPayload::decode("open_house_scheduled", &json!({"when": "saturday"}));

        assert_eq!(payload.label(), "Open House Scheduled");
        assert_eq!(payload.details(), r#"{"when":"saturday"}"#);
    }
}
