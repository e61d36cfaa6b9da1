use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::property::application::domain::entities::{format_price, Property, PropertyImage};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PropertyImageDto {
    #[schema(example = 10)]
    pub id: i64,
    #[schema(example = "https://images.example.com/10.jpg")]
    pub url: String,
    /// Display order within the listing
    #[schema(example = 1)]
    pub position: i32,
}

/// The property representation shared by every endpoint that returns a
/// listing: raw `price` plus a display-ready `formatted_price`, and images
/// ordered by position.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PropertyDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Bayside Cottage")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = 450000)]
    pub price: i64,
    #[schema(example = "$450,000")]
    pub formatted_price: String,
    #[schema(example = 2)]
    pub bedrooms: i32,
    #[schema(example = "house")]
    pub property_type: String,
    #[schema(example = "active")]
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub property_images: Vec<PropertyImageDto>,
}

impl From<PropertyImage> for PropertyImageDto {
    fn from(image: PropertyImage) -> Self {
        Self {
            id: image.id,
            url: image.url,
            position: image.position,
        }
    }
}

impl From<Property> for PropertyDto {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            title: property.title,
            description: property.description,
            price: property.price,
            formatted_price: format_price(property.price),
            bedrooms: property.bedrooms,
            property_type: property.property_type,
            status: property.status,
            latitude: property.latitude,
            longitude: property.longitude,
            published_at: property.published_at,
            created_at: property.created_at,
            updated_at: property.updated_at,
            property_images: property.images.into_iter().map(Into::into).collect(),
        }
    }
}
