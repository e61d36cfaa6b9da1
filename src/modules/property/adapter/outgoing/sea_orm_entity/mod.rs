pub mod properties;
pub mod property_images;
