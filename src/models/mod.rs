//! Diesel row types and their conversions to and from the domain layer.

pub mod attribute;
pub mod attribute_value;
pub mod category;
pub mod image;
pub mod product;
pub mod sku;
pub mod user;
