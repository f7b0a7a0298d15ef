//! Plain domain types and the pure logic that operates on them.

pub mod attribute;
pub mod attribute_type;
pub mod attribute_value;
pub mod category;
pub mod image;
pub mod product;
pub mod sku;
pub mod slug;
pub mod user;
