use crate::db::{DbConnection, DbPool, enable_foreign_keys};
use crate::domain::attribute::{Attribute, AttributeListQuery, NewAttribute, UpdateAttribute};
use crate::domain::attribute_type::TypedValue;
use crate::domain::attribute_value::{
    AttributeValue, AttributeValueView, NewAttributeValue, UpdateAttributeValue,
};
use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::domain::image::{Image, ImageOwner, NewImage, UpdateImage};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::sku::{NewSku, Sku, SkuListQuery, UpdateSku};
use crate::domain::user::{NewUser, User, UserListQuery};

pub mod attribute;
pub mod attribute_value;
pub mod category;
pub mod errors;
pub mod image;
pub mod product;
pub mod sku;
pub mod slug;
pub mod user;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        let mut conn = self.pool.get()?;
        enable_foreign_keys(&mut conn)?;
        Ok(conn)
    }
}

/// Read-only operations over user records.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
}

/// Write operations over user records.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    /// Return the SYSTEM user named `username`, creating it when missing.
    fn seed_system_user(&self, username: &str) -> RepositoryResult<User>;
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;
    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)>;
    /// Direct children of `parent_id`, ordered for display.
    fn list_child_categories(&self, parent_id: i32) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn soft_delete_category(
        &self,
        category_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn soft_delete_product(&self, product_id: i32, deleted_by: Option<i32>)
    -> RepositoryResult<()>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over SKU records.
pub trait SkuReader {
    fn get_sku_by_id(&self, id: i32) -> RepositoryResult<Option<Sku>>;
    fn get_sku_by_slug(&self, slug: &str) -> RepositoryResult<Option<Sku>>;
    fn list_skus(&self, query: SkuListQuery) -> RepositoryResult<(usize, Vec<Sku>)>;
}

/// Write operations over SKU records.
pub trait SkuWriter {
    fn create_sku(&self, new_sku: &NewSku) -> RepositoryResult<Sku>;
    fn update_sku(&self, sku_id: i32, updates: &UpdateSku) -> RepositoryResult<Sku>;
    fn soft_delete_sku(&self, sku_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()>;
    fn delete_sku(&self, sku_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over attribute definitions.
pub trait AttributeReader {
    fn get_attribute_by_id(&self, id: i32) -> RepositoryResult<Option<Attribute>>;
    fn get_attribute_by_code(&self, code: &str) -> RepositoryResult<Option<Attribute>>;
    fn list_attributes(
        &self,
        query: AttributeListQuery,
    ) -> RepositoryResult<(usize, Vec<Attribute>)>;
}

/// Write operations over attribute definitions.
pub trait AttributeWriter {
    fn create_attribute(&self, new_attribute: &NewAttribute) -> RepositoryResult<Attribute>;
    fn update_attribute(
        &self,
        attribute_id: i32,
        updates: &UpdateAttribute,
    ) -> RepositoryResult<Attribute>;
    fn soft_delete_attribute(
        &self,
        attribute_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()>;
    fn delete_attribute(&self, attribute_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over values assigned to SKUs.
pub trait AttributeValueReader {
    /// Value with its attribute attached.
    fn get_attribute_value_by_id(&self, id: i32) -> RepositoryResult<Option<AttributeValue>>;
    /// Values of a SKU ordered by `sequence`, then id, rendered for display.
    fn list_sku_attribute_values(&self, sku_id: i32)
    -> RepositoryResult<Vec<AttributeValueView>>;
}

/// Write operations over values assigned to SKUs. Every write is checked
/// against the attribute's data type before it reaches the table.
pub trait AttributeValueWriter {
    fn create_attribute_value(
        &self,
        new_value: &NewAttributeValue,
    ) -> RepositoryResult<AttributeValue>;
    fn update_attribute_value(
        &self,
        value_id: i32,
        updates: &UpdateAttributeValue,
    ) -> RepositoryResult<AttributeValue>;
    /// Format `value` with the attribute's type and store it.
    fn set_attribute_value(
        &self,
        value_id: i32,
        value: &TypedValue,
        updated_by: Option<i32>,
    ) -> RepositoryResult<AttributeValue>;
    fn soft_delete_attribute_value(
        &self,
        value_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()>;
}

/// Read-only operations over images.
pub trait ImageReader {
    fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<Image>>;
    /// Images of `owner`, primary first.
    fn list_images(&self, owner: ImageOwner) -> RepositoryResult<Vec<Image>>;
}

/// Write operations over images.
pub trait ImageWriter {
    fn create_image(&self, new_image: &NewImage) -> RepositoryResult<Image>;
    fn update_image(&self, image_id: i32, updates: &UpdateImage) -> RepositoryResult<Image>;
    fn soft_delete_image(&self, image_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()>;
}
