use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::attribute::{Attribute, AttributeListQuery, NewAttribute, UpdateAttribute};
use crate::domain::attribute_type::{DataType, TypedValue};
use crate::domain::attribute_value::{
    AttributeValue, AttributeValueView, NewAttributeValue, UpdateAttributeValue,
};
use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::domain::image::{Image, ImageOwner, NewImage, UpdateImage};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::sku::{NewSku, Sku, SkuListQuery, UpdateSku};
use crate::domain::user::{NewUser, User, UserListQuery, UserRole};
use crate::repository::mock::{
    MockAttributeReader, MockAttributeValueReader, MockAttributeValueWriter, MockAttributeWriter,
    MockCategoryReader, MockCategoryWriter, MockImageReader, MockImageWriter, MockProductReader,
    MockProductWriter, MockSkuReader, MockSkuWriter, MockUserReader, MockUserWriter,
};
use crate::repository::{
    AttributeReader, AttributeValueReader, AttributeValueWriter, AttributeWriter, CategoryReader,
    CategoryWriter, ImageReader, ImageWriter, ProductReader, ProductWriter, RepositoryResult,
    SkuReader, SkuWriter, UserReader, UserWriter,
};

pub fn fixed_datetime() -> NaiveDateTime {
    match NaiveDate::from_ymd_opt(2024, 1, 1) {
        Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        None => NaiveDateTime::default(),
    }
}

pub fn sample_user(id: i32, role: UserRole) -> User {
    User {
        id,
        username: format!("user{id}"),
        name: format!("User {id}"),
        role,
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
    }
}

pub fn sample_category(id: i32, name: &str, parent_id: Option<i32>) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: crate::domain::slug::slugify(name),
        description: None,
        parent_id,
        created_by: None,
        updated_by: None,
        is_active: true,
        sequence: 0,
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
        deleted_at: None,
    }
}

pub fn sample_product(id: i32, name: &str, category_id: i32) -> Product {
    Product {
        id,
        name: name.to_string(),
        slug: crate::domain::slug::slugify(name),
        description: None,
        category_id,
        created_by: None,
        updated_by: None,
        is_active: true,
        sequence: 0,
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
        deleted_at: None,
    }
}

pub fn sample_sku(id: i32, name: &str, product_id: i32) -> Sku {
    Sku {
        id,
        name: name.to_string(),
        slug: crate::domain::slug::slugify(name),
        description: None,
        sku_number: format!("SKU-{id}"),
        price_cents: 1000,
        product_id,
        created_by: None,
        updated_by: None,
        is_active: true,
        sequence: 0,
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
        deleted_at: None,
    }
}

pub fn sample_attribute(id: i32, code: &str, data_type: DataType, uom: Option<&str>) -> Attribute {
    Attribute {
        id,
        name: code.to_string(),
        code: code.to_string(),
        data_type,
        uom: uom.map(str::to_string),
        created_by: None,
        updated_by: None,
        is_active: true,
        sequence: 0,
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
        deleted_at: None,
    }
}

pub fn sample_value(id: i32, sku_id: i32, attribute_id: i32, value: &str) -> AttributeValue {
    AttributeValue {
        id,
        sku_id,
        attribute_id,
        value: value.to_string(),
        sequence: 0,
        created_by: None,
        updated_by: None,
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
        deleted_at: None,
        attribute: None,
    }
}

pub fn sample_image(id: i32, owner: ImageOwner, is_primary: bool) -> Image {
    Image {
        id,
        file: format!("images/{id}.jpg"),
        title: None,
        is_primary,
        owner,
        created_by: None,
        updated_by: None,
        is_active: true,
        sequence: 0,
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
        deleted_at: None,
    }
}

/// Repository double combining one mock per reader/writer trait.
pub struct MockRepo {
    pub users: MockUserReader,
    pub user_writer: MockUserWriter,
    pub categories: MockCategoryReader,
    pub category_writer: MockCategoryWriter,
    pub products: MockProductReader,
    pub product_writer: MockProductWriter,
    pub skus: MockSkuReader,
    pub sku_writer: MockSkuWriter,
    pub attributes: MockAttributeReader,
    pub attribute_writer: MockAttributeWriter,
    pub values: MockAttributeValueReader,
    pub value_writer: MockAttributeValueWriter,
    pub images: MockImageReader,
    pub image_writer: MockImageWriter,
}

impl MockRepo {
    pub fn new() -> Self {
        Self {
            users: MockUserReader::new(),
            user_writer: MockUserWriter::new(),
            categories: MockCategoryReader::new(),
            category_writer: MockCategoryWriter::new(),
            products: MockProductReader::new(),
            product_writer: MockProductWriter::new(),
            skus: MockSkuReader::new(),
            sku_writer: MockSkuWriter::new(),
            attributes: MockAttributeReader::new(),
            attribute_writer: MockAttributeWriter::new(),
            values: MockAttributeValueReader::new(),
            value_writer: MockAttributeValueWriter::new(),
            images: MockImageReader::new(),
            image_writer: MockImageWriter::new(),
        }
    }

    /// Repository whose user lookup returns an ADMIN for any id.
    pub fn with_admin() -> Self {
        let mut repo = Self::new();
        repo.users
            .expect_get_user_by_id()
            .returning(|id| Ok(Some(sample_user(id, UserRole::Admin))));
        repo
    }

    /// Repository whose user lookup returns a plain USER for any id.
    pub fn with_plain_user() -> Self {
        let mut repo = Self::new();
        repo.users
            .expect_get_user_by_id()
            .returning(|id| Ok(Some(sample_user(id, UserRole::User))));
        repo
    }
}

impl UserReader for MockRepo {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        self.users.get_user_by_id(id)
    }

    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        self.users.get_user_by_username(username)
    }

    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)> {
        self.users.list_users(query)
    }
}

impl UserWriter for MockRepo {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        self.user_writer.create_user(new_user)
    }

    fn seed_system_user(&self, username: &str) -> RepositoryResult<User> {
        self.user_writer.seed_system_user(username)
    }
}

impl CategoryReader for MockRepo {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        self.categories.get_category_by_id(id)
    }

    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>> {
        self.categories.get_category_by_slug(slug)
    }

    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)> {
        self.categories.list_categories(query)
    }

    fn list_child_categories(&self, parent_id: i32) -> RepositoryResult<Vec<Category>> {
        self.categories.list_child_categories(parent_id)
    }
}

impl CategoryWriter for MockRepo {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category> {
        self.category_writer.create_category(new_category)
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category> {
        self.category_writer.update_category(category_id, updates)
    }

    fn soft_delete_category(
        &self,
        category_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()> {
        self.category_writer
            .soft_delete_category(category_id, deleted_by)
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        self.category_writer.delete_category(category_id)
    }
}

impl ProductReader for MockRepo {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        self.products.get_product_by_id(id)
    }

    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>> {
        self.products.get_product_by_slug(slug)
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        self.products.list_products(query)
    }
}

impl ProductWriter for MockRepo {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        self.product_writer.create_product(new_product)
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product> {
        self.product_writer.update_product(product_id, updates)
    }

    fn soft_delete_product(&self, product_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()> {
        self.product_writer.soft_delete_product(product_id, deleted_by)
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        self.product_writer.delete_product(product_id)
    }
}

impl SkuReader for MockRepo {
    fn get_sku_by_id(&self, id: i32) -> RepositoryResult<Option<Sku>> {
        self.skus.get_sku_by_id(id)
    }

    fn get_sku_by_slug(&self, slug: &str) -> RepositoryResult<Option<Sku>> {
        self.skus.get_sku_by_slug(slug)
    }

    fn list_skus(&self, query: SkuListQuery) -> RepositoryResult<(usize, Vec<Sku>)> {
        self.skus.list_skus(query)
    }
}

impl SkuWriter for MockRepo {
    fn create_sku(&self, new_sku: &NewSku) -> RepositoryResult<Sku> {
        self.sku_writer.create_sku(new_sku)
    }

    fn update_sku(&self, sku_id: i32, updates: &UpdateSku) -> RepositoryResult<Sku> {
        self.sku_writer.update_sku(sku_id, updates)
    }

    fn soft_delete_sku(&self, sku_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()> {
        self.sku_writer.soft_delete_sku(sku_id, deleted_by)
    }

    fn delete_sku(&self, sku_id: i32) -> RepositoryResult<()> {
        self.sku_writer.delete_sku(sku_id)
    }
}

impl AttributeReader for MockRepo {
    fn get_attribute_by_id(&self, id: i32) -> RepositoryResult<Option<Attribute>> {
        self.attributes.get_attribute_by_id(id)
    }

    fn get_attribute_by_code(&self, code: &str) -> RepositoryResult<Option<Attribute>> {
        self.attributes.get_attribute_by_code(code)
    }

    fn list_attributes(
        &self,
        query: AttributeListQuery,
    ) -> RepositoryResult<(usize, Vec<Attribute>)> {
        self.attributes.list_attributes(query)
    }
}

impl AttributeWriter for MockRepo {
    fn create_attribute(&self, new_attribute: &NewAttribute) -> RepositoryResult<Attribute> {
        self.attribute_writer.create_attribute(new_attribute)
    }

    fn update_attribute(
        &self,
        attribute_id: i32,
        updates: &UpdateAttribute,
    ) -> RepositoryResult<Attribute> {
        self.attribute_writer.update_attribute(attribute_id, updates)
    }

    fn soft_delete_attribute(
        &self,
        attribute_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()> {
        self.attribute_writer
            .soft_delete_attribute(attribute_id, deleted_by)
    }

    fn delete_attribute(&self, attribute_id: i32) -> RepositoryResult<()> {
        self.attribute_writer.delete_attribute(attribute_id)
    }
}

impl AttributeValueReader for MockRepo {
    fn get_attribute_value_by_id(&self, id: i32) -> RepositoryResult<Option<AttributeValue>> {
        self.values.get_attribute_value_by_id(id)
    }

    fn list_sku_attribute_values(&self, sku_id: i32) -> RepositoryResult<Vec<AttributeValueView>> {
        self.values.list_sku_attribute_values(sku_id)
    }
}

impl AttributeValueWriter for MockRepo {
    fn create_attribute_value(
        &self,
        new_value: &NewAttributeValue,
    ) -> RepositoryResult<AttributeValue> {
        self.value_writer.create_attribute_value(new_value)
    }

    fn update_attribute_value(
        &self,
        value_id: i32,
        updates: &UpdateAttributeValue,
    ) -> RepositoryResult<AttributeValue> {
        self.value_writer.update_attribute_value(value_id, updates)
    }

    fn set_attribute_value(
        &self,
        value_id: i32,
        value: &TypedValue,
        updated_by: Option<i32>,
    ) -> RepositoryResult<AttributeValue> {
        self.value_writer
            .set_attribute_value(value_id, value, updated_by)
    }

    fn soft_delete_attribute_value(
        &self,
        value_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()> {
        self.value_writer
            .soft_delete_attribute_value(value_id, deleted_by)
    }
}

impl ImageReader for MockRepo {
    fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<Image>> {
        self.images.get_image_by_id(id)
    }

    fn list_images(&self, owner: ImageOwner) -> RepositoryResult<Vec<Image>> {
        self.images.list_images(owner)
    }
}

impl ImageWriter for MockRepo {
    fn create_image(&self, new_image: &NewImage) -> RepositoryResult<Image> {
        self.image_writer.create_image(new_image)
    }

    fn update_image(&self, image_id: i32, updates: &UpdateImage) -> RepositoryResult<Image> {
        self.image_writer.update_image(image_id, updates)
    }

    fn soft_delete_image(&self, image_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()> {
        self.image_writer.soft_delete_image(image_id, deleted_by)
    }
}
