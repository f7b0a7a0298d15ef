use mockall::mock;

use super::{
    AttributeReader, AttributeValueReader, AttributeValueWriter, AttributeWriter, CategoryReader,
    CategoryWriter, ImageReader, ImageWriter, ProductReader, ProductWriter, RepositoryResult,
    SkuReader, SkuWriter, UserReader, UserWriter,
};
use crate::domain::{
    attribute::{Attribute, AttributeListQuery, NewAttribute, UpdateAttribute},
    attribute_type::TypedValue,
    attribute_value::{AttributeValue, AttributeValueView, NewAttributeValue, UpdateAttributeValue},
    category::{Category, CategoryListQuery, NewCategory, UpdateCategory},
    image::{Image, ImageOwner, NewImage, UpdateImage},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    sku::{NewSku, Sku, SkuListQuery, UpdateSku},
    user::{NewUser, User, UserListQuery},
};

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn seed_system_user(&self, username: &str) -> RepositoryResult<User>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
        fn list_child_categories(&self, parent_id: i32) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn soft_delete_category(&self, category_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn soft_delete_product(&self, product_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub SkuReader {}

    impl SkuReader for SkuReader {
        fn get_sku_by_id(&self, id: i32) -> RepositoryResult<Option<Sku>>;
        fn get_sku_by_slug(&self, slug: &str) -> RepositoryResult<Option<Sku>>;
        fn list_skus(&self, query: SkuListQuery) -> RepositoryResult<(usize, Vec<Sku>)>;
    }
}

mock! {
    pub SkuWriter {}

    impl SkuWriter for SkuWriter {
        fn create_sku(&self, new_sku: &NewSku) -> RepositoryResult<Sku>;
        fn update_sku(&self, sku_id: i32, updates: &UpdateSku) -> RepositoryResult<Sku>;
        fn soft_delete_sku(&self, sku_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()>;
        fn delete_sku(&self, sku_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub AttributeReader {}

    impl AttributeReader for AttributeReader {
        fn get_attribute_by_id(&self, id: i32) -> RepositoryResult<Option<Attribute>>;
        fn get_attribute_by_code(&self, code: &str) -> RepositoryResult<Option<Attribute>>;
        fn list_attributes(&self, query: AttributeListQuery) -> RepositoryResult<(usize, Vec<Attribute>)>;
    }
}

mock! {
    pub AttributeWriter {}

    impl AttributeWriter for AttributeWriter {
        fn create_attribute(&self, new_attribute: &NewAttribute) -> RepositoryResult<Attribute>;
        fn update_attribute(&self, attribute_id: i32, updates: &UpdateAttribute) -> RepositoryResult<Attribute>;
        fn soft_delete_attribute(&self, attribute_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()>;
        fn delete_attribute(&self, attribute_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub AttributeValueReader {}

    impl AttributeValueReader for AttributeValueReader {
        fn get_attribute_value_by_id(&self, id: i32) -> RepositoryResult<Option<AttributeValue>>;
        fn list_sku_attribute_values(&self, sku_id: i32) -> RepositoryResult<Vec<AttributeValueView>>;
    }
}

mock! {
    pub AttributeValueWriter {}

    impl AttributeValueWriter for AttributeValueWriter {
        fn create_attribute_value(&self, new_value: &NewAttributeValue) -> RepositoryResult<AttributeValue>;
        fn update_attribute_value(&self, value_id: i32, updates: &UpdateAttributeValue) -> RepositoryResult<AttributeValue>;
        fn set_attribute_value(&self, value_id: i32, value: &TypedValue, updated_by: Option<i32>) -> RepositoryResult<AttributeValue>;
        fn soft_delete_attribute_value(&self, value_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()>;
    }
}

mock! {
    pub ImageReader {}

    impl ImageReader for ImageReader {
        fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<Image>>;
        fn list_images(&self, owner: ImageOwner) -> RepositoryResult<Vec<Image>>;
    }
}

mock! {
    pub ImageWriter {}

    impl ImageWriter for ImageWriter {
        fn create_image(&self, new_image: &NewImage) -> RepositoryResult<Image>;
        fn update_image(&self, image_id: i32, updates: &UpdateImage) -> RepositoryResult<Image>;
        fn soft_delete_image(&self, image_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()>;
    }
}
