use actix_web::web;

use crate::routes::response::{json_error_handler, path_error_handler, query_error_handler};

pub mod actor;
pub mod attributes;
pub mod categories;
pub mod images;
pub mod products;
pub mod response;
pub mod skus;
pub mod users;

/// Register the `/api/v1` scope and the JSON error handlers.
///
/// Literal segments (`tree`, `slug/...`) are registered before `{id}` so
/// they are not swallowed by the numeric path.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api/v1")
                .service(users::list_users)
                .service(users::create_user)
                .service(users::get_user_by_username)
                .service(users::get_user)
                .service(categories::list_categories)
                .service(categories::create_category)
                .service(categories::category_tree)
                .service(categories::get_category_by_slug)
                .service(categories::get_category)
                .service(categories::list_child_categories)
                .service(categories::update_category)
                .service(categories::delete_category)
                .service(products::list_products)
                .service(products::create_product)
                .service(products::get_product_by_slug)
                .service(products::get_product)
                .service(products::update_product)
                .service(products::delete_product)
                .service(products::list_product_skus)
                .service(products::create_product_sku)
                .service(products::list_product_images)
                .service(products::create_product_image)
                .service(skus::list_skus)
                .service(skus::get_sku_by_slug)
                .service(skus::get_sku)
                .service(skus::update_sku)
                .service(skus::delete_sku)
                .service(skus::list_sku_attribute_values)
                .service(skus::create_sku_attribute_value)
                .service(skus::list_sku_images)
                .service(skus::create_sku_image)
                .service(attributes::list_attributes)
                .service(attributes::create_attribute)
                .service(attributes::get_attribute_by_code)
                .service(attributes::get_attribute)
                .service(attributes::update_attribute)
                .service(attributes::delete_attribute)
                .service(attributes::get_attribute_value)
                .service(attributes::update_attribute_value)
                .service(attributes::set_attribute_value)
                .service(attributes::delete_attribute_value)
                .service(images::get_image)
                .service(images::update_image)
                .service(images::delete_image),
        );
}
