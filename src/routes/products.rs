use actix_web::{Responder, delete, get, patch, post, web};

use crate::domain::image::ImageOwner;
use crate::forms::DeleteParams;
use crate::forms::images::CreateImageForm;
use crate::forms::products::{CreateProductForm, ProductListParams, UpdateProductForm};
use crate::forms::skus::{CreateSkuForm, SkuListParams};
use crate::repository::DieselRepository;
use crate::routes::actor::Actor;
use crate::routes::response::{created, empty, ok, page, service_error};
use crate::services::{images, products, skus};

#[get("/products")]
pub async fn list_products(
    params: web::Query<ProductListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::list_products(repo.get_ref(), params.into_inner()) {
        Ok(result) => page(result),
        Err(err) => service_error(err, "list products"),
    }
}

#[get("/products/slug/{slug}")]
pub async fn get_product_by_slug(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::get_product_by_slug(repo.get_ref(), &slug) {
        Ok(product) => ok(product),
        Err(err) => service_error(err, "load product"),
    }
}

#[get("/products/{id}")]
pub async fn get_product(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match products::get_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => ok(product),
        Err(err) => service_error(err, "load product"),
    }
}

#[post("/products")]
pub async fn create_product(
    actor: Actor,
    form: web::Json<CreateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), actor.id(), form.into_inner()) {
        Ok(product) => created(product),
        Err(err) => service_error(err, "create product"),
    }
}

#[patch("/products/{id}")]
pub async fn update_product(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<UpdateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::update_product(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(product) => ok(product),
        Err(err) => service_error(err, "update product"),
    }
}

#[delete("/products/{id}")]
pub async fn delete_product(
    actor: Actor,
    path: web::Path<i32>,
    params: web::Query<DeleteParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::delete_product(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        params.permanent,
    ) {
        Ok(()) => empty(),
        Err(err) => service_error(err, "delete product"),
    }
}

#[get("/products/{id}/skus")]
pub async fn list_product_skus(
    path: web::Path<i32>,
    params: web::Query<SkuListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let mut params = params.into_inner();
    params.product_id = Some(path.into_inner());

    match skus::list_skus(repo.get_ref(), params) {
        Ok(result) => page(result),
        Err(err) => service_error(err, "list product SKUs"),
    }
}

#[post("/products/{id}/skus")]
pub async fn create_product_sku(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<CreateSkuForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match skus::create_sku(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(sku) => created(sku),
        Err(err) => service_error(err, "create SKU"),
    }
}

#[get("/products/{id}/images")]
pub async fn list_product_images(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match images::list_images(repo.get_ref(), ImageOwner::Product(path.into_inner())) {
        Ok(result) => ok(result),
        Err(err) => service_error(err, "list product images"),
    }
}

#[post("/products/{id}/images")]
pub async fn create_product_image(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<CreateImageForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let owner = ImageOwner::Product(path.into_inner());

    match images::create_image(repo.get_ref(), actor.id(), owner, form.into_inner()) {
        Ok(image) => created(image),
        Err(err) => service_error(err, "create product image"),
    }
}
