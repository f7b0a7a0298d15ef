use actix_web::{Responder, delete, get, patch, post, web};

use crate::domain::image::ImageOwner;
use crate::forms::DeleteParams;
use crate::forms::attribute_values::CreateAttributeValueForm;
use crate::forms::images::CreateImageForm;
use crate::forms::skus::{SkuListParams, UpdateSkuForm};
use crate::repository::DieselRepository;
use crate::routes::actor::Actor;
use crate::routes::response::{created, empty, ok, page, service_error};
use crate::services::{attribute_values, images, skus};

#[get("/skus")]
pub async fn list_skus(
    params: web::Query<SkuListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match skus::list_skus(repo.get_ref(), params.into_inner()) {
        Ok(result) => page(result),
        Err(err) => service_error(err, "list SKUs"),
    }
}

#[get("/skus/slug/{slug}")]
pub async fn get_sku_by_slug(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match skus::get_sku_by_slug(repo.get_ref(), &slug) {
        Ok(sku) => ok(sku),
        Err(err) => service_error(err, "load SKU"),
    }
}

#[get("/skus/{id}")]
pub async fn get_sku(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match skus::get_sku(repo.get_ref(), path.into_inner()) {
        Ok(sku) => ok(sku),
        Err(err) => service_error(err, "load SKU"),
    }
}

#[patch("/skus/{id}")]
pub async fn update_sku(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<UpdateSkuForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match skus::update_sku(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(sku) => ok(sku),
        Err(err) => service_error(err, "update SKU"),
    }
}

#[delete("/skus/{id}")]
pub async fn delete_sku(
    actor: Actor,
    path: web::Path<i32>,
    params: web::Query<DeleteParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match skus::delete_sku(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        params.permanent,
    ) {
        Ok(()) => empty(),
        Err(err) => service_error(err, "delete SKU"),
    }
}

#[get("/skus/{id}/attributes")]
pub async fn list_sku_attribute_values(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attribute_values::list_sku_attribute_values(repo.get_ref(), path.into_inner()) {
        Ok(values) => ok(values),
        Err(err) => service_error(err, "list SKU attribute values"),
    }
}

#[post("/skus/{id}/attributes")]
pub async fn create_sku_attribute_value(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<CreateAttributeValueForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attribute_values::create_attribute_value(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(value) => created(value),
        Err(err) => service_error(err, "assign attribute value"),
    }
}

#[get("/skus/{id}/images")]
pub async fn list_sku_images(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match images::list_images(repo.get_ref(), ImageOwner::Sku(path.into_inner())) {
        Ok(result) => ok(result),
        Err(err) => service_error(err, "list SKU images"),
    }
}

#[post("/skus/{id}/images")]
pub async fn create_sku_image(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<CreateImageForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let owner = ImageOwner::Sku(path.into_inner());

    match images::create_image(repo.get_ref(), actor.id(), owner, form.into_inner()) {
        Ok(image) => created(image),
        Err(err) => service_error(err, "create SKU image"),
    }
}
