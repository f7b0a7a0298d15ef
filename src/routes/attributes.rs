use actix_web::{Responder, delete, get, patch, post, put, web};

use crate::forms::attribute_values::{SetAttributeValueForm, UpdateAttributeValueForm};
use crate::forms::attributes::{CreateAttributeForm, UpdateAttributeForm};
use crate::forms::{DeleteParams, ListParams};
use crate::repository::DieselRepository;
use crate::routes::actor::Actor;
use crate::routes::response::{created, empty, ok, page, service_error};
use crate::services::{attribute_values, attributes};

#[get("/attributes")]
pub async fn list_attributes(
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attributes::list_attributes(repo.get_ref(), params.into_inner()) {
        Ok(result) => page(result),
        Err(err) => service_error(err, "list attributes"),
    }
}

#[get("/attributes/code/{code}")]
pub async fn get_attribute_by_code(
    code: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attributes::get_attribute_by_code(repo.get_ref(), &code) {
        Ok(attribute) => ok(attribute),
        Err(err) => service_error(err, "load attribute"),
    }
}

#[get("/attributes/{id}")]
pub async fn get_attribute(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attributes::get_attribute(repo.get_ref(), path.into_inner()) {
        Ok(attribute) => ok(attribute),
        Err(err) => service_error(err, "load attribute"),
    }
}

#[post("/attributes")]
pub async fn create_attribute(
    actor: Actor,
    form: web::Json<CreateAttributeForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attributes::create_attribute(repo.get_ref(), actor.id(), form.into_inner()) {
        Ok(attribute) => created(attribute),
        Err(err) => service_error(err, "create attribute"),
    }
}

#[patch("/attributes/{id}")]
pub async fn update_attribute(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<UpdateAttributeForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attributes::update_attribute(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(attribute) => ok(attribute),
        Err(err) => service_error(err, "update attribute"),
    }
}

#[delete("/attributes/{id}")]
pub async fn delete_attribute(
    actor: Actor,
    path: web::Path<i32>,
    params: web::Query<DeleteParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attributes::delete_attribute(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        params.permanent,
    ) {
        Ok(()) => empty(),
        Err(err) => service_error(err, "delete attribute"),
    }
}

#[get("/attribute-values/{id}")]
pub async fn get_attribute_value(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attribute_values::get_attribute_value(repo.get_ref(), path.into_inner()) {
        Ok(value) => ok(value),
        Err(err) => service_error(err, "load attribute value"),
    }
}

#[patch("/attribute-values/{id}")]
pub async fn update_attribute_value(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<UpdateAttributeValueForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attribute_values::update_attribute_value(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(value) => ok(value),
        Err(err) => service_error(err, "update attribute value"),
    }
}

#[put("/attribute-values/{id}/value")]
/// Store a typed value; numbers are written with two decimals.
pub async fn set_attribute_value(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<SetAttributeValueForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attribute_values::set_attribute_value(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(value) => ok(value),
        Err(err) => service_error(err, "set attribute value"),
    }
}

#[delete("/attribute-values/{id}")]
pub async fn delete_attribute_value(
    actor: Actor,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match attribute_values::delete_attribute_value(repo.get_ref(), actor.id(), path.into_inner())
    {
        Ok(()) => empty(),
        Err(err) => service_error(err, "delete attribute value"),
    }
}
