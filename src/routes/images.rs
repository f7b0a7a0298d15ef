use actix_web::{Responder, delete, get, patch, web};

use crate::forms::images::UpdateImageForm;
use crate::repository::DieselRepository;
use crate::routes::actor::Actor;
use crate::routes::response::{empty, ok, service_error};
use crate::services::images;

#[get("/images/{id}")]
pub async fn get_image(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match images::get_image(repo.get_ref(), path.into_inner()) {
        Ok(image) => ok(image),
        Err(err) => service_error(err, "load image"),
    }
}

#[patch("/images/{id}")]
pub async fn update_image(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<UpdateImageForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match images::update_image(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(image) => ok(image),
        Err(err) => service_error(err, "update image"),
    }
}

#[delete("/images/{id}")]
pub async fn delete_image(
    actor: Actor,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match images::delete_image(repo.get_ref(), actor.id(), path.into_inner()) {
        Ok(()) => empty(),
        Err(err) => service_error(err, "delete image"),
    }
}
