use actix_web::{Responder, get, post, web};

use crate::forms::users::{CreateUserForm, UserListParams};
use crate::repository::DieselRepository;
use crate::routes::actor::Actor;
use crate::routes::response::{created, ok, page, service_error};
use crate::services::users;

#[get("/users")]
pub async fn list_users(
    params: web::Query<UserListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::list_users(repo.get_ref(), params.into_inner()) {
        Ok(result) => page(result),
        Err(err) => service_error(err, "list users"),
    }
}

#[get("/users/username/{username}")]
pub async fn get_user_by_username(
    username: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::get_user_by_username(repo.get_ref(), &username) {
        Ok(user) => ok(user),
        Err(err) => service_error(err, "load user"),
    }
}

#[get("/users/{id}")]
pub async fn get_user(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match users::get_user(repo.get_ref(), path.into_inner()) {
        Ok(user) => ok(user),
        Err(err) => service_error(err, "load user"),
    }
}

#[post("/users")]
pub async fn create_user(
    actor: Actor,
    form: web::Json<CreateUserForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::create_user(repo.get_ref(), actor.id(), form.into_inner()) {
        Ok(user) => created(user),
        Err(err) => service_error(err, "create user"),
    }
}
