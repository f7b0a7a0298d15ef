use actix_web::{Responder, delete, get, patch, post, web};

use crate::forms::DeleteParams;
use crate::forms::categories::{CategoryListParams, CreateCategoryForm, UpdateCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::actor::Actor;
use crate::routes::response::{created, empty, ok, page, service_error};
use crate::services::categories;

#[get("/categories")]
pub async fn list_categories(
    params: web::Query<CategoryListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::list_categories(repo.get_ref(), params.into_inner()) {
        Ok(result) => page(result),
        Err(err) => service_error(err, "list categories"),
    }
}

#[get("/categories/tree")]
/// Nested hierarchy of all live categories.
pub async fn category_tree(repo: web::Data<DieselRepository>) -> impl Responder {
    match categories::load_category_tree(repo.get_ref()) {
        Ok(tree) => ok(tree),
        Err(err) => service_error(err, "build category tree"),
    }
}

#[get("/categories/slug/{slug}")]
pub async fn get_category_by_slug(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::get_category_by_slug(repo.get_ref(), &slug) {
        Ok(category) => ok(category),
        Err(err) => service_error(err, "load category"),
    }
}

#[get("/categories/{id}")]
pub async fn get_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::get_category(repo.get_ref(), path.into_inner()) {
        Ok(category) => ok(category),
        Err(err) => service_error(err, "load category"),
    }
}

#[get("/categories/{id}/children")]
pub async fn list_child_categories(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::list_child_categories(repo.get_ref(), path.into_inner()) {
        Ok(children) => ok(children),
        Err(err) => service_error(err, "list child categories"),
    }
}

#[post("/categories")]
pub async fn create_category(
    actor: Actor,
    form: web::Json<CreateCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::create_category(repo.get_ref(), actor.id(), form.into_inner()) {
        Ok(category) => created(category),
        Err(err) => service_error(err, "create category"),
    }
}

#[patch("/categories/{id}")]
pub async fn update_category(
    actor: Actor,
    path: web::Path<i32>,
    form: web::Json<UpdateCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::update_category(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(category) => ok(category),
        Err(err) => service_error(err, "update category"),
    }
}

#[delete("/categories/{id}")]
pub async fn delete_category(
    actor: Actor,
    path: web::Path<i32>,
    params: web::Query<DeleteParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::delete_category(
        repo.get_ref(),
        actor.id(),
        path.into_inner(),
        params.permanent,
    ) {
        Ok(()) => empty(),
        Err(err) => service_error(err, "delete category"),
    }
}
