use crate::domain::product::Product;
use crate::forms::products::{CreateProductForm, ProductListParams, UpdateProductForm};
use crate::pagination::Paginated;
use crate::repository::{ProductReader, ProductWriter, UserReader};
use crate::services::{ServiceError, ServiceResult, authorize};

pub fn list_products<R>(repo: &R, params: ProductListParams) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader + ?Sized,
{
    let pagination = params.pagination();
    let (total, items) = repo
        .list_products(params.into_query())
        .map_err(ServiceError::from)?;

    Ok(Paginated::new(items, &pagination, total))
}

pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn get_product_by_slug<R>(repo: &R, slug: &str) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_slug(slug)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_product<R>(repo: &R, actor_id: i32, form: CreateProductForm) -> ServiceResult<Product>
where
    R: UserReader + ProductWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let new_product = form
        .into_new_product(actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let product = repo
        .create_product(&new_product)
        .map_err(ServiceError::from)?;

    log::info!("Product {} created as `{}`", product.id, product.slug);
    Ok(product)
}

pub fn update_product<R>(
    repo: &R,
    actor_id: i32,
    product_id: i32,
    form: UpdateProductForm,
) -> ServiceResult<Product>
where
    R: UserReader + ProductWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let update = form
        .into_update_product(actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &update)
        .map_err(ServiceError::from)
}

pub fn delete_product<R>(
    repo: &R,
    actor_id: i32,
    product_id: i32,
    permanent: bool,
) -> ServiceResult<()>
where
    R: UserReader + ProductWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    if permanent {
        repo.delete_product(product_id)
    } else {
        repo.soft_delete_product(product_id, Some(actor.id))
    }
    .map_err(ServiceError::from)
}
