use crate::domain::image::{Image, ImageOwner};
use crate::forms::images::{CreateImageForm, UpdateImageForm};
use crate::repository::{ImageReader, ImageWriter, UserReader};
use crate::services::{ServiceError, ServiceResult, authorize};

/// Live images of a product or SKU, primary image first.
pub fn list_images<R>(repo: &R, owner: ImageOwner) -> ServiceResult<Vec<Image>>
where
    R: ImageReader + ?Sized,
{
    repo.list_images(owner).map_err(ServiceError::from)
}

pub fn get_image<R>(repo: &R, image_id: i32) -> ServiceResult<Image>
where
    R: ImageReader + ?Sized,
{
    repo.get_image_by_id(image_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_image<R>(
    repo: &R,
    actor_id: i32,
    owner: ImageOwner,
    form: CreateImageForm,
) -> ServiceResult<Image>
where
    R: UserReader + ImageWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let new_image = form
        .into_new_image(owner, actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_image(&new_image).map_err(ServiceError::from)
}

pub fn update_image<R>(
    repo: &R,
    actor_id: i32,
    image_id: i32,
    form: UpdateImageForm,
) -> ServiceResult<Image>
where
    R: UserReader + ImageWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let update = form
        .into_update_image(actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_image(image_id, &update)
        .map_err(ServiceError::from)
}

pub fn delete_image<R>(repo: &R, actor_id: i32, image_id: i32) -> ServiceResult<()>
where
    R: UserReader + ImageWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    repo.soft_delete_image(image_id, Some(actor.id))
        .map_err(ServiceError::from)
}
