use crate::domain::sku::Sku;
use crate::forms::skus::{CreateSkuForm, SkuListParams, UpdateSkuForm};
use crate::pagination::Paginated;
use crate::repository::{SkuReader, SkuWriter, UserReader};
use crate::services::{ServiceError, ServiceResult, authorize};

pub fn list_skus<R>(repo: &R, params: SkuListParams) -> ServiceResult<Paginated<Sku>>
where
    R: SkuReader + ?Sized,
{
    let pagination = params.pagination();
    let (total, items) = repo
        .list_skus(params.into_query())
        .map_err(ServiceError::from)?;

    Ok(Paginated::new(items, &pagination, total))
}

pub fn get_sku<R>(repo: &R, sku_id: i32) -> ServiceResult<Sku>
where
    R: SkuReader + ?Sized,
{
    repo.get_sku_by_id(sku_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn get_sku_by_slug<R>(repo: &R, slug: &str) -> ServiceResult<Sku>
where
    R: SkuReader + ?Sized,
{
    repo.get_sku_by_slug(slug)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a SKU under the product named in the request path.
pub fn create_sku<R>(
    repo: &R,
    actor_id: i32,
    product_id: i32,
    form: CreateSkuForm,
) -> ServiceResult<Sku>
where
    R: UserReader + SkuWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let new_sku = form
        .into_new_sku(product_id, actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let sku = repo.create_sku(&new_sku).map_err(ServiceError::from)?;

    log::info!("SKU {} ({}) created as `{}`", sku.id, sku.sku_number, sku.slug);
    Ok(sku)
}

pub fn update_sku<R>(
    repo: &R,
    actor_id: i32,
    sku_id: i32,
    form: UpdateSkuForm,
) -> ServiceResult<Sku>
where
    R: UserReader + SkuWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let update = form
        .into_update_sku(actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_sku(sku_id, &update).map_err(ServiceError::from)
}

pub fn delete_sku<R>(repo: &R, actor_id: i32, sku_id: i32, permanent: bool) -> ServiceResult<()>
where
    R: UserReader + SkuWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    if permanent {
        repo.delete_sku(sku_id)
    } else {
        repo.soft_delete_sku(sku_id, Some(actor.id))
    }
    .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::skus::PriceInput;
    use crate::repository::RepositoryError;
    use crate::services::test_support::{MockRepo, sample_sku};

    fn create_form(price: &str) -> CreateSkuForm {
        CreateSkuForm {
            name: "Laptop Pro 16GB".to_string(),
            sku_number: "LP-16".to_string(),
            price: PriceInput::Text(price.to_string()),
            description: None,
            is_active: None,
            sequence: None,
        }
    }

    #[test]
    fn create_sku_converts_price_and_sets_product() {
        let mut repo = MockRepo::with_admin();
        repo.sku_writer
            .expect_create_sku()
            .times(1)
            .returning(|new_sku| {
                assert_eq!(new_sku.price_cents, 149_999);
                assert_eq!(new_sku.product_id, 3);
                assert_eq!(new_sku.created_by, Some(1));
                Ok(sample_sku(8, &new_sku.name, new_sku.product_id))
            });

        let sku = create_sku(&repo, 1, 3, create_form("1499.99")).expect("created");

        assert_eq!(sku.slug, "laptop-pro-16gb");
    }

    #[test]
    fn invalid_price_is_a_form_error() {
        let mut repo = MockRepo::with_admin();
        repo.sku_writer.expect_create_sku().never();

        assert!(matches!(
            create_sku(&repo, 1, 3, create_form("12.345")),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn duplicate_sku_number_is_a_conflict() {
        let mut repo = MockRepo::with_admin();
        repo.sku_writer.expect_create_sku().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: skus.sku_number".to_string(),
            ))
        });

        assert!(matches!(
            create_sku(&repo, 1, 3, create_form("10")),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn list_skus_filters_by_product() {
        let mut repo = MockRepo::new();
        repo.skus.expect_list_skus().times(1).returning(|query| {
            assert_eq!(query.product_id, Some(3));
            Ok((1, vec![sample_sku(8, "Laptop Pro 16GB", 3)]))
        });

        let params = SkuListParams {
            product_id: Some(3),
            ..SkuListParams::default()
        };

        let page = list_skus(&repo, params).expect("page");
        assert_eq!(page.total, 1);
        assert_eq!(page.pages, 1);
    }
}
