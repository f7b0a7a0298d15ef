use crate::domain::attribute::{Attribute, AttributeListQuery};
use crate::forms::ListParams;
use crate::forms::attributes::{CreateAttributeForm, UpdateAttributeForm};
use crate::pagination::Paginated;
use crate::repository::{AttributeReader, AttributeWriter, UserReader};
use crate::services::{ServiceError, ServiceResult, authorize};

pub fn list_attributes<R>(repo: &R, params: ListParams) -> ServiceResult<Paginated<Attribute>>
where
    R: AttributeReader + ?Sized,
{
    let pagination = params.pagination();
    let mut query = AttributeListQuery::new().paginate(params.pagination());
    if let Some(search) = params.search_term() {
        query = query.search(search);
    }
    if params.include_deleted {
        query = query.include_deleted();
    }

    let (total, items) = repo.list_attributes(query).map_err(ServiceError::from)?;

    Ok(Paginated::new(items, &pagination, total))
}

pub fn get_attribute<R>(repo: &R, attribute_id: i32) -> ServiceResult<Attribute>
where
    R: AttributeReader + ?Sized,
{
    repo.get_attribute_by_id(attribute_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn get_attribute_by_code<R>(repo: &R, code: &str) -> ServiceResult<Attribute>
where
    R: AttributeReader + ?Sized,
{
    repo.get_attribute_by_code(code.trim())
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_attribute<R>(
    repo: &R,
    actor_id: i32,
    form: CreateAttributeForm,
) -> ServiceResult<Attribute>
where
    R: UserReader + AttributeWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let new_attribute = form
        .into_new_attribute(actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let attribute = repo
        .create_attribute(&new_attribute)
        .map_err(ServiceError::from)?;

    log::info!(
        "Attribute `{}` created with type {}",
        attribute.code,
        attribute.data_type
    );
    Ok(attribute)
}

pub fn update_attribute<R>(
    repo: &R,
    actor_id: i32,
    attribute_id: i32,
    form: UpdateAttributeForm,
) -> ServiceResult<Attribute>
where
    R: UserReader + AttributeWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let update = form
        .into_update_attribute(actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_attribute(attribute_id, &update)
        .map_err(ServiceError::from)
}

pub fn delete_attribute<R>(
    repo: &R,
    actor_id: i32,
    attribute_id: i32,
    permanent: bool,
) -> ServiceResult<()>
where
    R: UserReader + AttributeWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    if permanent {
        repo.delete_attribute(attribute_id)
    } else {
        repo.soft_delete_attribute(attribute_id, Some(actor.id))
    }
    .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attribute_type::DataType;
    use crate::repository::RepositoryError;
    use crate::services::test_support::{MockRepo, sample_attribute};

    fn create_form(code: &str, data_type: &str) -> CreateAttributeForm {
        CreateAttributeForm {
            name: "Memory".to_string(),
            code: code.to_string(),
            data_type: data_type.to_string(),
            uom: Some("GB".to_string()),
            is_active: None,
            sequence: None,
        }
    }

    #[test]
    fn invalid_data_type_never_reaches_storage() {
        let mut repo = MockRepo::with_admin();
        repo.attribute_writer.expect_create_attribute().never();

        let result = create_attribute(&repo, 1, create_form("memory", "COLOUR"));

        match result {
            Err(ServiceError::Form(message)) => assert!(message.contains("COLOUR")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn create_attribute_stores_parsed_type() {
        let mut repo = MockRepo::with_admin();
        repo.attribute_writer
            .expect_create_attribute()
            .times(1)
            .returning(|new_attribute| {
                assert_eq!(new_attribute.data_type, DataType::Number);
                assert_eq!(new_attribute.created_by, Some(1));
                Ok(sample_attribute(
                    3,
                    &new_attribute.code,
                    new_attribute.data_type,
                    new_attribute.uom.as_deref(),
                ))
            });

        let attribute = create_attribute(&repo, 1, create_form("memory", "NUMBER")).expect("ok");

        assert_eq!(attribute.unit(), Some("GB"));
    }

    #[test]
    fn duplicate_code_is_a_conflict() {
        let mut repo = MockRepo::with_admin();
        repo.attribute_writer.expect_create_attribute().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: attributes.code".to_string(),
            ))
        });

        assert!(matches!(
            create_attribute(&repo, 1, create_form("memory", "NUMBER")),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn list_attributes_passes_search() {
        let mut repo = MockRepo::new();
        repo.attributes
            .expect_list_attributes()
            .times(1)
            .returning(|query| {
                assert_eq!(query.search.as_deref(), Some("mem"));
                Ok((0, Vec::new()))
            });

        let params = ListParams {
            search: Some("  mem ".to_string()),
            ..ListParams::default()
        };

        let page = list_attributes(&repo, params).expect("page");
        assert_eq!(page.total, 0);
        assert_eq!(page.pages, 0);
    }
}
