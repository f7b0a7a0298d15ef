use crate::domain::attribute_value::{AttributeValue, AttributeValueView};
use crate::forms::attribute_values::{
    CreateAttributeValueForm, SetAttributeValueForm, UpdateAttributeValueForm,
};
use crate::repository::{AttributeValueReader, AttributeValueWriter, SkuReader, UserReader};
use crate::services::skus::get_sku;
use crate::services::{ServiceError, ServiceResult, authorize};

/// Values assigned to a SKU, each with its display and parsed form.
pub fn list_sku_attribute_values<R>(repo: &R, sku_id: i32) -> ServiceResult<Vec<AttributeValueView>>
where
    R: SkuReader + AttributeValueReader + ?Sized,
{
    get_sku(repo, sku_id)?;

    repo.list_sku_attribute_values(sku_id)
        .map_err(ServiceError::from)
}

pub fn get_attribute_value<R>(repo: &R, value_id: i32) -> ServiceResult<AttributeValue>
where
    R: AttributeValueReader + ?Sized,
{
    repo.get_attribute_value_by_id(value_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_attribute_value<R>(
    repo: &R,
    actor_id: i32,
    sku_id: i32,
    form: CreateAttributeValueForm,
) -> ServiceResult<AttributeValue>
where
    R: UserReader + AttributeValueWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let new_value = form
        .into_new_attribute_value(sku_id, actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_attribute_value(&new_value)
        .map_err(ServiceError::from)
}

pub fn update_attribute_value<R>(
    repo: &R,
    actor_id: i32,
    value_id: i32,
    form: UpdateAttributeValueForm,
) -> ServiceResult<AttributeValue>
where
    R: UserReader + AttributeValueWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let update = form
        .into_update_attribute_value(actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_attribute_value(value_id, &update)
        .map_err(ServiceError::from)
}

/// Stores a typed value, formatted by the attribute's data type.
pub fn set_attribute_value<R>(
    repo: &R,
    actor_id: i32,
    value_id: i32,
    form: SetAttributeValueForm,
) -> ServiceResult<AttributeValue>
where
    R: UserReader + AttributeValueWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    repo.set_attribute_value(value_id, &form.into_typed_value(), Some(actor.id))
        .map_err(ServiceError::from)
}

pub fn delete_attribute_value<R>(repo: &R, actor_id: i32, value_id: i32) -> ServiceResult<()>
where
    R: UserReader + AttributeValueWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    repo.soft_delete_attribute_value(value_id, Some(actor.id))
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attribute_type::{AttributeTypeError, DataType, TypedValue};
    use crate::domain::attribute_value::AttributeValueError;
    use crate::forms::attribute_values::ValueInput;
    use crate::repository::RepositoryError;
    use crate::services::test_support::{MockRepo, sample_attribute, sample_sku, sample_value};

    #[test]
    fn list_values_of_missing_sku_is_not_found() {
        let mut repo = MockRepo::new();
        repo.skus.expect_get_sku_by_id().returning(|_| Ok(None));
        repo.values.expect_list_sku_attribute_values().never();

        assert!(matches!(
            list_sku_attribute_values(&repo, 4),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn list_values_renders_display_text() {
        let mut repo = MockRepo::new();
        repo.skus
            .expect_get_sku_by_id()
            .returning(|id| Ok(Some(sample_sku(id, "Laptop", 1))));
        repo.values
            .expect_list_sku_attribute_values()
            .times(1)
            .returning(|sku_id| {
                let memory = sample_attribute(2, "memory", DataType::Number, Some("GB"));
                Ok(vec![AttributeValueView::new(
                    sample_value(1, sku_id, 2, "16"),
                    &memory,
                )])
            });

        let views = list_sku_attribute_values(&repo, 4).expect("views");

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].display_value, "16 GB");
    }

    #[test]
    fn rejected_value_is_a_form_error() {
        let mut repo = MockRepo::with_admin();
        repo.value_writer
            .expect_create_attribute_value()
            .returning(|new_value| {
                Err(RepositoryError::AttributeValue(AttributeValueError::InvalidValue {
                    name: "Weight".to_string(),
                    data_type: DataType::Number,
                    source: DataType::Number
                        .parse_value(&new_value.value)
                        .err()
                        .unwrap_or(AttributeTypeError::InvalidBoolean(String::new())),
                }))
            });

        let form = CreateAttributeValueForm {
            attribute_id: 2,
            value: ValueInput::Text("heavy".to_string()),
            sequence: None,
        };

        match create_attribute_value(&repo, 1, 4, form) {
            Err(ServiceError::Form(message)) => {
                assert!(message.contains("invalid value for attribute 'Weight' (type: NUMBER)"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_attribute_is_an_invalid_reference() {
        let mut repo = MockRepo::with_admin();
        repo.value_writer
            .expect_create_attribute_value()
            .returning(|new_value| {
                Err(RepositoryError::AttributeValue(
                    AttributeValueError::AttributeNotFound(new_value.attribute_id),
                ))
            });

        let form = CreateAttributeValueForm {
            attribute_id: 99,
            value: ValueInput::Text("x".to_string()),
            sequence: None,
        };

        assert!(matches!(
            create_attribute_value(&repo, 1, 4, form),
            Err(ServiceError::InvalidReference(message)) if message == "attribute 99 not found"
        ));
    }

    #[test]
    fn set_value_forwards_typed_value_and_actor() {
        let mut repo = MockRepo::with_admin();
        repo.value_writer
            .expect_set_attribute_value()
            .withf(|id, value, updated_by| {
                *id == 6 && *value == TypedValue::Number(15.6) && *updated_by == Some(3)
            })
            .times(1)
            .returning(|id, _, _| Ok(sample_value(id, 4, 2, "15.60")));

        let form = SetAttributeValueForm {
            value: ValueInput::Number(15.6),
        };

        let stored = set_attribute_value(&repo, 3, 6, form).expect("stored");
        assert_eq!(stored.value, "15.60");
    }
}
