use std::collections::HashMap;

use crate::domain::category::{Category, CategoryListQuery, CategoryTreeNode};
use crate::forms::categories::{CategoryListParams, CreateCategoryForm, UpdateCategoryForm};
use crate::pagination::Paginated;
use crate::repository::{CategoryReader, CategoryWriter, UserReader};
use crate::services::{ServiceError, ServiceResult, authorize};

/// Lists categories matching the query string filters.
pub fn list_categories<R>(repo: &R, params: CategoryListParams) -> ServiceResult<Paginated<Category>>
where
    R: CategoryReader + ?Sized,
{
    let pagination = params.pagination();
    let (total, items) = repo
        .list_categories(params.into_query())
        .map_err(ServiceError::from)?;

    Ok(Paginated::new(items, &pagination, total))
}

pub fn get_category<R>(repo: &R, category_id: i32) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn get_category_by_slug<R>(repo: &R, slug: &str) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_slug(slug)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Direct children of an existing category.
pub fn list_child_categories<R>(repo: &R, parent_id: i32) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    get_category(repo, parent_id)?;

    repo.list_child_categories(parent_id)
        .map_err(ServiceError::from)
}

/// Whole live category hierarchy, starting from the categories without a parent.
pub fn load_category_tree<R>(repo: &R) -> ServiceResult<Vec<CategoryTreeNode>>
where
    R: CategoryReader + ?Sized,
{
    let (_, flat) = repo
        .list_categories(CategoryListQuery::new())
        .map_err(ServiceError::from)?;

    Ok(build_category_tree(&flat))
}

pub fn create_category<R>(
    repo: &R,
    actor_id: i32,
    form: CreateCategoryForm,
) -> ServiceResult<Category>
where
    R: UserReader + CategoryWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let new_category = form
        .into_new_category(actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let category = repo
        .create_category(&new_category)
        .map_err(ServiceError::from)?;

    log::info!("Category {} created as `{}`", category.id, category.slug);
    Ok(category)
}

pub fn update_category<R>(
    repo: &R,
    actor_id: i32,
    category_id: i32,
    form: UpdateCategoryForm,
) -> ServiceResult<Category>
where
    R: UserReader + CategoryWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    let update = form
        .into_update_category(actor.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(category_id, &update)
        .map_err(ServiceError::from)
}

/// Soft deletes by default; `permanent` removes the row.
pub fn delete_category<R>(
    repo: &R,
    actor_id: i32,
    category_id: i32,
    permanent: bool,
) -> ServiceResult<()>
where
    R: UserReader + CategoryWriter + ?Sized,
{
    let actor = authorize(repo, actor_id)?;

    if permanent {
        repo.delete_category(category_id)
    } else {
        repo.soft_delete_category(category_id, Some(actor.id))
    }
    .map_err(ServiceError::from)
}

fn build_category_tree(categories: &[Category]) -> Vec<CategoryTreeNode> {
    let mut children_by_parent: HashMap<Option<i32>, Vec<&Category>> = HashMap::new();

    for category in categories {
        children_by_parent
            .entry(category.parent_id)
            .or_default()
            .push(category);
    }

    for children in children_by_parent.values_mut() {
        children.sort_by(|a, b| a.sequence.cmp(&b.sequence).then_with(|| a.name.cmp(&b.name)));
    }

    fn build_branch(
        parent_id: Option<i32>,
        grouped: &HashMap<Option<i32>, Vec<&Category>>,
    ) -> Vec<CategoryTreeNode> {
        match grouped.get(&parent_id) {
            Some(children) => children
                .iter()
                .map(|category| {
                    let sub_tree = build_branch(Some(category.id), grouped);
                    CategoryTreeNode::new((*category).clone()).with_children(sub_tree)
                })
                .collect(),
            None => Vec::new(),
        }
    }

    build_branch(None, &children_by_parent)
}
