use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::image::{ImageOwner, NewImage, UpdateImage};
use crate::forms::{double_option, sanitize_inline_text};

const FILE_MAX_LEN_VALIDATOR: u64 = 512;
const TITLE_MAX_LEN_VALIDATOR: u64 = 200;

pub type ImageFormResult<T> = Result<T, ImageFormError>;

#[derive(Debug, Error)]
pub enum ImageFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("image file cannot be empty")]
    EmptyFile,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateImageForm {
    /// Storage path or URL of the image file.
    #[validate(length(min = 1, max = FILE_MAX_LEN_VALIDATOR))]
    pub file: String,
    #[validate(length(max = TITLE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl CreateImageForm {
    pub fn into_new_image(self, owner: ImageOwner, actor_id: i32) -> ImageFormResult<NewImage> {
        self.validate()?;

        let file = sanitize_file(&self.file)?;
        let mut image = NewImage::new(file, owner).created_by(actor_id);
        if let Some(title) = sanitize_title(self.title.as_deref()) {
            image = image.with_title(title);
        }
        if self.is_primary {
            image = image.primary();
        }
        if let Some(sequence) = self.sequence {
            image = image.with_sequence(sequence);
        }

        Ok(image)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateImageForm {
    #[validate(length(min = 1, max = FILE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub file: Option<String>,
    #[validate(length(max = TITLE_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default)]
    pub is_primary: Option<bool>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl UpdateImageForm {
    pub fn into_update_image(self, actor_id: i32) -> ImageFormResult<UpdateImage> {
        self.validate()?;

        let mut update = UpdateImage::new().updated_by(actor_id);
        if let Some(file) = self.file {
            update = update.file(sanitize_file(&file)?);
        }
        if let Some(title) = self.title {
            update = update.title(sanitize_title(title.as_deref()));
        }
        if let Some(is_primary) = self.is_primary {
            update = update.primary(is_primary);
        }
        if let Some(is_active) = self.is_active {
            update = update.active(is_active);
        }
        if let Some(sequence) = self.sequence {
            update = update.sequence(sequence);
        }

        Ok(update)
    }
}

fn sanitize_file(input: &str) -> ImageFormResult<String> {
    let file: String = input.trim().chars().filter(|ch| !ch.is_control()).collect();
    if file.is_empty() {
        Err(ImageFormError::EmptyFile)
    } else {
        Ok(file)
    }
}

fn sanitize_title(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_inline_text)
        .filter(|title| !title.is_empty())
}
