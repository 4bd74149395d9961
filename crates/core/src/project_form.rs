//! Assembly of a project submission from multipart form parts.
//!
//! The HTTP layer feeds each received part into a [`ProjectForm`]; once the
//! stream is drained, [`ProjectForm::into_submission`] checks presence of the
//! required parts and reports every problem at once.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::contact::{no_nul, not_blank};

/// Raw parts of a `POST /api/projects` multipart body, as received.
#[derive(Debug, Default)]
pub struct ProjectForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub featured: Option<String>,
    pub image: Option<Vec<u8>>,
}

/// A complete, checked project submission. The image is still raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSubmission {
    pub title: String,
    pub description: String,
    pub category: String,
    pub featured: bool,
    pub image: Vec<u8>,
}

impl ProjectForm {
    pub fn into_submission(self) -> Result<ProjectSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required(&mut errors, "title", self.title);
        if let Some(title) = &title {
            if let Err(e) = not_blank(title) {
                errors.add("title", e);
            }
        }
        let description = required(&mut errors, "description", self.description);
        check_text(&mut errors, "description", description.as_deref());
        let category = required(&mut errors, "category", self.category);
        check_text(&mut errors, "category", category.as_deref());
        let image = required(&mut errors, "image", self.image);

        let featured = match self.featured.as_deref() {
            None => false,
            Some(raw) => parse_form_bool(raw).unwrap_or_else(|| {
                errors.add(
                    "featured",
                    ValidationError::new("bool")
                        .with_message(Cow::Borrowed("must be a boolean")),
                );
                false
            }),
        };

        match (title, description, category, image) {
            (Some(title), Some(description), Some(category), Some(image)) if errors.is_empty() => {
                Ok(ProjectSubmission {
                    title,
                    description,
                    category,
                    featured,
                    image,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required<T>(errors: &mut ValidationErrors, field: &'static str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(
            field,
            ValidationError::new("required").with_message(Cow::Borrowed("field required")),
        );
    }
    value
}

fn check_text(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    if let Some(Err(e)) = value.map(no_nul) {
        errors.add(field, e);
    }
}

/// Parse the usual HTML form spellings of a boolean, case-insensitively.
pub fn parse_form_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}
