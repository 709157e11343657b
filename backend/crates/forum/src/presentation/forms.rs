//! Form DTOs and validation
//!
//! Field names follow the legacy HTML forms. Validation is trim + non-empty
//! per field; failures re-render the originating form with inline messages
//! and HTTP 200, never a hard error status.

use serde::Deserialize;

/// A single field-level validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn require_non_empty(
    value: &str,
    field: &'static str,
    message: &'static str,
    errors: &mut Vec<FieldError>,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, message));
    }
    trimmed.to_string()
}

// ============================================================================
// Sign Up
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Trimmed, validated sign-up values
#[derive(Debug)]
pub struct ValidSignUp {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<ValidSignUp, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = require_non_empty(
            &self.firstname,
            "firstname",
            "first name must not be empty",
            &mut errors,
        );
        let last_name = require_non_empty(
            &self.lastname,
            "lastname",
            "last name must not be empty",
            &mut errors,
        );
        let username = require_non_empty(
            &self.username,
            "username",
            "username must not be empty",
            &mut errors,
        );
        let password = require_non_empty(
            &self.password,
            "password",
            "password must not be empty",
            &mut errors,
        );

        if errors.is_empty() {
            Ok(ValidSignUp {
                first_name,
                last_name,
                username,
                password,
            })
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// Log In
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LogInForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// New Post
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NewPostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub post_body: String,
    /// Legacy clients submitted the body under this name while validation
    /// checked `post_body`. The mismatch is inherited: when present, this
    /// field is the one stored. See DESIGN.md.
    #[serde(default)]
    pub post_text: Option<String>,
}

/// Trimmed, validated new-post values
#[derive(Debug)]
pub struct ValidNewPost {
    pub title: String,
    pub body: String,
}

impl NewPostForm {
    pub fn validate(&self) -> Result<ValidNewPost, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = require_non_empty(
            &self.title,
            "title",
            "title must not be empty",
            &mut errors,
        );
        let post_body = require_non_empty(
            &self.post_body,
            "post_body",
            "post body must not be empty",
            &mut errors,
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        // The stored body comes from `post_text` when a client sends it,
        // even though `post_body` is what was validated.
        let body = match &self.post_text {
            Some(text) => text.trim().to_string(),
            None => post_body,
        };

        Ok(ValidNewPost { title, body })
    }
}

// ============================================================================
// Upgrade Status
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UpgradeForm {
    #[serde(default)]
    pub admin_pwd: String,
}
