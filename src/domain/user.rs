//! User domain entity, request/response DTOs and their mappings.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// User domain entity.
///
/// `id` is absent until the store persists the entity and generates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Apply the non-absent fields of an update request.
    pub fn apply(mut self, request: UpdateUserRequest) -> Self {
        if let Some(name) = request.name {
            self.name = name;
        }
        if let Some(email) = request.email {
            self.email = email;
        }
        if let Some(password) = request.password {
            self.password = password;
        }
        self
    }
}

/// User creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    /// Display name
    #[validate(
        length(min = 3, max = 50, message = "must be between 3 and 50 characters"),
        custom(function = validate_trimmed)
    )]
    #[schema(example = "Valdir Cezar")]
    pub name: String,
    /// E-mail address
    #[validate(email(message = "invalid email address"))]
    #[schema(example = "valdir@mail.com")]
    pub email: String,
    /// Password
    #[validate(length(min = 3, max = 20, message = "must be between 3 and 20 characters"))]
    #[schema(example = "123")]
    pub password: String,
}

/// User update request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(
        length(min = 3, max = 50, message = "must be between 3 and 50 characters"),
        custom(function = validate_trimmed)
    )]
    #[schema(example = "Valdir Cezar")]
    pub name: Option<String>,
    /// New e-mail address
    #[validate(email(message = "invalid email address"))]
    #[schema(example = "valdir@mail.com")]
    pub email: Option<String>,
    /// New password
    #[validate(length(min = 3, max = 20, message = "must be between 3 and 20 characters"))]
    #[schema(example = "123")]
    pub password: Option<String>,
}

/// User response returned at the HTTP boundary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Store-generated identifier
    #[schema(example = "6639a1d2e4b0f61c9a8b4567")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<UserRequest> for User {
    fn from(request: UserRequest) -> Self {
        Self {
            id: None,
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}

/// Reject values carrying leading or trailing whitespace.
fn validate_trimmed(value: &str) -> Result<(), ValidationError> {
    if value != value.trim() {
        let mut error = ValidationError::new("trimmed");
        error.message = Some(Cow::Borrowed(
            "field cannot have blank spaces at the beginning or at end",
        ));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> UserRequest {
        UserRequest {
            name: name.to_string(),
            email: "valdir@mail.com".to_string(),
            password: "123".to_string(),
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(request("Valdir Cezar").validate().is_ok());
    }

    #[test]
    fn padded_name_fails_validation() {
        let errors = request("Valdir ").validate().unwrap_err();
        let field_errors = errors.field_errors();
        let name_errors = field_errors.get("name").expect("name must be rejected");
        assert_eq!(
            name_errors[0].message.as_deref(),
            Some("field cannot have blank spaces at the beginning or at end")
        );
    }

    #[test]
    fn short_name_fails_validation() {
        assert!(request("Va").validate().is_err());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let user = User {
            id: Some("abc".to_string()),
            name: "Valdir".to_string(),
            email: "valdir@mail.com".to_string(),
            password: "123".to_string(),
        };

        let updated = user.apply(UpdateUserRequest {
            name: Some("Cezar".to_string()),
            ..Default::default()
        });

        assert_eq!(updated.name, "Cezar");
        assert_eq!(updated.email, "valdir@mail.com");
        assert_eq!(updated.password, "123");
        assert_eq!(updated.id.as_deref(), Some("abc"));
    }

    #[test]
    fn response_mirrors_entity_fields() {
        let user = User {
            id: Some("abc".to_string()),
            name: "Valdir".to_string(),
            email: "valdir@mail.com".to_string(),
            password: "123".to_string(),
        };

        let response = UserResponse::from(user);
        assert_eq!(response.id, "abc");
        assert_eq!(response.name, "Valdir");
    }
}
