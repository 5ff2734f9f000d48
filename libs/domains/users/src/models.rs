use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A directory entry.
///
/// `password` is stored and returned exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password: Option<String>,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Caller-chosen id, honoured under [`IdPolicy::AssignIfAbsent`]
    pub id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(required, custom(function = "not_blank"))]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `PUT /users/{id}`. Replaces every field; an `id` in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(required, custom(function = "not_blank"))]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// How `create` picks the id of a new user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum IdPolicy {
    /// Keep a caller-supplied id, generate one otherwise
    #[default]
    AssignIfAbsent,
    /// Ignore any caller-supplied id
    AlwaysGenerate,
}

impl IdPolicy {
    pub fn resolve(&self, requested: Option<Uuid>) -> Uuid {
        match (self, requested) {
            (IdPolicy::AssignIfAbsent, Some(id)) => id,
            _ => Uuid::new_v4(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be empty".into()));
    }
    Ok(())
}

impl User {
    /// Builds the stored record for a validated [`CreateUser`].
    pub fn from_create(id: Uuid, input: CreateUser) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email.unwrap_or_default(),
            password: input.password,
        }
    }

    /// Builds the full replacement for the record at `id`.
    pub fn from_update(id: Uuid, input: UpdateUser) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email.unwrap_or_default(),
            password: input.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: Uuid::nil(),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: "ada@example.com".into(),
            password: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["email"], "ada@example.com");
        assert!(json["password"].is_null());
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_create_user_requires_email() {
        assert!(CreateUser::default().validate().is_err());

        let blank = CreateUser {
            email: Some("   ".into()),
            ..Default::default()
        };
        let errors = blank.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let ok = CreateUser {
            email: Some("a@b.c".into()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_update_user_requires_email() {
        assert!(UpdateUser::default().validate().is_err());
        let ok = UpdateUser {
            email: Some("x".into()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_update_user_ignores_body_id() {
        let input: UpdateUser = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","email":"e@x.io"}"#,
        )
        .unwrap();
        let id = Uuid::new_v4();
        assert_eq!(User::from_update(id, input).id, id);
    }

    #[test]
    fn test_id_policy_parse_and_default() {
        assert_eq!(IdPolicy::default(), IdPolicy::AssignIfAbsent);
        assert_eq!(IdPolicy::from_str("always-generate").unwrap(), IdPolicy::AlwaysGenerate);
        assert_eq!(IdPolicy::from_str("Assign-If-Absent").unwrap(), IdPolicy::AssignIfAbsent);
        assert_eq!(IdPolicy::AlwaysGenerate.to_string(), "always-generate");
        assert!(IdPolicy::from_str("sometimes").is_err());
    }

    #[test]
    fn test_id_policy_resolve() {
        let supplied = Uuid::new_v4();
        assert_eq!(IdPolicy::AssignIfAbsent.resolve(Some(supplied)), supplied);
        assert_ne!(IdPolicy::AlwaysGenerate.resolve(Some(supplied)), supplied);
        assert_ne!(IdPolicy::AssignIfAbsent.resolve(None), Uuid::nil());
    }
}
