//! User model and authentication forms

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// User row from the `users` table
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Argon2 PHC string
    pub password: String,
    pub is_verified: bool,
}

/// Login form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "The email field is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, max = 32, message = "The password must be between 6 and 32 characters"))]
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignUpForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "The first name field is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The last name field is required"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, max = 32, message = "The password must be between 6 and 32 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(must_match(other = "password", message = "The password does not match the confirm password"))]
    pub confirm_password: String,
}

impl SignUpForm {
    /// Names and email without surrounding whitespace. Passwords are kept verbatim.
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self.clone()
        }
    }

    /// Copy of the form safe to render back: passwords are never echoed
    pub fn without_passwords(&self) -> Self {
        Self {
            password: String::new(),
            confirm_password: String::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validate_form;

    fn signup() -> SignUpForm {
        SignUpForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.org".into(),
            password: "engine42".into(),
            confirm_password: "engine42".into(),
        }
    }

    #[test]
    fn test_valid_signup() {
        assert!(validate_form(&signup()).is_ok());
    }

    #[test]
    fn test_signup_password_mismatch() {
        let form = SignUpForm {
            confirm_password: "engine43".into(),
            ..signup()
        };
        let errors = validate_form(&form).unwrap_err();
        assert!(errors.get("confirm_password").is_some());
        assert!(errors.get("password").is_none());
    }

    #[test]
    fn test_signup_required_fields() {
        let errors = validate_form(&SignUpForm::default()).unwrap_err();
        for field in ["first_name", "last_name", "email", "password"] {
            assert!(errors.get(field).is_some(), "{} should be flagged", field);
        }
    }

    #[test]
    fn test_login_password_length() {
        let short = LoginForm {
            email: "ada@example.org".into(),
            password: "abc".into(),
        };
        let errors = validate_form(&short).unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("The password must be between 6 and 32 characters")
        );

        let long = LoginForm {
            email: "ada@example.org".into(),
            password: "x".repeat(33),
        };
        assert!(validate_form(&long).is_err());
    }

    #[test]
    fn test_login_requires_email() {
        let form = LoginForm {
            email: String::new(),
            password: "engine42".into(),
        };
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.get("email"), Some("The email field is required"));
    }

    #[test]
    fn test_blank_names_rejected_after_trimming() {
        let form = SignUpForm {
            first_name: "   ".into(),
            last_name: " ".into(),
            email: " ada@example.org ".into(),
            password: " engine42 ".into(),
            confirm_password: " engine42 ".into(),
        }
        .trimmed();
        assert_eq!(form.email, "ada@example.org");
        assert_eq!(form.password, " engine42 ");
        let errors = validate_form(&form).unwrap_err();
        assert!(errors.get("first_name").is_some());
        assert!(errors.get("last_name").is_some());
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn test_without_passwords() {
        let form = signup().without_passwords();
        assert!(form.password.is_empty());
        assert!(form.confirm_password.is_empty());
        assert_eq!(form.email, "ada@example.org");
    }
}
