//! Authentication and registration service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    forms::{validate_form, FieldErrors},
    models::user::{LoginForm, SignUpForm, User},
    repository::Repository,
};

/// Hash a password using Argon2 with a fresh random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Match a looked-up user against the submitted password.
/// The error names the field the login form should flag.
pub fn check_credentials(user: Option<User>, password: &str) -> AppResult<Result<User, FieldErrors>> {
    let Some(user) = user else {
        return Ok(Err(FieldErrors::single("email", "Invalid email given.")));
    };

    if !verify_password(&user.password, password)? {
        return Ok(Err(FieldErrors::single("password", "Invalid password given.")));
    }

    Ok(Ok(user))
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Authenticate by email and password.
    /// The inner error carries the per-field messages to show on the login form.
    pub async fn authenticate(&self, form: &LoginForm) -> AppResult<Result<User, FieldErrors>> {
        if let Err(errors) = validate_form(form) {
            return Ok(Err(errors));
        }

        let user = self.repository.users.get_by_email(form.email.trim()).await?;
        let outcome = check_credentials(user, &form.password)?;

        match &outcome {
            Ok(user) => tracing::info!(user_id = user.id, "User signed in"),
            Err(_) => tracing::info!("Rejected sign-in attempt"),
        }

        Ok(outcome)
    }

    /// Register a new account
    pub async fn register(&self, form: &SignUpForm) -> AppResult<Result<User, FieldErrors>> {
        let form = form.trimmed();
        if let Err(errors) = validate_form(&form) {
            return Ok(Err(errors));
        }

        if self.repository.users.email_exists(&form.email).await? {
            return Ok(Err(FieldErrors::single(
                "email",
                "An account with this email already exists",
            )));
        }

        let password_hash = hash_password(&form.password)?;
        let user = self.repository.users.create(&form, &password_hash).await?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(Ok(user))
    }
}
