//! Login, registration and password reset pages

use maud::{html, Markup};

use super::{layout, text_field};
use crate::{
    forms::FieldErrors,
    models::user::{LoginForm, SignUpForm},
};

pub fn login(form: &LoginForm, errors: &FieldErrors) -> Markup {
    layout(
        "Login",
        false,
        html! {
            form method="post" action="/login" {
                (text_field(errors, "Email", "email", "email", &form.email))
                (text_field(errors, "Password", "password", "password", ""))
                button type="submit" { "Login" }
            }
            p {
                a href="/registration" { "Create an account" }
                " · "
                a href="/resetpassword" { "Forgot your password?" }
            }
        },
    )
}

pub fn signup(form: &SignUpForm, errors: &FieldErrors) -> Markup {
    layout(
        "Registration",
        false,
        html! {
            form method="post" action="/registration" {
                (text_field(errors, "First name", "first_name", "text", &form.first_name))
                (text_field(errors, "Last name", "last_name", "text", &form.last_name))
                (text_field(errors, "Email", "email", "email", &form.email))
                (text_field(errors, "Password", "password", "password", ""))
                (text_field(errors, "Confirm password", "confirm_password", "password", ""))
                button type="submit" { "Register" }
            }
            p { "Already registered? " a href="/login" { "Login" } }
        },
    )
}

pub fn reset_password(signed_in: bool) -> Markup {
    layout(
        "Reset password",
        signed_in,
        html! {
            form method="get" action="/resetpassword" {
                (text_field(&FieldErrors::new(), "Email", "email", "email", ""))
                button type="submit" disabled { "Send reset link" }
            }
            p { "Password reset by email is not available yet. Please contact a librarian." }
        },
    )
}
