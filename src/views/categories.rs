//! Category pages

use maud::{html, Markup};

use super::{field_error, layout, pagination_controls, search_box, text_field, FormMode};
use crate::{
    forms::FieldErrors,
    models::category::{Category, CategoryForm},
    pagination::Pagination,
};

pub fn form(mode: FormMode, form: &CategoryForm, errors: &FieldErrors) -> Markup {
    let (title, action) = match mode {
        FormMode::Create => ("New category".to_string(), "/category/store".to_string()),
        FormMode::Edit(id) => ("Edit category".to_string(), format!("/category/{}/update", id)),
    };

    layout(
        &title,
        true,
        html! {
            form method="post" action=(action) {
                (text_field(errors, "Name", "name", "text", &form.name))
                p {
                    label {
                        input type="checkbox" name="status" checked[form.status];
                        " Active"
                    }
                    (field_error(errors, "status"))
                }
                button type="submit" { "Save" }
            }
            p { a href="/category/list" { "Back to categories" } }
        },
    )
}

/// Category table. `pagination` is absent for search results.
pub fn list(categories: &[Category], pagination: Option<&Pagination>, search: Option<&str>) -> Markup {
    layout(
        "Categories",
        true,
        html! {
            p { a href="/category/create" { "New category" } }
            (search_box("/category/search", search))
            @if categories.is_empty() {
                p { "No categories found." }
            } @else {
                table {
                    thead {
                        tr { th { "#" } th { "Name" } th { "Status" } th { "Actions" } }
                    }
                    tbody {
                        @for category in categories {
                            tr {
                                td { (category.id) }
                                td { (category.name) }
                                td { @if category.status { "Active" } @else { "Inactive" } }
                                td {
                                    a href={ "/category/" (category.id) "/edit" } { "Edit" }
                                    " "
                                    form.inline method="post" action={ "/category/" (category.id) "/delete" } {
                                        button type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            @if let Some(pagination) = pagination {
                (pagination_controls(pagination))
            }
        },
    )
}
