//! Catalog service: categories and books

use crate::{
    config::PaginationConfig,
    error::AppResult,
    forms::{validate_form, FieldErrors},
    models::{
        book::{Book, BookForm, BookWithCategory},
        category::{Category, CategoryForm},
    },
    pagination::Pagination,
    repository::{books::BookRecord, Repository},
};

pub const CATEGORY_LIST_PATH: &str = "/category/list";
pub const BOOK_LIST_PATH: &str = "/book/list";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    pagination: PaginationConfig,
}

/// Escape LIKE wildcards so a search term only ever matches as a literal substring
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len());
    for c in term.trim().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern
}

/// Validate an already trimmed book form. `current_image` is the stored image when updating.
fn book_record<'a>(form: &'a BookForm, current_image: Option<&'a str>) -> Result<BookRecord<'a>, FieldErrors> {
    let mut errors = match validate_form(form) {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors,
    };

    let image = match (form.image.as_str(), current_image) {
        ("", Some(current)) => current,
        ("", None) => {
            errors.insert("image", "The image field is required");
            ""
        }
        (image, _) => image,
    };

    errors.into_result()?;

    Ok(BookRecord {
        // validated as present above
        category_id: form.category_id.unwrap_or_default(),
        book_name: &form.book_name,
        author_name: &form.author_name,
        details: &form.details,
        image,
        status: form.status,
    })
}

impl CatalogService {
    pub fn new(repository: Repository, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    // Categories

    pub async fn list_categories(&self, page: i64) -> AppResult<(Vec<Category>, Pagination)> {
        let total = self.repository.categories.count().await?;
        let pagination = Pagination::new(CATEGORY_LIST_PATH, page, self.pagination.categories, total);
        let categories = self
            .repository
            .categories
            .list_page(pagination.limit, pagination.offset)
            .await?;
        Ok((categories, pagination))
    }

    pub async fn search_categories(&self, term: &str) -> AppResult<Vec<Category>> {
        self.repository.categories.search(&like_pattern(term)).await
    }

    pub async fn all_categories(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list_all().await
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await
    }

    pub async fn create_category(&self, form: &CategoryForm) -> AppResult<Result<Category, FieldErrors>> {
        let form = form.trimmed();
        if let Err(errors) = validate_form(&form) {
            return Ok(Err(errors));
        }
        let category = self.repository.categories.create(&form).await?;
        tracing::info!(category_id = category.id, "Category created");
        Ok(Ok(category))
    }

    pub async fn update_category(
        &self,
        id: i32,
        form: &CategoryForm,
    ) -> AppResult<Result<Category, FieldErrors>> {
        // 404 before validation, like the edit page
        self.repository.categories.get_by_id(id).await?;

        let form = form.trimmed();
        if let Err(errors) = validate_form(&form) {
            return Ok(Err(errors));
        }
        let category = self.repository.categories.update(id, &form).await?;
        tracing::info!(category_id = id, "Category updated");
        Ok(Ok(category))
    }

    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        self.repository.categories.get_by_id(id).await?;
        self.repository.categories.delete(id).await?;
        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }

    // Books

    pub async fn list_books(&self, page: i64) -> AppResult<(Vec<BookWithCategory>, Pagination)> {
        let total = self.repository.books.count().await?;
        let pagination = Pagination::new(BOOK_LIST_PATH, page, self.pagination.books, total);
        let books = self
            .repository
            .books
            .list_page(pagination.limit, pagination.offset)
            .await?;
        Ok((books, pagination))
    }

    pub async fn search_books(&self, term: &str) -> AppResult<Vec<BookWithCategory>> {
        self.repository.books.search(&like_pattern(term)).await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn get_book_details(&self, id: i32) -> AppResult<BookWithCategory> {
        self.repository.books.get_with_category(id).await
    }

    pub async fn create_book(&self, form: &BookForm) -> AppResult<Result<Book, FieldErrors>> {
        let form = form.trimmed();
        let record = match book_record(&form, None) {
            Ok(record) => record,
            Err(errors) => return Ok(Err(errors)),
        };
        let book = self.repository.books.create(&record).await?;
        tracing::info!(book_id = book.id, "Book created");
        Ok(Ok(book))
    }

    pub async fn update_book(&self, id: i32, form: &BookForm) -> AppResult<Result<Book, FieldErrors>> {
        let current = self.repository.books.get_by_id(id).await?;

        let form = form.trimmed();
        let record = match book_record(&form, Some(&current.image)) {
            Ok(record) => record,
            Err(errors) => return Ok(Err(errors)),
        };
        let book = self.repository.books.update(id, &record).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(Ok(book))
    }

    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.get_by_id(id).await?;
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
