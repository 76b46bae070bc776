// ============================================================================
// BOOK SERVICE - CRUD de libros (/Books)
// ============================================================================

use crate::error::{ApiError, ApiResult};
use crate::models::{Book, BookCreateRequest, BookUpdateRequest, CommonResponse, SaveProgressRequest};
use crate::services::api_client::ApiClient;
use crate::services::transport::{FileUpload, MultipartForm};
use crate::utils::BOOKS_ENDPOINT;

#[derive(Clone)]
pub struct BookService {
    api: ApiClient,
}

fn endpoint(path: &str) -> String {
    format!("{}{}", BOOKS_ENDPOINT, path)
}

impl BookService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_books(&self) -> ApiResult<Vec<Book>> {
        self.api
            .get::<CommonResponse<Vec<Book>>>(&endpoint("/getAllBooks"))
            .await?
            .into_data()
    }

    pub async fn get_book_by_id(&self, id: i64) -> ApiResult<Book> {
        self.api
            .get::<CommonResponse<Book>>(&endpoint(&format!("/{}", id)))
            .await?
            .into_data()
    }

    /// Alta con PDF opcional (multipart)
    pub async fn create_book(&self, book: &BookCreateRequest, pdf_file: Option<FileUpload>) -> ApiResult<Book> {
        log::info!("📚 [BOOKS] Creando libro: {}", book.title);
        self.api
            .post_form::<CommonResponse<Book>>(&endpoint("/bookupload"), create_form(book, pdf_file))
            .await?
            .into_data()
    }

    pub async fn update_book(&self, book: &BookUpdateRequest, pdf_file: Option<FileUpload>) -> ApiResult<Book> {
        log::info!("📝 [BOOKS] Actualizando libro {}", book.id);
        self.api
            .put_form::<CommonResponse<Book>>(
                &endpoint(&format!("/updateBook/{}", book.id)),
                update_form(book, pdf_file),
            )
            .await?
            .into_data()
    }

    pub async fn delete_book(&self, id: i64) -> ApiResult<()> {
        log::info!("🗑️ [BOOKS] Eliminando libro {}", id);
        self.api
            .delete::<CommonResponse<serde_json::Value>>(&endpoint(&format!("/deleteBook/{}", id)))
            .await?
            .into_unit()
    }

    pub async fn search_books(&self, query: &str) -> ApiResult<Vec<Book>> {
        let query = serde_urlencoded::to_string(&[("q", query)])
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.api
            .get::<CommonResponse<Vec<Book>>>(&endpoint(&format!("/search?{}", query)))
            .await?
            .into_data()
    }

    pub async fn save_progress(&self, book_id: i64, current_page: u32, total_pages: u32) -> ApiResult<()> {
        let request = SaveProgressRequest {
            book_id,
            current_page,
            total_pages,
        };
        self.api
            .post::<CommonResponse<serde_json::Value>, _>(&endpoint("/save-progress"), &request)
            .await?
            .into_unit()
    }
}

// Alta: campos en minúscula y géneros indexados `genreIds[i]`
fn create_form(book: &BookCreateRequest, pdf_file: Option<FileUpload>) -> MultipartForm {
    let mut form = MultipartForm::new()
        .text("title", book.title.as_str())
        .text("author", book.author.as_str())
        .text("rating", book.rating.to_string())
        .text("description", book.description.clone().unwrap_or_default())
        .text("language", book.language.as_str())
        .text("image", book.image.clone().unwrap_or_default());
    for (index, genre_id) in book.genre_ids.iter().enumerate() {
        form = form.text(format!("genreIds[{}]", index), genre_id.to_string());
    }
    if let Some(file) = pdf_file {
        form = form.file("pdfFile", file);
    }
    form
}

// Edición: campos en PascalCase y `GenreIds` repetido
fn update_form(book: &BookUpdateRequest, pdf_file: Option<FileUpload>) -> MultipartForm {
    let mut form = MultipartForm::new()
        .text("Title", book.title.clone().unwrap_or_default())
        .text("Author", book.author.clone().unwrap_or_default())
        .text("Rating", book.rating.map(|r| r.to_string()).unwrap_or_default())
        .text("Description", book.description.clone().unwrap_or_default())
        .text("Language", book.language.map(|l| l.as_str()).unwrap_or_default())
        .text("Image", book.image.clone().unwrap_or_default());
    for genre_id in book.genre_ids.iter().flatten() {
        form = form.text("GenreIds", genre_id.to_string());
    }
    if let Some(file) = pdf_file {
        form = form.file("pdfFile", file);
    }
    form
}
