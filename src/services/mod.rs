pub mod transport;
pub mod api_client;
pub mod auth_service;
pub mod book_service;
pub mod genre_service;
pub mod user_service;
pub mod dashboard_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use transport::{FetchTransport, FileUpload, FormValue, HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartForm, RequestBody};
pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use book_service::BookService;
pub use genre_service::GenreService;
pub use user_service::UserService;
pub use dashboard_service::DashboardService;
