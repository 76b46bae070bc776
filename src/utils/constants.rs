/// Rutas base de los recursos del backend (relativas a `AppConfig::base_url`)
pub const LOGIN_ENDPOINT: &str = "/User/Login";
pub const BOOKS_ENDPOINT: &str = "/Books";
// Los géneros cuelgan del controlador de libros
pub const GENRES_ENDPOINT: &str = "/Books";
pub const USERS_ENDPOINT: &str = "/User";
pub const DASHBOARD_ENDPOINT: &str = "/dashboard";

pub const JSON_CONTENT_TYPE: &str = "application/json";
