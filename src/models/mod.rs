pub mod envelope;
pub mod auth;
pub mod book;
pub mod genre;
pub mod user;
pub mod dashboard;

pub use envelope::CommonResponse;
pub use auth::{LoginRequest, LoginResponse, TokenClaims};
pub use book::{Book, BookCreateRequest, BookUpdateRequest, LanguageType, SaveProgressRequest};
pub use genre::{AddGenreRequest, Genre, GenreBook};
pub use user::{User, UserCreateRequest, UserRole, UserUpdateRequest};
pub use dashboard::{ActivityItem, ActivityType, DashboardStats};
