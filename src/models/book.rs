use serde::{Deserialize, Serialize};
use crate::models::genre::Genre;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageType {
    English,
    Hindi,
    Marathi,
}

impl LanguageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageType::English => "English",
            LanguageType::Hindi => "Hindi",
            LanguageType::Marathi => "Marathi",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub rating: f64,
    #[serde(default)]
    pub description: String,
    pub language: LanguageType,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub pdf_file: Option<String>,
    #[serde(default)]
    pub pdf_file_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreateRequest {
    pub title: String,
    pub author: String,
    pub rating: f64,
    pub description: Option<String>,
    pub language: LanguageType,
    pub image: Option<String>,
    pub genre_ids: Vec<i64>,
}

/// Actualización parcial: solo `id` es obligatorio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdateRequest {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub language: Option<LanguageType>,
    pub image: Option<String>,
    pub genre_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProgressRequest {
    pub book_id: i64,
    pub current_page: u32,
    pub total_pages: u32,
}
