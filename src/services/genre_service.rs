// ============================================================================
// GENRE SERVICE - Géneros (cuelgan del controlador /Books)
// ============================================================================

use crate::error::ApiResult;
use crate::models::{AddGenreRequest, CommonResponse, Genre};
use crate::services::api_client::ApiClient;
use crate::utils::GENRES_ENDPOINT;

#[derive(Clone)]
pub struct GenreService {
    api: ApiClient,
}

fn endpoint(path: &str) -> String {
    format!("{}{}", GENRES_ENDPOINT, path)
}

impl GenreService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_genres(&self) -> ApiResult<Vec<Genre>> {
        self.api
            .get::<CommonResponse<Vec<Genre>>>(&endpoint("/getAllGenres"))
            .await?
            .into_data()
    }

    pub async fn get_genre_by_id(&self, id: i64) -> ApiResult<Genre> {
        self.api
            .get::<CommonResponse<Genre>>(&endpoint(&format!("/getGenreById/{}", id)))
            .await?
            .into_data()
    }

    pub async fn add_genre(&self, genre: &AddGenreRequest) -> ApiResult<Genre> {
        log::info!("🏷️ [GENRES] Creando género: {}", genre.name);
        self.api
            .post::<CommonResponse<Genre>, _>(&endpoint("/addGenre"), genre)
            .await?
            .into_data()
    }

    pub async fn update_genre(&self, id: i64, genre: &AddGenreRequest) -> ApiResult<Genre> {
        self.api
            .put::<CommonResponse<Genre>, _>(&endpoint(&format!("/updateGenre/{}", id)), genre)
            .await?
            .into_data()
    }

    /// Borra en el backend; la lista local se recarga después, nunca antes
    pub async fn delete_genre(&self, id: i64) -> ApiResult<()> {
        log::info!("🗑️ [GENRES] Eliminando género {}", id);
        self.api
            .delete::<CommonResponse<serde_json::Value>>(&endpoint(&format!("/deleteGenre/{}", id)))
            .await?
            .into_unit()
    }
}
