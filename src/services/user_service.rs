// ============================================================================
// USER SERVICE - Gestión de usuarios (/User)
// ============================================================================

use crate::error::ApiResult;
use crate::models::{CommonResponse, User, UserCreateRequest, UserUpdateRequest};
use crate::services::api_client::ApiClient;
use crate::utils::USERS_ENDPOINT;

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

fn endpoint(path: &str) -> String {
    format!("{}{}", USERS_ENDPOINT, path)
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_users(&self) -> ApiResult<Vec<User>> {
        self.api
            .get::<CommonResponse<Vec<User>>>(&endpoint("/all"))
            .await?
            .into_data()
    }

    pub async fn get_user_by_id(&self, id: i64) -> ApiResult<User> {
        self.api
            .get::<CommonResponse<User>>(&endpoint(&format!("/{}", id)))
            .await?
            .into_data()
    }

    pub async fn create_user(&self, user: &UserCreateRequest) -> ApiResult<User> {
        log::info!("👤 [USERS] Creando usuario: {}", user.username);
        self.api
            .post::<CommonResponse<User>, _>(USERS_ENDPOINT, user)
            .await?
            .into_data()
    }

    pub async fn update_user(&self, user: &UserUpdateRequest) -> ApiResult<User> {
        self.api
            .put::<CommonResponse<User>, _>(&endpoint(&format!("/{}", user.id)), user)
            .await?
            .into_data()
    }

    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        log::info!("🗑️ [USERS] Eliminando usuario {}", id);
        self.api
            .delete::<CommonResponse<serde_json::Value>>(&endpoint(&format!("/{}", id)))
            .await?
            .into_unit()
    }

    /// Activa/desactiva; el backend espera un objeto JSON vacío
    pub async fn toggle_user_status(&self, id: i64) -> ApiResult<User> {
        self.api
            .put::<CommonResponse<User>, _>(
                &endpoint(&format!("/{}/toggle-status", id)),
                &serde_json::json!({}),
            )
            .await?
            .into_data()
    }
}
