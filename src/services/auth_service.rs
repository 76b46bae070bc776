// ============================================================================
// AUTH SERVICE - Login / logout contra el backend + estado de sesión
// ============================================================================

use crate::error::{ApiError, ApiResult};
use crate::models::{CommonResponse, LoginRequest, LoginResponse, TokenClaims};
use crate::services::api_client::ApiClient;
use crate::state::AuthState;
use crate::utils::LOGIN_ENDPOINT;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    auth: AuthState,
}

impl AuthService {
    pub fn new(api: ApiClient, auth: AuthState) -> Self {
        Self { api, auth }
    }

    /// Perform login with email and password.
    ///
    /// Only a successful envelope carrying a token touches the session; any
    /// failure is returned unchanged and leaves the previous state in place.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<CommonResponse<LoginResponse>> {
        log::info!("🔐 [AUTH] Iniciando sesión para: {}", credentials.email);

        let response: CommonResponse<LoginResponse> =
            self.api.post(LOGIN_ENDPOINT, credentials).await?;

        if !response.success {
            return Err(ApiError::Rejected {
                message: response.message.clone().unwrap_or_else(|| "Login failed".to_string()),
            });
        }
        let token = response
            .data
            .as_ref()
            .map(|data| data.jwt_token.clone())
            .ok_or_else(|| ApiError::Parse("login response without token".to_string()))?;

        self.auth.set_token(&token)?;
        log::info!("✅ [AUTH] Login correcto");
        Ok(response)
    }

    /// Sin efecto de red; nunca falla
    pub fn logout(&self) {
        self.auth.clear();
    }

    pub fn get_token(&self) -> Option<String> {
        self.auth.get_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn get_current_user(&self) -> Option<String> {
        self.auth.get_current_user()
    }

    pub fn claims(&self) -> Option<TokenClaims> {
        self.auth.claims()
    }

    pub fn auth_state(&self) -> &AuthState {
        &self.auth
    }
}
