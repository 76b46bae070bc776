// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// URL base + headers de negociación. No reintenta, no desenvuelve envelopes,
// no traduce errores: todo fallo llega tal cual al que llamó.
// ============================================================================

use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::services::transport::{
    FetchTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartForm, RequestBody,
};
use crate::state::AuthState;
use crate::utils::JSON_CONTENT_TYPE;

/// Cliente API - SOLO comunicación HTTP
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    credentials: Option<AuthState>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            credentials: None,
        }
    }

    /// Cliente contra `fetch` del navegador con la URL de la configuración
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.base_url(), Rc::new(FetchTransport))
    }

    /// Adjunta `Authorization: Bearer <token>` cuando la sesión tiene token
    pub fn with_credentials(mut self, auth: AuthState) -> Self {
        self.credentials = Some(auth);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.dispatch(HttpMethod::Get, endpoint, RequestBody::Empty).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(HttpMethod::Post, endpoint, json_body(body)?).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(HttpMethod::Put, endpoint, json_body(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.dispatch(HttpMethod::Delete, endpoint, RequestBody::Empty).await
    }

    /// POST multipart (subida de ficheros)
    pub async fn post_form<T: DeserializeOwned>(&self, endpoint: &str, form: MultipartForm) -> ApiResult<T> {
        self.dispatch(HttpMethod::Post, endpoint, RequestBody::Multipart(form)).await
    }

    /// PUT multipart (subida de ficheros)
    pub async fn put_form<T: DeserializeOwned>(&self, endpoint: &str, form: MultipartForm) -> ApiResult<T> {
        self.dispatch(HttpMethod::Put, endpoint, RequestBody::Multipart(form)).await
    }

    fn headers(&self, body: &RequestBody) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), JSON_CONTENT_TYPE.to_string())];
        // Multipart sin Content-Type para que el transporte genere el boundary
        if !matches!(body, RequestBody::Multipart(_)) {
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        if let Some(token) = self.credentials.as_ref().and_then(|auth| auth.get_token()) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        headers
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: RequestBody,
    ) -> ApiResult<T> {
        let request = HttpRequest {
            method,
            url: self.url(endpoint),
            headers: self.headers(&body),
            body,
        };

        log::debug!("🌐 [API] {} {}", method, request.url);

        let response = self.transport.send(request).await?;
        if !response.ok() {
            log::warn!("⚠️ [API] {} {} → HTTP {}", method, endpoint, response.status);
            return Err(ApiError::Http {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }
        parse_body(&response)
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> ApiResult<RequestBody> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Serialization(e.to_string()))
}

// Un 2xx sin body se lee como `null` (sirve para `()` y `Option<_>`)
fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> ApiResult<T> {
    let text = response.body.trim();
    let text = if text.is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}
