//! Dobles de prueba compartidos por los tests de servicios.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use async_trait::async_trait;
use futures::channel::oneshot;
use crate::config::DEFAULT_TOKEN_STORAGE_KEY;
use crate::error::ApiError;
use crate::router::{Navigator, Route};
use crate::services::api_client::ApiClient;
use crate::services::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::state::AuthState;
use crate::utils::{FixedClock, MemoryStorage};

pub const BASE_URL: &str = "http://api.test";

enum Scripted {
    Ready(Result<HttpResponse, ApiError>),
    Deferred(oneshot::Receiver<HttpResponse>),
}

/// Transporte con respuestas guionizadas por (método, endpoint); registra cada petición
#[derive(Default)]
pub struct ScriptedTransport {
    scripts: RefCell<HashMap<(HttpMethod, String), VecDeque<Scripted>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

fn scripted_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        status_text: "Scripted".to_string(),
        body: body.to_string(),
    }
}

impl ScriptedTransport {
    fn push(&self, method: HttpMethod, endpoint: &str, script: Scripted) {
        self.scripts
            .borrow_mut()
            .entry((method, endpoint.to_string()))
            .or_default()
            .push_back(script);
    }

    pub fn respond(&self, method: HttpMethod, endpoint: &str, status: u16, body: &str) {
        self.push(method, endpoint, Scripted::Ready(Ok(scripted_response(status, body))));
    }

    pub fn fail(&self, method: HttpMethod, endpoint: &str, error: ApiError) {
        self.push(method, endpoint, Scripted::Ready(Err(error)));
    }

    /// La respuesta queda pendiente hasta llamar al closure devuelto
    pub fn defer(&self, method: HttpMethod, endpoint: &str) -> impl FnOnce(u16, &str) {
        let (tx, rx) = oneshot::channel();
        self.push(method, endpoint, Scripted::Deferred(rx));
        move |status: u16, body: &str| {
            let _ = tx.send(scripted_response(status, body));
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        let endpoint = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        let script = self
            .scripts
            .borrow_mut()
            .get_mut(&(request.method, endpoint.clone()))
            .and_then(|queue| queue.pop_front());

        match script {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .map_err(|_| ApiError::Network("scripted response dropped".to_string())),
            None => Err(ApiError::Network(format!(
                "no scripted response for {} {}",
                request.method, endpoint
            ))),
        }
    }
}

/// Cliente contra un `ScriptedTransport` nuevo
pub fn scripted_client() -> (Rc<ScriptedTransport>, ApiClient) {
    let transport = Rc::new(ScriptedTransport::default());
    let client = ApiClient::new(BASE_URL, transport.clone());
    (transport, client)
}

/// Sesión en memoria con reloj fijo
pub fn memory_auth(now_secs: i64) -> (MemoryStorage, FixedClock, AuthState) {
    let storage = MemoryStorage::new();
    let clock = FixedClock::at(now_secs);
    let auth = AuthState::new(
        Rc::new(storage.clone()),
        Rc::new(clock.clone()),
        DEFAULT_TOKEN_STORAGE_KEY,
    );
    (storage, clock, auth)
}

/// Navegador que solo apunta las rutas visitadas
#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Route> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.borrow_mut().push(route);
    }
}
