// ============================================================================
// APP - Contexto de la consola (una instancia por aplicación)
// ============================================================================
// Construye y conecta: configuración → AuthState (hidratado desde storage) →
// ApiClient → servicios → Router. No hay singletons: quien necesite sesión o
// servicios recibe un clon de este contexto.
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::LoginRequest;
use crate::router::{HistoryNavigator, Navigator, Route, Router};
use crate::services::{
    ApiClient, AuthService, BookService, DashboardService, FetchTransport, GenreService, HttpTransport,
    UserService,
};
use crate::state::AuthState;

#[derive(Clone)]
pub struct AdminConsole {
    config: AppConfig,
    auth: AuthService,
    books: BookService,
    genres: GenreService,
    users: UserService,
    dashboard: DashboardService,
    router: Router,
    navigator: Rc<dyn Navigator>,
}

impl AdminConsole {
    pub fn new(
        config: AppConfig,
        auth: AuthState,
        transport: Rc<dyn HttpTransport>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let mut api = ApiClient::new(config.base_url(), transport);
        if config.attach_credentials {
            api = api.with_credentials(auth.clone());
        }

        log::info!(
            "📚 [APP] Consola lista contra {} (sesión previa: {})",
            api.base_url(),
            auth.get_token().is_some()
        );

        Self {
            auth: AuthService::new(api.clone(), auth.clone()),
            books: BookService::new(api.clone()),
            genres: GenreService::new(api.clone()),
            users: UserService::new(api.clone()),
            dashboard: DashboardService::new(api),
            router: Router::new(auth, navigator.clone()),
            navigator,
            config,
        }
    }

    /// localStorage + fetch + history del navegador
    pub fn browser(config: &AppConfig) -> Self {
        Self::new(
            config.clone(),
            AuthState::browser(config),
            Rc::new(FetchTransport),
            Rc::new(HistoryNavigator),
        )
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn auth_state(&self) -> &AuthState {
        self.auth.auth_state()
    }

    pub fn books(&self) -> &BookService {
        &self.books
    }

    pub fn genres(&self) -> &GenreService {
        &self.genres
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn dashboard(&self) -> &DashboardService {
        &self.dashboard
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn navigate(&self, path: &str) -> Route {
        self.router.navigate(path)
    }

    /// Login y entrada a la ruta de aterrizaje
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<Route> {
        self.auth.login(credentials).await?;
        Ok(self.router.navigate(Route::LANDING.path()))
    }

    /// Logout local y vuelta a la pantalla de login
    pub fn logout(&self) {
        self.auth.logout();
        self.navigator.navigate(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::services::test_support::{memory_auth, RecordingNavigator, ScriptedTransport, BASE_URL};
    use crate::services::HttpMethod;
    use crate::utils::test_tokens::token_expiring_at;
    use crate::utils::LOGIN_ENDPOINT;

    const NOW: i64 = 1_700_000_000;

    struct Harness {
        transport: Rc<ScriptedTransport>,
        navigator: Rc<RecordingNavigator>,
        auth: AuthState,
        console: AdminConsole,
    }

    fn harness(attach_credentials: bool) -> Harness {
        let config = AppConfig {
            api_url: BASE_URL.to_string(),
            attach_credentials,
            ..AppConfig::default()
        };
        let (_storage, _clock, auth) = memory_auth(NOW);
        let transport = Rc::new(ScriptedTransport::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let console = AdminConsole::new(config, auth.clone(), transport.clone(), navigator.clone());
        Harness {
            transport,
            navigator,
            auth,
            console,
        }
    }

    fn login_envelope(token: &str) -> String {
        format!(r#"{{"success":true,"message":"ok","data":{{"jwtToken":"{}"}}}}"#, token)
    }

    #[test]
    fn login_enters_dashboard_and_logout_returns_to_login() {
        let h = harness(true);
        h.transport.respond(
            HttpMethod::Post,
            LOGIN_ENDPOINT,
            200,
            &login_envelope(&token_expiring_at(NOW + 3600)),
        );

        let entered = block_on(h.console.login(&LoginRequest::new("a@l.test", "pw"))).unwrap();
        assert_eq!(entered, Route::Dashboard);
        assert!(h.console.auth().is_authenticated());

        h.console.logout();
        assert!(!h.auth.is_authenticated());
        assert_eq!(h.navigator.visited(), vec![Route::Dashboard, Route::Login]);
    }

    #[test]
    fn protected_navigation_requires_session() {
        let h = harness(true);
        assert_eq!(h.console.navigate("/users"), Route::Login);

        h.auth.set_token(&token_expiring_at(NOW + 60)).unwrap();
        assert_eq!(h.console.navigate("/users"), Route::Users);
    }

    #[test]
    fn services_share_session_credentials() {
        let h = harness(true);
        let token = token_expiring_at(NOW + 60);
        h.auth.set_token(&token).unwrap();
        h.transport.respond(
            HttpMethod::Get,
            "/Books/getAllGenres",
            200,
            r#"{"success":true,"message":"ok","data":[]}"#,
        );

        block_on(h.console.genres().get_all_genres()).unwrap();

        let expected = format!("Bearer {}", token);
        assert_eq!(
            h.transport.last_request().unwrap().header("Authorization"),
            Some(expected.as_str())
        );
    }

    #[test]
    fn credentials_can_be_left_off() {
        let h = harness(false);
        h.auth.set_token(&token_expiring_at(NOW + 60)).unwrap();
        h.transport.respond(HttpMethod::Get, "/User/all", 200, r#"{"success":true,"data":[]}"#);

        block_on(h.console.users().get_all_users()).unwrap();

        assert_eq!(h.transport.last_request().unwrap().header("Authorization"), None);
    }
}
