// ============================================================================
// ROUTER - Rutas de la consola + guard de autenticación
// ============================================================================
// ""            → /dashboard
// /login        → pública
// /dashboard, /books, /users, /genres → protegidas por AuthGuard
// cualquier otra → /dashboard
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::JsValue;
use crate::state::AuthState;

/// Evento que se emite en `window` tras cada navegación
pub const ROUTE_CHANGE_EVENT: &str = "routeChanged";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Books,
    Users,
    Genres,
}

impl Route {
    /// Destino por defecto para rutas vacías o desconocidas
    pub const LANDING: Route = Route::Dashboard;

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Books => "/books",
            Route::Users => "/users",
            Route::Genres => "/genres",
        }
    }

    /// Resuelve un path (ignora query, fragmento y `/` sobrantes)
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_matches('/') {
            "login" => Route::Login,
            "dashboard" => Route::Dashboard,
            "books" => Route::Books,
            "users" => Route::Users,
            "genres" => Route::Genres,
            _ => Route::LANDING,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// La barra de navegación se oculta en la pantalla de login
    pub fn shows_navigation(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Capa de navegación (history del navegador, o un doble en tests)
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// `history.pushState` + evento `routeChanged` en `window`
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryNavigator;

impl HistoryNavigator {
    pub fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ [ROUTER] Sin window, navegación a {} ignorada", route.path());
            return;
        };

        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route.path())));
        if let Err(e) = pushed {
            log::error!("❌ [ROUTER] pushState falló para {}: {:?}", route.path(), e);
            return;
        }

        match web_sys::Event::new(ROUTE_CHANGE_EVENT) {
            Ok(event) => {
                if let Err(e) = window.dispatch_event(&event) {
                    log::error!("❌ [ROUTER] No se pudo emitir {}: {:?}", ROUTE_CHANGE_EVENT, e);
                }
            }
            Err(e) => log::error!("❌ [ROUTER] No se pudo crear el evento: {:?}", e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny,
}

/// Guard de rutas protegidas. Nunca renueva el token: si expiró, a login.
#[derive(Clone)]
pub struct AuthGuard {
    auth: AuthState,
    navigator: Rc<dyn Navigator>,
}

impl AuthGuard {
    pub fn new(auth: AuthState, navigator: Rc<dyn Navigator>) -> Self {
        Self { auth, navigator }
    }

    /// Síncrono; el único efecto es la redirección a login al denegar
    pub fn can_activate(&self, route: Route) -> GuardDecision {
        if self.auth.is_authenticated() {
            GuardDecision::Allow
        } else {
            log::info!("🔒 [GUARD] Acceso denegado a {}, redirigiendo a login", route.path());
            self.navigator.navigate(Route::Login);
            GuardDecision::Deny
        }
    }
}

#[derive(Clone)]
pub struct Router {
    guard: AuthGuard,
    navigator: Rc<dyn Navigator>,
}

impl Router {
    pub fn new(auth: AuthState, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            guard: AuthGuard::new(auth, navigator.clone()),
            navigator,
        }
    }

    /// Navega a `path` y devuelve la ruta en la que realmente se entra
    pub fn navigate(&self, path: &str) -> Route {
        let target = Route::from_path(path);
        if target.requires_auth() && self.guard.can_activate(target) == GuardDecision::Deny {
            // El guard ya redirigió
            return Route::Login;
        }
        self.navigator.navigate(target);
        target
    }

    pub fn guard(&self) -> &AuthGuard {
        &self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use crate::services::test_support::{memory_auth, RecordingNavigator};
    use crate::utils::test_tokens::token_expiring_at;

    const NOW: i64 = 1_700_000_000;

    fn router_with(auth: AuthState) -> (Rc<RecordingNavigator>, Router) {
        let navigator = Rc::new(RecordingNavigator::default());
        let router = Router::new(auth, navigator.clone());
        (navigator, router)
    }

    #[rstest]
    #[case("", Route::Dashboard)]
    #[case("/", Route::Dashboard)]
    #[case("/login", Route::Login)]
    #[case("/books/", Route::Books)]
    #[case("/users?page=2", Route::Users)]
    #[case("/genres#top", Route::Genres)]
    #[case("/reports", Route::Dashboard)]
    #[case("/books/12/edit", Route::Dashboard)]
    fn paths_resolve_with_landing_fallback(#[case] path: &str, #[case] route: Route) {
        assert_eq!(Route::from_path(path), route);
    }

    #[test]
    fn only_login_is_public_and_hides_navigation() {
        for route in [Route::Dashboard, Route::Books, Route::Users, Route::Genres] {
            assert!(route.requires_auth());
            assert!(route.shows_navigation());
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Login.shows_navigation());
    }

    #[test]
    fn guard_denies_and_redirects_when_anonymous() {
        let (_storage, _clock, auth) = memory_auth(NOW);
        let navigator = Rc::new(RecordingNavigator::default());
        let guard = AuthGuard::new(auth, navigator.clone());

        assert_eq!(guard.can_activate(Route::Books), GuardDecision::Deny);
        assert_eq!(navigator.visited(), vec![Route::Login]);
    }

    #[test]
    fn guard_allows_without_side_effects_when_authenticated() {
        let (_storage, _clock, auth) = memory_auth(NOW);
        auth.set_token(&token_expiring_at(NOW + 3600)).unwrap();
        let navigator = Rc::new(RecordingNavigator::default());
        let guard = AuthGuard::new(auth, navigator.clone());

        assert_eq!(guard.can_activate(Route::Users), GuardDecision::Allow);
        assert!(navigator.visited().is_empty());
    }

    #[test]
    fn denial_does_not_depend_on_navigation_history() {
        let (_storage, clock, auth) = memory_auth(NOW);
        auth.set_token(&token_expiring_at(NOW + 60)).unwrap();
        let (navigator, router) = router_with(auth);

        assert_eq!(router.navigate("/books"), Route::Books);
        assert_eq!(router.navigate("/genres"), Route::Genres);

        // Expira entre navegaciones: haber entrado antes no cuenta
        clock.advance(60);
        assert_eq!(router.navigate("/books"), Route::Login);
        assert_eq!(router.navigate("/dashboard"), Route::Login);

        assert_eq!(
            navigator.visited(),
            vec![Route::Books, Route::Genres, Route::Login, Route::Login]
        );
    }

    #[test]
    fn login_is_reachable_while_anonymous() {
        let (_storage, _clock, auth) = memory_auth(NOW);
        let (navigator, router) = router_with(auth);

        assert_eq!(router.navigate("/login"), Route::Login);
        assert_eq!(navigator.visited(), vec![Route::Login]);
    }

    #[test]
    fn unknown_path_falls_back_to_guarded_landing() {
        let (_storage, _clock, auth) = memory_auth(NOW);
        let (_navigator, router) = router_with(auth.clone());
        assert_eq!(router.navigate("/nowhere"), Route::Login);

        auth.set_token(&token_expiring_at(NOW + 60)).unwrap();
        assert_eq!(router.navigate("/nowhere"), Route::Dashboard);
    }
}
