// ============================================================================
// BOOK LIBRARY ADMIN - CONSOLA DE ADMINISTRACIÓN (RUST + WASM)
// ============================================================================
// Arquitectura:
// - State: Celdas reactivas de sesión (token + usuario actual)
// - Services: SOLO comunicación API (dispatcher tipado + servicios de dominio)
// - Router: Rutas + AuthGuard
// - Hooks: Puente Yew sobre las celdas de sesión
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod state;
pub mod services;
pub mod router;
pub mod hooks;
pub mod app;

pub use app::AdminConsole;
pub use config::{AppConfig, CONFIG};
pub use error::{ApiError, ApiResult, TokenError};
pub use router::{AuthGuard, GuardDecision, Route, Router};
pub use state::{AuthState, ReactiveState};

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::models::LoginRequest;

// Instancia única de la consola en el navegador
thread_local! {
    static CONSOLE: RefCell<Option<AdminConsole>> = RefCell::new(None);
}

fn installed() -> Option<AdminConsole> {
    CONSOLE.with(|cell| cell.borrow().clone())
}

fn console() -> Result<AdminConsole, JsValue> {
    installed().ok_or_else(|| JsValue::from_str("console not initialized"))
}

fn install(console: AdminConsole) {
    CONSOLE.with(|cell| {
        *cell.borrow_mut() = Some(console);
    });
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Book Library Admin ({})", CONFIG.environment);

    install(AdminConsole::browser(&CONFIG));

    // Ya instalada: los listeners de `routeChanged` pueden llamar a las exportaciones
    let current = router::HistoryNavigator.current_path().unwrap_or_default();
    let entered = console()?.navigate(&current);
    log::info!("🧭 [MAIN] Ruta inicial: {}", entered.path());
    Ok(())
}

/// Estado de sesión (llamable desde JavaScript)
#[wasm_bindgen]
pub fn is_authenticated() -> bool {
    installed()
        .map(|c| c.auth().is_authenticated())
        .unwrap_or(false)
}

#[wasm_bindgen]
pub fn logout() {
    if let Some(console) = installed() {
        console.logout();
    }
}

/// Navega con guard; devuelve el path en el que se entra
#[wasm_bindgen]
pub fn navigate(path: &str) -> Result<String, JsValue> {
    Ok(console()?.navigate(path).path().to_string())
}

/// Login; devuelve el path de aterrizaje
#[wasm_bindgen]
pub async fn login(email: String, password: String) -> Result<JsValue, JsValue> {
    // Clonar antes del await: el RefCell no se mantiene prestado
    let console = console()?;
    let route = console
        .login(&LoginRequest::new(email, password))
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsValue::from_str(route.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::router::{Navigator, Route};
    use crate::services::test_support::{memory_auth, ScriptedTransport};
    use crate::utils::test_tokens::token_expiring_at;

    const NOW: i64 = 1_700_000_000;

    // Navegador que consulta las exportaciones mientras "dispara" routeChanged
    #[derive(Default)]
    struct ListeningNavigator {
        observed: RefCell<Vec<bool>>,
    }

    impl Navigator for ListeningNavigator {
        fn navigate(&self, _route: Route) {
            self.observed.borrow_mut().push(is_authenticated());
        }
    }

    #[test]
    fn exports_see_installed_console_during_initial_navigation() {
        let (_storage, _clock, auth) = memory_auth(NOW);
        auth.set_token(&token_expiring_at(NOW + 60)).unwrap();
        let navigator = Rc::new(ListeningNavigator::default());
        install(AdminConsole::new(
            AppConfig::default(),
            auth,
            Rc::new(ScriptedTransport::default()),
            navigator.clone(),
        ));

        assert_eq!(navigate("/books").ok().as_deref(), Some("/books"));
        assert_eq!(*navigator.observed.borrow(), vec![true]);
    }

    #[test]
    fn exports_fail_softly_without_console() {
        // Cada test corre en su propio hilo: thread_local vacío
        assert!(installed().is_none());
        assert!(!is_authenticated());
        logout();
    }
}
