// ============================================================================
// AUTH STATE - Fuente única de verdad de la sesión
// ============================================================================
// Dos celdas observables (`current_user`, `token`) + una clave en storage.
// Al construir solo se siembra `token` desde storage: `current_user` arranca
// vacío aunque exista un token válido.
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::TokenClaims;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::utils::{decode_claims, is_token_valid, BrowserStorage, Clock, KeyValueStore, SystemClock};

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    current_user: ReactiveState<Option<String>>,
    token: ReactiveState<Option<String>>,
    storage: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    storage_key: String,
}

impl AuthState {
    /// Crear estado e hidratar el token desde storage
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let stored = non_empty(storage.get_item(&storage_key));
        if stored.is_some() {
            log::info!("💾 [AUTH] Token encontrado en storage");
        }

        Self {
            current_user: ReactiveState::new(None),
            token: ReactiveState::new(stored),
            storage,
            clock,
            storage_key,
        }
    }

    /// Estado respaldado por `localStorage` y el reloj del navegador
    pub fn browser(config: &AppConfig) -> Self {
        Self::new(
            Rc::new(BrowserStorage),
            Rc::new(SystemClock),
            config.token_storage_key.clone(),
        )
    }

    /// Guarda el token (storage primero) y actualiza ambas celdas
    pub fn set_token(&self, token: &str) -> Result<(), ApiError> {
        self.storage.set_item(&self.storage_key, token)?;
        // Ambas celdas quedan escritas antes de la primera notificación
        self.token.stage(Some(token.to_string()));
        self.current_user.stage(Some(token.to_string()));
        self.token.flush();
        self.current_user.flush();
        log::info!("🔐 [AUTH] Token guardado");
        Ok(())
    }

    /// Logout - limpiar todo. No falla: un error de storage solo se registra.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(&self.storage_key) {
            log::warn!("⚠️ [AUTH] No se pudo limpiar el token del storage: {}", e);
        }
        self.current_user.stage(None);
        self.token.stage(None);
        self.current_user.flush();
        self.token.flush();
        log::info!("👋 [AUTH] Sesión cerrada");
    }

    /// Token en memoria, o el de storage como respaldo
    pub fn get_token(&self) -> Option<String> {
        non_empty(self.token.get()).or_else(|| non_empty(self.storage.get_item(&self.storage_key)))
    }

    pub fn get_current_user(&self) -> Option<String> {
        self.current_user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        match self.get_token() {
            Some(token) => is_token_valid(&token, self.clock.now_secs()),
            None => false,
        }
    }

    /// Claims del token actual, si decodifica
    pub fn claims(&self) -> Option<TokenClaims> {
        decode_claims(&self.get_token()?).ok()
    }

    /// Segundos hasta la expiración (negativo si ya expiró)
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.claims().map(|claims| claims.exp - self.clock.now_secs())
    }

    pub fn subscribe_current_user<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Option<String>) + 'static,
    {
        self.current_user.subscribe(callback)
    }

    pub fn subscribe_token<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Option<String>) + 'static,
    {
        self.token.subscribe(callback)
    }

    pub fn unsubscribe_current_user(&self, id: SubscriptionId) -> bool {
        self.current_user.unsubscribe(id)
    }

    pub fn unsubscribe_token(&self, id: SubscriptionId) -> bool {
        self.token.unsubscribe(id)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|token| !token.is_empty())
}
