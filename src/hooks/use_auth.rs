// ============================================================================
// USE AUTH - Hooks de Yew sobre las celdas de sesión
// ============================================================================
// Mostrar/ocultar el chrome autenticado sin consultar storage en cada render.
// ============================================================================

use yew::prelude::*;
use crate::state::AuthState;

/// Valor de `current_user`; re-renderiza en cada transición
#[hook]
pub fn use_current_user(auth: AuthState) -> Option<String> {
    let value = use_state_eq(|| auth.get_current_user());
    {
        let value = value.clone();
        use_effect_with((), move |_| {
            let id = auth.subscribe_current_user(move |user| value.set(user.clone()));
            move || {
                auth.unsubscribe_current_user(id);
            }
        });
    }
    (*value).clone()
}

/// `is_authenticated()` recalculado cada vez que cambia el token
#[hook]
pub fn use_is_authenticated(auth: AuthState) -> bool {
    let value = use_state_eq(|| auth.is_authenticated());
    {
        let value = value.clone();
        use_effect_with((), move |_| {
            let checker = auth.clone();
            let id = auth.subscribe_token(move |_| value.set(checker.is_authenticated()));
            move || {
                auth.unsubscribe_token(id);
            }
        });
    }
    *value
}
