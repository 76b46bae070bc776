// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod auth_state;

pub use reactivity::*;
pub use auth_state::*;
