// ============================================================================
// ERRORES - Taxonomía de fallos del cliente
// ============================================================================
// Ni el dispatcher ni los servicios traducen errores: se propagan tal cual
// hasta el componente que hizo la llamada.
// ============================================================================

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fallo de red / transporte (fetch rechazado, CORS, sin conexión)
    #[error("Network error: {0}")]
    Network(String),

    /// Respuesta con status fuera de 2xx
    #[error("HTTP {status}: {status_text}")]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },

    /// No se pudo serializar el payload de la request
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// El body de la respuesta no tiene la forma esperada
    #[error("Parse error: {0}")]
    Parse(String),

    /// Envelope con `success: false`
    #[error("Request rejected by backend: {message}")]
    Rejected { message: String },

    /// localStorage no disponible o rechazó la operación
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Status HTTP si el fallo vino del backend
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Motivos por los que un token no se pudo decodificar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token must have three dot-separated segments, found {0}")]
    Malformed(usize),

    #[error("token payload is not valid base64: {0}")]
    Encoding(String),

    #[error("token payload is not a JSON claims object: {0}")]
    Claims(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status() {
        let err = ApiError::Http {
            status: 401,
            status_text: "Unauthorized".to_string(),
            body: String::new(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }

    #[test]
    fn non_http_errors_have_no_status() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }
}
