use serde::{Deserialize, Serialize};
use crate::error::{ApiError, ApiResult};

/// Envelope común `{ success, message, data }` de las respuestas del backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> CommonResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Proyecta `data`; un envelope con `success: false` se convierte en `Rejected`
    pub fn into_data(self) -> ApiResult<T> {
        if !self.success {
            return Err(self.rejection());
        }
        self.data
            .ok_or_else(|| ApiError::Parse("envelope without data".to_string()))
    }

    /// Para endpoints sin payload útil: solo comprueba `success`
    pub fn into_unit(self) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(self.rejection())
        }
    }

    fn rejection(&self) -> ApiError {
        ApiError::Rejected {
            message: self
                .message
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string()),
        }
    }
}
