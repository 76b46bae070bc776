// ============================================================================
// TRANSPORT - Petición HTTP cruda (fetch del navegador vía gloo-net)
// ============================================================================

use std::fmt;
use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Fichero adjunto a un formulario multipart
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn pdf(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, "application/pdf", bytes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(FileUpload),
}

/// Campos de un multipart en orden de inserción; se permiten nombres repetidos
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<(String, FormValue)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push((name.into(), FormValue::Text(value.into())));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FileUpload) -> Self {
        self.parts.push((name.into(), FormValue::File(file)));
        self
    }

    pub fn parts(&self) -> &[(String, FormValue)] {
        &self.parts
    }

    /// Primer valor de texto con ese nombre
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, value)| match value {
            FormValue::Text(text) if key == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Todos los valores de texto con ese nombre, en orden
    pub fn text_values(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|(key, value)| match value {
                FormValue::Text(text) if key == name => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn file_value(&self, name: &str) -> Option<&FileUpload> {
        self.parts.iter().find_map(|(key, value)| match value {
            FormValue::File(file) if key == name => Some(file),
            _ => None,
        })
    }

    fn to_form_data(&self) -> Result<FormData, ApiError> {
        let data = FormData::new().map_err(js_error)?;
        for (name, value) in &self.parts {
            match value {
                FormValue::Text(text) => data.append_with_str(name, text),
                FormValue::File(file) => {
                    let blob = file_to_blob(file)?;
                    data.append_with_blob_and_filename(name, &blob, &file.file_name)
                }
            }
            .map_err(js_error)?;
        }
        Ok(data)
    }
}

fn file_to_blob(file: &FileUpload) -> Result<Blob, ApiError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Serialization(format!("{:?}", err))
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(String),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    /// Header por nombre, sin distinguir mayúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Envío de una petición ya construida. Sin reintentos ni timeouts propios.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch` del navegador
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let pending = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(json) => builder.body(json),
            // Sin Content-Type: el navegador pone el boundary
            RequestBody::Multipart(form) => builder.body(form.to_form_data()?),
        }
        .map_err(|e| ApiError::Serialization(e.to_string()))?;

        let response = pending
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipart_keeps_repeated_fields_in_order() {
        let form = MultipartForm::new()
            .text("GenreIds", "1")
            .text("Title", "Gitanjali")
            .text("GenreIds", "4")
            .file("pdfFile", FileUpload::pdf("book.pdf", vec![1, 2, 3]));

        assert_eq!(form.text_values("GenreIds"), vec!["1", "4"]);
        assert_eq!(form.text_value("Title"), Some("Gitanjali"));
        assert_eq!(form.file_value("pdfFile").map(|f| f.content_type.as_str()), Some("application/pdf"));
        assert_eq!(form.parts().len(), 4);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://api.test/Books".to_string(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: RequestBody::Empty,
        };
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("Content-Type"), None);
    }

    #[test]
    fn only_2xx_is_ok() {
        let response = |status| HttpResponse {
            status,
            status_text: String::new(),
            body: String::new(),
        };
        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(!response(304).ok());
        assert!(!response(500).ok());
    }
}
