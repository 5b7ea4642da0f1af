// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: envía el request y devuelve status + cuerpo.
// La interpretación (token, 2xx, etc.) la hace auth_service.
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

/// Respuesta HTTP cruda
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Cuerpo como JSON
    pub fn json(&self) -> Result<Value, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// Cuerpo como JSON, o como string si no lo es (para payloads de error)
    pub fn json_or_text(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|_| Value::String(self.body.clone()))
    }
}

/// Transporte HTTP inyectable. `?Send`: los futures de fetch viven en el
/// event loop del navegador.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, TransportError>;

    async fn get(&self, url: &str, bearer: Option<&str>) -> Result<HttpResponse, TransportError>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use gloo_net::http::{Request, Response};

    /// Transporte real sobre fetch (gloo-net)
    #[derive(Clone, Default)]
    pub struct BrowserTransport;

    impl BrowserTransport {
        pub fn new() -> Self {
            Self
        }
    }

    async fn into_http_response(response: Response) -> Result<HttpResponse, TransportError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Decode(format!("Error leyendo cuerpo: {}", e)))?;
        Ok(HttpResponse { status, body })
    }

    #[async_trait(?Send)]
    impl HttpTransport for BrowserTransport {
        async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, TransportError> {
            let response = Request::post(url)
                .json(body)
                .map_err(|e| TransportError::Network(format!("Request build error: {}", e)))?
                .send()
                .await
                .map_err(|e| TransportError::Network(format!("Request error: {}", e)))?;
            into_http_response(response).await
        }

        async fn get(&self, url: &str, bearer: Option<&str>) -> Result<HttpResponse, TransportError> {
            let mut request = Request::get(url);
            if let Some(token) = bearer {
                request = request.header("Authorization", &format!("Bearer {}", token));
            }
            let response = request
                .send()
                .await
                .map_err(|e| TransportError::Network(format!("Request error: {}", e)))?;
            into_http_response(response).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_covers_2xx_only() {
        let response = |status| HttpResponse { status, body: String::new() };
        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(!response(199).ok());
        assert!(!response(301).ok());
        assert!(!response(401).ok());
    }

    #[test]
    fn test_json_or_text_falls_back_to_string() {
        let html = HttpResponse { status: 502, body: "<html>Bad Gateway</html>".to_string() };
        assert_eq!(html.json_or_text(), json!("<html>Bad Gateway</html>"));
        assert!(matches!(html.json(), Err(TransportError::Decode(_))));

        let json_body = HttpResponse { status: 401, body: r#"{"error":"expired"}"#.to_string() };
        assert_eq!(json_body.json_or_text(), json!({ "error": "expired" }));
    }
}
