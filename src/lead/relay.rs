use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use super::form::Lead;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("could not build relay body: {0}")]
    Body(String),
    #[error("unexpected relay reply: {0}")]
    Decode(String),
}

/// Fixed metadata attached to every relayed lead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayMeta {
    pub access_key: String,
    pub from_name: String,
    pub to: String,
}

impl RelayMeta {
    pub fn from_config() -> Self {
        Self {
            access_key: config::relay_access_key().to_string(),
            from_name: config::SITE_NAME.to_string(),
            to: config::LEAD_INBOX.to_string(),
        }
    }
}

/// Ordered multipart fields for the relay POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayPayload {
    fields: Vec<(&'static str, String)>,
}

impl RelayPayload {
    pub fn new(meta: &RelayMeta, lead: &Lead) -> Self {
        let fields = vec![
            ("access_key", meta.access_key.clone()),
            ("subject", format!("Nova cotação - {}", lead.name)),
            ("from_name", meta.from_name.clone()),
            ("to", meta.to.clone()),
            ("Nome", lead.name.clone()),
            ("Telefone", lead.phone.clone()),
            ("Veiculo", lead.vehicle_or_placeholder().to_string()),
            ("Mensagem", lead.message_or_placeholder().to_string()),
            ("redirect", "false".to_string()),
        ];
        Self { fields }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayReply {
    pub fn decode(body: &str) -> Result<Self, RelayError> {
        serde_json::from_str(body).map_err(|e| RelayError::Decode(e.to_string()))
    }
}

/// How the relay attempt ended. Never gates the WhatsApp redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Accepted,
    Declined(Option<String>),
    Failed(RelayError),
}

impl From<Result<RelayReply, RelayError>> for RelayOutcome {
    fn from(result: Result<RelayReply, RelayError>) -> Self {
        match result {
            Ok(reply) if reply.success => RelayOutcome::Accepted,
            Ok(reply) => RelayOutcome::Declined(reply.message),
            Err(e) => RelayOutcome::Failed(e),
        }
    }
}

#[async_trait(?Send)]
pub trait RelayClient {
    async fn send(&self, payload: &RelayPayload) -> Result<RelayReply, RelayError>;
}

/// Posts leads to the form relay from the browser.
pub struct GlooRelay {
    endpoint: String,
}

impl GlooRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

fn js_error(value: JsValue) -> RelayError {
    RelayError::Body(format!("{:?}", value))
}

#[async_trait(?Send)]
impl RelayClient for GlooRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<RelayReply, RelayError> {
        let body = FormData::new().map_err(js_error)?;
        for (key, value) in payload.fields() {
            body.append_with_str(key, value).map_err(js_error)?;
        }

        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        RelayReply::decode(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn meta() -> RelayMeta {
        RelayMeta {
            access_key: "key-123".to_string(),
            from_name: "Nardini Seguros".to_string(),
            to: "inbox@example.com".to_string(),
        }
    }

    #[test]
    fn payload_carries_lead_and_metadata() {
        let lead = Lead {
            name: "Ana".to_string(),
            phone: "19999999999".to_string(),
            vehicle: None,
            message: None,
        };
        let payload = RelayPayload::new(&meta(), &lead);

        let keys: Vec<&str> = payload.fields().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["access_key", "subject", "from_name", "to", "Nome", "Telefone", "Veiculo", "Mensagem", "redirect"]
        );
        assert_eq!(payload.get("access_key"), Some("key-123"));
        assert_eq!(payload.get("subject"), Some("Nova cotação - Ana"));
        assert_eq!(payload.get("to"), Some("inbox@example.com"));
        assert_eq!(payload.get("Nome"), Some("Ana"));
        assert_eq!(payload.get("Telefone"), Some("19999999999"));
        assert_eq!(payload.get("Veiculo"), Some("Nao informado"));
        assert_eq!(payload.get("Mensagem"), Some("Sem mensagem adicional"));
        assert_eq!(payload.get("redirect"), Some("false"));
        assert_eq!(payload.get("missing"), None);
    }

    #[rstest]
    #[case(r#"{"success": true, "message": "Email sent"}"#, RelayOutcome::Accepted)]
    #[case(r#"{"success": false, "message": "Invalid key"}"#, RelayOutcome::Declined(Some("Invalid key".to_string())))]
    #[case(r#"{"success": false}"#, RelayOutcome::Declined(None))]
    fn replies_map_to_outcomes(#[case] body: &str, #[case] expected: RelayOutcome) {
        assert_eq!(RelayOutcome::from(RelayReply::decode(body)), expected);
    }

    #[rstest]
    #[case("")]
    #[case("<html>Bad gateway</html>")]
    #[case(r#"{"ok": true}"#)]
    fn unexpected_shapes_are_decode_failures(#[case] body: &str) {
        let outcome = RelayOutcome::from(RelayReply::decode(body));
        assert!(matches!(outcome, RelayOutcome::Failed(RelayError::Decode(_))));
    }
}
