use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    errors::ClientError,
    record::{Student, StudentPayload},
};

/// The four record service calls as seen from the client.
/// Unknown ids come back as `Ok(None)`.
#[async_trait]
pub trait RecordApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Student>, ClientError>;
    async fn create(&self, payload: &StudentPayload) -> Result<Student, ClientError>;
    async fn update(&self, id: &str, payload: &StudentPayload) -> Result<Option<Student>, ClientError>;
    async fn delete(&self, id: &str) -> Result<Option<Student>, ClientError>;
}

/// `reqwest`-backed implementation. No timeout is configured on purpose:
/// a hung store hangs the call.
#[derive(Clone, Debug)]
pub struct HttpRecordApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRecordApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// An error body is any JSON object carrying an `error` key.
fn store_error(status: u16, body: &Value) -> Option<ClientError> {
    let obj = body.as_object()?;
    let error = obj.get("error")?;
    let error = error.as_str().map(str::to_string).unwrap_or_else(|| error.to_string());
    let message = obj
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Some(ClientError::Store { status, error, message })
}

/// Decode a response by body shape first, status second.
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, bytes: &[u8]) -> Result<T, ClientError> {
    let body: Value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(bytes).map_err(|e| ClientError::Decode { status, detail: e.to_string() })?
    };
    if let Some(err) = store_error(status, &body) {
        return Err(err);
    }
    if !(200..300).contains(&status) {
        return Err(ClientError::Decode { status, detail: body.to_string() });
    }
    serde_json::from_value(body).map_err(|e| ClientError::Decode { status, detail: e.to_string() })
}

async fn read<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status().as_u16();
    let bytes = resp.bytes().await?;
    debug!(status, len = bytes.len(), "response received");
    decode_body(status, &bytes)
}

#[async_trait]
impl RecordApi for HttpRecordApi {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list(&self) -> Result<Vec<Student>, ClientError> {
        let resp = self.http.get(self.url("/getUsers")).send().await?;
        read(resp).await
    }

    #[instrument(skip(self, payload), fields(base_url = %self.base_url))]
    async fn create(&self, payload: &StudentPayload) -> Result<Student, ClientError> {
        let resp = self.http.post(self.url("/createUser")).json(payload).send().await?;
        read(resp).await
    }

    #[instrument(skip(self, payload), fields(base_url = %self.base_url))]
    async fn update(&self, id: &str, payload: &StudentPayload) -> Result<Option<Student>, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/updateUser/{id}")))
            .json(payload)
            .send()
            .await?;
        read(resp).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn delete(&self, id: &str) -> Result<Option<Student>, ClientError> {
        let resp = self.http.delete(self.url(&format!("/deleteUser/{id}"))).send().await?;
        read(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpRecordApi::new("http://localhost:3001/");
        assert_eq!(api.url("/getUsers"), "http://localhost:3001/getUsers");
    }

    #[test]
    fn null_body_decodes_to_none() {
        let got: Option<Student> = decode_body(200, b"null").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn error_body_with_200_is_a_failure() {
        let body = br#"{"error":"List Failed","message":"database error: connection refused"}"#;
        let err = decode_body::<Vec<Student>>(200, body).unwrap_err();
        match err {
            ClientError::Store { status, error, message } => {
                assert_eq!(status, 200);
                assert_eq!(error, "List Failed");
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn error_body_with_500_is_a_store_failure() {
        let body = br#"{"error":"Create Failed","message":null}"#;
        assert!(matches!(
            decode_body::<Student>(500, body),
            Err(ClientError::Store { status: 500, .. })
        ));
    }

    #[test]
    fn non_json_error_page_is_decode_error() {
        assert!(matches!(
            decode_body::<Vec<Student>>(502, b"<html>bad gateway</html>"),
            Err(ClientError::Decode { status: 502, .. })
        ));
    }

    #[test]
    fn records_decode() {
        let body = br#"[{"_id":"1","name":"Ana","email":"ana@x.com","course":"CS","status":"Active"}]"#;
        let rows: Vec<Student> = decode_body(200, body).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("Ana"));
    }
}
