//! OpenAI Extractor - structured extraction over the chat completions API.
//!
//! Sends the vehicle text with a strict JSON-schema response format and
//! coerces the provider payload `{ vehicle_type, seats, rationale }` into
//! the domain [`Classification`] shape. No retries; a single bounded
//! request per classification.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiExtractorConfig::new(api_key)
//!     .with_model("gpt-5")
//!     .with_timeout(Duration::from_secs(20));
//!
//! let classifier = OpenAiExtractor::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::domain::classification::{Classification, VehicleTag};
use crate::ports::{ClassifierError, ClassifierInfo, VehicleClassifier};

/// Category labels the extraction schema accepts.
const SUPPORTED_TYPES: &[&str] = &[
    "경차", "화물", "승합", "버스", "밴", "픽업", "SUV", "세단", "쿠페", "왜건", "트럭",
];

/// Configuration for the OpenAI extractor.
#[derive(Debug, Clone)]
pub struct OpenAiExtractorConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiExtractorConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-5".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Classifier backed by OpenAI structured extraction.
pub struct OpenAiExtractor {
    config: OpenAiExtractorConfig,
    client: Client,
}

impl OpenAiExtractor {
    /// Creates a new extractor with the given configuration.
    pub fn new(config: OpenAiExtractorConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn to_request(&self, vehicle_text: &str) -> ExtractionRequest {
        ExtractionRequest {
            model: self.config.model.clone(),
            messages: vec![RequestMessage {
                role: "user",
                content: extraction_prompt(vehicle_text),
            }],
            response_format: json!({
                "type": "json_schema",
                "json_schema": {
                    "name": "vehicle_extraction",
                    "schema": extraction_schema(),
                    "strict": true,
                },
            }),
        }
    }

    async fn send_request(&self, vehicle_text: &str) -> Result<Response, ClassifierError> {
        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&self.to_request(vehicle_text))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ClassifierError::network(format!("Connection failed: {}", e))
                } else {
                    ClassifierError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, ClassifierError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 => Err(ClassifierError::AuthenticationFailed),
            429 => Err(ClassifierError::RateLimited),
            400 => Err(ClassifierError::InvalidRequest(error_body)),
            500..=599 => Err(ClassifierError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(ClassifierError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    async fn parse_payload(&self, response: Response) -> Result<ExtractionPayload, ClassifierError> {
        let completion: CompletionsResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::invalid_response(e.to_string()))?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| ClassifierError::invalid_response("response carried no choices"))?;

        serde_json::from_str(content)
            .map_err(|e| ClassifierError::invalid_response(format!("payload not valid JSON: {}", e)))
    }
}

#[async_trait]
impl VehicleClassifier for OpenAiExtractor {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let response = self.send_request(text).await?;
        let response = self.handle_response_status(response).await?;
        let payload = self.parse_payload(response).await?;

        tracing::debug!(
            vehicle_type = %payload.vehicle_type,
            seats = payload.seats,
            "provider extraction received"
        );
        Ok(coerce_payload(payload))
    }

    fn info(&self) -> ClassifierInfo {
        ClassifierInfo::new("openai", true)
    }
}

/// The instruction sent with the vehicle text.
fn extraction_prompt(vehicle_text: &str) -> String {
    format!(
        "사용자가 입력한 문자열에서 차량의 유형과 좌석수를 추출하세요.\n\
         차량 유형은 다음 중 하나로만 답하세요: {}\n\
         좌석수가 언급되지 않으면 seats는 -1.\n\
         예시 입력: '스타렉스 9인승' → vehicle_type='승합', seats=9\n\
         입력: {}",
        SUPPORTED_TYPES.join(", "),
        vehicle_text
    )
}

/// Strict response schema for the extraction.
fn extraction_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "vehicle_type": {
                "type": "string",
                "description": "차량의 대표 분류",
                "enum": SUPPORTED_TYPES,
            },
            "seats": {
                "type": "integer",
                "description": "좌석 수가 텍스트에 명시된 경우 정수, 없으면 -1",
                "minimum": -1,
            },
            "rationale": {
                "type": "string",
                "description": "판단 근거 요약 (키워드/모델명/맥락)",
            },
        },
        "required": ["vehicle_type", "seats", "rationale"],
        "additionalProperties": false,
    })
}

/// Maps the provider payload into the domain classification shape.
///
/// Unknown category labels degrade to the non-deductible sedan default;
/// the `-1` seat sentinel becomes "unspecified".
fn coerce_payload(payload: ExtractionPayload) -> Classification {
    let tag = VehicleTag::from_label(&payload.vehicle_type).unwrap_or(VehicleTag::Sedan);
    let seats = (payload.seats >= 0).then(|| payload.seats as u32);
    Classification::from_provider(tag, seats, payload.rationale)
}

#[derive(Debug, Serialize)]
struct ExtractionRequest {
    model: String,
    messages: Vec<RequestMessage>,
    response_format: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct RequestMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionsResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// What the provider extracts from the vehicle text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ExtractionPayload {
    vehicle_type: String,
    seats: i64,
    rationale: String,
}
