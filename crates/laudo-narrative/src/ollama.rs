use std::time::Duration;

use laudo_core::error::GenerationError;
use laudo_core::models::narrative::{NarrativeGenerator, NarrativeReport, NarrativeRequest};
use laudo_knowledge::KnowledgeBase;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::NarrativeError;
use crate::parse::parse_generated;
use crate::prompt::build_prompt;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "mistral";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where and how to reach the Ollama server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl OllamaConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
    top_k: u32,
    top_p: f32,
    repeat_penalty: f32,
}

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}

/// Narrative generator backed by Ollama's `/api/generate`.
pub struct OllamaGenerator {
    config: OllamaConfig,
    agent: ureq::Agent,
}

impl OllamaGenerator {
    pub fn new(config: OllamaConfig) -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .new_agent();
        Self { config, agent }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Whether the server answers at all.
    pub fn is_available(&self) -> bool {
        self.available_models().is_ok()
    }

    /// Names of the models installed on the server.
    pub fn available_models(&self) -> Result<Vec<String>, NarrativeError> {
        let url = self.config.url("api/tags");
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| NarrativeError::Unavailable(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.into_body().read_to_string().unwrap_or_default();
            return Err(NarrativeError::Request { status, body });
        }

        let tags: TagsResponse = response
            .into_body()
            .read_json()
            .map_err(|e| NarrativeError::ResponseParse(e.to_string()))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Run one non-streaming completion and return the raw text.
    pub fn complete(&self, prompt: &str) -> Result<String, NarrativeError> {
        let body = GenerateBody {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: 0.6,
                num_predict: 1000,
                top_k: 40,
                top_p: 0.9,
                repeat_penalty: 1.1,
            },
        };

        let url = self.config.url("api/generate");
        debug!(url = %url, model = %self.config.model, prompt_len = prompt.len(), "calling Ollama");

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| NarrativeError::Unavailable(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.into_body().read_to_string().unwrap_or_default();
            return Err(NarrativeError::Request { status, body });
        }

        let parsed: GenerateResponse = response
            .into_body()
            .read_json()
            .map_err(|e| NarrativeError::ResponseParse(e.to_string()))?;
        if parsed.response.trim().is_empty() {
            return Err(NarrativeError::ResponseParse("empty response".to_string()));
        }
        Ok(parsed.response)
    }
}

impl NarrativeGenerator for OllamaGenerator {
    fn name(&self) -> &str {
        "ollama"
    }

    fn generate(&self, request: &NarrativeRequest) -> Result<NarrativeReport, GenerationError> {
        let prompt = build_prompt(request);
        let text = self.complete(&prompt)?;
        let technique = KnowledgeBase::global().technique_or_default(&request.exam_type);

        info!(
            model = %self.config.model,
            exam_type = %request.exam_type,
            response_len = text.len(),
            "narrative generated"
        );
        Ok(parse_generated(&text, technique))
    }
}
