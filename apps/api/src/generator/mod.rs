//! Generator Adapter — the single point of entry for OpenAI API calls.
//!
//! The seeding tool treats this as a black box that returns JSON text matching
//! the talent schema, plus a plain-text resume for the same talent. Responses
//! deserialize straight into the typed aggregate parts; a parse failure or a
//! missing field is fatal for that one record.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

use crate::talent::aggregate::{NewAddress, NewSkill, NewTalent, NewWorkHistory};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all generation calls.
pub const MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Generator returned empty content")]
    EmptyContent,
}

/// A raw talent payload as returned by the generator: the parent scalars at the
/// top level plus the three child collections. The resume is requested in a
/// separate call and attached by the seeding tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedProfile {
    #[serde(flatten)]
    pub talent: NewTalent,
    pub addresses: Vec<NewAddress>,
    pub skills: Vec<NewSkill>,
    pub work_history: Vec<NewWorkHistory>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Client for the OpenAI chat-completions API.
#[derive(Clone)]
pub struct GeneratorClient {
    client: Client,
    api_key: String,
}

impl GeneratorClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// One chat-completion round trip. No retry: the seeding loop is strictly
    /// sequential and throttled by the caller.
    async fn chat(&self, system: &str, prompt: &str) -> Result<String, GeneratorError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GeneratorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletion = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(GeneratorError::EmptyContent)?;

        debug!("Generator call succeeded ({} chars)", content.len());
        Ok(content)
    }

    /// Generates one raw talent payload, optionally steered by a
    /// natural-language profile hint.
    pub async fn generate_profile(
        &self,
        hint: Option<&str>,
    ) -> Result<GeneratedProfile, GeneratorError> {
        let prompt = prompts::profile_prompt(hint);
        let content = self.chat(prompts::PROFILE_SYSTEM, &prompt).await?;
        let profile = serde_json::from_str(strip_json_fences(&content))?;
        Ok(profile)
    }

    /// Generates the plain-text resume document for an already-generated talent.
    pub async fn generate_resume(
        &self,
        profile: &GeneratedProfile,
    ) -> Result<String, GeneratorError> {
        let profile_json = serde_json::to_string_pretty(profile)?;
        let prompt = prompts::resume_prompt(&profile_json);
        self.chat(prompts::RESUME_SYSTEM, &prompt).await
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences the model sometimes wraps
/// its output in, despite instructions.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match stripped {
        Some(inner) => {
            let inner = inner.trim_start();
            inner
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(inner)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_json_fences_with_json_tag() {
        let input = "```json\n{\"first_name\": \"Ada\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"first_name\": \"Ada\"}");
    }

    #[test]
    fn strip_json_fences_without_tag() {
        let input = "```\n{\"first_name\": \"Ada\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"first_name\": \"Ada\"}");
    }

    #[test]
    fn strip_json_fences_passes_bare_json_through() {
        let input = "{\"first_name\": \"Ada\"}";
        assert_eq!(strip_json_fences(input), input);
    }

    #[test]
    fn generated_profile_parses_the_full_schema() {
        let raw = r#"{
            "first_name": "Maria",
            "middle_name": null,
            "last_name": "Santos",
            "home_phone": "512-555-0101",
            "work_phone": "512-555-0102",
            "mobile_phone": "512-555-0103",
            "email_address": "maria.santos@example.com",
            "tax_id_number": "123-45-6789",
            "birthday": "1988-04-12",
            "gender": "female",
            "hire_date": "2021-09-01",
            "status": "active",
            "filing_status": "single",
            "federal_allowances": 1,
            "state_allowances": 1,
            "race": "hispanic",
            "disability": "no",
            "veteran_status": "no",
            "placement_status": "available",
            "office_name": "Austin Central",
            "employment_type": "full-time",
            "addresses": [
                {
                    "type": "resident",
                    "street1": "800 Congress Ave",
                    "street2": null,
                    "city": "Austin",
                    "state_province": "TX",
                    "postal_code": "78701",
                    "country": "USA",
                    "county": "Travis"
                }
            ],
            "skills": [
                {
                    "position_id": 10,
                    "description_id": 20,
                    "skill_position": "Project Manager",
                    "skill_description": "Runs cross-team delivery"
                }
            ],
            "work_history": [
                {
                    "company": "Acme Corp",
                    "title": "Coordinator",
                    "from_date": "2018-02-01",
                    "to_date": null,
                    "city": "Austin",
                    "state": "TX",
                    "country": "USA",
                    "duties": "Coordinated projects",
                    "reason_for_leaving": "Growth",
                    "notes": null
                }
            ]
        }"#;

        let profile: GeneratedProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.talent.first_name, "Maria");
        assert_eq!(profile.addresses.len(), 1);
        assert_eq!(profile.addresses[0].address_type, "resident");
        assert_eq!(profile.skills[0].position_id, Some(10));
        assert!(profile.work_history[0].to_date.is_none());
    }

    #[test]
    fn missing_required_field_fails_the_parse() {
        // No last_name: the payload must be rejected before it reaches the writer.
        let raw = r#"{
            "first_name": "Maria",
            "email_address": "maria@example.com",
            "gender": "female",
            "status": "active",
            "addresses": [],
            "skills": [],
            "work_history": []
        }"#;
        assert!(serde_json::from_str::<GeneratedProfile>(raw).is_err());
    }
}
