use super::{CompletionBackend, CompletionError, CompletionResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
const MODEL: &str = "deepseek/deepseek-r1:free";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1024;

/// Upper bound on one completion round trip. There is no cancellation; an
/// expired request surfaces as a transport error and falls back like any
/// other failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the OpenRouter chat-completions endpoint. One request per
/// prompt, fixed model and sampling parameters, the requesting user carried
/// in the referer header for correlation.
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build http client");
        Self { client, api_key }
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterClient {
    async fn complete(&self, prompt: &str, user_id: u64) -> CompletionResult<String> {
        let response = self
            .client
            .post(ENDPOINT)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", format!("tg://user?id={user_id}"))
            .json(&CompletionRequest {
                model: MODEL,
                messages: vec![RequestMessage {
                    role: "user",
                    content: prompt,
                }],
                temperature: TEMPERATURE,
                max_tokens: MAX_TOKENS,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_completion_body(&body)
    }
}

/// Extract `choices[0].message.content`; any other shape is malformed.
fn parse_completion_body(body: &str) -> CompletionResult<String> {
    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|err| CompletionError::Malformed(err.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| CompletionError::Malformed("empty choices".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_body() {
        let body = r#"{
            "id": "gen-1",
            "choices": [{"message": {"role": "assistant", "content": "Hi there"}}]
        }"#;
        assert_eq!(parse_completion_body(body).unwrap(), "Hi there");
    }

    #[test]
    fn takes_the_first_choice() {
        let body = r#"{"choices": [
            {"message": {"role": "assistant", "content": "first"}},
            {"message": {"role": "assistant", "content": "second"}}
        ]}"#;
        assert_eq!(parse_completion_body(body).unwrap(), "first");
    }

    #[test]
    fn empty_choices_are_malformed() {
        let err = parse_completion_body(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn non_json_bodies_are_malformed() {
        let err = parse_completion_body("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }
}
