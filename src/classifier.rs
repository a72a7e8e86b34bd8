use crate::traits::RelevanceJudge;
use crate::types::{CuratorError, Result, Verdict};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Instruction template for the relevance judgment. The article text is
/// embedded verbatim at the end.
const CLASSIFY_PROMPT: &str = r#"You are an expert assistant providing information to corporate legal
counsel and attorneys. Analyze the web article below and decide whether it
contains information of real value to a contract-law practitioner: statutory
reform, case law, or concrete legal issues raised by new technology, rather
than product promotion or event announcements.

If the article is important, respond with exactly this JSON shape:
{
  "is_important": true,
  "title": "(concise restatement of the article title)",
  "summary": "(the article's key points in three sentences)",
  "category": "(one best-fitting label such as \"law-reform\", \"e-contracts\", \"case-law\", \"M&A\", \"IP\")"
}

If the article is not important or cannot be analyzed, respond with:
{
  "is_important": false
}

--- Article text ---
"#;

/// Relevance classifier backed by the Gemini generate-content API.
pub struct GeminiJudge {
    client: Client,
    api_key: String,
    endpoint: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GeminiJudge {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, GEMINI_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            endpoint,
        }
    }

    async fn complete(&self, prompt: String) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                CuratorError::EmptyCompletion("response contained no candidates".to_string())
            })
    }
}

#[async_trait]
impl RelevanceJudge for GeminiJudge {
    async fn classify(&self, article_text: &str) -> Result<Verdict> {
        debug!("Classifying article ({} bytes)", article_text.len());

        let prompt = format!("{}{}", CLASSIFY_PROMPT, article_text);
        let raw = self.complete(prompt).await?;
        let verdict = parse_verdict(&raw)?;

        debug!("Classification done: is_important={}", verdict.is_important);
        Ok(verdict)
    }
}

/// Parse model output into a [`Verdict`], tolerating markdown code-fence
/// wrapping around the JSON object.
pub fn parse_verdict(raw: &str) -> Result<Verdict> {
    let json = extract_json_block(raw);
    let verdict: Verdict = serde_json::from_str(json)?;
    Ok(verdict)
}

/// Strip a markdown code fence from around a JSON payload.
///
/// Handles a leading ```` ```json ```` or bare ```` ``` ```` line and a
/// trailing fence; text without fences passes through trimmed. No attempt
/// is made to repair malformed JSON inside the fence.
pub fn extract_json_block(raw: &str) -> &str {
    let trimmed = raw.trim();

    let without_open = if let Some(rest) = trimmed.strip_prefix("```") {
        // The fence line may carry a language tag ("json").
        match rest.find('\n') {
            Some(pos) => &rest[pos + 1..],
            None => rest,
        }
    } else {
        trimmed
    };

    without_open
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_json_fence() {
        let raw = "```json\n{\"is_important\": false}\n```";
        assert_eq!(extract_json_block(raw), "{\"is_important\": false}");
    }

    #[test]
    fn extracts_from_bare_fence() {
        let raw = "```\n{\"is_important\": true}\n```";
        assert_eq!(extract_json_block(raw), "{\"is_important\": true}");
    }

    #[test]
    fn passes_unfenced_text_through() {
        let raw = "  {\"is_important\": false}  ";
        assert_eq!(extract_json_block(raw), "{\"is_important\": false}");
    }

    #[test]
    fn malformed_input_is_returned_as_is() {
        // Fence stripping never validates; the parse step rejects this.
        assert_eq!(extract_json_block("not json"), "not json");
        assert!(parse_verdict("not json").is_err());
    }

    #[test]
    fn parses_full_verdict() {
        let raw = "```json\n{\"is_important\": true, \"title\": \"T\", \
                   \"category\": \"case-law\", \"summary\": \"S\"}\n```";
        let verdict = parse_verdict(raw).unwrap();
        assert!(verdict.is_important);
        assert_eq!(verdict.title.as_deref(), Some("T"));
        assert_eq!(verdict.category.as_deref(), Some("case-law"));
        assert_eq!(verdict.summary.as_deref(), Some("S"));
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let verdict = parse_verdict("{\"is_important\": true}").unwrap();
        assert!(verdict.is_important);
        assert!(verdict.title.is_none());
        assert!(verdict.category.is_none());
        assert!(verdict.summary.is_none());
    }

    #[test]
    fn missing_is_important_is_an_error() {
        assert!(parse_verdict("{\"title\": \"T\"}").is_err());
    }
}
