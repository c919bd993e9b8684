use std::env;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use thiserror::Error;

use crate::http_client::http_client;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Fixed instruction sent with every uploaded image.
pub const NAME_PROMPT: &str = "You are an expert in baseball strategy and MLB players. \
If the image shows a specific player, reply with only the player's first and last name. \
For example, if the player is Aaron Judge, write \"Aaron Judge\".";

#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl VisionConfig {
    pub fn from_env() -> Self {
        let api_base = env::var("GEMINI_API_BASE")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = env::var("GEMINI_MODEL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_key = env::var("GOOGLE_API_KEY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            api_base,
            model,
            api_key,
        }
    }
}

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("GOOGLE_API_KEY missing")]
    MissingApiKey,
    #[error("image request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("vision http {status}: {snippet}")]
    Http {
        status: reqwest::StatusCode,
        snippet: String,
    },
    #[error("invalid vision json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model returned no usable player name")]
    NoName,
}

/// MIME type for an accepted upload, by extension. Only JPEG and PNG.
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// One synchronous generateContent call: fixed prompt plus the inlined
/// image, returning the extracted name trimmed of whitespace.
pub fn extract_player_name(
    cfg: &VisionConfig,
    image: &[u8],
    mime: &str,
) -> Result<String, VisionError> {
    let api_key = cfg.api_key.as_deref().ok_or(VisionError::MissingApiKey)?;
    let url = format!("{}/models/{}:generateContent", cfg.api_base, cfg.model);
    let payload = serde_json::json!({
        "contents": [{
            "parts": [
                { "text": NAME_PROMPT },
                { "inline_data": { "mime_type": mime, "data": BASE64.encode(image) } }
            ]
        }]
    });

    let client = http_client()?;
    let resp = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(&payload)
        .send()?;
    let status = resp.status();
    let body = resp.text()?;
    if !status.is_success() {
        let snippet = body
            .trim()
            .replace('\n', " ")
            .chars()
            .take(220)
            .collect::<String>();
        return Err(VisionError::Http { status, snippet });
    }

    parse_player_name_json(&body)
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

pub fn parse_player_name_json(raw: &str) -> Result<String, VisionError> {
    let parsed: GenerateContentResponse = serde_json::from_str(raw)?;
    let name = parsed
        .candidates
        .into_iter()
        .flat_map(|c| c.content.parts)
        .find_map(|p| p.text)
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    if name.is_empty() {
        return Err(VisionError::NoName);
    }
    Ok(name)
}
