//! Page generation seam and the Gemini REST client

use crate::domain::{GeneratedPage, PageImage, PageRequest};
use crate::error::{Result, StorypageError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Model used for full page generation (image + caption)
pub const PAGE_MODEL: &str = "gemini-2.5-flash-image-preview";
/// Model used for caption-only regeneration
pub const CAPTION_MODEL: &str = "gemini-2.5-flash";

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Abstract seam for the generation backend
pub trait PageGenerator {
    /// Produce a full page: rendered image plus caption
    fn generate_page(&self, request: &PageRequest) -> Result<GeneratedPage>;

    /// Produce only a caption
    fn generate_caption(&self, request: &PageRequest) -> Result<String>;
}

/// Gemini-backed implementation of [`PageGenerator`]
#[derive(Debug)]
pub struct GeminiGenerator {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl GeminiGenerator {
    /// Build a client from the GEMINI_API_KEY environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(StorypageError::MissingApiKey);
        }
        Ok(Self::with_base_url(api_key, API_BASE_URL.to_string()))
    }

    /// Build a client against a custom endpoint (tests, proxies)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        GeminiGenerator {
            http: reqwest::blocking::Client::new(),
            base_url,
            api_key,
        }
    }

    fn generate_content(
        &self,
        model: &str,
        request: &PageRequest,
        modalities: Option<Vec<&'static str>>,
    ) -> Result<GenerateContentResponse> {
        let body = GenerateContentBody {
            contents: [RequestContent {
                parts: [
                    RequestPart {
                        inline_data: Some(InlineData {
                            mime_type: &request.mime_type,
                            data: &request.photo_base64,
                        }),
                        text: None,
                    },
                    RequestPart {
                        inline_data: None,
                        text: Some(&request.prompt),
                    },
                ],
            }],
            generation_config: modalities
                .map(|response_modalities| GenerationConfig { response_modalities }),
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().unwrap_or_default();
            return Err(StorypageError::Generation(format!(
                "{} returned {}: {}",
                model,
                status,
                detail.trim()
            )));
        }

        Ok(response.json()?)
    }
}

impl PageGenerator for GeminiGenerator {
    fn generate_page(&self, request: &PageRequest) -> Result<GeneratedPage> {
        let response = self.generate_content(PAGE_MODEL, request, Some(vec!["IMAGE", "TEXT"]))?;
        page_from_response(response)
    }

    fn generate_caption(&self, request: &PageRequest) -> Result<String> {
        let response = self.generate_content(CAPTION_MODEL, request, None)?;
        caption_from_response(response)
    }
}

fn response_parts(response: GenerateContentResponse) -> impl Iterator<Item = ResponsePart> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
}

/// A page response must carry both halves; a partial answer is a failure.
fn page_from_response(response: GenerateContentResponse) -> Result<GeneratedPage> {
    let mut image = None;
    let mut caption = String::new();

    for part in response_parts(response) {
        if let Some(inline) = part.inline_data {
            let bytes = BASE64.decode(inline.data.as_bytes()).map_err(|e| {
                StorypageError::Generation(format!("invalid image payload: {}", e))
            })?;
            image = Some(PageImage {
                mime_type: inline.mime_type,
                bytes,
            });
        } else if let Some(text) = part.text {
            caption = text;
        }
    }

    match image {
        Some(image) if !caption.is_empty() => Ok(GeneratedPage { image, caption }),
        _ => Err(StorypageError::Generation(
            "the model did not return both an image and a caption".to_string(),
        )),
    }
}

fn caption_from_response(response: GenerateContentResponse) -> Result<String> {
    let caption: String = response_parts(response)
        .filter_map(|part| part.text)
        .collect();

    if caption.is_empty() {
        return Err(StorypageError::Generation(
            "the model did not return a caption".to_string(),
        ));
    }

    Ok(caption)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: [RequestContent<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestPart<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    inline_data: Option<ResponseInlineData>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseInlineData {
    mime_type: String,
    data: String,
}
