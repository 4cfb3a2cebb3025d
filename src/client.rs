use log::{debug, trace, error};

use crate::request::
{   GenerateContentRequest
  , GenerateContentResponse
  , GenerationConfig
  , Content
  , Part
  , ApiErrorBody
};

const JSON_MIME_TYPE: &str
  = "application/json";

/// Request adapter for the generateContent endpoint
///
/// Holds no credential: the API key travels with every call
/// so concurrent callers can use different keys.
pub struct GeminiClient
{   http_client: reqwest::Client
  , config: crate::config::GeminiConfig
}

impl GeminiClient
{   /// Create a client with the given configuration
    pub fn new(config: crate::config::GeminiConfig) -> Self
    {   debug!(
          "Creating GeminiClient for model: {}",
          config.model
        );
        GeminiClient
        {   http_client: reqwest::Client::new()
          , config
        }
    }

    /// Free-text generation: one prompt in, plain text out
    pub async fn generate_text(
      &self
    , prompt: &str
    , api_key: &str
    ) -> Result<String, crate::error::Error>
    {   self.submit(prompt, api_key, false).await
    }

    /// JSON-mode generation: one prompt in, parsed JSON out
    ///
    /// The model sometimes wraps its JSON in a markdown code
    /// fence; the fence is stripped before parsing.
    pub async fn generate_json(
      &self
    , prompt: &str
    , api_key: &str
    ) -> Result<serde_json::Value, crate::error::Error>
    {   let text = self.submit(prompt, api_key, true).await?;
        let stripped = strip_json_fence(&text);

        serde_json::from_str(stripped).map_err(|e| {
          error!("Model output is not valid JSON: {}", e);
          crate::error::Error::ParseError(text.clone())
        })
    }

    /// Single request/response exchange with the API
    ///
    /// Exactly one POST per call. No retry: a failure here
    /// surfaces once to the caller.
    async fn submit(
      &self
    , prompt: &str
    , api_key: &str
    , expect_json: bool
    ) -> Result<String, crate::error::Error>
    {   if api_key.is_empty()
        {   error!("No API key supplied");
            return Err(crate::error::Error::MissingApiKey);
        }

        let request = GenerateContentRequest
        {   contents: vec![
              Content
              {   parts: vec![
                    Part
                    {   text: prompt.to_string()
                    }
                  ]
              }
            ]
          , generation_config: if expect_json
            {   GenerationConfig
                {   temperature: self.config.json_temperature
                  , response_mime_type: Some(
                      JSON_MIME_TYPE.to_string()
                    )
                }
            } else
            {   GenerationConfig
                {   temperature: self.config.text_temperature
                  , response_mime_type: None
                }
            }
        };

        trace!("Gemini request: {:?}", request);

        // The key is a query parameter; keep it out of logs
        let url = format!(
          "{}/models/{}:generateContent?key={}",
          self.config.api_base, self.config.model, api_key
        );
        debug!(
          "POST models/{}:generateContent (json: {})",
          self.config.model, expect_json
        );

        let response = self.http_client
          .post(url)
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Gemini response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Gemini API error: {}", error_text);
            return Err(classify_api_error(
              status.as_u16(),
              &error_text
            ));
        }

        let envelope: GenerateContentResponse
          = response.json().await.map_err(|e| {
            error!("Envelope parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        extract_text(&envelope)
    }
}

/// Classify a non-success response body
///
/// An invalid credential comes back as a generic 400 whose
/// message contains "API key not valid".
fn classify_api_error(
  status: u16
, body: &str
) -> crate::error::Error
{   let message = serde_json::from_str::<ApiErrorBody>(body)
      .ok()
      .and_then(|b| b.error)
      .and_then(|e| e.message)
      .unwrap_or_default();

    if message.contains("API key not valid")
    {   error!("Upstream rejected the API key");
        return crate::error::Error::InvalidApiKey;
    }

    crate::error::Error::ApiError(status, message)
}

/// Pull the text of the first content part of the first
/// candidate, or explain why there is none
fn extract_text(
  envelope: &GenerateContentResponse
) -> Result<String, crate::error::Error>
{   let text = envelope.candidates
      .first()
      .and_then(|c| c.content.as_ref())
      .and_then(|c| c.parts.first())
      .and_then(|p| p.text.as_ref());

    if let Some(text) = text
    {   return Ok(text.clone());
    }

    if let Some(reason) = envelope.prompt_feedback
      .as_ref()
      .and_then(|f| f.block_reason.as_ref())
    {   error!("Response blocked, reason: {}", reason);
        return Err(crate::error::Error::ContentBlocked(
          reason.clone()
        ));
    }

    error!("No candidates in response");
    Err(crate::error::Error::EmptyResponse)
}

/// Strip a markdown code fence (```json ... ```) if present
///
/// Transparent for unfenced input: the trimmed text comes
/// back unchanged.
pub fn strip_json_fence(text: &str) -> &str
{   let trimmed = text.trim();

    let body = match trimmed.strip_prefix("```")
    {   Some(rest) => rest
      , None => return trimmed
    };

    // Drop the fence label ("json") up to the first newline
    let body = match body.find('\n')
    {   Some(i) => &body[i + 1..]
      , None => return trimmed
    };

    match body.rfind("```")
    {   Some(i) => body[..i].trim()
      , None => trimmed
    }
}
