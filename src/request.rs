//! Wire types for the generateContent endpoint, task input
//! objects, and the structured result shapes

use serde::{Deserialize, Serialize};

// ===== Outbound Wire Types =====

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest
{   pub contents: Vec<Content>
  , #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig
}

#[derive(Debug, Clone, Serialize)]
pub struct Content
{   pub parts: Vec<Part>
}

#[derive(Debug, Clone, Serialize)]
pub struct Part
{   pub text: String
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig
{   pub temperature: f32
  , #[serde(rename = "responseMimeType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>
}

// ===== Inbound Wire Types =====

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse
{   #[serde(default)]
    pub candidates: Vec<Candidate>
  , #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate
{   #[serde(default)]
    pub content: Option<CandidateContent>
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent
{   #[serde(default)]
    pub parts: Vec<CandidatePart>
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart
{   #[serde(default)]
    pub text: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptFeedback
{   #[serde(rename = "blockReason")]
    pub block_reason: Option<String>
}

/// Error body shape for non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody
{   #[serde(default)]
    pub error: Option<ApiErrorDetail>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail
{   #[serde(default)]
    pub message: Option<String>
}

// ===== Task Inputs =====

/// Input for free-prompt generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericTextRequest
{   pub api_key: String
  , pub prompt: String
}

/// Input for policy screening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyCheckRequest
{   pub api_key: String
  , pub text: String
}

/// Input for spelling/grammar checking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingCheckRequest
{   pub api_key: String
  , pub text: String
}

/// Input for translation between two language codes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest
{   pub api_key: String
  , pub text: String
  , /// Source language code, e.g. "en"
    pub from: String
  , /// Target language code, e.g. "my"
    pub to: String
}

/// Input shared by the dictionary-tool tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest
{   pub api_key: String
  , pub query: String
}

// ===== Structured Results =====

/// Verdict of the policy screening task
///
/// `violated_keywords` is non-empty only when `is_violation`
/// is true; `revised_text` echoes the input text when it is
/// false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyCheckResult
{   #[serde(rename = "isViolation")]
    pub is_violation: bool
  , /// Explanation in Burmese
    pub reason: String
  , #[serde(rename = "violatedKeywords")]
    pub violated_keywords: Vec<String>
  , #[serde(rename = "revisedText")]
    pub revised_text: String
}

/// One detected spelling or grammar error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingCorrection
{   /// The exact offending substring
    pub incorrect: String
  , /// Its corrected form
    pub correct: String
}
