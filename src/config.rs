//! Configuration for the Gemini request adapter

use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str
  = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str
  = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig
{   /// Model name used for every request
    pub model: String
  , /// API base URL (overridable for stub servers)
    pub api_base: String
  , /// Sampling temperature for free-text generation
    pub text_temperature: f32
  , /// Sampling temperature for JSON-mode generation
    pub json_temperature: f32
}

impl Default for GeminiConfig
{   fn default() -> Self
    {   GeminiConfig
        {   model: DEFAULT_MODEL.to_string()
          , api_base: DEFAULT_API_BASE.to_string()
          , text_temperature: 0.7
          , json_temperature: 0.2
        }
    }
}

impl GeminiConfig
{   /// Config pointing at a non-default API base
    pub fn with_api_base(api_base: String) -> Self
    {   GeminiConfig
        {   api_base
          , ..GeminiConfig::default()
        }
    }
}
