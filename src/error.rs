use std::fmt;

/// Custom error type for myanai operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No API key was supplied with the request
    MissingApiKey
  , /// The upstream service rejected the supplied API key
    InvalidApiKey
  , /// API returned a non-success HTTP status
    ApiError(u16, String)
  , /// The model withheld output for safety/policy reasons
    ContentBlocked(String)
  , /// API returned success but no usable content
    EmptyResponse
  , /// Structured mode expected JSON but parsing failed;
    /// carries the raw model text for diagnostics
    ParseError(String)
  , /// Parsed JSON did not match the expected result shape
    SchemaError(String)
  , /// HTTP transport error
    HttpError(String)
  , /// Generic error
    Other(String)
}

// User-facing messages stay in Burmese, matching the rest
// of the product surface. Diagnostic variants stay English.
impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f,
                "သင်၏ Gemini API Key ကို Settings တွင် ထည့်သွင်းပါ။"
              )
            }
          , Error::InvalidApiKey => {
              write!(f,
                "သင်ထည့်သွင်းထားသော API Key သည် မှားယွင်းနေပါသည်။ \
                 ကျေးဇူးပြု၍ Settings တွင် ပြန်လည်စစ်ဆေးပါ။"
              )
            }
          , Error::ApiError(status, msg) => {
              write!(f,
                "API call failed with status: {}. {}",
                status, msg
              )
            }
          , Error::ContentBlocked(reason) => {
              write!(f,
                "AI မှ တုန့်ပြန်မှုကို မူဝါဒအရ ပိတ်ဆို့ထားပါသည်။ \
                 အကြောင်းရင်း: {}",
                reason
              )
            }
          , Error::EmptyResponse => {
              write!(f,
                "AI မှ မမျှော်လင့်သော တုန့်ပြန်မှု ရရှိပါသည်။"
              )
            }
          , Error::ParseError(raw) => {
              write!(f,
                "Failed to parse model output as JSON: {}",
                raw
              )
            }
          , Error::SchemaError(msg) => {
              write!(f,
                "Model output did not match expected shape: {}",
                msg
              )
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
