use log::debug;

use crate::client::GeminiClient;
use crate::request::GenericTextRequest;

/// Forward a caller-composed prompt as-is
pub async fn generic_text(
  client: &GeminiClient
, request: GenericTextRequest
) -> Result<String, crate::error::Error>
{   debug!("Handling generic_text");

    if request.api_key.is_empty()
    {   return Err(crate::error::Error::MissingApiKey);
    }

    client
      .generate_text(&request.prompt, &request.api_key)
      .await
}
