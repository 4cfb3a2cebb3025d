use log::{debug, error};

use crate::client::GeminiClient;
use crate::request::{SpellingCheckRequest, SpellingCorrection};

/// Checker prompt: word-by-word comparison against the
/// official dictionary, output strictly a JSON array
pub fn spelling_check_prompt(text: &str) -> String
{   format!(
      "You are an extremely meticulous Burmese spelling and \
       grammar checker. Your single task is to analyze the \
       following Burmese text word by word against the \
       official Myanmar Language Commission dictionary. You \
       must be highly sensitive and flag any word that is \
       not 100% correct.\n\n\
       Your response MUST be a valid JSON array of objects.\n\
       - Each object must have two keys: \"incorrect\" (the \
       exact misspelled word or phrase) and \"correct\" (the \
       corrected version).\n\
       - If a word is misspelled, provide the correct \
       spelling.\n\
       - If you find a grammatical error, identify the \
       incorrect phrase and provide the correction.\n\
       - If there are absolutely no errors, you MUST return \
       an empty array [].\n\n\
       Do not add any explanations, notes, or apologies. \
       Your entire output must be only the JSON array.\n\n\
       Analyze this text: \"{}\"",
      text
    )
}

/// Check a Burmese text for spelling and grammar errors
///
/// A reply that parses as JSON but is not an array (the
/// model apologizing in prose, say) degrades to an empty
/// result set instead of failing the call.
pub async fn spelling_check(
  client: &GeminiClient
, request: SpellingCheckRequest
) -> Result<Vec<SpellingCorrection>, crate::error::Error>
{   debug!("Handling spelling_check");

    if request.api_key.is_empty()
    {   return Err(crate::error::Error::MissingApiKey);
    }

    let prompt = spelling_check_prompt(&request.text);
    let value = client
      .generate_json(&prompt, &request.api_key)
      .await?;

    if !value.is_array()
    {   debug!("Spelling reply is not an array, treating as clean");
        return Ok(vec![]);
    }

    serde_json::from_value(value).map_err(|e| {
      error!("Spelling entry failed validation: {}", e);
      crate::error::Error::SchemaError(e.to_string())
    })
}
