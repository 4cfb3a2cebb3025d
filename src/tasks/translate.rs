use log::debug;

use crate::client::GeminiClient;
use crate::request::TranslateRequest;

/// Language code to bilingual display name
///
/// Codes absent from this table pass through verbatim as
/// their own display name.
pub const LANGUAGES: &[(&str, &str)] = &[
  ("my", "Burmese (မြန်မာ)")
, ("en", "English (အင်္ဂလိပ်)")
, ("th", "Thai (ထိုင်း)")
, ("zh", "Chinese (တရုတ်)")
, ("km", "Cambodian (ကမ္ဘောဒီးယား)")
, ("vi", "Vietnamese (ဗီယက်နမ်)")
, ("fr", "French (ပြင်သစ်)")
, ("ru", "Russian (ရုရှား)")
, ("ja", "Japanese (ဂျပန်)")
, ("ko", "Korean (ကိုးရီးယား)")
, ("de", "German (ဂျာမနီ)")
];

/// Resolve a language code to its display name
pub fn language_display_name(code: &str) -> &str
{   LANGUAGES
      .iter()
      .find(|(c, _)| *c == code)
      .map(|(_, name)| *name)
      .unwrap_or(code)
}

/// Translation prompt: translated text only, no labels
pub fn translate_prompt(
  text: &str
, from: &str
, to: &str
) -> String
{   format!(
      "Translate the following text from {} to {}. Provide \
       only the translated text, without any additional \
       explanations or labels. Text: \"{}\"",
      language_display_name(from),
      language_display_name(to),
      text
    )
}

/// Translate a text between two languages
pub async fn translate(
  client: &GeminiClient
, request: TranslateRequest
) -> Result<String, crate::error::Error>
{   debug!(
      "Handling translate: {} -> {}",
      request.from, request.to
    );

    if request.api_key.is_empty()
    {   return Err(crate::error::Error::MissingApiKey);
    }

    let prompt = translate_prompt(
      &request.text,
      &request.from,
      &request.to
    );
    client.generate_text(&prompt, &request.api_key).await
}
