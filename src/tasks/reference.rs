//! Dictionary-tool tasks: free-text answers in Burmese
//!
//! All of these share one contract: a query string in, a
//! multi-paragraph plain-text Burmese answer out, no
//! markdown formatting.

use log::debug;

use crate::client::GeminiClient;
use crate::request::QueryRequest;

async fn run_query(
  client: &GeminiClient
, request: &QueryRequest
, prompt: String
) -> Result<String, crate::error::Error>
{   if request.api_key.is_empty()
    {   return Err(crate::error::Error::MissingApiKey);
    }

    client.generate_text(&prompt, &request.api_key).await
}

/// General-knowledge answer for an arbitrary query
pub async fn general_qa(
  client: &GeminiClient
, request: QueryRequest
) -> Result<String, crate::error::Error>
{   debug!("Handling general_qa");
    let prompt = format!(
      "Provide a detailed, multi-paragraph, helpful, \
       general-knowledge answer in Burmese for the following \
       query. Structure the answer with clear explanations. \
       Do not use any markdown formatting like ** or ##. \
       Query: \"{}\"",
      request.query
    );
    run_query(client, &request, prompt).await
}

/// Health-related answer; informational, not medical advice
pub async fn health_answer(
  client: &GeminiClient
, request: QueryRequest
) -> Result<String, crate::error::Error>
{   debug!("Handling health_answer");
    let prompt = format!(
      "Provide a detailed, multi-paragraph, helpful, \
       general-knowledge answer in Burmese for the following \
       health-related query. Structure the answer with clear \
       explanations. This is not medical advice. Do not use \
       any markdown formatting like ** or ##. Query: \"{}\"",
      request.query
    );
    run_query(client, &request, prompt).await
}

/// Technology/AI topic explainer
pub async fn tech_explainer(
  client: &GeminiClient
, request: QueryRequest
) -> Result<String, crate::error::Error>
{   debug!("Handling tech_explainer");
    let prompt = format!(
      "Provide a detailed, multi-paragraph, clear \
       explanation in Burmese for the following \
       technology/AI topic. Structure the answer with clear \
       explanations. Do not use any markdown formatting like \
       ** or ##. Topic: \"{}\"",
      request.query
    );
    run_query(client, &request, prompt).await
}

/// Dictionary-style definition of a single word
pub async fn dictionary_define(
  client: &GeminiClient
, request: QueryRequest
) -> Result<String, crate::error::Error>
{   debug!("Handling dictionary_define");
    let prompt = format!(
      "Provide a detailed, multi-paragraph, dictionary-style \
       definition in Burmese for the word: \"{}\". Include \
       its part of speech, different meanings, and example \
       sentences. Do not use any markdown formatting like ** \
       or ##.",
      request.query
    );
    run_query(client, &request, prompt).await
}

/// Wikipedia-style topic summary
pub async fn wiki_summary(
  client: &GeminiClient
, request: QueryRequest
) -> Result<String, crate::error::Error>
{   debug!("Handling wiki_summary");
    let prompt = format!(
      "Provide a detailed, multi-paragraph, Wikipedia-style \
       summary in Burmese for the topic: \"{}\". The summary \
       must be neutral, informative, and well-structured. Do \
       not use any markdown formatting like ** or ##.",
      request.query
    );
    run_query(client, &request, prompt).await
}
