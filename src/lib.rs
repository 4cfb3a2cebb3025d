pub mod error;
pub mod config;
pub mod request;
pub mod client;
pub mod tasks;

/*

myanai (Myanmar AI) - async-only rust library exposing
Burmese text utilities (translate, spelling check, policy
screening, dictionary tools) over a single Gemini
generateContent endpoint; one prompt per call, no retries,
no streaming, the api key travels with every request.

myanai/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and main documentation
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Model name, api base, temperatures
│   ├── client.rs       # Request adapter (one HTTP POST)
│   ├── request.rs      # Wire types, task inputs, results
│   └── tasks/          # One module per capability
│       ├── mod.rs      # Re-exports all tasks
│       ├── generic.rs  # Free-prompt generation
│       ├── policy.rs   # Policy screening + keywords guide
│       ├── spelling.rs # Spelling/grammar check
│       ├── translate.rs# Translation + language table
│       └── reference.rs# QA, health, tech, dict, wiki
└── tests/              # Integration tests

*/

/// MYANAI API INTERFACE:

pub use error::Error;
pub use config::GeminiConfig;
pub use client::GeminiClient;
pub use request::
{   GenericTextRequest
  , PolicyCheckRequest
  , SpellingCheckRequest
  , TranslateRequest
  , QueryRequest
  , PolicyCheckResult
  , SpellingCorrection
};
pub use tasks::
{   generic_text
  , policy_check
  , spelling_check
  , translate
  , general_qa
  , health_answer
  , tech_explainer
  , dictionary_define
  , wiki_summary
};
