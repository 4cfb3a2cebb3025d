//! One task function per user-facing capability
//!
//! Every task composes its prompt deterministically from its
//! input, then delegates to the request adapter.

pub mod generic;
pub mod policy;
pub mod spelling;
pub mod translate;
pub mod reference;

pub use generic::generic_text;
pub use policy::policy_check;
pub use spelling::spelling_check;
pub use translate::translate;
pub use reference::
{   general_qa
  , health_answer
  , tech_explainer
  , dictionary_define
  , wiki_summary
};
