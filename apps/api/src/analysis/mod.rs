// Resume analysis: the submission pipeline and its HTTP adapters.
// The model call goes through llm_client only.

pub mod handlers;
pub mod pipeline;
