// Job ranking: term extraction, match scoring, and the pipeline that ties them
// to the listing source. All scoring calls go through llm_client.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod scorer;
pub mod terms;
