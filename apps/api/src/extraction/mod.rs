// Resume extraction: raw text in, StructuredProfile out, through a fallback
// ladder of oracle → deterministic keyword extraction → fixed stub.

pub mod deterministic;
pub mod handlers;
pub mod ingest;
pub mod oracle;
pub mod pipeline;
pub mod prompts;
pub mod segmenter;
pub mod taxonomy;
