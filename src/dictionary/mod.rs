// Dictionary API access: outbound query builders, the keyed HTTP client, and
// the permissive records it returns.

pub mod client;
pub mod query;
pub mod types;

pub use client::DictionaryClient;
pub use query::{AudioQuery, DefinitionsQuery, Flag, FrequencyQuery};
pub use types::{
    AudioFile, Citation, DictionaryDefinition, ExampleUse, FrequencyEntry, FrequencySummary, Label,
};
