// Language-model access for the definition route: prompt construction, the
// structured result schema, and the chat-completions client behind the
// `DefinitionProvider` seam.

pub mod client;
pub mod prompt;
pub mod schema;
pub mod traits;

pub use client::CompletionClient;
pub use schema::DefinitionResult;
pub use traits::DefinitionProvider;
