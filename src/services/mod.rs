// One service per route group. Each makes exactly one outbound call and
// reshapes the answer; none of them holds state between requests.

pub mod definition;
pub mod frequency;
pub mod front;
pub mod pronunciation;

pub use definition::DefinitionService;
pub use frequency::{FrequencyResult, FrequencyService};
pub use front::FrontService;
pub use pronunciation::{PronunciationResult, PronunciationService};
