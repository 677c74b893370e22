// HTTP surface. Every route is a GET returning JSON:
//
//   /                        health probe
//   /front/:word             raw dictionary definitions passthrough
//   /definition/:word        language-model definition, optional ?context=
//   /frequency/:word         yearly usage counts
//   /pronunciation/:word     first audio pronunciation URL

pub mod cors;
pub mod definition;
pub mod frequency;
pub mod front;
pub mod health;
pub mod pronunciation;
pub mod routes;

pub use routes::{AppState, create_router};
