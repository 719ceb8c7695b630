//! uiforge - Prompt-to-Component Intent Parsing
//!
//! Turns natural-language UI requests ("create a UserProfile component with
//! state") into structured intents, and packages generated component code
//! into a ready-to-use file set.
//!
//! ## Core Features
//!
//! - **Intent Parsing**: rule-table heuristics for component type, name and
//!   features, each with a confidence in `[0, 1]`
//! - **Templates**: async repository of starter templates with path guards
//! - **Post-Processing**: fence extraction, `package.json` and tool configs
//! - **Prompt Construction**: system prompt for the code-generation model
//!
//! ## Quick Start
//!
//! ```
//! use uiforge::{RequestOptions, parse_intent};
//!
//! let intent = parse_intent("Create a UserProfile component", &RequestOptions::default());
//! assert_eq!(intent.component_name, "UserProfile");
//! assert_eq!(intent.component_type, "react-component");
//! ```
//!
//! ## Modules
//!
//! - [`intent`]: normalization, classification, name extraction, features
//! - [`templates`]: template repository trait and filesystem implementation
//! - [`postprocess`]: generated code packaging
//! - [`prompt`]: generation prompt builder
//! - [`config`]: layered configuration

pub mod cli;
pub mod config;
pub mod intent;
pub mod postprocess;
pub mod prompt;
pub mod templates;
pub mod types;

pub use intent::{IntentParser, parse_intent};
pub use postprocess::{DefaultPostProcessor, PostProcessor};
pub use templates::{FileTemplateRepository, TemplateRepository};
pub use types::{
    ForgeError, GenerationRequest, GenerationResponse, Intent, RequestOptions, Result,
};
