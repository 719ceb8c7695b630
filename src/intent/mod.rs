//! Prompt Intent Parsing
//!
//! Heuristic pipeline turning a free-form request such as
//! "create a UserProfile component with state" into an [`Intent`]:
//!
//! 1. [`normalizer`]: lower-case, strip symbols, keep the original alongside
//! 2. [`classifier`]: ordered keyword rules pick the component type
//! 3. [`name`]: five-pattern cascade guesses the component name
//! 4. [`features`]: keyword table plus request options build the feature set
//! 5. [`parser`]: averages the stage confidences
//!
//! The pipeline is total. It has no error path and no shared mutable state.
//!
//! [`Intent`]: crate::types::Intent

pub mod classifier;
pub mod features;
pub mod name;
pub mod normalizer;
pub mod parser;
pub mod rules;

pub use classifier::{TypeMatch, classify_with, detect_component_type};
pub use features::{FeatureMatch, StyleLibrary, detect_features};
pub use name::{NameMatch, NamePattern, extract_component_name};
pub use normalizer::{NormalizedPrompt, normalize};
pub use parser::{IntentBreakdown, IntentParser, parse_intent};
pub use rules::TypeRule;
