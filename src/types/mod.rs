pub mod domain;
pub mod error;

pub use domain::{
    FileKind, GeneratedFile, GenerationRequest, GenerationResponse, HealthStatus, Intent,
    RequestOptions,
};
pub use error::{ForgeError, Result, ValidationError};
