// Domain module - Core types shared across layers
pub mod config;
pub mod error;
pub mod request;

pub use config::NixGlHostConfig;
pub use error::{NixGlHostError, NixGlHostResult};
pub use request::InvocationRequest;
