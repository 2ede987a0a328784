pub mod document;
pub mod error;
pub mod generator;
pub mod naming;

pub use document::{DocumentTimestamp, GeneratedDocument};
pub use error::{GenerateError, GenerateResult};
pub use generator::{FileGenerator, GeneratedFile, Verification};
