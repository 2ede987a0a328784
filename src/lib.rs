pub mod app;
pub mod cli;
pub mod file;
pub mod util;

pub use app::config::Config;
pub use file::generator::{create_hello_world_document, verify_document, CollisionPolicy};
pub use file::{DocumentTimestamp, FileGenerator, GenerateError, GenerateResult, GeneratedDocument};
pub use util::clock::{Clock, FixedClock, SystemClock};
