pub mod cli;
pub mod config;
pub mod convert;
pub mod error;

pub use config::Config;
pub use convert::{to_camel_case, to_dot_case, to_kebab_case, CaseStyle};
pub use error::CaseError;

/// One input string and the converted output produced for it.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}
