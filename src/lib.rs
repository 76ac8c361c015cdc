pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{LocalStorage, UuidGenerator};
pub use config::CliConfig;
pub use core::assembler::CountryAssembler;
pub use core::store::{ReferenceData, ReferenceStore};
pub use domain::model::{CountryResult, Currency};
pub use server::PreviewContext;
pub use utils::error::{PreviewError, Result};
