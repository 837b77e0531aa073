pub mod case;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod types;
pub mod wire;

pub use error::DomainError;
pub use wire::WireEnum;
