mod callback;
mod config;
mod error;
mod route;
mod types;

pub use callback::*;
pub use config::*;
pub use error::*;
pub use route::*;
pub use types::*;
