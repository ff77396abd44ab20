pub mod engine;
pub mod error;
pub mod install;
pub mod io;
pub mod paths;
pub mod project;
pub mod resolver;
pub mod types;

pub use error::{FlogoError, Result};
