pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod operator;
pub mod scene;
pub mod selector;

pub use config::{CenterMode, HideKeyConfig};
pub use error::{MaterialHideError, Result};
