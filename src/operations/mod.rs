mod affected;
mod generate;
mod live_buffer;
mod refresh;
mod shrink;

pub use affected::AffectedVertices;
pub use generate::{GenerateHideKey, GeneratedKeys};
pub use refresh::RefreshSelector;
pub use shrink::{Shrink, ShrinkTarget};
