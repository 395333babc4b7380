pub mod error;
pub mod mixer;
pub mod parse;

pub use error::MixError;
pub use mixer::{Element, MixConfig, Mixed, Mixer, OriginalPosition};
