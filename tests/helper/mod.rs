pub mod source;

pub use source::{MockSource, commit};
