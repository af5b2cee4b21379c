pub mod wrap;

pub use wrap::{display_width, fill};
