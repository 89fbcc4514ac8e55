//! Command implementations for ldgen CLI

mod detect;
mod generate;
mod misc;
mod validate;

pub use detect::*;
pub use generate::*;
pub use misc::*;
pub use validate::*;
