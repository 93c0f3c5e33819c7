//! The two sides of the table.
//!
//! - [`Human`]: picks off a numbered menu through the validator
//! - [`Computer`]: picks uniformly at random
mod computer;
mod human;

pub use computer::*;
pub use human::*;
