//! API request handlers

mod health;
mod profiles;

pub use health::*;
pub use profiles::*;
