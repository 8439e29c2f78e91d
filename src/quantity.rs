#[macro_use]
mod macros;

pub mod cost;
pub mod distance;
pub mod frequency;
pub mod power;
pub mod time;
pub mod volume;
