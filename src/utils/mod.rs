// src/utils/mod.rs
mod input;

pub use input::*;
