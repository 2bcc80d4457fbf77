// src/generators/mod.rs
pub mod password;

pub use password::{generate_required, generate_selective, generate_simple, GeneratorError};
