// src/api/handlers/mod.rs
pub mod generator;
pub mod index;
pub mod records;
pub mod system;
