// src/mc/mod.rs
pub mod path_engine;

pub use path_engine::{generate_paths, generate_paths_with_rng, PathConfig, PathMatrix};
