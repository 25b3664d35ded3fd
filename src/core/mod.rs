// src/core/mod.rs

pub mod engine;
pub mod expand;
pub mod normalize;
pub mod tables;
pub mod transducer;
pub mod types;
