//! Adapters implementing the domain ports.

pub mod id_generator;
pub mod in_memory;
