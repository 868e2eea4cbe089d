//! Game implementations.

pub mod scout;
