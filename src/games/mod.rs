//! Game implementations.

pub mod doors;
