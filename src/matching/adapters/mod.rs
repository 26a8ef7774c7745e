//! Adapter implementations of the matching store port.

pub mod memory;
pub mod postgres;
