//! Small helpers shared by the service and data layers.

pub mod file_store;
pub mod interval;
pub mod parse;
pub mod time;
