pub mod config;

pub use config::{ComputeType, DecodeOptions, Device, EngineConfig};
