#![forbid(unsafe_code)]

pub mod creature;
pub mod dataset;
mod serde_helpers;

pub use creature::{CaptureDevice, CreatureRecord, CAPTURE_DEVICE_COUNT};
pub use dataset::{CreatureDataset, DatasetError};

pub const CRATE_NAME: &str = "bestiary-model";
