// SPDX-License-Identifier: Apache-2.0

use crate::creature::CreatureRecord;
use sha2::{Digest, Sha256};
use std::fmt::{Display, Formatter};
use std::path::Path;

#[derive(Debug)]
#[non_exhaustive]
pub enum DatasetError {
    Read { path: String, message: String },
    Parse { message: String },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, message } => write!(f, "failed to read dataset {path}: {message}"),
            Self::Parse { message } => write!(f, "failed to parse dataset: {message}"),
        }
    }
}

impl std::error::Error for DatasetError {}

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// The full creature snapshot, loaded wholesale and read-only for the
/// lifetime of the process. The record order is the dataset's original
/// order and is the tie-break order for stable sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureDataset {
    records: Vec<CreatureRecord>,
    fingerprint: String,
}

impl CreatureDataset {
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, DatasetError> {
        let records: Vec<CreatureRecord> =
            serde_json::from_slice(bytes).map_err(|e| DatasetError::Parse {
                message: e.to_string(),
            })?;
        Ok(Self {
            records,
            fingerprint: sha256_hex(bytes),
        })
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let bytes = std::fs::read(path).map_err(|e| DatasetError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_bytes(&bytes)
    }

    #[must_use]
    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// SHA-256 of the raw snapshot bytes; used as the ETag for the full
    /// record-set endpoint.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
