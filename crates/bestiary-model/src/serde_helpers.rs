// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer};

/// Capture-count columns: absent or `null` means "no recorded attempts"
/// and decodes to zero; a present value must be a non-negative integer.
pub mod capture_count {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<i64>::deserialize(deserializer)?;
        match value {
            None => Ok(0),
            Some(n) if n >= 0 => Ok(n as u64),
            Some(n) => Err(serde::de::Error::custom(format!(
                "capture count must be non-negative, got {n}"
            ))),
        }
    }
}

/// The legacy dataset stores the NPC price as either a JSON number or a
/// numeric string; an empty string means "not sold".
pub mod legacy_price {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(0),
            Some(Raw::Number(n)) => Ok(n),
            Some(Raw::Text(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0);
                }
                trimmed.parse::<u64>().map_err(|_| {
                    serde::de::Error::custom(format!("price must be numeric, got {s:?}"))
                })
            }
        }
    }
}
