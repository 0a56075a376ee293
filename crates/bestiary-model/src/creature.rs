// SPDX-License-Identifier: Apache-2.0

use crate::serde_helpers;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const CAPTURE_DEVICE_COUNT: usize = 9;

/// Sentinel used by the legacy dataset for "not obtainable on any map".
const NO_LOCATION: &str = "no";

/// One of the nine in-game item types used to catch a creature. Order
/// matches the dataset column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum CaptureDevice {
    PokeBall,
    GreatBall,
    SuperBall,
    UltraBall,
    BeastBall1,
    BeastBall2,
    BeastBall3,
    BeastBall4,
    SafariBall,
}

impl CaptureDevice {
    pub const ALL: [Self; CAPTURE_DEVICE_COUNT] = [
        Self::PokeBall,
        Self::GreatBall,
        Self::SuperBall,
        Self::UltraBall,
        Self::BeastBall1,
        Self::BeastBall2,
        Self::BeastBall3,
        Self::BeastBall4,
        Self::SafariBall,
    ];

    /// Stable machine-readable name used on the wire.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::PokeBall => "poke_ball",
            Self::GreatBall => "great_ball",
            Self::SuperBall => "super_ball",
            Self::UltraBall => "ultra_ball",
            Self::BeastBall1 => "beast_ball_1",
            Self::BeastBall2 => "beast_ball_2",
            Self::BeastBall3 => "beast_ball_3",
            Self::BeastBall4 => "beast_ball_4",
            Self::SafariBall => "safari_ball",
        }
    }

    /// Human-facing name as the original product displayed it.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PokeBall => "Poké Ball",
            Self::GreatBall => "Great Ball",
            Self::SuperBall => "Super Ball",
            Self::UltraBall => "Ultra Ball",
            Self::BeastBall1 => "Beast Ball 1",
            Self::BeastBall2 => "Beast Ball 2",
            Self::BeastBall3 => "Beast Ball 3",
            Self::BeastBall4 => "Beast Ball 4",
            Self::SafariBall => "Safari Ball",
        }
    }

    /// Column name in the legacy dataset JSON.
    #[must_use]
    pub const fn legacy_column(self) -> &'static str {
        match self {
            Self::PokeBall => "tablepb",
            Self::GreatBall => "tablegb",
            Self::SuperBall => "tablesb",
            Self::UltraBall => "tableub",
            Self::BeastBall1 => "tablebe1",
            Self::BeastBall2 => "tablebe2",
            Self::BeastBall3 => "tablebe3",
            Self::BeastBall4 => "tablebe4",
            Self::SafariBall => "tablesfb",
        }
    }
}

impl Display for CaptureDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One creature entry from the dataset snapshot. Immutable once loaded;
/// field names map onto the legacy JSON columns. The legacy file carries
/// many presentation-only columns beyond these; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "numero")]
    pub sprite_id: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(rename = "tipo1", default)]
    pub primary_type: String,
    #[serde(rename = "tipo2", default)]
    pub secondary_type: String,
    #[serde(rename = "clan1", default)]
    pub primary_clan: String,
    #[serde(rename = "clan2", default)]
    pub secondary_clan: String,
    #[serde(
        rename = "pricenpc",
        default,
        deserialize_with = "serde_helpers::legacy_price::deserialize"
    )]
    pub npc_price: u64,
    /// `;`-delimited map location descriptors; `no` means unobtainable.
    #[serde(rename = "mapas", default)]
    pub locations: String,
    #[serde(
        rename = "tablepb",
        default,
        deserialize_with = "serde_helpers::capture_count::deserialize"
    )]
    pub poke_ball: u64,
    #[serde(
        rename = "tablegb",
        default,
        deserialize_with = "serde_helpers::capture_count::deserialize"
    )]
    pub great_ball: u64,
    #[serde(
        rename = "tablesb",
        default,
        deserialize_with = "serde_helpers::capture_count::deserialize"
    )]
    pub super_ball: u64,
    #[serde(
        rename = "tableub",
        default,
        deserialize_with = "serde_helpers::capture_count::deserialize"
    )]
    pub ultra_ball: u64,
    #[serde(
        rename = "tablebe1",
        default,
        deserialize_with = "serde_helpers::capture_count::deserialize"
    )]
    pub beast_ball_1: u64,
    #[serde(
        rename = "tablebe2",
        default,
        deserialize_with = "serde_helpers::capture_count::deserialize"
    )]
    pub beast_ball_2: u64,
    #[serde(
        rename = "tablebe3",
        default,
        deserialize_with = "serde_helpers::capture_count::deserialize"
    )]
    pub beast_ball_3: u64,
    #[serde(
        rename = "tablebe4",
        default,
        deserialize_with = "serde_helpers::capture_count::deserialize"
    )]
    pub beast_ball_4: u64,
    #[serde(
        rename = "tablesfb",
        default,
        deserialize_with = "serde_helpers::capture_count::deserialize"
    )]
    pub safari_ball: u64,
}

impl CreatureRecord {
    /// Recorded average attempt count for one capture device.
    #[must_use]
    pub fn capture_count(&self, device: CaptureDevice) -> u64 {
        match device {
            CaptureDevice::PokeBall => self.poke_ball,
            CaptureDevice::GreatBall => self.great_ball,
            CaptureDevice::SuperBall => self.super_ball,
            CaptureDevice::UltraBall => self.ultra_ball,
            CaptureDevice::BeastBall1 => self.beast_ball_1,
            CaptureDevice::BeastBall2 => self.beast_ball_2,
            CaptureDevice::BeastBall3 => self.beast_ball_3,
            CaptureDevice::BeastBall4 => self.beast_ball_4,
            CaptureDevice::SafariBall => self.safari_ball,
        }
    }

    /// Sum of the nine capture-count fields, the sort key for capture
    /// ordering.
    #[must_use]
    pub fn aggregate_capture_count(&self) -> u64 {
        CaptureDevice::ALL
            .iter()
            .map(|device| self.capture_count(*device))
            .sum()
    }

    /// Map location descriptors, with the `no` sentinel and empty
    /// segments stripped.
    #[must_use]
    pub fn map_locations(&self) -> Vec<&str> {
        self.locations
            .split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty() && !segment.eq_ignore_ascii_case(NO_LOCATION))
            .collect()
    }
}
