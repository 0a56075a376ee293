// SPDX-License-Identifier: Apache-2.0

use bestiary_model::{CaptureDevice, CreatureRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire shape of one creature: English field names, derived aggregate,
/// capture counts keyed by device wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDto {
    pub name: String,
    pub sprite_id: u32,
    pub level: u32,
    pub types: Vec<String>,
    pub clans: Vec<String>,
    pub npc_price: u64,
    pub locations: Vec<String>,
    pub capture_counts: BTreeMap<String, u64>,
    pub aggregate_capture_count: u64,
}

impl From<&CreatureRecord> for CreatureDto {
    fn from(record: &CreatureRecord) -> Self {
        let tags = |a: &str, b: &str| {
            [a, b]
                .iter()
                .filter(|tag| !tag.is_empty())
                .map(|tag| tag.to_string())
                .collect()
        };
        Self {
            name: record.name.clone(),
            sprite_id: record.sprite_id,
            level: record.level,
            types: tags(&record.primary_type, &record.secondary_type),
            clans: tags(&record.primary_clan, &record.secondary_clan),
            npc_price: record.npc_price,
            locations: record
                .map_locations()
                .into_iter()
                .map(str::to_string)
                .collect(),
            capture_counts: CaptureDevice::ALL
                .iter()
                .map(|device| (device.wire_name().to_string(), record.capture_count(*device)))
                .collect(),
            aggregate_capture_count: record.aggregate_capture_count(),
        }
    }
}

/// One page of search results with the pager totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreaturePageDto {
    pub items: Vec<CreatureDto>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl CreaturePageDto {
    #[must_use]
    pub fn from_page(page: &bestiary_query::PageResult<'_>) -> Self {
        Self {
            items: page.items.iter().map(|record| CreatureDto::from(*record)).collect(),
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_matches,
            total_pages: page.total_pages,
        }
    }
}
