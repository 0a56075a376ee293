#![forbid(unsafe_code)]

pub mod dto;
pub mod errors;
pub mod params;

pub use dto::{CreatureDto, CreaturePageDto};
pub use errors::{ApiError, ApiErrorCode};
pub use params::{
    parse_list_creatures_params, parse_list_creatures_params_with_limits, ListCreaturesParams,
    DEFAULT_PER_PAGE, MAX_PER_PAGE,
};

pub const CRATE_NAME: &str = "bestiary-api";
