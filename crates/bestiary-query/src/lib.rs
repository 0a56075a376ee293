#![forbid(unsafe_code)]

mod debounce;
mod pipeline;
mod session;
mod state;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use pipeline::{filter_records, paginate, run_query, sort_records, PageResult};
pub use session::SearchSession;
pub use state::{FilterDimension, QueryState, SortDirection, UnknownVariant, DEFAULT_PER_PAGE};

pub const CRATE_NAME: &str = "bestiary-query";
