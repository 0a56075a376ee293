// SPDX-License-Identifier: Apache-2.0

use crate::debounce::Debouncer;
use crate::pipeline::{run_query, PageResult};
use crate::state::{FilterDimension, QueryState, SortDirection};
use bestiary_model::CreatureDataset;
use std::sync::Arc;
use std::time::Duration;

/// Interactive browsing session over one dataset snapshot: a `QueryState`
/// plus a debounced input channel. Single user, single task; the debounce
/// timer is the only suspension point.
#[derive(Debug)]
pub struct SearchSession {
    dataset: Arc<CreatureDataset>,
    state: QueryState,
    debouncer: Debouncer,
}

impl SearchSession {
    #[must_use]
    pub fn new(dataset: Arc<CreatureDataset>, debounce_delay: Duration) -> Self {
        Self {
            dataset,
            state: QueryState::default(),
            debouncer: Debouncer::new(debounce_delay),
        }
    }

    #[must_use]
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Feed a keystroke's worth of input. The text is not applied until
    /// it has been stable for the debounce delay.
    pub fn type_query(&self, text: &str) {
        self.debouncer.submit(text);
    }

    /// Waits out the debounce and folds the settled text into the state,
    /// resetting the page.
    pub async fn apply_settled(&mut self) {
        let settled = self.debouncer.settled().await;
        if settled != self.state.query {
            self.state.set_query(settled);
        }
    }

    pub fn set_dimension(&mut self, dimension: FilterDimension) {
        self.state.set_dimension(dimension);
        // The visible input box is cleared too, so any pending keystrokes
        // must not resurface after the debounce.
        self.debouncer.submit("");
    }

    pub fn set_sort(&mut self, sort: SortDirection) {
        self.state.set_sort(sort);
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.state.set_per_page(per_page);
    }

    /// Run the pipeline for the current state.
    #[must_use]
    pub fn current_page(&self) -> PageResult<'_> {
        run_query(self.dataset.records(), &self.state)
    }
}
