// SPDX-License-Identifier: MPL-2.0
//! Location selector component: wires the [`Selector`] state machine to the
//! directory service and turns user interaction into app-level effects.

use super::state::{LocalityRequest, Outcome, RegionRequest, Selector};
use crate::application::port::{DirectoryError, DirectoryService};
use crate::domain::location::{Locality, PointsQuery, Region};
use iced::Task;
use std::sync::Arc;

/// Messages handled by the location selector.
#[derive(Debug, Clone)]
pub enum Message {
    /// A region was picked; `None` is the "select a state" entry.
    RegionSelected(Option<Region>),
    /// A locality was picked; `None` is the "select a city" entry.
    LocalitySelected(Option<Locality>),
    RegionsLoaded {
        request: RegionRequest,
        result: Result<Vec<Region>, DirectoryError>,
    },
    LocalitiesLoaded {
        request: LocalityRequest,
        result: Result<Vec<Locality>, DirectoryError>,
    },
    RetryRegions,
    RetryLocalities,
    Confirm,
}

/// Effects propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the collection points screen for this selection.
    Navigate(PointsQuery),
    /// Show a warning toast.
    ShowWarning {
        key: &'static str,
        args: Vec<(String, String)>,
    },
    /// A previously failing list loaded; stale warnings can go.
    Recovered { key: &'static str },
    /// Confirm was pressed without a complete selection.
    SelectionIncomplete,
}

/// Notification key used when the region list cannot be fetched.
pub const REGIONS_LOAD_ERROR_KEY: &str = "notification-regions-load-error";
/// Notification key used when a locality list cannot be fetched.
pub const LOCALITIES_LOAD_ERROR_KEY: &str = "notification-localities-load-error";

/// Location selector state plus the service it fetches from.
pub struct State {
    selector: Selector,
    directory: Arc<dyn DirectoryService>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(directory: Arc<dyn DirectoryService>, require_complete_selection: bool) -> Self {
        Self {
            selector: Selector::new(require_complete_selection),
            directory,
        }
    }

    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    #[cfg(test)]
    pub(crate) fn selector_mut(&mut self) -> &mut Selector {
        &mut self.selector
    }

    /// Issues the initial region fetch. Returns `Task::none()` on later calls.
    pub fn mount(&mut self) -> Task<Message> {
        match self.selector.mount() {
            Some(request) => self.fetch_regions(request),
            None => Task::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::RegionSelected(region) => {
                let task = match self.selector.select_region(region) {
                    Some(request) => self.fetch_localities(request),
                    None => Task::none(),
                };
                (Effect::None, task)
            }
            Message::LocalitySelected(locality) => {
                self.selector.select_locality(locality);
                (Effect::None, Task::none())
            }
            Message::RegionsLoaded { request, result } => {
                let effect = match self.selector.regions_loaded(request, result) {
                    Outcome::Applied => {
                        tracing::debug!(
                            count = self.selector.regions().items().len(),
                            "region list loaded"
                        );
                        Effect::Recovered {
                            key: REGIONS_LOAD_ERROR_KEY,
                        }
                    }
                    Outcome::Failed(err) => {
                        tracing::warn!(error = %err, "failed to load region list");
                        Effect::ShowWarning {
                            key: REGIONS_LOAD_ERROR_KEY,
                            args: Vec::new(),
                        }
                    }
                    Outcome::Discarded => Effect::None,
                };
                (effect, Task::none())
            }
            Message::LocalitiesLoaded { request, result } => {
                let region = request.region().clone();
                let effect = match self.selector.localities_loaded(request, result) {
                    Outcome::Applied => Effect::Recovered {
                        key: LOCALITIES_LOAD_ERROR_KEY,
                    },
                    Outcome::Failed(err) => {
                        tracing::warn!(region = %region, error = %err, "failed to load locality list");
                        Effect::ShowWarning {
                            key: LOCALITIES_LOAD_ERROR_KEY,
                            args: vec![("region".to_string(), region.code().to_string())],
                        }
                    }
                    Outcome::Discarded => Effect::None,
                };
                (effect, Task::none())
            }
            Message::RetryRegions => {
                let task = match self.selector.retry_regions() {
                    Some(request) => self.fetch_regions(request),
                    None => Task::none(),
                };
                (Effect::None, task)
            }
            Message::RetryLocalities => {
                let task = match self.selector.retry_localities() {
                    Some(request) => self.fetch_localities(request),
                    None => Task::none(),
                };
                (Effect::None, task)
            }
            Message::Confirm => match self.selector.confirm() {
                Some(query) => {
                    tracing::info!(region = %query.region, locality = %query.locality, "selection confirmed");
                    (Effect::Navigate(query), Task::none())
                }
                None => (Effect::SelectionIncomplete, Task::none()),
            },
        }
    }

    fn fetch_regions(&self, request: RegionRequest) -> Task<Message> {
        tracing::debug!("requesting region list");
        Task::perform(self.directory.regions(), move |result| {
            Message::RegionsLoaded { request, result }
        })
    }

    fn fetch_localities(&self, request: LocalityRequest) -> Task<Message> {
        tracing::debug!(region = %request.region(), "requesting locality list");
        let future = self.directory.localities(request.region());
        Task::perform(future, move |result| Message::LocalitiesLoaded { request, result })
    }
}
