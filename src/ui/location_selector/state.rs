// SPDX-License-Identifier: MPL-2.0
//! Selection state machine for the cascading state/city pickers.
//!
//! This type performs no I/O. Operations that need data return a request tag
//! that the caller turns into a fetch; the result comes back through
//! [`Selector::regions_loaded`] / [`Selector::localities_loaded`] together
//! with the tag, and results whose tag is no longer current are discarded.

use crate::application::port::DirectoryError;
use crate::domain::location::{Locality, PointsQuery, Region};

// =============================================================================
// Candidate lists
// =============================================================================

/// Fetch status of a candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested yet (or the list was reset).
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded. The list may still be empty.
    Loaded,
    /// The last request failed.
    Failed(DirectoryError),
}

/// A list of options plus the status of the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates<T> {
    items: Vec<T>,
    status: FetchStatus,
}

impl<T> Default for Candidates<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: FetchStatus::Idle,
        }
    }
}

impl<T> Candidates<T> {
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// The service answered successfully with nothing in it.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.status == FetchStatus::Loaded && self.items.is_empty()
    }

    #[must_use]
    pub fn failure(&self) -> Option<&DirectoryError> {
        match &self.status {
            FetchStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn start_loading(&mut self) {
        self.status = FetchStatus::Loading;
    }

    fn settle(&mut self, result: Result<Vec<T>, DirectoryError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.status = FetchStatus::Loaded;
            }
            // A failed fetch leaves the previous items in place
            Err(err) => self.status = FetchStatus::Failed(err),
        }
    }
}

// =============================================================================
// Request tags
// =============================================================================

/// Tag of an outstanding region list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRequest {
    generation: u64,
}

/// Tag of an outstanding locality list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityRequest {
    region: Region,
    generation: u64,
}

impl LocalityRequest {
    /// Region the request was issued for.
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }
}

/// What happened to a fetch result handed back to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The result replaced the candidate list.
    Applied,
    /// The fetch failed; the list is marked as failed.
    Failed(DirectoryError),
    /// The result belonged to a superseded request and was dropped.
    Discarded,
}

/// Coarse position in the selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    RegionChosen,
    LocalityChosen,
}

// =============================================================================
// Selector
// =============================================================================

/// State of the two dependent pickers.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    regions: Candidates<Region>,
    localities: Candidates<Locality>,
    selected_region: Option<Region>,
    selected_locality: Option<Locality>,
    region_generation: u64,
    locality_generation: u64,
    require_complete_selection: bool,
}

impl Selector {
    /// Creates an empty selector.
    ///
    /// With `require_complete_selection` set, [`Selector::confirm`] refuses
    /// to produce a payload until both pickers hold a value.
    #[must_use]
    pub fn new(require_complete_selection: bool) -> Self {
        Self {
            require_complete_selection,
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Regions
    // -------------------------------------------------------------------------

    /// Starts the one-time region fetch. Returns `None` once it has been issued.
    pub fn mount(&mut self) -> Option<RegionRequest> {
        if self.regions.status != FetchStatus::Idle {
            return None;
        }
        Some(self.request_regions())
    }

    /// Re-issues the region fetch after a failure.
    pub fn retry_regions(&mut self) -> Option<RegionRequest> {
        if self.regions.failure().is_none() {
            return None;
        }
        Some(self.request_regions())
    }

    fn request_regions(&mut self) -> RegionRequest {
        self.region_generation += 1;
        self.regions.start_loading();
        RegionRequest {
            generation: self.region_generation,
        }
    }

    /// Applies the result of a region fetch.
    pub fn regions_loaded(
        &mut self,
        request: RegionRequest,
        result: Result<Vec<Region>, DirectoryError>,
    ) -> Outcome {
        if request.generation != self.region_generation {
            tracing::debug!("discarding superseded region list");
            return Outcome::Discarded;
        }

        let failure = result.as_ref().err().cloned();
        self.regions.settle(result);
        match failure {
            Some(err) => Outcome::Failed(err),
            None => Outcome::Applied,
        }
    }

    // -------------------------------------------------------------------------
    // Localities
    // -------------------------------------------------------------------------

    /// Changes the selected region.
    ///
    /// `None` (the "select a state" entry) clears the locality list and
    /// selection without fetching. A concrete region returns the tag of the
    /// locality fetch to issue, unless that region is already selected and its
    /// list is loading or loaded.
    ///
    /// The previously selected locality is kept when switching between
    /// concrete regions, even if the new list does not contain it.
    pub fn select_region(&mut self, region: Option<Region>) -> Option<LocalityRequest> {
        let Some(region) = region else {
            self.selected_region = None;
            self.selected_locality = None;
            self.localities = Candidates::default();
            // Invalidate whatever is still in flight
            self.locality_generation += 1;
            return None;
        };

        let unchanged = self.selected_region.as_ref() == Some(&region);
        if unchanged && self.localities.failure().is_none() {
            return None;
        }

        self.selected_region = Some(region.clone());
        Some(self.request_localities(region))
    }

    /// Re-issues the locality fetch for the selected region after a failure.
    pub fn retry_localities(&mut self) -> Option<LocalityRequest> {
        self.localities.failure()?;
        let region = self.selected_region.clone()?;
        Some(self.request_localities(region))
    }

    fn request_localities(&mut self, region: Region) -> LocalityRequest {
        self.locality_generation += 1;
        self.localities = Candidates::default();
        self.localities.start_loading();
        LocalityRequest {
            region,
            generation: self.locality_generation,
        }
    }

    /// Applies the result of a locality fetch if it is still current.
    pub fn localities_loaded(
        &mut self,
        request: LocalityRequest,
        result: Result<Vec<Locality>, DirectoryError>,
    ) -> Outcome {
        let current = request.generation == self.locality_generation
            && self.selected_region.as_ref() == Some(&request.region);
        if !current {
            tracing::debug!(region = %request.region, "discarding stale locality list");
            return Outcome::Discarded;
        }

        let failure = result.as_ref().err().cloned();
        self.localities.settle(result);
        match failure {
            Some(err) => Outcome::Failed(err),
            None => Outcome::Applied,
        }
    }

    /// Changes the selected locality. No side effects.
    pub fn select_locality(&mut self, locality: Option<Locality>) {
        self.selected_locality = locality;
    }

    // -------------------------------------------------------------------------
    // Confirmation
    // -------------------------------------------------------------------------

    /// Whether [`Selector::confirm`] would produce a payload.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        !self.require_complete_selection || self.phase() == Phase::LocalityChosen
    }

    /// Builds the navigation payload. Does not change the selection.
    ///
    /// Unless complete selections are required, missing values are forwarded
    /// as the `"0"` placeholder.
    #[must_use]
    pub fn confirm(&self) -> Option<PointsQuery> {
        if !self.can_confirm() {
            return None;
        }
        Some(PointsQuery::from_selection(
            self.selected_region.as_ref(),
            self.selected_locality.as_ref(),
        ))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.selected_region, &self.selected_locality) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::RegionChosen,
            (Some(_), Some(_)) => Phase::LocalityChosen,
        }
    }

    #[must_use]
    pub fn regions(&self) -> &Candidates<Region> {
        &self.regions
    }

    #[must_use]
    pub fn localities(&self) -> &Candidates<Locality> {
        &self.localities
    }

    #[must_use]
    pub fn selected_region(&self) -> Option<&Region> {
        self.selected_region.as_ref()
    }

    #[must_use]
    pub fn selected_locality(&self) -> Option<&Locality> {
        self.selected_locality.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(codes: &[&str]) -> Vec<Region> {
        codes.iter().map(|c| Region::new(*c)).collect()
    }

    fn localities(names: &[&str]) -> Vec<Locality> {
        names.iter().map(|n| Locality::new(*n)).collect()
    }

    fn mounted_with(codes: &[&str]) -> Selector {
        let mut selector = Selector::new(false);
        let request = selector.mount().expect("first mount issues a fetch");
        assert_eq!(
            selector.regions_loaded(request, Ok(regions(codes))),
            Outcome::Applied
        );
        selector
    }

    #[test]
    fn mount_fetches_regions_once() {
        let mut selector = Selector::new(false);
        assert!(selector.mount().is_some());
        assert!(selector.regions().is_loading());
        assert!(selector.mount().is_none());
    }

    #[test]
    fn region_list_equals_service_order() {
        let selector = mounted_with(&["SP", "RJ", "AC"]);
        assert_eq!(selector.regions().items(), regions(&["SP", "RJ", "AC"]).as_slice());
        assert_eq!(selector.regions().status(), &FetchStatus::Loaded);
    }

    #[test]
    fn empty_region_list_is_distinct_from_failure() {
        let selector = mounted_with(&[]);
        assert!(selector.regions().is_empty_result());
        assert!(selector.regions().failure().is_none());
    }

    #[test]
    fn failed_region_fetch_keeps_list_and_allows_retry() {
        let mut selector = Selector::new(false);
        let request = selector.mount().unwrap();
        let err = DirectoryError::Request("offline".into());

        assert_eq!(
            selector.regions_loaded(request, Err(err.clone())),
            Outcome::Failed(err.clone())
        );
        assert_eq!(selector.regions().failure(), Some(&err));
        assert!(selector.regions().items().is_empty());

        let retry = selector.retry_regions().expect("retry after failure");
        assert!(selector.regions().is_loading());
        assert_eq!(
            selector.regions_loaded(retry, Ok(regions(&["SP"]))),
            Outcome::Applied
        );
        assert!(selector.retry_regions().is_none());
    }

    #[test]
    fn superseded_region_result_is_discarded() {
        let mut selector = Selector::new(false);
        let first = selector.mount().unwrap();
        selector.regions_loaded(first, Err(DirectoryError::Status(500)));
        let second = selector.retry_regions().unwrap();

        assert_eq!(
            selector.regions_loaded(first, Ok(regions(&["XX"]))),
            Outcome::Discarded
        );
        assert_eq!(
            selector.regions_loaded(second, Ok(regions(&["SP"]))),
            Outcome::Applied
        );
        assert_eq!(selector.regions().items(), regions(&["SP"]).as_slice());
    }

    #[test]
    fn selecting_region_fetches_its_localities() {
        let mut selector = mounted_with(&["SP", "RJ"]);

        let request = selector.select_region(Some(Region::new("SP"))).expect("fetch");
        assert_eq!(request.region(), &Region::new("SP"));
        assert_eq!(selector.phase(), Phase::RegionChosen);
        assert!(selector.localities().is_loading());

        let outcome = selector.localities_loaded(request, Ok(localities(&["Campinas", "Santos"])));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(
            selector.localities().items(),
            localities(&["Campinas", "Santos"]).as_slice()
        );
    }

    #[test]
    fn reselecting_same_region_does_not_refetch() {
        let mut selector = mounted_with(&["SP", "RJ"]);
        let request = selector.select_region(Some(Region::new("SP"))).unwrap();
        assert!(selector.select_region(Some(Region::new("SP"))).is_none());

        selector.localities_loaded(request, Ok(localities(&["Santos"])));
        assert!(selector.select_region(Some(Region::new("SP"))).is_none());
    }

    #[test]
    fn each_distinct_selection_fetches_once() {
        let mut selector = mounted_with(&["SP", "RJ"]);
        let issued: Vec<_> = ["SP", "SP", "RJ", "RJ", "SP"]
            .into_iter()
            .filter_map(|code| selector.select_region(Some(Region::new(code))))
            .map(|request| request.region().code().to_string())
            .collect();
        assert_eq!(issued, vec!["SP", "RJ", "SP"]);
    }

    #[test]
    fn unset_region_clears_localities_without_fetch() {
        let mut selector = mounted_with(&["SP"]);
        let request = selector.select_region(Some(Region::new("SP"))).unwrap();
        selector.localities_loaded(request, Ok(localities(&["Santos"])));
        selector.select_locality(Some(Locality::new("Santos")));

        assert!(selector.select_region(None).is_none());
        assert_eq!(selector.phase(), Phase::Idle);
        assert!(selector.localities().items().is_empty());
        assert_eq!(selector.localities().status(), &FetchStatus::Idle);
        assert!(selector.selected_locality().is_none());
    }

    #[test]
    fn unset_region_discards_in_flight_response() {
        let mut selector = mounted_with(&["SP"]);
        let request = selector.select_region(Some(Region::new("SP"))).unwrap();
        selector.select_region(None);

        assert_eq!(
            selector.localities_loaded(request, Ok(localities(&["Santos"]))),
            Outcome::Discarded
        );
        assert!(selector.localities().items().is_empty());
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_region() {
        let mut selector = mounted_with(&["SP", "RJ"]);
        let sp = selector.select_region(Some(Region::new("SP"))).unwrap();
        let rj = selector.select_region(Some(Region::new("RJ"))).unwrap();

        // RJ resolves first, then the late SP response arrives
        assert_eq!(
            selector.localities_loaded(rj, Ok(localities(&["Niterói", "Petrópolis"]))),
            Outcome::Applied
        );
        assert_eq!(
            selector.localities_loaded(sp, Ok(localities(&["Campinas", "Santos"]))),
            Outcome::Discarded
        );

        assert_eq!(
            selector.localities().items(),
            localities(&["Niterói", "Petrópolis"]).as_slice()
        );
    }

    #[test]
    fn stale_response_from_same_region_reselection_is_discarded() {
        let mut selector = mounted_with(&["SP", "RJ"]);
        let first_sp = selector.select_region(Some(Region::new("SP"))).unwrap();
        let _rj = selector.select_region(Some(Region::new("RJ"))).unwrap();
        let second_sp = selector.select_region(Some(Region::new("SP"))).unwrap();

        assert_eq!(
            selector.localities_loaded(first_sp, Ok(localities(&["old"]))),
            Outcome::Discarded
        );
        assert_eq!(
            selector.localities_loaded(second_sp, Ok(localities(&["Santos"]))),
            Outcome::Applied
        );
    }

    #[test]
    fn previous_locality_survives_region_switch() {
        let mut selector = mounted_with(&["SP", "RJ"]);
        let sp = selector.select_region(Some(Region::new("SP"))).unwrap();
        selector.localities_loaded(sp, Ok(localities(&["Santos"])));
        selector.select_locality(Some(Locality::new("Santos")));

        let rj = selector.select_region(Some(Region::new("RJ"))).unwrap();
        selector.localities_loaded(rj, Ok(localities(&["Niterói"])));

        assert_eq!(selector.selected_locality(), Some(&Locality::new("Santos")));
        assert_eq!(selector.phase(), Phase::LocalityChosen);
    }

    #[test]
    fn failed_locality_fetch_can_be_retried() {
        let mut selector = mounted_with(&["SP"]);
        let request = selector.select_region(Some(Region::new("SP"))).unwrap();
        let outcome = selector.localities_loaded(request, Err(DirectoryError::Status(503)));
        assert_eq!(outcome, Outcome::Failed(DirectoryError::Status(503)));

        // Reselecting the failed region also retries
        let again = selector.select_region(Some(Region::new("SP")));
        assert!(again.is_some());

        let outcome = selector.localities_loaded(again.unwrap(), Err(DirectoryError::Status(503)));
        assert!(matches!(outcome, Outcome::Failed(_)));
        let retry = selector.retry_localities().expect("retry after failure");
        assert_eq!(retry.region(), &Region::new("SP"));
        assert_eq!(
            selector.localities_loaded(retry, Ok(localities(&["Santos"]))),
            Outcome::Applied
        );
        assert!(selector.retry_localities().is_none());
    }

    #[test]
    fn retry_localities_without_region_does_nothing() {
        let mut selector = mounted_with(&["SP"]);
        assert!(selector.retry_localities().is_none());
    }

    #[test]
    fn confirm_with_nothing_selected_forwards_sentinels() {
        let selector = mounted_with(&["SP"]);
        let query = selector.confirm().expect("permissive by default");
        assert_eq!(query.region, "0");
        assert_eq!(query.locality, "0");
    }

    #[test]
    fn confirm_forwards_exact_selection() {
        let mut selector = mounted_with(&["SP", "RJ"]);
        let request = selector.select_region(Some(Region::new("SP"))).unwrap();
        selector.localities_loaded(request, Ok(localities(&["Campinas", "Santos"])));
        selector.select_locality(Some(Locality::new("Santos")));

        let query = selector.confirm().unwrap();
        assert_eq!(
            query,
            PointsQuery {
                region: "SP".into(),
                locality: "Santos".into(),
            }
        );
        // Confirming does not change state
        assert_eq!(selector.phase(), Phase::LocalityChosen);
        assert_eq!(selector.confirm(), Some(query));
    }

    #[test]
    fn strict_mode_requires_both_values() {
        let mut selector = Selector::new(true);
        let request = selector.mount().unwrap();
        selector.regions_loaded(request, Ok(regions(&["SP"])));
        assert!(!selector.can_confirm());
        assert!(selector.confirm().is_none());

        selector.select_region(Some(Region::new("SP")));
        assert!(selector.confirm().is_none());

        selector.select_locality(Some(Locality::new("Santos")));
        assert!(selector.can_confirm());
        assert!(selector.confirm().is_some());
    }
}
