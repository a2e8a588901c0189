// SPDX-License-Identifier: MPL-2.0
//! Payload handed to the collection points screen.

use super::{Locality, Region};

/// Placeholder forwarded in place of a selection the user never made.
///
/// Selection state itself uses `Option`; the sentinel only exists at the
/// navigation boundary so receivers that expect a string pair keep working.
pub const UNSET_SENTINEL: &str = "0";

/// Region/locality pair carried to the collection points screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsQuery {
    pub region: String,
    pub locality: String,
}

impl PointsQuery {
    /// Builds the payload from the current selection, substituting
    /// [`UNSET_SENTINEL`] for missing values.
    #[must_use]
    pub fn from_selection(region: Option<&Region>, locality: Option<&Locality>) -> Self {
        Self {
            region: region.map_or_else(|| UNSET_SENTINEL.to_string(), |r| r.code().to_string()),
            locality: locality
                .map_or_else(|| UNSET_SENTINEL.to_string(), |l| l.name().to_string()),
        }
    }

    /// Returns whether both fields carry a real selection.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.region != UNSET_SENTINEL && self.locality != UNSET_SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_selection_forwards_sentinel_pair() {
        let query = PointsQuery::from_selection(None, None);
        assert_eq!(query.region, "0");
        assert_eq!(query.locality, "0");
        assert!(!query.is_complete());
    }

    #[test]
    fn complete_selection_forwards_values() {
        let region = Region::new("SP");
        let locality = Locality::new("Santos");
        let query = PointsQuery::from_selection(Some(&region), Some(&locality));
        assert_eq!(
            query,
            PointsQuery {
                region: "SP".into(),
                locality: "Santos".into(),
            }
        );
        assert!(query.is_complete());
    }

    #[test]
    fn partial_selection_is_not_complete() {
        let region = Region::new("SP");
        let query = PointsQuery::from_selection(Some(&region), None);
        assert_eq!(query.region, "SP");
        assert_eq!(query.locality, UNSET_SENTINEL);
        assert!(!query.is_complete());
    }
}
