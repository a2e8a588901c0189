// SPDX-License-Identifier: MPL-2.0
//! Directory stand-in used when no HTTP client could be built.

use crate::application::port::{DirectoryError, DirectoryService};
use crate::domain::location::{Locality, Region};
use futures_util::future::{self, BoxFuture, FutureExt};

/// Fails every request with the reason the real client is missing.
#[derive(Debug, Clone)]
pub struct OfflineDirectory {
    reason: String,
}

impl OfflineDirectory {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl DirectoryService for OfflineDirectory {
    fn regions(&self) -> BoxFuture<'static, Result<Vec<Region>, DirectoryError>> {
        future::ready(Err(DirectoryError::Request(self.reason.clone()))).boxed()
    }

    fn localities(&self, _region: &Region) -> BoxFuture<'static, Result<Vec<Locality>, DirectoryError>> {
        future::ready(Err(DirectoryError::Request(self.reason.clone()))).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn every_request_fails_with_reason() {
        let directory = OfflineDirectory::new("no TLS backend");
        let regions = directory.regions().now_or_never().expect("ready future");
        assert_eq!(
            regions,
            Err(DirectoryError::Request("no TLS backend".into()))
        );
        let localities = directory
            .localities(&Region::new("SP"))
            .now_or_never()
            .expect("ready future");
        assert!(localities.is_err());
    }
}
