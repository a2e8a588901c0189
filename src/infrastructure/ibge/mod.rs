// SPDX-License-Identifier: MPL-2.0
//! IBGE "localidades" adapter implementing the [`DirectoryService`] port.
//!
//! Two read-only endpoints are used:
//!
//! - `GET {base}/estados?orderBy=nome` → `[{ "sigla": "AC", ... }, ...]`
//! - `GET {base}/estados/{sigla}/municipios` → `[{ "nome": "Rio Branco", ... }, ...]`
//!
//! Only the `sigla` and `nome` fields are read; everything else in the
//! payload is ignored.

mod payload;

use crate::application::port::{DirectoryError, DirectoryService};
use crate::config::DirectoryConfig;
use crate::domain::location::{Locality, Region};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::Url;

pub use payload::{parse_localities, parse_regions};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("Ecoleta/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed client for the IBGE directory.
#[derive(Debug, Clone)]
pub struct IbgeDirectory {
    client: reqwest::Client,
    base_url: Url,
}

impl IbgeDirectory {
    /// Builds a client for `base_url` using the timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an absolute `http(s)` URL or if the
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str, config: &DirectoryConfig) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid directory URL '{base_url}': {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "directory URL must be http(s): {base_url}"
            )));
        }

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| DirectoryError::Request(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Returns the base URL requests are built from.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the region listing, ordered by name.
    #[must_use]
    pub fn regions_url(&self) -> Url {
        let mut url = self.endpoint(&["estados"]);
        url.query_pairs_mut().append_pair("orderBy", "nome");
        url
    }

    /// URL of the locality listing for `region`.
    #[must_use]
    pub fn localities_url(&self, region: &Region) -> Url {
        self.endpoint(&["estados", region.code(), "municipios"])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Performs a GET and returns the body of a successful response.
async fn fetch(client: reqwest::Client, url: Url) -> std::result::Result<Vec<u8>, DirectoryError> {
    tracing::debug!(%url, "directory request");

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| DirectoryError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "directory returned an error status");
        return Err(DirectoryError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| DirectoryError::Request(e.to_string()))?;
    Ok(body.to_vec())
}

impl DirectoryService for IbgeDirectory {
    fn regions(&self) -> BoxFuture<'static, std::result::Result<Vec<Region>, DirectoryError>> {
        let client = self.client.clone();
        let url = self.regions_url();
        async move {
            let body = fetch(client, url).await?;
            let regions = parse_regions(&body)?;
            tracing::debug!(count = regions.len(), "regions loaded");
            Ok(regions)
        }
        .boxed()
    }

    fn localities(
        &self,
        region: &Region,
    ) -> BoxFuture<'static, std::result::Result<Vec<Locality>, DirectoryError>> {
        let client = self.client.clone();
        let url = self.localities_url(region);
        let code = region.code().to_string();
        async move {
            let body = fetch(client, url).await?;
            let localities = parse_localities(&body)?;
            tracing::debug!(region = %code, count = localities.len(), "localities loaded");
            Ok(localities)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(base: &str) -> IbgeDirectory {
        IbgeDirectory::new(base, &DirectoryConfig::default()).expect("valid base url")
    }

    #[test]
    fn regions_url_is_ordered_by_name() {
        let dir = directory("https://servicodados.ibge.gov.br/api/v1/localidades");
        assert_eq!(
            dir.regions_url().as_str(),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados?orderBy=nome"
        );
    }

    #[test]
    fn localities_url_embeds_region_code() {
        let dir = directory("https://servicodados.ibge.gov.br/api/v1/localidades");
        assert_eq!(
            dir.localities_url(&Region::new("SP")).as_str(),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP/municipios"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_tolerated() {
        let dir = directory("http://localhost:9000/api/");
        assert_eq!(
            dir.localities_url(&Region::new("RJ")).as_str(),
            "http://localhost:9000/api/estados/RJ/municipios"
        );
    }

    #[test]
    fn region_code_is_escaped_as_single_segment() {
        let dir = directory("http://localhost:9000/api");
        let url = dir.localities_url(&Region::new("a/b c"));
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/estados/a%2Fb%20c/municipios"
        );
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let err = IbgeDirectory::new("ftp://example.com/api", &DirectoryConfig::default())
            .expect_err("ftp must be rejected");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let err = IbgeDirectory::new("/api/v1", &DirectoryConfig::default())
            .expect_err("relative url must be rejected");
        assert!(matches!(err, Error::Config(_)));
    }
}
