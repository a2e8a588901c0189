// SPDX-License-Identifier: MPL-2.0
//! JSON payloads returned by the IBGE API.

use crate::application::port::DirectoryError;
use crate::domain::location::{Locality, Region};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StateRecord {
    sigla: String,
}

#[derive(Debug, Deserialize)]
struct CityRecord {
    nome: String,
}

/// Decodes the `/estados` payload into region codes, preserving order.
pub fn parse_regions(body: &[u8]) -> Result<Vec<Region>, DirectoryError> {
    let records: Vec<StateRecord> =
        serde_json::from_slice(body).map_err(|e| DirectoryError::Decode(e.to_string()))?;
    Ok(records.into_iter().map(|r| Region::new(r.sigla)).collect())
}

/// Decodes the `/estados/{uf}/municipios` payload into locality names,
/// preserving order.
pub fn parse_localities(body: &[u8]) -> Result<Vec<Locality>, DirectoryError> {
    let records: Vec<CityRecord> =
        serde_json::from_slice(body).map_err(|e| DirectoryError::Decode(e.to_string()))?;
    Ok(records.into_iter().map(|r| Locality::new(r.nome)).collect())
}
