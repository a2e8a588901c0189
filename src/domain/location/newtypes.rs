// SPDX-License-Identifier: MPL-2.0
//! Location newtypes.

use std::fmt;

// =============================================================================
// Region
// =============================================================================

/// Short code of a top-level administrative division (e.g. `"SP"`).
///
/// The display name returned by the directory is discarded; only the code is
/// kept, which is also what is shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region(String);

impl Region {
    /// Creates a region from its short code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Locality
// =============================================================================

/// Free-text name of a city inside a [`Region`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locality(String);

impl Locality {
    /// Creates a locality from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the locality name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_displays_its_code() {
        let region = Region::new("RJ");
        assert_eq!(region.code(), "RJ");
        assert_eq!(region.to_string(), "RJ");
    }

    #[test]
    fn locality_keeps_accents_and_spaces() {
        let locality = Locality::new("São José dos Campos");
        assert_eq!(locality.name(), "São José dos Campos");
        assert_eq!(format!("{locality}"), "São José dos Campos");
    }
}
