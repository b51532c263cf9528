use super::Catalog;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// Bumped whenever the serialized catalog layout changes.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// A resolved catalog packed for fast loading, so content does not need to be re-parsed
/// and re-resolved on every page load.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CompiledCatalog {
    pub format_version: u32,
    pub catalog: Catalog,
}

impl CompiledCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            catalog,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        Ok(encode_to_vec(self, standard())?)
    }

    /// Saves the compiled catalog to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let io_err = |source| ArtifactError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::create(path).map_err(io_err)?;
        file.write_all(&bytes).map_err(io_err)?;
        Ok(())
    }

    /// Loads a compiled catalog from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let io_err = |source| ArtifactError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::open(path).map_err(io_err)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_err)?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a compiled catalog from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let (compiled, _) = decode_from_slice::<Self, _>(bytes, standard())?;
        Ok(compiled)
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
