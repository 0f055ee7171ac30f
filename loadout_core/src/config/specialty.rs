//! Specialty (seasonal) mod socket metadata

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Describes one kind of specialty mod socket and the mods it accepts
///
/// Field names follow the JSON data file (camelCase); the snake_case
/// spelling is accepted too so the same entries can live in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModSocketMetadata {
    pub season: u32,
    /// Short name, e.g. "outlaw" or "forge"
    pub tag: String,
    #[serde(alias = "socket_type_hash")]
    pub socket_type_hash: u32,
    /// Plug categories of the mods belonging to this socket's season
    #[serde(default, alias = "plug_category_hashes")]
    pub plug_category_hashes: Vec<u32>,
    /// Plug categories this socket can hold (may include older seasons)
    #[serde(default, alias = "compatible_plug_category_hashes")]
    pub compatible_plug_category_hashes: Vec<u32>,
    #[serde(default, alias = "empty_mod_socket_hash")]
    pub empty_mod_socket_hash: u32,
}

/// Registry of specialty socket metadata, indexed for lookups
#[derive(Debug, Clone, Default)]
pub struct SpecialtySockets {
    entries: Vec<ModSocketMetadata>,
    by_socket_type: HashMap<u32, usize>,
    by_plug_category: HashMap<u32, usize>,
}

impl SpecialtySockets {
    pub fn new(entries: Vec<ModSocketMetadata>) -> Self {
        let mut registry = SpecialtySockets::default();
        for entry in entries {
            registry.register(entry);
        }
        registry
    }

    /// Register an entry. A repeated socket type hash replaces the earlier lookup.
    pub fn register(&mut self, entry: ModSocketMetadata) {
        let index = self.entries.len();
        if self
            .by_socket_type
            .insert(entry.socket_type_hash, index)
            .is_some()
        {
            log::warn!(
                "Duplicate specialty socket type hash {} ({}), later entry wins",
                entry.socket_type_hash,
                entry.tag
            );
        }
        for &plug_category in &entry.plug_category_hashes {
            self.by_plug_category.insert(plug_category, index);
        }
        self.entries.push(entry);
    }

    pub fn by_socket_type_hash(&self, socket_type_hash: u32) -> Option<&ModSocketMetadata> {
        self.by_socket_type
            .get(&socket_type_hash)
            .map(|&i| &self.entries[i])
    }

    /// Only the season, tag and empty socket hash of the result are meaningful
    pub fn by_plug_category_hash(&self, plug_category_hash: u32) -> Option<&ModSocketMetadata> {
        self.by_plug_category
            .get(&plug_category_hash)
            .map(|&i| &self.entries[i])
    }

    pub fn is_specialty_socket_type(&self, socket_type_hash: u32) -> bool {
        self.by_socket_type.contains_key(&socket_type_hash)
    }

    /// Whether any specialty socket accepts mods of this plug category
    pub fn is_specialty_mod_category(&self, plug_category_hash: u32) -> bool {
        self.entries
            .iter()
            .any(|e| e.compatible_plug_category_hashes.contains(&plug_category_hash))
    }

    /// i.e. ["outlaw", "forge", "opulent", ...]
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.tag.as_str())
    }

    pub fn entries(&self) -> &[ModSocketMetadata] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entries(entries: &[ModSocketMetadata]) -> Result<(), ConfigError> {
    if let Some(bad) = entries.iter().find(|e| e.tag.is_empty()) {
        return Err(ConfigError::ValidationError(format!(
            "specialty socket {} has an empty tag",
            bad.socket_type_hash
        )));
    }
    Ok(())
}

/// Load specialty socket metadata from the JSON data file
pub fn load_specialty_sockets(path: &Path) -> Result<SpecialtySockets, ConfigError> {
    let entries: Vec<ModSocketMetadata> = super::load_json(path)?;
    validate_entries(&entries)?;
    Ok(SpecialtySockets::new(entries))
}

/// Load specialty socket metadata from a JSON string
pub fn parse_specialty_sockets_json(content: &str) -> Result<SpecialtySockets, ConfigError> {
    let entries: Vec<ModSocketMetadata> = super::parse_json(content)?;
    validate_entries(&entries)?;
    Ok(SpecialtySockets::new(entries))
}
