use serde::{Deserialize, Serialize};

/// One row of `GET /species`: a species name and how many samples carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCount {
    pub species_name: String,
    #[serde(default)]
    pub sample_count: u64,
}

impl SpeciesCount {
    /// Dropdown label, e.g. `Eisenia fetida (12)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.species_name, self.sample_count)
    }
}
