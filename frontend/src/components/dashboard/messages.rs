use common::model::affiliation::Affiliation;
use common::model::sample::Sample;
use common::model::species::SpeciesCount;

#[derive(Clone)]
pub enum Msg {
    LoadFilters,
    FiltersLoaded {
        species: Vec<SpeciesCount>,
        affiliations: Vec<Affiliation>,
    },
    FiltersFailed,
    LoadSamples,
    /// `generation` is the sequence number of the request that produced it.
    SamplesLoaded { generation: u64, samples: Vec<Sample> },
    SamplesFailed { generation: u64 },
    SetSpecies(String),
    SetStatus(String),
    SetAffiliation(String),
    InvalidateMapSize,
}
