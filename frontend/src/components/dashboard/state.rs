//! Runtime state of the dashboard page and the transitions applied to it
//! when a fetch completes.

use common::model::affiliation::{Affiliation, AffiliationDirectory};
use common::model::sample::Sample;
use common::model::select_option::{affiliation_options, species_options, SelectOption};
use common::model::species::SpeciesCount;
use common::requests::SampleFilter;
use common::status::Indicators;
use gloo_console::warn;

use crate::api::ApiClient;
use crate::map::SampleMap;

pub struct Dashboard {
    pub api: ApiClient,

    /// Species dropdown entries; empty until the filter lists load.
    pub species_options: Vec<SelectOption>,
    pub affiliation_options: Vec<SelectOption>,

    /// Affiliation slug -> display name, used for popups.
    pub directory: AffiliationDirectory,

    /// Current dropdown values.
    pub filter: SampleFilter,

    pub indicators: Indicators,

    /// `None` until mounted, or if the map widget could not be created.
    pub map: Option<SampleMap>,

    /// Sequence number of the latest sample request. Responses carrying an
    /// older number are dropped.
    pub sample_generation: u64,

    /// Guard for first-render initialization.
    pub loaded: bool,
}

impl Dashboard {
    pub fn new(api_base: &str) -> Self {
        Self {
            api: ApiClient::new(api_base),
            species_options: Vec::new(),
            affiliation_options: Vec::new(),
            directory: AffiliationDirectory::default(),
            filter: SampleFilter::default(),
            indicators: Indicators::default(),
            map: None,
            sample_generation: 0,
            loaded: false,
        }
    }

    /// Starts a new sample request and returns its sequence number.
    pub fn next_sample_generation(&mut self) -> u64 {
        self.sample_generation += 1;
        self.sample_generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.sample_generation
    }

    pub fn apply_filters(&mut self, species: &[SpeciesCount], affiliations: &[Affiliation]) {
        self.indicators.filters_loaded();
        self.species_options = species_options(species);
        self.affiliation_options = affiliation_options(affiliations);
        self.directory = AffiliationDirectory::from_affiliations(affiliations);
    }

    /// Dropdowns and lookup are left as they are.
    pub fn apply_filters_failed(&mut self) {
        self.indicators.filters_failed();
    }

    /// Applies a sample list. Returns `false` without touching the page when
    /// a newer request has been issued since.
    pub fn apply_samples(&mut self, generation: u64, samples: &[Sample]) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.indicators.samples_loaded(samples.len());
        self.render_markers(samples);
        true
    }

    pub fn apply_samples_failed(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.indicators.samples_failed();
        self.render_markers(&[]);
        true
    }

    fn render_markers(&self, samples: &[Sample]) {
        if let Some(map) = &self.map {
            if let Err(err) = map.replace_markers(samples, &self.directory) {
                warn!("Could not render samples on the map.", err.to_string());
                map.clear();
            }
        }
    }
}
