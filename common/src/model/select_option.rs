use crate::model::affiliation::Affiliation;
use crate::model::species::SpeciesCount;

/// A `<option>` for one of the filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Fixed choices of the status dropdown. The empty value means "no filter".
pub fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("", "All statuses"),
        SelectOption::new("validated", "Validated"),
        SelectOption::new("rejected", "Rejected"),
        SelectOption::new("pending", "Pending"),
    ]
}

pub fn species_options(species: &[SpeciesCount]) -> Vec<SelectOption> {
    species
        .iter()
        .map(|s| SelectOption::new(s.species_name.clone(), s.label()))
        .collect()
}

pub fn affiliation_options(affiliations: &[Affiliation]) -> Vec<SelectOption> {
    affiliations
        .iter()
        .map(|a| SelectOption::new(a.slug.clone(), a.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_option_shows_count() {
        let options = species_options(&[SpeciesCount {
            species_name: "Eisenia fetida".to_string(),
            sample_count: 12,
        }]);
        assert_eq!(options, vec![SelectOption::new("Eisenia fetida", "Eisenia fetida (12)")]);
    }

    #[test]
    fn affiliation_option_uses_slug_as_value() {
        let options = affiliation_options(&[
            Affiliation {
                slug: "uva".to_string(),
                name: Some("University of Amsterdam".to_string()),
            },
            Affiliation {
                slug: "citizen".to_string(),
                name: None,
            },
        ]);
        assert_eq!(options[0], SelectOption::new("uva", "University of Amsterdam"));
        assert_eq!(options[1], SelectOption::new("citizen", "citizen"));
    }

    #[test]
    fn status_options_start_with_unfiltered() {
        let options = status_options();
        assert_eq!(options[0].value, "");
        assert!(options.iter().any(|o| o.value == "validated"));
        assert!(options.iter().any(|o| o.value == "rejected"));
    }
}
