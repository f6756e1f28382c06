use serde::Serialize;

/// Query parameters of `GET /samples`, taken from the three filter dropdowns.
///
/// An empty value means the dropdown is on "All" and the parameter is left
/// out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SampleFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub species: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub affiliation: String,
}

impl SampleFilter {
    /// Form-encoded query string including the leading `?`, or an empty
    /// string when no filter is set.
    pub fn query_string(&self) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query) if !query.is_empty() => format!("?{}", query),
            _ => String::new(),
        }
    }
}

/// URLs of the three read-only endpoints the dashboard consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn species(&self) -> String {
        format!("{}/species", self.base)
    }

    pub fn affiliations(&self) -> String {
        format!("{}/affiliations", self.base)
    }

    pub fn samples(&self, filter: &SampleFilter) -> String {
        format!("{}/samples{}", self.base, filter.query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_base_without_double_slash() {
        let endpoints = ApiEndpoints::new("http://localhost:8000/api/");
        assert_eq!(endpoints.base(), "http://localhost:8000/api");
        assert_eq!(endpoints.species(), "http://localhost:8000/api/species");
        assert_eq!(endpoints.affiliations(), "http://localhost:8000/api/affiliations");
        assert_eq!(
            endpoints.samples(&SampleFilter::default()),
            "http://localhost:8000/api/samples"
        );
        assert_eq!(
            endpoints.samples(&SampleFilter {
                status: "rejected".to_string(),
                ..Default::default()
            }),
            "http://localhost:8000/api/samples?status=rejected"
        );
    }

    #[test]
    fn only_non_empty_filters_are_sent() {
        let filter = SampleFilter {
            species: "Bd".to_string(),
            status: String::new(),
            affiliation: String::new(),
        };
        assert_eq!(filter.query_string(), "?species=Bd");
    }

    #[test]
    fn no_filters_means_no_query() {
        let filter = SampleFilter::default();
        assert_eq!(filter.query_string(), "");
    }

    #[test]
    fn all_filters_keep_parameter_order() {
        let filter = SampleFilter {
            species: "Bd".to_string(),
            status: "validated".to_string(),
            affiliation: "uva".to_string(),
        };
        assert_eq!(filter.query_string(), "?species=Bd&status=validated&affiliation=uva");
    }

    #[test]
    fn values_are_form_encoded() {
        let filter = SampleFilter {
            species: "Eisenia fetida".to_string(),
            affiliation: "a&b".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.query_string(), "?species=Eisenia+fetida&affiliation=a%26b");
    }
}
