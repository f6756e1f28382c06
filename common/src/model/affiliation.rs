use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An organisation or lab samples can be attached to, from `GET /affiliations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Affiliation {
    /// Human readable name, falling back to the slug when the API has none.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.slug,
        }
    }
}

/// Slug to display name lookup used when writing marker popups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffiliationDirectory {
    names: HashMap<String, String>,
}

impl AffiliationDirectory {
    pub fn from_affiliations(affiliations: &[Affiliation]) -> Self {
        let names = affiliations
            .iter()
            .map(|a| (a.slug.clone(), a.display_name().to_string()))
            .collect();
        Self { names }
    }

    /// Display name for `slug`; unknown slugs are shown as they are.
    pub fn resolve<'a>(&'a self, slug: &'a str) -> &'a str {
        self.names.get(slug).map(String::as_str).unwrap_or(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn affiliation(slug: &str, name: Option<&str>) -> Affiliation {
        Affiliation {
            slug: slug.to_string(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn display_name_falls_back_to_slug() {
        assert_eq!(affiliation("uva", Some("University of Amsterdam")).display_name(), "University of Amsterdam");
        assert_eq!(affiliation("uva", Some("")).display_name(), "uva");
        assert_eq!(affiliation("uva", None).display_name(), "uva");
    }

    #[test]
    fn directory_resolves_known_and_unknown_slugs() {
        let directory = AffiliationDirectory::from_affiliations(&[
            affiliation("uva", Some("University of Amsterdam")),
            affiliation("citizen", None),
        ]);

        assert_eq!(directory.resolve("uva"), "University of Amsterdam");
        assert_eq!(directory.resolve("citizen"), "citizen");
        assert_eq!(directory.resolve("other-lab"), "other-lab");
    }

    #[test]
    fn decodes_null_name() {
        let parsed: Vec<Affiliation> =
            serde_json::from_str(r#"[{"slug":"uva","name":null},{"slug":"kew"}]"#).unwrap();
        assert_eq!(parsed[0].display_name(), "uva");
        assert_eq!(parsed[1].name, None);
    }
}
