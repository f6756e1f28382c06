use yew::prelude::*;

use crate::config;

/// Properties for the `Dashboard`.
#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Base URL of the sample API, without a trailing slash. Defaults to the
    /// value baked in at build time (see `config::api_base`).
    #[prop_or_else(config::api_base)]
    pub api_base: String,
}
