//! View rendering for the dashboard: header with the API badge, the three
//! filter dropdowns plus refresh button, the map container and the
//! empty-state notice.

use common::model::select_option::status_options;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::Dashboard;
use crate::components::filter_select::FilterSelect;
use crate::config::MAP_CONTAINER_ID;

pub fn view(component: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let link = ctx.link();

    html! {
        <div class="dashboard">
            { build_header(component) }
            { build_filters(component, link) }
            <div class="map-wrapper">
                <div id={MAP_CONTAINER_ID} class="map"></div>
                { build_empty_state(component) }
            </div>
        </div>
    }
}

fn build_header(component: &Dashboard) -> Html {
    let api = component.indicators.api;
    html! {
        <header class="dashboard-header">
            <h1>{"World Worm Map"}</h1>
            <div id="apiStatus" class={classes!("api-status", api.css_class())}>
                <span class="status-dot"></span>
                <span class="status-text">{ api.label() }</span>
            </div>
        </header>
    }
}

fn build_filters(component: &Dashboard, link: &Scope<Dashboard>) -> Html {
    html! {
        <div class="filters">
            <FilterSelect
                id="species-filter"
                label="Species"
                placeholder={Some(AttrValue::from("All species"))}
                options={component.species_options.clone()}
                value={component.filter.species.clone()}
                onchange={link.callback(Msg::SetSpecies)}
            />
            <FilterSelect
                id="status-filter"
                label="Status"
                options={status_options()}
                value={component.filter.status.clone()}
                onchange={link.callback(Msg::SetStatus)}
            />
            <FilterSelect
                id="affiliation-filter"
                label="Affiliation"
                placeholder={Some(AttrValue::from("All affiliations"))}
                options={component.affiliation_options.clone()}
                value={component.filter.affiliation.clone()}
                onchange={link.callback(Msg::SetAffiliation)}
            />
            <button id="refresh-btn" class="refresh-btn" onclick={link.callback(|_| Msg::LoadSamples)}>
                {"Refresh"}
            </button>
        </div>
    }
}

fn build_empty_state(component: &Dashboard) -> Html {
    let hidden = (!component.indicators.empty_state_visible).then_some("hidden");
    html! {
        <div id="emptyState" class={classes!("empty-state", hidden)}>
            {"No samples match the current filters."}
        </div>
    }
}
