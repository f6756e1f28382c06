//! Update function for the dashboard.
//!
//! Fetches run on `spawn_local` and report back through messages. Every
//! failure is logged here and only ever shows up on the page as the
//! "API unreachable" badge.

use gloo_console::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::Dashboard;

pub fn update(component: &mut Dashboard, ctx: &Context<Dashboard>, msg: Msg) -> bool {
    match msg {
        Msg::LoadFilters => {
            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api.filter_lists().await {
                    Ok((species, affiliations)) => link.send_message(Msg::FiltersLoaded {
                        species,
                        affiliations,
                    }),
                    Err(err) => {
                        warn!("Could not load filters from API.", err.to_string());
                        link.send_message(Msg::FiltersFailed);
                    }
                }
            });
            false
        }
        Msg::FiltersLoaded {
            species,
            affiliations,
        } => {
            component.apply_filters(&species, &affiliations);
            true
        }
        Msg::FiltersFailed => {
            component.apply_filters_failed();
            true
        }
        Msg::LoadSamples => {
            let generation = component.next_sample_generation();
            let api = component.api.clone();
            let filter = component.filter.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api.samples(&filter).await {
                    Ok(samples) => link.send_message(Msg::SamplesLoaded {
                        generation,
                        samples,
                    }),
                    Err(err) => {
                        warn!("Could not load samples from API.", err.to_string());
                        link.send_message(Msg::SamplesFailed { generation });
                    }
                }
            });
            false
        }
        Msg::SamplesLoaded {
            generation,
            samples,
        } => component.apply_samples(generation, &samples),
        Msg::SamplesFailed { generation } => component.apply_samples_failed(generation),
        Msg::SetSpecies(species) => {
            component.filter.species = species;
            ctx.link().send_message(Msg::LoadSamples);
            true
        }
        Msg::SetStatus(status) => {
            component.filter.status = status;
            ctx.link().send_message(Msg::LoadSamples);
            true
        }
        Msg::SetAffiliation(affiliation) => {
            component.filter.affiliation = affiliation;
            ctx.link().send_message(Msg::LoadSamples);
            true
        }
        Msg::InvalidateMapSize => {
            if let Some(map) = &component.map {
                map.invalidate_size();
            }
            false
        }
    }
}
