//! Sample map dashboard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! On first render the map is mounted into its container, then the filter
//! lists and the unfiltered sample list are requested. The map size is
//! invalidated on the next tick so the widget picks up the final layout.

use gloo_console::{log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DashboardProps;
pub use state::Dashboard;

use crate::config::MAP_CONTAINER_ID;
use crate::map::SampleMap;

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        Dashboard::new(&ctx.props().api_base)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            match SampleMap::mount(MAP_CONTAINER_ID) {
                Ok(map) => self.map = Some(map),
                Err(err) => warn!("Could not create the map.", err.to_string()),
            }
            log!("Loading samples from", self.api.base().to_string());

            ctx.link()
                .send_message_batch(vec![Msg::LoadFilters, Msg::LoadSamples]);

            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(0).await;
                link.send_message(Msg::InvalidateMapSize);
            });
        }
    }
}
