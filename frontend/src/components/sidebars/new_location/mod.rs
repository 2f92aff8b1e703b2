//! Sidebar for adding a location to the private map.
//!
//! The coordinate comes from a map click while selection mode is on, or is
//! typed as `lat, lon`. Attribute options are loaded once on the first render.

use yew::platform::spawn_local;
use yew::prelude::*;

mod coordinate_selector;
pub mod form;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::NewLocationSidebarProps;
pub use state::NewLocationSidebar;

use crate::services::location_service::LocationService;

impl Component for NewLocationSidebar {
    type Message = Msg;
    type Properties = NewLocationSidebarProps;

    fn create(ctx: &Context<Self>) -> Self {
        NewLocationSidebar::new(ctx.props().map_click_coords)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.map_click_coords != ctx.props().map_click_coords {
            self.pick_coordinate(ctx.props().map_click_coords);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        let config = ctx.props().config.clone();
        let token = self.liveness.token();
        spawn_local(async move {
            let attributes = LocationService::connect(&config)
                .fetch_location_attributes()
                .await;
            if let (Some(attributes), true) = (attributes, token.is_alive()) {
                link.send_message(Msg::AttributesLoaded(attributes));
            }
        });
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.liveness.revoke();
    }
}
