//! Root component of the map page.
//!
//! Owns the `AppState` and hands it down as props; children report back
//! through callbacks that become `Msg`s. On the first render the runtime
//! configuration is fetched, then the locations of the current scope.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AppState;

use crate::config::{fallback_config, load_frontend_config};
use crate::services::liveness::Liveness;
use crate::services::session::Session;

pub struct App {
    pub state: AppState,
    pub liveness: Liveness,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: AppState::new(fallback_config(None), Session::load().is_logged_in()),
            liveness: Liveness::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ConfigLoaded(load_frontend_config().await));
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.liveness.revoke();
    }
}
