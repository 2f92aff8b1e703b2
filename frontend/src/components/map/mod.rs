//! Map view: root module wiring the Yew `Component` implementation with the
//! pure map model (features, layers, viewport, widget, sync controller).
//!
//! Responsibilities
//! - Mount the widget on the first render into `#map-element` and release it on
//!   destroy.
//! - Re-apply the synchronization rules whenever the App hands down new props.
//! - Translate pointer input into `MapEvent`s for the parent.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

pub mod events;
pub mod features;
pub mod layers;
mod messages;
mod props;
mod state;
pub mod sync;
mod update;
mod view;
pub mod viewport;
pub mod widget;

pub use events::MapEvent;
pub use layers::LayerVisibility;
pub use messages::Msg;
pub use props::MapViewProps;
pub use state::MapView;

use widget::MAP_TARGET_ID;

impl Component for MapView {
    type Message = Msg;
    type Properties = MapViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        MapView::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        self.apply_props(old_props, ctx.props());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        let element = self.node_ref.cast::<HtmlElement>();

        if first_render {
            let target = element.as_ref().map(|_| MAP_TARGET_ID);
            if self.sync.mount(target, &ctx.props().config) {
                self.listen_for_resize(ctx);
            }
        }

        if let Some(element) = element {
            let size = (
                f64::from(element.client_width()),
                f64::from(element.client_height()),
            );
            if self.needs_resize(size) {
                ctx.link().send_message(Msg::Resize(size.0, size.1));
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.resize_listener.take()) {
            let _ = window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
        self.sync.unmount();
    }
}

impl MapView {
    fn listen_for_resize(&mut self, ctx: &Context<Self>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let link = ctx.link().clone();
        let node_ref = self.node_ref.clone();
        let listener = Closure::<dyn Fn()>::new(move || {
            if let Some(element) = node_ref.cast::<HtmlElement>() {
                link.send_message(Msg::Resize(
                    f64::from(element.client_width()),
                    f64::from(element.client_height()),
                ));
            }
        });
        if window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            self.resize_listener = Some(listener);
        }
    }
}
