use yew::prelude::*;

use super::messages::Msg;
use super::state::MapView;

/// Applies a pointer or size message and forwards resulting map events to the
/// parent. Returns whether the map has to be redrawn.
pub fn update(map: &mut MapView, ctx: &Context<MapView>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::PointerDown(pixel) => {
            map.press(pixel);
            false
        }
        Msg::PointerMove(pixel) => map.move_to(pixel),
        Msg::PointerUp(pixel) => {
            let events = map.release(pixel, &props.layers);
            let redraw = !events.is_empty();
            for event in events {
                props.on_event.emit(event);
            }
            redraw
        }
        Msg::PointerLeave => {
            map.cancel();
            false
        }
        Msg::DoubleClick(pixel) => {
            if let Some(event) = map.double_click(pixel) {
                props.on_event.emit(event);
            }
            false
        }
        Msg::Wheel(pixel, delta_y) => map.wheel(pixel, delta_y),
        Msg::Resize(width, height) => map.resize(width, height),
    }
}
