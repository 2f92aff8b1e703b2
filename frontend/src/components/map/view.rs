//! Rendering of the map: raster tiles as absolutely positioned images, vector
//! markers as an SVG overlay, and the attribution line.

use web_sys::{Element, MouseEvent, WheelEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::layers::{LayerVisibility, TileLayer, VectorLayer};
use super::messages::Msg;
use super::state::MapView;
use super::viewport::{Viewport, TILE_SIZE};
use super::widget::{MapWidget, MAP_TARGET_ID};

pub fn view(map: &MapView, ctx: &Context<MapView>) -> Html {
    let link = ctx.link();
    let node_ref = map.node_ref.clone();

    let onmousedown = pointer_callback(link, &node_ref, Msg::PointerDown);
    let onmousemove = pointer_callback(link, &node_ref, Msg::PointerMove);
    let onmouseup = pointer_callback(link, &node_ref, Msg::PointerUp);
    let ondblclick = pointer_callback(link, &node_ref, Msg::DoubleClick);
    let onmouseleave = link.callback(|_: MouseEvent| Msg::PointerLeave);
    let onwheel = {
        let node_ref = node_ref.clone();
        link.callback(move |e: WheelEvent| Msg::Wheel(relative_pixel(&node_ref, &e), e.delta_y()))
    };

    let dragging = map.drag.is_some_and(|d| d.dragging);
    let class = classes!("map-view", dragging.then_some("dragging"));

    html! {
        <div id={MAP_TARGET_ID} ref={node_ref} {class}
            {onmousedown} {onmousemove} {onmouseup} {onmouseleave} {ondblclick} {onwheel}>
            {
                match map.sync.widget() {
                    Some(widget) => render_widget(map, widget, &ctx.props().layers),
                    None => html! {},
                }
            }
        </div>
    }
}

fn render_widget(map: &MapView, widget: &MapWidget, visibility: &LayerVisibility) -> Html {
    let viewport = &widget.viewport;
    let base = widget.base_layer(&visibility.base_layer_id);
    let overlay = widget
        .land_registry
        .as_ref()
        .filter(|_| visibility.land_registry);

    let attribution = [base, overlay]
        .into_iter()
        .flatten()
        .map(|layer| layer.source.attribution.as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");

    html! {
        <>
            { base.map(|layer| render_tiles(layer, viewport)).unwrap_or_default() }
            { overlay.map(|layer| render_tiles(layer, viewport)).unwrap_or_default() }
            <svg class="map-markers" width={viewport.width.to_string()} height={viewport.height.to_string()}>
                {
                    for map.sync
                        .layers_in_draw_order()
                        .into_iter()
                        .filter(|layer| visibility.shows(layer.kind))
                        .map(|layer| render_markers(layer, viewport))
                }
            </svg>
            <div class="map-attribution">{ attribution }</div>
        </>
    }
}

fn render_tiles(layer: &TileLayer, viewport: &Viewport) -> Html {
    let class = format!("map-tiles map-tiles-{}", layer.id());
    let style = format!("opacity: {};", layer.opacity);
    html! {
        <div {class} {style}>
            {
                for viewport.visible_tiles().into_iter().map(|tile| {
                    let style = format!(
                        "left: {:.1}px; top: {:.1}px; width: {}px; height: {}px;",
                        tile.left, tile.top, TILE_SIZE, TILE_SIZE
                    );
                    html! {
                        <img class="map-tile" draggable="false" alt=""
                            src={layer.tile_url(tile.z, tile.x, tile.y)} {style} />
                    }
                })
            }
        </div>
    }
}

fn render_markers(layer: &VectorLayer, viewport: &Viewport) -> Html {
    let style = layer.style;
    html! {
        <g class="map-marker-layer">
            {
                for layer.source.features().iter().map(|feature| {
                    let [x, y] = viewport.projected_to_pixel(feature.projected());
                    let title = feature.location().map(|l| l.name.clone()).unwrap_or_default();
                    html! {
                        <circle cx={format!("{:.1}", x)} cy={format!("{:.1}", y)}
                            r={style.radius.to_string()}
                            fill={style.fill}
                            stroke={style.stroke}
                            stroke-width={style.stroke_width.to_string()}>
                            <title>{ title }</title>
                        </circle>
                    }
                })
            }
        </g>
    }
}

fn pointer_callback(
    link: &Scope<MapView>,
    node_ref: &NodeRef,
    to_msg: fn([f64; 2]) -> Msg,
) -> Callback<MouseEvent> {
    let node_ref = node_ref.clone();
    link.callback(move |e: MouseEvent| to_msg(relative_pixel(&node_ref, &e)))
}

/// Pointer position relative to the map element, whichever child was hit.
fn relative_pixel(node_ref: &NodeRef, event: &MouseEvent) -> [f64; 2] {
    match node_ref.cast::<Element>() {
        Some(element) => {
            let rect = element.get_bounding_client_rect();
            [
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
            ]
        }
        None => [f64::from(event.offset_x()), f64::from(event.offset_y())],
    }
}
