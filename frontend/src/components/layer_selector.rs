//! Map layer switcher: base layer, land-registry overlay and the two data
//! layers. The selection itself lives in the App; this component only emits
//! the changed `LayerVisibility`.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::config::TileSourceConfig;

use crate::components::map::LayerVisibility;

#[derive(Properties, PartialEq, Clone)]
pub struct LayerSelectorProps {
    pub layers: LayerVisibility,
    pub base_layers: Vec<TileSourceConfig>,
    #[prop_or_default]
    pub overlay: Option<TileSourceConfig>,
    pub on_change: Callback<LayerVisibility>,
}

pub enum Msg {
    ToggleOpen,
    SelectBase(String),
    SetLandRegistry(bool),
    SetPublicLocations(bool),
    SetPrivateLocations(bool),
}

pub struct LayerSelector {
    pub open: bool,
}

/// New visibility after `msg`, or `None` when the message does not touch it.
pub fn apply(layers: &LayerVisibility, msg: &Msg) -> Option<LayerVisibility> {
    let mut next = layers.clone();
    match msg {
        Msg::ToggleOpen => return None,
        Msg::SelectBase(id) => next.base_layer_id = id.clone(),
        Msg::SetLandRegistry(on) => next.land_registry = *on,
        Msg::SetPublicLocations(on) => next.public_locations = *on,
        Msg::SetPrivateLocations(on) => next.private_locations = *on,
    }
    (next != *layers).then_some(next)
}

impl Component for LayerSelector {
    type Message = Msg;
    type Properties = LayerSelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { open: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let Msg::ToggleOpen = msg {
            self.open = !self.open;
            return true;
        }
        if let Some(next) = apply(&ctx.props().layers, &msg) {
            ctx.props().on_change.emit(next);
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let checked = |e: Event| e.target_unchecked_into::<HtmlInputElement>().checked();

        html! {
            <div class={classes!("layer-selector", self.open.then_some("open"))}>
                <button type="button" class="icon-button" title="Kaardikihid"
                    onclick={link.callback(|_| Msg::ToggleOpen)}>
                    <span class="material-icons">{ "layers" }</span>
                </button>
                if self.open {
                    <div class="layer-selector-panel">
                        <fieldset>
                            <legend>{ "Aluskaart" }</legend>
                            {
                                for props.base_layers.iter().map(|source| {
                                    let id = source.id.clone();
                                    html! {
                                        <label key={source.id.clone()}>
                                            <input type="radio" name="base-layer"
                                                checked={props.layers.base_layer_id == source.id}
                                                onchange={link.callback(move |_: Event| Msg::SelectBase(id.clone()))}
                                            />
                                            { source.name.clone() }
                                        </label>
                                    }
                                })
                            }
                        </fieldset>
                        <fieldset>
                            <legend>{ "Kihid" }</legend>
                            if let Some(overlay) = &props.overlay {
                                <label>
                                    <input type="checkbox" checked={props.layers.land_registry}
                                        onchange={link.callback(move |e| Msg::SetLandRegistry(checked(e)))} />
                                    { overlay.name.clone() }
                                </label>
                            }
                            <label>
                                <input type="checkbox" checked={props.layers.public_locations}
                                    onchange={link.callback(move |e| Msg::SetPublicLocations(checked(e)))} />
                                { "Avalikud asukohad" }
                            </label>
                            <label>
                                <input type="checkbox" checked={props.layers.private_locations}
                                    onchange={link.callback(move |e| Msg::SetPrivateLocations(checked(e)))} />
                                { "Minu asukohad" }
                            </label>
                        </fieldset>
                    </div>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_only_the_touched_layer() {
        let layers = LayerVisibility::with_base("osm");

        let next = apply(&layers, &Msg::SelectBase("orthophoto".to_string())).unwrap();
        assert_eq!(next.base_layer_id, "orthophoto");
        assert_eq!(next.public_locations, layers.public_locations);

        let next = apply(&layers, &Msg::SetLandRegistry(true)).unwrap();
        assert!(next.land_registry);
        assert_eq!(next.base_layer_id, "osm");
    }

    #[test]
    fn unchanged_visibility_is_not_emitted() {
        let layers = LayerVisibility::with_base("osm");
        assert_eq!(apply(&layers, &Msg::SelectBase("osm".to_string())), None);
        assert_eq!(apply(&layers, &Msg::SetPublicLocations(true)), None);
        assert_eq!(apply(&layers, &Msg::ToggleOpen), None);
    }
}
