use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CoordinateSelectorProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub invalid: bool,
    pub selection_mode: bool,
    pub on_input: Callback<String>,
    pub on_toggle: Callback<()>,
}

/// Coordinate field with a button that arms picking the point on the map.
#[function_component(CoordinateSelector)]
pub fn coordinate_selector(props: &CoordinateSelectorProps) -> Html {
    let oninput = props
        .on_input
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    let (button_label, button_class) = if props.selection_mode {
        ("Lõpeta valimine", classes!("coordinate-pick", "active"))
    } else {
        ("Vali kaardilt", classes!("coordinate-pick"))
    };

    html! {
        <div class="form-field coordinate-selector">
            <label for="new-location-coordinates">{ "Koordinaadid (lat, lon)" }</label>
            <div class="coordinate-row">
                <input
                    id="new-location-coordinates"
                    type="text"
                    placeholder="58.3, 24.7"
                    class={classes!(props.invalid.then_some("invalid"))}
                    value={props.value.clone()}
                    {oninput}
                />
                <button type="button" class={button_class} {onclick}>{ button_label }</button>
            </div>
            if props.selection_mode {
                <small class="hint">{ "Klõpsa kaardil asukoha valimiseks." }</small>
            }
            if props.invalid {
                <small class="error">{ "Sisesta koordinaadid kujul lat, lon." }</small>
            }
        </div>
    }
}
