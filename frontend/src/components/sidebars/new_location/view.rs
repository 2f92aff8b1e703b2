//! Form layout of the new-location sidebar.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::coordinate_selector::CoordinateSelector;
use super::form::{parse_option_value, FormOption};
use super::messages::Msg;
use super::state::NewLocationSidebar;

pub fn view(sidebar: &NewLocationSidebar, ctx: &Context<NewLocationSidebar>) -> Html {
    let link = ctx.link();
    let form = &sidebar.form;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="sidebar new-location-sidebar" {onsubmit}>
            <header class="sidebar-header">
                <h2>{ "Lisa uus asukoht" }</h2>
                <button type="button" class="icon-button" title="Sulge"
                    onclick={link.callback(|_| Msg::Close)}>
                    <span class="material-icons">{ "close" }</span>
                </button>
            </header>

            <CoordinateSelector
                value={AttrValue::from(sidebar.coordinate_input.clone())}
                invalid={sidebar.coordinate_invalid}
                selection_mode={ctx.props().coordinate_selection_mode}
                on_input={link.callback(Msg::CoordinateTyped)}
                on_toggle={link.callback(|_| Msg::ToggleSelectionMode)}
            />

            <div class="form-field">
                <label for="new-location-name">{ "Nimi" }</label>
                <input id="new-location-name" type="text" value={form.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>

            { select_field("Peamine kategooria", "new-location-category", &sidebar.options.categories,
                form.main_category_id, link.callback(Msg::SetMainCategory)) }

            { subcategory_field(sidebar, link) }

            { select_field("Seisukord", "new-location-condition", &sidebar.options.conditions,
                form.condition_id, link.callback(Msg::SetCondition)) }

            { select_field("Staatus", "new-location-status", &sidebar.options.statuses,
                form.status_id, link.callback(Msg::SetStatus)) }

            <div class="form-field">
                <label for="new-location-notes">{ "Lisainfo" }</label>
                <textarea id="new-location-notes" rows="5" placeholder="Markdown on lubatud"
                    value={form.additional_information.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetAdditionalInformation(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            </div>

            <label class="checkbox-field">
                <input type="checkbox" checked={sidebar.select_after_create}
                    onchange={link.callback(|e: Event| {
                        Msg::SetSelectAfterCreate(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                { "Vali asukoht pärast lisamist" }
            </label>

            <button type="submit" class="primary" disabled={sidebar.submitting}>
                { if sidebar.submitting { "Salvestan..." } else { "Lisa asukoht" } }
            </button>
        </form>
    }
}

fn select_field(
    label: &'static str,
    id: &'static str,
    options: &[FormOption],
    selected: Option<i64>,
    on_change: Callback<Option<i64>>,
) -> Html {
    let onchange = on_change.reform(|e: Event| {
        parse_option_value(&e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    html! {
        <div class="form-field">
            <label for={id}>{ label }</label>
            <select {id} {onchange}>
                <option value="" selected={selected.is_none()}>{ "-- vali --" }</option>
                {
                    for options.iter().map(|option| html! {
                        <option value={option.value.to_string()} selected={selected == Some(option.value)}>
                            { option.label.clone() }
                        </option>
                    })
                }
            </select>
        </div>
    }
}

fn subcategory_field(sidebar: &NewLocationSidebar, link: &Scope<NewLocationSidebar>) -> Html {
    let form = &sidebar.form;
    let candidates = sidebar
        .options
        .categories
        .iter()
        .filter(|option| form.main_category_id != Some(option.value));

    html! {
        <fieldset class="form-field subcategories">
            <legend>{ "Alamkategooriad" }</legend>
            {
                for candidates.map(|option| {
                    let value = option.value;
                    html! {
                        <label class="checkbox-field" key={value.to_string()}>
                            <input type="checkbox"
                                checked={form.subcategory_ids.contains(&value)}
                                onchange={link.callback(move |_: Event| Msg::ToggleSubcategory(value))}
                            />
                            { option.label.clone() }
                        </label>
                    }
                })
            }
        </fieldset>
    }
}
