use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::show_toast;
use crate::services::location_service::LocationService;

use super::form::create_form_options;
use super::messages::Msg;
use super::state::NewLocationSidebar;

pub fn update(
    sidebar: &mut NewLocationSidebar,
    ctx: &Context<NewLocationSidebar>,
    msg: Msg,
) -> bool {
    let props = ctx.props();
    match msg {
        Msg::SetName(name) => {
            sidebar.form.name = name;
            true
        }
        Msg::SetMainCategory(id) => {
            sidebar.form.set_main_category(id);
            true
        }
        Msg::ToggleSubcategory(id) => {
            sidebar.form.toggle_subcategory(id);
            true
        }
        Msg::SetCondition(id) => {
            sidebar.form.condition_id = id;
            true
        }
        Msg::SetStatus(id) => {
            sidebar.form.status_id = id;
            true
        }
        Msg::SetAdditionalInformation(text) => {
            sidebar.form.additional_information = text;
            true
        }
        Msg::SetSelectAfterCreate(select) => {
            sidebar.select_after_create = select;
            true
        }
        Msg::CoordinateTyped(input) => {
            if let Some(coordinate) = sidebar.type_coordinate(input) {
                props.on_coordinate_typed.emit(coordinate);
            }
            true
        }
        Msg::ToggleSelectionMode => {
            props.on_selection_mode.emit(!props.coordinate_selection_mode);
            false
        }
        Msg::AttributesLoaded(attributes) => {
            sidebar.options = create_form_options(&attributes);
            true
        }
        Msg::Submit => {
            if sidebar.submitting {
                return false;
            }
            props.on_selection_mode.emit(false);
            sidebar.submitting = true;

            let form = sidebar.form.clone();
            let config = props.config.clone();
            let link = ctx.link().clone();
            let token = sidebar.liveness.token();
            spawn_local(async move {
                let created = LocationService::connect(&config).create_location(&form).await;
                if token.is_alive() {
                    link.send_message(Msg::Created(created));
                }
            });
            true
        }
        Msg::Created(Some(location)) => {
            show_toast("Asukoht lisatud", &location.name);
            props.on_created.emit((location, sidebar.select_after_create));
            sidebar.reset();
            true
        }
        Msg::Created(None) => {
            sidebar.submitting = false;
            true
        }
        Msg::Close => {
            props.on_selection_mode.emit(false);
            props.on_close.emit(());
            false
        }
    }
}
