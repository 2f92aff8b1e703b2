//! Small browser-facing utilities shared by the components.
//!
//! - **User feedback**: `show_toast` injects a temporary notification.
//! - **External viewers**: URLs of the land-board photo services and
//!   `open_in_new_tab`.
//! - **Notes rendering**: escaped Markdown for the free-text field of a
//!   location.

use pulldown_cmark::{html, Parser};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::coordinate::Coordinate;
use common::projection::Projection;

const LAND_BOARD_PHOTO_ARCHIVE: &str = "https://fotoladu.maaamet.ee/";

/// Displays a temporary notification at the bottom of the screen.
///
/// The title is shown in bold above the description. Text is inserted as text
/// content, never as HTML, since descriptions can carry server responses. The
/// toast removes itself after a few seconds.
pub fn show_toast(title: &str, description: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Ok(heading), Ok(body_text), Some(body)) = (
        document.create_element("div"),
        document.create_element("strong"),
        document.create_element("div"),
        document.body(),
    ) else {
        return;
    };

    heading.set_text_content(Some(title));
    body_text.set_text_content(Some(description));
    toast.append_child(&heading).ok();
    toast.append_child(&body_text).ok();

    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Opens `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                gloo_console::error!("Could not open", url, err);
            }
        }
        None => gloo_console::error!("No window to open", url),
    }
}

/// Land-board photo archive centred on a location.
pub fn land_board_photo_url(coordinate: Coordinate) -> String {
    format!(
        "{}?basemap=hybriidk&zlevel=14,{lon},{lat}&overlay=avaleht&etak={lon},{lat}",
        LAND_BOARD_PHOTO_ARCHIVE,
        lon = coordinate.lon,
        lat = coordinate.lat
    )
}

/// Oblique aerial photos of the land-board photo archive around a point.
pub fn oblique_photo_url(coordinate: Coordinate) -> String {
    format!(
        "{}?basemap=hybriidk&zlevel=16,{lon},{lat}&overlay=kaldfotod&etak={lon},{lat}",
        LAND_BOARD_PHOTO_ARCHIVE,
        lon = coordinate.lon,
        lat = coordinate.lat
    )
}

/// `"X: 6589036, Y: 542763"` in the national grid, northing first as the
/// land board writes it.
pub fn format_lest97(coordinate: Coordinate) -> String {
    let [easting, northing] = Projection::Lest97.forward(coordinate.as_lon_lat());
    format!("X: {:.0}, Y: {:.0}", northing, easting)
}

/// Escapes special HTML characters in a string.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders user notes as Markdown. Raw HTML in the notes is escaped first so
/// it shows up as text.
pub fn render_notes_markdown(notes: &str) -> String {
    let escaped = escape_html(notes);
    let parser = Parser::new(&escaped);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_archive_url_puts_lon_before_lat() {
        let url = land_board_photo_url(Coordinate::new(58.3, 24.7));
        assert_eq!(
            url,
            "https://fotoladu.maaamet.ee/?basemap=hybriidk&zlevel=14,24.7,58.3&overlay=avaleht&etak=24.7,58.3"
        );
    }

    #[test]
    fn oblique_url_uses_oblique_overlay() {
        let url = oblique_photo_url(Coordinate::new(58.3, 24.7));
        assert!(url.contains("overlay=kaldfotod"));
        assert!(url.contains("etak=24.7,58.3"));
    }

    #[test]
    fn national_grid_readout_is_northing_first() {
        assert_eq!(
            format_lest97(Coordinate::new(59.437, 24.7536)),
            "X: 6589036, Y: 542763"
        );
    }

    #[test]
    fn notes_markdown_does_not_pass_html_through() {
        let html = render_notes_markdown("**Ettevaatust** <script>alert(1)</script>");
        assert!(html.contains("<strong>Ettevaatust</strong>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
