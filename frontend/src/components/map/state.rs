//! Runtime state of the `MapView` component and its gesture handling.
//!
//! The gesture methods are plain state transitions that return the events to
//! emit, so `update` only forwards them to the parent.

use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::events::MapEvent;
use super::layers::LayerVisibility;
use super::props::MapViewProps;
use super::sync::MapSync;
use super::viewport::{pixel_distance, DRAG_THRESHOLD};

/// A pressed pointer that has not been released yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDrag {
    pub start: [f64; 2],
    pub last: [f64; 2],
    pub dragging: bool,
}

pub struct MapView {
    pub sync: MapSync,
    pub node_ref: NodeRef,
    pub drag: Option<PointerDrag>,
    pub resize_listener: Option<Closure<dyn Fn()>>,
}

impl MapView {
    /// Builds the layers from the initial props. The widget itself is created
    /// on the first render, once the target element exists.
    pub fn new(props: &MapViewProps) -> Self {
        let mut sync = MapSync::new();
        sync.sync_locations(&props.locations);
        sync.sync_selected_location(props.selected_location.as_ref());
        sync.sync_sidebar_content(props.sidebar_content);
        sync.sync_map_click(props.map_click_coords, props.coordinate_selection_mode);
        Self {
            sync,
            node_ref: NodeRef::default(),
            drag: None,
            resize_listener: None,
        }
    }

    /// Re-applies the rules whose inputs changed between `old` and `new`.
    ///
    /// Replacing the locations clears every layer, so the selection and the
    /// pin are restored from the current props right after.
    pub fn apply_props(&mut self, old: &MapViewProps, new: &MapViewProps) {
        let locations_changed = old.locations != new.locations;
        if locations_changed {
            self.sync.sync_locations(&new.locations);
        }
        if locations_changed || old.selected_location != new.selected_location {
            self.sync.sync_selected_location(new.selected_location.as_ref());
        }
        if old.sidebar_content != new.sidebar_content {
            self.sync.sync_sidebar_content(new.sidebar_content);
        }
        if locations_changed
            || old.map_click_coords != new.map_click_coords
            || old.coordinate_selection_mode != new.coordinate_selection_mode
        {
            self.sync
                .sync_map_click(new.map_click_coords, new.coordinate_selection_mode);
        }
    }

    pub fn needs_resize(&self, (width, height): (f64, f64)) -> bool {
        self.sync
            .widget()
            .is_some_and(|w| w.viewport.width != width || w.viewport.height != height)
    }

    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        match self.sync.widget_mut() {
            Some(widget) if widget.viewport.width != width || widget.viewport.height != height => {
                widget.viewport.resize(width, height);
                true
            }
            _ => false,
        }
    }

    pub fn press(&mut self, pixel: [f64; 2]) {
        self.drag = Some(PointerDrag {
            start: pixel,
            last: pixel,
            dragging: false,
        });
    }

    /// Pans once the pointer has moved past the drag threshold. Returns
    /// whether the view moved.
    pub fn move_to(&mut self, pixel: [f64; 2]) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        if !drag.dragging && pixel_distance(drag.start, pixel) >= DRAG_THRESHOLD {
            drag.dragging = true;
        }
        if !drag.dragging {
            return false;
        }
        let (dx, dy) = (pixel[0] - drag.last[0], pixel[1] - drag.last[1]);
        drag.last = pixel;
        match self.sync.widget_mut() {
            Some(widget) => {
                widget.viewport.pan_by(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Ends a press. A release that never became a drag is a click: it picks
    /// the coordinate under the pointer, dismisses the photo offer and feeds
    /// the marker under the pointer to the selection interaction.
    pub fn release(&mut self, pixel: [f64; 2], visibility: &LayerVisibility) -> Vec<MapEvent> {
        let Some(drag) = self.drag.take() else {
            return Vec::new();
        };
        if drag.dragging {
            return Vec::new();
        }
        let Some(projected) = self.sync.widget().map(|w| w.viewport.pixel_to_projected(pixel)) else {
            return Vec::new();
        };

        let mut events = self.sync.click_events(projected);
        let hit = self.sync.hit_test(pixel, visibility);
        events.extend(self.sync.handle_select(hit));
        events
    }

    pub fn cancel(&mut self) {
        self.drag = None;
    }

    pub fn double_click(&self, pixel: [f64; 2]) -> Option<MapEvent> {
        let projected = self.sync.widget()?.viewport.pixel_to_projected(pixel);
        Some(self.sync.double_click_event(projected))
    }

    /// Zooms one level around `pixel`: in for a negative wheel delta, out for
    /// a positive one.
    pub fn wheel(&mut self, pixel: [f64; 2], delta_y: f64) -> bool {
        let steps = if delta_y < 0.0 {
            1
        } else if delta_y > 0.0 {
            -1
        } else {
            return false;
        };
        match self.sync.widget_mut() {
            Some(widget) => {
                let before = widget.viewport.zoom;
                widget.viewport.zoom_at(pixel, steps);
                widget.viewport.zoom != before
            }
            None => false,
        }
    }
}
