//! Pan/zoom math of the map view in Web Mercator metres (pure functions).

use common::projection::WebMercator;

pub const TILE_SIZE: f64 = 256.0;
pub const ZOOM_MIN: u8 = 3;
pub const ZOOM_MAX: u8 = 19;

/// Drag threshold in pixels; movement below this is treated as a click.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Hit tolerance around a marker centre, in pixels.
pub const HIT_TOLERANCE: f64 = 10.0;

/// Metres per pixel at an integer zoom level.
pub fn resolution(zoom: u8) -> f64 {
    2.0 * WebMercator::HALF_SIZE / (TILE_SIZE * f64::from(1u32 << zoom))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Centre of the view in EPSG:3857.
    pub center: [f64; 2],
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

/// One raster tile and where it lands in the view, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub z: u8,
    pub x: u32,
    pub y: u32,
    pub left: f64,
    pub top: f64,
}

impl Viewport {
    pub fn new(center: [f64; 2], zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(ZOOM_MIN, ZOOM_MAX),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn resolution(&self) -> f64 {
        resolution(self.zoom)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn pixel_to_projected(&self, pixel: [f64; 2]) -> [f64; 2] {
        let res = self.resolution();
        [
            self.center[0] + (pixel[0] - self.width / 2.0) * res,
            self.center[1] - (pixel[1] - self.height / 2.0) * res,
        ]
    }

    pub fn projected_to_pixel(&self, xy: [f64; 2]) -> [f64; 2] {
        let res = self.resolution();
        [
            (xy[0] - self.center[0]) / res + self.width / 2.0,
            (self.center[1] - xy[1]) / res + self.height / 2.0,
        ]
    }

    /// Moves the content by `dx`, `dy` pixels, as a drag does.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let res = self.resolution();
        self.center[0] -= dx * res;
        self.center[1] += dy * res;
        let limit = WebMercator::HALF_SIZE;
        self.center[0] = self.center[0].clamp(-limit, limit);
        self.center[1] = self.center[1].clamp(-limit, limit);
    }

    /// Changes zoom by `steps` levels keeping the point under `pixel` fixed.
    pub fn zoom_at(&mut self, pixel: [f64; 2], steps: i32) {
        let target = (i32::from(self.zoom) + steps).clamp(i32::from(ZOOM_MIN), i32::from(ZOOM_MAX));
        let new_zoom = target as u8;
        if new_zoom == self.zoom {
            return;
        }
        let anchor = self.pixel_to_projected(pixel);
        let res = resolution(new_zoom);
        self.zoom = new_zoom;
        self.center = [
            anchor[0] - (pixel[0] - self.width / 2.0) * res,
            anchor[1] + (pixel[1] - self.height / 2.0) * res,
        ];
    }

    /// Tiles covering the view at the current zoom, row by row.
    pub fn visible_tiles(&self) -> Vec<TilePlacement> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec::new();
        }
        let res = self.resolution();
        let tile_span = TILE_SIZE * res;
        let tiles_per_axis = 1i64 << self.zoom;
        let origin = WebMercator::HALF_SIZE;

        let top_left = self.pixel_to_projected([0.0, 0.0]);
        let bottom_right = self.pixel_to_projected([self.width, self.height]);

        let clamp = |v: f64| (v.floor() as i64).clamp(0, tiles_per_axis - 1);
        let x_min = clamp((top_left[0] + origin) / tile_span);
        let x_max = clamp((bottom_right[0] + origin) / tile_span);
        let y_min = clamp((origin - top_left[1]) / tile_span);
        let y_max = clamp((origin - bottom_right[1]) / tile_span);

        let mut tiles = Vec::new();
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let corner = [x as f64 * tile_span - origin, origin - y as f64 * tile_span];
                let [left, top] = self.projected_to_pixel(corner);
                tiles.push(TilePlacement {
                    z: self.zoom,
                    x: x as u32,
                    y: y as u32,
                    left,
                    top,
                });
            }
        }
        tiles
    }
}

/// Euclidean distance between two pixels.
pub fn pixel_distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}
