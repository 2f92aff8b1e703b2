//! Layer constructors: the four styled vector layers and the raster tile
//! layers underneath them.

use std::sync::OnceLock;

use regex::Regex;

use common::model::config::TileSourceConfig;

use super::features::FeatureSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Private,
    Public,
    Selected,
    InProgress,
}

/// Bottom-to-top draw order of the vector layers. Selection and the
/// in-progress pin always sit above the data layers.
pub const DRAW_ORDER: [LayerKind; 4] = [
    LayerKind::Private,
    LayerKind::Public,
    LayerKind::Selected,
    LayerKind::InProgress,
];

pub fn draw_order() -> [LayerKind; 4] {
    DRAW_ORDER
}

/// Circle marker styling, rendered as SVG attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub radius: f64,
}

const PUBLIC_STYLE: LayerStyle = LayerStyle {
    fill: "#2563eb",
    stroke: "#ffffff",
    stroke_width: 2.0,
    radius: 7.0,
};

const PRIVATE_STYLE: LayerStyle = LayerStyle {
    fill: "#f97316",
    stroke: "#ffffff",
    stroke_width: 2.0,
    radius: 7.0,
};

const SELECTED_STYLE: LayerStyle = LayerStyle {
    fill: "rgba(250, 204, 21, 0.35)",
    stroke: "#facc15",
    stroke_width: 3.0,
    radius: 12.0,
};

const IN_PROGRESS_STYLE: LayerStyle = LayerStyle {
    fill: "#16a34a",
    stroke: "#000000",
    stroke_width: 2.0,
    radius: 8.0,
};

#[derive(Debug, Clone, PartialEq)]
pub struct VectorLayer {
    pub kind: LayerKind,
    pub source: FeatureSource,
    pub style: LayerStyle,
}

impl VectorLayer {
    fn styled(kind: LayerKind, source: FeatureSource, style: LayerStyle) -> Self {
        Self {
            kind,
            source,
            style,
        }
    }

    pub fn public(source: FeatureSource) -> Self {
        Self::styled(LayerKind::Public, source, PUBLIC_STYLE)
    }

    pub fn private(source: FeatureSource) -> Self {
        Self::styled(LayerKind::Private, source, PRIVATE_STYLE)
    }

    pub fn selected(source: FeatureSource) -> Self {
        Self::styled(LayerKind::Selected, source, SELECTED_STYLE)
    }

    pub fn in_progress(source: FeatureSource) -> Self {
        Self::styled(LayerKind::InProgress, source, IN_PROGRESS_STYLE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileRole {
    Base,
    Overlay,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub source: TileSourceConfig,
    pub role: TileRole,
    pub opacity: f64,
}

impl TileLayer {
    pub fn base(source: TileSourceConfig) -> Self {
        Self {
            source,
            role: TileRole::Base,
            opacity: 1.0,
        }
    }

    /// Cadastral boundaries drawn translucently over the base layer.
    pub fn land_registry(source: TileSourceConfig) -> Self {
        Self {
            source,
            role: TileRole::Overlay,
            opacity: 0.6,
        }
    }

    pub fn id(&self) -> &str {
        &self.source.id
    }

    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        expand_tile_template(&self.source.url_template, z, x, y)
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(z|x|y|-y)\}").expect("tile placeholder pattern is valid"))
}

/// Fills `{z}`, `{x}`, `{y}` and the TMS row `{-y}` of a tile URL template.
pub fn expand_tile_template(template: &str, z: u8, x: u32, y: u32) -> String {
    let tms_y = (1u32 << z).saturating_sub(1).saturating_sub(y);
    placeholder_pattern()
        .replace_all(template, |caps: &regex::Captures| match &caps[1] {
            "z" => z.to_string(),
            "x" => x.to_string(),
            "y" => y.to_string(),
            _ => tms_y.to_string(),
        })
        .into_owned()
}

/// Which layers the user has switched on. Owned by the App and shared between
/// the map and the layer selector.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerVisibility {
    pub base_layer_id: String,
    pub land_registry: bool,
    pub public_locations: bool,
    pub private_locations: bool,
}

impl LayerVisibility {
    pub fn with_base(base_layer_id: &str) -> Self {
        Self {
            base_layer_id: base_layer_id.to_string(),
            land_registry: false,
            public_locations: true,
            private_locations: true,
        }
    }

    pub fn shows(&self, kind: LayerKind) -> bool {
        match kind {
            LayerKind::Public => self.public_locations,
            LayerKind::Private => self.private_locations,
            LayerKind::Selected | LayerKind::InProgress => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xyz_and_tms_templates_expand() {
        assert_eq!(
            expand_tile_template("https://t/{z}/{x}/{y}.png", 8, 145, 74),
            "https://t/8/145/74.png"
        );
        assert_eq!(
            expand_tile_template("https://t/{z}/{x}/{-y}.png", 8, 145, 74),
            "https://t/8/145/181.png"
        );
    }

    #[test]
    fn each_vector_layer_has_its_own_style() {
        let layers = [
            VectorLayer::private(FeatureSource::new()),
            VectorLayer::public(FeatureSource::new()),
            VectorLayer::selected(FeatureSource::new()),
            VectorLayer::in_progress(FeatureSource::new()),
        ];
        for (i, a) in layers.iter().enumerate() {
            assert_eq!(a.kind, DRAW_ORDER[i]);
            for b in layers.iter().skip(i + 1) {
                assert_ne!(a.style, b.style);
            }
        }
    }

    #[test]
    fn overlay_is_translucent() {
        let overlay = TileLayer::land_registry(TileSourceConfig {
            id: "cadastre".to_string(),
            name: "Katastripiirid".to_string(),
            url_template: String::new(),
            attribution: String::new(),
        });
        assert_eq!(overlay.role, TileRole::Overlay);
        assert!(overlay.opacity < 1.0);
    }

    #[test]
    fn selection_layers_cannot_be_hidden() {
        let visibility = LayerVisibility {
            public_locations: false,
            private_locations: false,
            ..LayerVisibility::with_base("osm")
        };
        assert!(!visibility.shows(LayerKind::Public));
        assert!(visibility.shows(LayerKind::Selected));
        assert!(visibility.shows(LayerKind::InProgress));
    }
}
