pub mod layer_selector;
pub mod map;
pub mod oblique_photo;
pub mod side_sheet;
pub mod sidebars;
