//! Right-hand panels of the map page.

pub mod location_details;
pub mod new_location;

/// Which panel the sidebar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarContent {
    #[default]
    Nothing,
    LocationDetails,
    AddNewLocation,
}
