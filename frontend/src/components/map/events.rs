use common::model::coordinate::Coordinate;
use common::model::location::MapLocation;

/// What the map reports to the view that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// A plain click, as a geographic coordinate in stored `lat, lon` terms.
    CoordinatePicked(Coordinate),
    /// A double click asks for oblique aerial photos of the point.
    PhotoRequested(Coordinate),
    /// Any click dismisses a pending oblique photo offer.
    PhotoCleared,
    /// The selection interaction changed; `None` when nothing selectable is
    /// selected any more.
    LocationSelected(Option<MapLocation>),
}
