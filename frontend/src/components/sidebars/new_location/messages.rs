use common::model::attributes::LocationAttributes;
use common::model::location::MapLocation;

pub enum Msg {
    SetName(String),
    SetMainCategory(Option<i64>),
    ToggleSubcategory(i64),
    SetCondition(Option<i64>),
    SetStatus(Option<i64>),
    SetAdditionalInformation(String),
    SetSelectAfterCreate(bool),
    CoordinateTyped(String),
    ToggleSelectionMode,
    AttributesLoaded(LocationAttributes),
    Submit,
    Created(Option<MapLocation>),
    Close,
}
