use common::model::coordinate::Coordinate;

use crate::services::liveness::Liveness;

use super::form::{FormOptions, NewLocationFormData};

pub struct NewLocationSidebar {
    pub form: NewLocationFormData,
    pub options: FormOptions,

    /// Text of the coordinate field. Follows map picks and keeps whatever the
    /// user types, valid or not.
    pub coordinate_input: String,
    pub coordinate_invalid: bool,

    pub select_after_create: bool,
    pub submitting: bool,
    pub liveness: Liveness,
}

impl NewLocationSidebar {
    pub fn new(picked: Option<Coordinate>) -> Self {
        let mut sidebar = Self {
            form: NewLocationFormData::default(),
            options: FormOptions::default(),
            coordinate_input: String::new(),
            coordinate_invalid: false,
            select_after_create: true,
            submitting: false,
            liveness: Liveness::new(),
        };
        sidebar.pick_coordinate(picked);
        sidebar
    }

    /// Copies a coordinate picked on the map into the form.
    pub fn pick_coordinate(&mut self, picked: Option<Coordinate>) {
        if let Some(coordinate) = picked {
            self.form.coordinate = Some(coordinate);
            self.coordinate_input = coordinate.to_string();
            self.coordinate_invalid = false;
        }
    }

    /// Takes typed `lat, lon` text. Returns the coordinate when it parses; an
    /// unparsable value clears the form coordinate.
    pub fn type_coordinate(&mut self, input: String) -> Option<Coordinate> {
        let parsed = Coordinate::parse_lat_lon(&input);
        self.coordinate_invalid = parsed.is_none() && !input.trim().is_empty();
        self.coordinate_input = input;
        self.form.coordinate = parsed;
        parsed
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.coordinate_input.clear();
        self.coordinate_invalid = false;
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_picked_coordinate_and_selects_after_create() {
        let sidebar = NewLocationSidebar::new(Some(Coordinate::new(58.3, 24.7)));
        assert_eq!(sidebar.form.coordinate, Some(Coordinate::new(58.3, 24.7)));
        assert_eq!(sidebar.coordinate_input, "58.300000, 24.700000");
        assert!(sidebar.select_after_create);
    }

    #[test]
    fn typed_coordinate_updates_form() {
        let mut sidebar = NewLocationSidebar::new(None);

        assert_eq!(
            sidebar.type_coordinate("59.437, 24.7536".to_string()),
            Some(Coordinate::new(59.437, 24.7536))
        );
        assert!(!sidebar.coordinate_invalid);

        assert_eq!(sidebar.type_coordinate("59.437,".to_string()), None);
        assert!(sidebar.coordinate_invalid);
        assert_eq!(sidebar.form.coordinate, None);
        assert_eq!(sidebar.coordinate_input, "59.437,");
    }

    #[test]
    fn map_pick_overrides_typed_text() {
        let mut sidebar = NewLocationSidebar::new(None);
        sidebar.type_coordinate("nonsense".to_string());

        sidebar.pick_coordinate(Some(Coordinate::new(58.0, 25.0)));

        assert!(!sidebar.coordinate_invalid);
        assert_eq!(sidebar.form.coordinate, Some(Coordinate::new(58.0, 25.0)));
    }

    #[test]
    fn reset_keeps_the_select_after_create_choice() {
        let mut sidebar = NewLocationSidebar::new(Some(Coordinate::new(58.3, 24.7)));
        sidebar.select_after_create = false;
        sidebar.form.name = "Vana veski".to_string();
        sidebar.submitting = true;

        sidebar.reset();

        assert_eq!(sidebar.form.name, "");
        assert_eq!(sidebar.form.coordinate, None);
        assert!(!sidebar.submitting);
        assert!(!sidebar.select_after_create);
    }
}
