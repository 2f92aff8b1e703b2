//! Form model of the new-location sidebar and the option lists of its selects.

use common::model::attributes::LocationAttributes;
use common::model::coordinate::Coordinate;

/// Values typed into the new-location form. Turned into a create request by
/// `validate_new_location`; the form always adds to the private map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewLocationFormData {
    pub name: String,
    pub coordinate: Option<Coordinate>,
    pub main_category_id: Option<i64>,
    pub subcategory_ids: Vec<i64>,
    pub condition_id: Option<i64>,
    pub status_id: Option<i64>,
    pub additional_information: String,
}

impl NewLocationFormData {
    /// Sets the main category and drops it from the subcategories.
    pub fn set_main_category(&mut self, id: Option<i64>) {
        self.main_category_id = id;
        if let Some(id) = id {
            self.subcategory_ids.retain(|sub| *sub != id);
        }
    }

    pub fn toggle_subcategory(&mut self, id: i64) {
        if let Some(pos) = self.subcategory_ids.iter().position(|sub| *sub == id) {
            self.subcategory_ids.remove(pos);
        } else if self.main_category_id != Some(id) {
            self.subcategory_ids.push(id);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormOption {
    pub value: i64,
    pub label: String,
}

/// Select options for each attribute list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptions {
    pub categories: Vec<FormOption>,
    pub conditions: Vec<FormOption>,
    pub statuses: Vec<FormOption>,
}

pub fn create_form_options(attributes: &LocationAttributes) -> FormOptions {
    let option = |value: i64, label: &str| FormOption {
        value,
        label: label.to_string(),
    };
    FormOptions {
        categories: attributes.categories.iter().map(|c| option(c.id, &c.name)).collect(),
        conditions: attributes.conditions.iter().map(|c| option(c.id, &c.name)).collect(),
        statuses: attributes.statuses.iter().map(|s| option(s.id, &s.name)).collect(),
    }
}

/// Parses the value of a `<select>`; the empty placeholder option is `None`.
pub fn parse_option_value(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use common::model::attributes::{LocationCategory, LocationCondition, LocationStatus};

    use super::*;

    #[test]
    fn options_follow_attribute_lists() {
        let attributes = LocationAttributes {
            categories: vec![
                LocationCategory { id: 1, name: "Mõis".to_string() },
                LocationCategory { id: 2, name: "Veski".to_string() },
            ],
            conditions: vec![LocationCondition { id: 5, name: "Varemed".to_string() }],
            statuses: vec![LocationStatus { id: 9, name: "Mahajäetud".to_string() }],
        };

        let options = create_form_options(&attributes);

        assert_eq!(options.categories.len(), 2);
        assert_eq!(options.categories[1], FormOption { value: 2, label: "Veski".to_string() });
        assert_eq!(options.conditions[0].value, 5);
        assert_eq!(options.statuses[0].label, "Mahajäetud");
    }

    #[test]
    fn main_category_is_never_a_subcategory() {
        let mut form = NewLocationFormData::default();
        form.toggle_subcategory(1);
        form.toggle_subcategory(2);

        form.set_main_category(Some(1));
        assert_eq!(form.subcategory_ids, vec![2]);

        form.toggle_subcategory(1);
        assert_eq!(form.subcategory_ids, vec![2]);
        form.toggle_subcategory(2);
        assert!(form.subcategory_ids.is_empty());
    }

    #[test]
    fn placeholder_option_is_none() {
        assert_eq!(parse_option_value(""), None);
        assert_eq!(parse_option_value("12"), Some(12));
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = NewLocationFormData {
            name: "Vana veski".to_string(),
            coordinate: Some(Coordinate::new(58.3, 24.7)),
            main_category_id: Some(1),
            ..Default::default()
        };
        form.reset();
        assert_eq!(form, NewLocationFormData::default());
    }
}
