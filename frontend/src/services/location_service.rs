//! Client for the location endpoints of the REST API.
//!
//! Every public operation reports its own failures through the `Notifier` and
//! returns `None`, so callers in the component tree only deal with the happy
//! path. Validation of the new-location form happens here, before any request
//! is made.

use common::model::attributes::LocationAttributes;
use common::model::config::FrontendConfig;
use common::model::location::{LocationCreateDto, MapLocation};

use crate::components::sidebars::new_location::form::NewLocationFormData;

use super::error::ServiceError;
use super::notifier::{Notifier, ToastNotifier};
use super::session::Session;
use super::transport::{ApiRequest, HttpTransport, Transport};

const LOCATIONS_PATH: &str = "/api/locations";
const PUBLIC_LOCATIONS_PATH: &str = "/api/locations/public";
const PRIVATE_LOCATIONS_PATH: &str = "/api/locations/private";
const ATTRIBUTES_PATH: &str = "/api/location-attributes";

const ERROR_TITLE: &str = "Viga!";

/// Which of the two maps is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapScope {
    #[default]
    Public,
    Private,
}

/// Checks the required fields of the form and builds the request body.
///
/// Returns a message suitable for showing to the user when a field is
/// missing.
pub fn validate_new_location(form: &NewLocationFormData) -> Result<LocationCreateDto, String> {
    if form.name.trim().is_empty() {
        return Err("Asukoha nimi on kohustuslik.".to_string());
    }
    let coordinate = form
        .coordinate
        .ok_or_else(|| "Vali kaardilt asukoha koordinaadid.".to_string())?;
    let main_category_id = form
        .main_category_id
        .ok_or_else(|| "Vali asukoha kategooria.".to_string())?;

    Ok(LocationCreateDto {
        name: form.name.trim().to_string(),
        lat: coordinate.lat,
        lon: coordinate.lon,
        is_public: false,
        main_category_id,
        subcategory_ids: form.subcategory_ids.clone(),
        condition_id: form.condition_id,
        status_id: form.status_id,
        additional_information: form.additional_information.clone(),
    })
}

pub struct LocationService<T, N> {
    transport: T,
    notifier: N,
    session: Session,
}

impl LocationService<HttpTransport, ToastNotifier> {
    /// Service against the configured API, authenticated as the user in local
    /// storage.
    pub fn connect(config: &FrontendConfig) -> Self {
        Self::new(HttpTransport::new(&config.api_url), ToastNotifier, Session::load())
    }
}

impl<T: Transport, N: Notifier> LocationService<T, N> {
    pub fn new(transport: T, notifier: N, session: Session) -> Self {
        Self {
            transport,
            notifier,
            session,
        }
    }

    pub async fn create_location(&self, form: &NewLocationFormData) -> Option<MapLocation> {
        let dto = match validate_new_location(form) {
            Ok(dto) => dto,
            Err(message) => {
                self.notifier.notify(ERROR_TITLE, &message);
                return None;
            }
        };

        match self.try_create_location(&dto).await {
            Ok(location) => Some(location),
            Err(error) => {
                self.report("Asukoha lisamine ebaõnnestus", &error);
                None
            }
        }
    }

    pub async fn fetch_location_attributes(&self) -> Option<LocationAttributes> {
        let request = ApiRequest::get(ATTRIBUTES_PATH).with_bearer(self.session.token());
        match self.fetch_json(request).await {
            Ok(attributes) => Some(attributes),
            Err(error) => {
                self.report("Asukoha atribuutide laadimine ebaõnnestus", &error);
                None
            }
        }
    }

    pub async fn fetch_locations(&self, scope: MapScope) -> Option<Vec<MapLocation>> {
        let request = match scope {
            MapScope::Public => Ok(ApiRequest::get(PUBLIC_LOCATIONS_PATH)),
            MapScope::Private => self.session.require_user_id().map(|user_id| {
                ApiRequest::get(PRIVATE_LOCATIONS_PATH)
                    .with_query(vec![("userId".to_string(), user_id.to_string())])
            }),
        };

        let result = match request {
            Ok(request) => self.fetch_json(request.with_bearer(self.session.token())).await,
            Err(error) => Err(error),
        };

        match result {
            Ok(locations) => Some(locations),
            Err(error) => {
                self.report("Asukohtade laadimine ebaõnnestus", &error);
                None
            }
        }
    }

    async fn try_create_location(&self, dto: &LocationCreateDto) -> Result<MapLocation, ServiceError> {
        let request = ApiRequest::post(LOCATIONS_PATH, dto)?.with_bearer(self.session.token());
        self.fetch_json(request).await
    }

    async fn fetch_json<R: serde::de::DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ServiceError> {
        self.transport.send(request).await?.error_for_status()?.json()
    }

    fn report(&self, title: &str, error: &ServiceError) {
        self.notifier.notify(title, &error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use common::model::coordinate::Coordinate;

    use super::*;
    use crate::services::testing::{RecordingNotifier, RecordingTransport};
    use crate::services::transport::HttpMethod;

    fn complete_form() -> NewLocationFormData {
        NewLocationFormData {
            name: "Vana veski".to_string(),
            coordinate: Some(Coordinate::new(58.3, 24.7)),
            main_category_id: Some(2),
            subcategory_ids: vec![7],
            condition_id: Some(1),
            status_id: None,
            additional_information: "Katus sisse kukkunud".to_string(),
        }
    }

    fn logged_in() -> Session {
        Session::new(Some("user-1".to_string()), Some("token-1".to_string()))
    }

    const CREATED: &str = r#"{ "id": "loc-9", "name": "Vana veski", "lat": 58.3, "lon": 24.7, "isPublic": false }"#;

    #[test]
    fn empty_name_is_rejected_without_a_request() {
        let transport = RecordingTransport::new();
        let notifier = RecordingNotifier::default();
        let service = LocationService::new(&transport, &notifier, logged_in());
        let form = NewLocationFormData {
            name: "   ".to_string(),
            ..complete_form()
        };

        let created = block_on(service.create_location(&form));

        assert_eq!(created, None);
        assert_eq!(transport.request_count(), 0);
        let messages = notifier.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].1, "Asukoha nimi on kohustuslik.");
    }

    #[test]
    fn missing_coordinate_and_category_are_reported() {
        let without_coordinate = NewLocationFormData {
            coordinate: None,
            ..complete_form()
        };
        let without_category = NewLocationFormData {
            main_category_id: None,
            ..complete_form()
        };

        assert_eq!(
            validate_new_location(&without_coordinate),
            Err("Vali kaardilt asukoha koordinaadid.".to_string())
        );
        assert_eq!(
            validate_new_location(&without_category),
            Err("Vali asukoha kategooria.".to_string())
        );
    }

    #[test]
    fn valid_form_is_posted_as_private_location() {
        let transport = RecordingTransport::new().respond(201, CREATED);
        let notifier = RecordingNotifier::default();
        let service = LocationService::new(&transport, &notifier, logged_in());

        let created = block_on(service.create_location(&complete_form()));

        assert_eq!(created.map(|l| l.id), Some("loc-9".to_string()));
        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path, "/api/locations");
        assert_eq!(requests[0].bearer_token.as_deref(), Some("token-1"));
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["isPublic"], false);
        assert_eq!(body["lat"], 58.3);
        assert_eq!(body["lon"], 24.7);
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn network_failure_becomes_none_and_a_notification() {
        let transport = RecordingTransport::new().fail(ServiceError::Network("offline".to_string()));
        let notifier = RecordingNotifier::default();
        let service = LocationService::new(&transport, &notifier, logged_in());

        let created = block_on(service.create_location(&complete_form()));

        assert_eq!(created, None);
        assert_eq!(notifier.messages.borrow().len(), 1);
        assert_eq!(notifier.messages.borrow()[0].0, "Asukoha lisamine ebaõnnestus");
    }

    #[test]
    fn error_status_is_not_decoded_as_location() {
        let transport = RecordingTransport::new().respond(400, "bad request");
        let notifier = RecordingNotifier::default();
        let service = LocationService::new(&transport, &notifier, logged_in());

        assert_eq!(block_on(service.create_location(&complete_form())), None);
        assert!(notifier.messages.borrow()[0].1.contains("400"));
    }

    #[test]
    fn private_locations_need_a_user() {
        let transport = RecordingTransport::new();
        let notifier = RecordingNotifier::default();
        let service = LocationService::new(&transport, &notifier, Session::default());

        assert_eq!(block_on(service.fetch_locations(MapScope::Private)), None);
        assert_eq!(transport.request_count(), 0);
        assert_eq!(notifier.messages.borrow().len(), 1);
    }

    #[test]
    fn private_locations_are_queried_by_user() {
        let transport = RecordingTransport::new().respond(200, &format!("[{}]", CREATED));
        let notifier = RecordingNotifier::default();
        let service = LocationService::new(&transport, &notifier, logged_in());

        let locations = block_on(service.fetch_locations(MapScope::Private)).unwrap();

        assert_eq!(locations.len(), 1);
        let requests = transport.requests.borrow();
        assert_eq!(requests[0].path, "/api/locations/private");
        assert_eq!(requests[0].query_value("userId"), Some("user-1"));
    }

    #[test]
    fn attributes_are_decoded() {
        let transport = RecordingTransport::new().respond(
            200,
            r#"{ "categories": [{ "id": 1, "name": "Mõis" }], "conditions": [], "statuses": [] }"#,
        );
        let notifier = RecordingNotifier::default();
        let service = LocationService::new(&transport, &notifier, Session::default());

        let attributes = block_on(service.fetch_location_attributes()).unwrap();

        assert_eq!(attributes.categories[0].name, "Mõis");
        assert_eq!(transport.requests.borrow()[0].path, "/api/location-attributes");
    }
}
