//! Bookmark state for one (user, location) pair and the calls that change it.
//!
//! A toggle is decided from the local state: a set bookmark is deleted, an
//! unset one is created. Local state only moves after the server accepted the
//! change; on failure the caller keeps the old `BookmarkSet`.

use std::collections::BTreeSet;

use common::model::bookmark::{Bookmark, BookmarkType};
use common::model::config::FrontendConfig;
use common::requests::{BookmarkQuery, CreateBookmarkRequest};

use super::error::ServiceError;
use super::session::Session;
use super::transport::{ApiRequest, HttpTransport, Transport};

const BOOKMARKS_PATH: &str = "/api/location-bookmarks";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet(BTreeSet<BookmarkType>);

/// The single request a toggle turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkChange {
    Create(BookmarkType),
    Delete(BookmarkType),
}

impl BookmarkSet {
    pub fn contains(&self, bookmark_type: BookmarkType) -> bool {
        self.0.contains(&bookmark_type)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn plan_toggle(&self, bookmark_type: BookmarkType) -> BookmarkChange {
        if self.contains(bookmark_type) {
            BookmarkChange::Delete(bookmark_type)
        } else {
            BookmarkChange::Create(bookmark_type)
        }
    }

    pub fn apply(&self, change: BookmarkChange) -> BookmarkSet {
        let mut next = self.0.clone();
        match change {
            BookmarkChange::Create(bookmark_type) => {
                next.insert(bookmark_type);
            }
            BookmarkChange::Delete(bookmark_type) => {
                next.remove(&bookmark_type);
            }
        }
        BookmarkSet(next)
    }
}

impl FromIterator<BookmarkType> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = BookmarkType>>(iter: I) -> Self {
        BookmarkSet(iter.into_iter().collect())
    }
}

pub struct BookmarkService<T> {
    transport: T,
    session: Session,
}

impl BookmarkService<HttpTransport> {
    pub fn connect(config: &FrontendConfig, session: Session) -> Self {
        Self::new(HttpTransport::new(&config.api_url), session)
    }
}

impl<T: Transport> BookmarkService<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self { transport, session }
    }

    pub async fn fetch(&self, location_id: &str) -> Result<BookmarkSet, ServiceError> {
        let query = self.query(location_id, None)?;
        let request = ApiRequest::get(BOOKMARKS_PATH)
            .with_query(query.to_pairs())
            .with_bearer(self.session.token());
        let bookmarks: Vec<Bookmark> = self.transport.send(request).await?.error_for_status()?.json()?;
        Ok(bookmarks.into_iter().map(|b| b.bookmark_type).collect())
    }

    pub async fn submit(&self, location_id: &str, change: BookmarkChange) -> Result<(), ServiceError> {
        let request = match change {
            BookmarkChange::Create(bookmark_type) => {
                let body = CreateBookmarkRequest {
                    bookmark_type,
                    created_by_user_uuid: self.session.require_user_id()?.to_string(),
                    location_id: location_id.to_string(),
                };
                ApiRequest::post(BOOKMARKS_PATH, &body)?
            }
            BookmarkChange::Delete(bookmark_type) => {
                let query = self.query(location_id, Some(bookmark_type))?;
                ApiRequest::delete(BOOKMARKS_PATH).with_query(query.to_pairs())
            }
        };
        self.transport
            .send(request.with_bearer(self.session.token()))
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Flips `bookmark_type` on the server and returns the resulting local
    /// state. `current` is left for the caller to keep on error.
    pub async fn toggle(
        &self,
        location_id: &str,
        current: &BookmarkSet,
        bookmark_type: BookmarkType,
    ) -> Result<BookmarkSet, ServiceError> {
        let change = current.plan_toggle(bookmark_type);
        self.submit(location_id, change).await?;
        Ok(current.apply(change))
    }

    fn query(&self, location_id: &str, bookmark_type: Option<BookmarkType>) -> Result<BookmarkQuery, ServiceError> {
        Ok(BookmarkQuery {
            user_id: self.session.require_user_id()?.to_string(),
            location_id: location_id.to_string(),
            bookmark_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::services::testing::RecordingTransport;
    use crate::services::transport::HttpMethod;

    fn session() -> Session {
        Session::new(Some("user-1".to_string()), Some("token-1".to_string()))
    }

    #[test]
    fn fetch_collects_types_for_user_and_location() {
        let transport = RecordingTransport::new().respond(
            200,
            r#"[{ "type": "JAA_MEELDE" }, { "type": "SUUR_RISK" }]"#,
        );
        let service = BookmarkService::new(&transport, session());

        let set = block_on(service.fetch("loc-1")).unwrap();

        assert!(set.contains(BookmarkType::Remember));
        assert!(set.contains(BookmarkType::HighRisk));
        assert_eq!(set.len(), 2);
        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].query_value("userId"), Some("user-1"));
        assert_eq!(requests[0].query_value("locationId"), Some("loc-1"));
    }

    #[test]
    fn toggling_unset_then_set_issues_one_create_then_one_delete() {
        let transport = RecordingTransport::new().respond(201, "").respond(200, "");
        let service = BookmarkService::new(&transport, session());
        let empty = BookmarkSet::default();

        let after_create = block_on(service.toggle("loc-1", &empty, BookmarkType::Visited)).unwrap();
        assert_eq!(transport.request_count(), 1);
        assert_eq!(after_create, [BookmarkType::Visited].into_iter().collect::<BookmarkSet>());
        {
            let requests = transport.requests.borrow();
            assert_eq!(requests[0].method, HttpMethod::Post);
            let body = requests[0].body.as_ref().unwrap();
            assert_eq!(body["type"], "JUBA_KULASTATUD");
            assert_eq!(body["createdByUserUuid"], "user-1");
            assert_eq!(body["locationId"], "loc-1");
        }

        let after_delete = block_on(service.toggle("loc-1", &after_create, BookmarkType::Visited)).unwrap();
        assert_eq!(transport.request_count(), 2);
        assert!(after_delete.is_empty());
        let requests = transport.requests.borrow();
        assert_eq!(requests[1].method, HttpMethod::Delete);
        assert_eq!(requests[1].query_value("bookmarkType"), Some("JUBA_KULASTATUD"));
    }

    #[test]
    fn failed_create_leaves_state_unchanged() {
        let transport = RecordingTransport::new().respond(500, "");
        let service = BookmarkService::new(&transport, session());
        let current = BookmarkSet::default();

        let result = block_on(service.toggle("loc-1", &current, BookmarkType::Remember));

        assert!(result.is_err());
        assert!(current.is_empty());
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn failed_delete_leaves_state_unchanged() {
        let transport = RecordingTransport::new().fail(ServiceError::Network("offline".to_string()));
        let service = BookmarkService::new(&transport, session());
        let current: BookmarkSet = [BookmarkType::Remember].into_iter().collect();

        let result = block_on(service.toggle("loc-1", &current, BookmarkType::Remember));

        assert!(result.is_err());
        assert!(current.contains(BookmarkType::Remember));
    }

    #[test]
    fn missing_user_skips_the_request() {
        let transport = RecordingTransport::new();
        let service = BookmarkService::new(&transport, Session::default());

        let result = block_on(service.toggle("loc-1", &BookmarkSet::default(), BookmarkType::Remember));

        assert_eq!(result, Err(ServiceError::NotLoggedIn));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(block_on(service.fetch("loc-1")), Err(ServiceError::NotLoggedIn));
    }
}
