use serde::{Deserialize, Serialize};

use crate::model::bookmark::BookmarkType;

/// Body of `POST /api/location-bookmarks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkRequest {
    #[serde(rename = "type")]
    pub bookmark_type: BookmarkType,
    pub created_by_user_uuid: String,
    pub location_id: String,
}

/// Query string of the bookmark list and delete endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkQuery {
    pub user_id: String,
    pub location_id: String,
    pub bookmark_type: Option<BookmarkType>,
}

impl BookmarkQuery {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("userId".to_string(), self.user_id.clone()),
            ("locationId".to_string(), self.location_id.clone()),
        ];
        if let Some(bookmark_type) = self.bookmark_type {
            pairs.push(("bookmarkType".to_string(), bookmark_type.as_str().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_matches_api_field_names() {
        let request = CreateBookmarkRequest {
            bookmark_type: BookmarkType::Visited,
            created_by_user_uuid: "u-1".to_string(),
            location_id: "l-1".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "JUBA_KULASTATUD",
                "createdByUserUuid": "u-1",
                "locationId": "l-1"
            })
        );
    }

    #[test]
    fn delete_query_carries_bookmark_type() {
        let query = BookmarkQuery {
            user_id: "u-1".to_string(),
            location_id: "l-1".to_string(),
            bookmark_type: Some(BookmarkType::Remember),
        };
        assert_eq!(
            query.to_pairs().last(),
            Some(&("bookmarkType".to_string(), "JAA_MEELDE".to_string()))
        );
    }
}
