use serde::{Deserialize, Serialize};

/// Metadata of one cat as returned by `GET /cat?json=true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCatMetadata {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "mimetype", default)]
    pub mime_type: String,
}

impl RemoteCatMetadata {
    /// True for GIFs, which are sent as animations rather than photos.
    pub fn is_animated(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case("image/gif")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_id_field() {
        let json = r#"{
            "_id": "595f280b557291a9750ebf65",
            "created_at": "2017-07-07T06:19:55.000Z",
            "tags": ["cute", "orange"],
            "url": "/cat/595f280b557291a9750ebf65",
            "mimetype": "image/jpeg"
        }"#;

        let cat: RemoteCatMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(cat.id, "595f280b557291a9750ebf65");
        assert_eq!(cat.created_at, "2017-07-07T06:19:55.000Z");
        assert_eq!(cat.tags, vec!["cute".to_string(), "orange".to_string()]);
        assert_eq!(cat.url, "/cat/595f280b557291a9750ebf65");
        assert!(!cat.is_animated());
    }

    #[test]
    fn test_deserialize_plain_id_and_missing_fields() {
        let json = r#"{"id": "abc", "mimetype": "image/GIF"}"#;

        let cat: RemoteCatMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(cat.id, "abc");
        assert!(cat.tags.is_empty());
        assert!(cat.created_at.is_empty());
        assert!(cat.is_animated());
    }

    #[test]
    fn test_deserialize_without_id_fails() {
        let json = r#"{"tags": [], "mimetype": "image/png"}"#;
        assert!(serde_json::from_str::<RemoteCatMetadata>(json).is_err());
    }
}
