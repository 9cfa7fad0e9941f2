//! Recommendation API data model
//!
//! Shapes returned by `GET /recommendations/{contentid}`. Only `contentid`
//! is required on a festival record; every other field degrades to
//! placeholder text at render time. The API emits ids and district codes as
//! strings, but integers are accepted too.

use serde::{Deserialize, Deserializer};

/// One festival record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Festival {
    #[serde(rename = "contentid", deserialize_with = "string_or_number")]
    pub content_id: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Street address
    #[serde(default, rename = "addr1")]
    pub address: Option<String>,

    #[serde(default)]
    pub overview: Option<String>,

    #[serde(default, rename = "firstimage")]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub sigungucode: Option<String>,
}

impl Festival {
    /// Title, if one is present and non-empty
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    /// Image URL, if one is present and non-empty
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Success body of the recommendation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecommendationResponse {
    /// Festivals similar to the requested one; the first entry is the
    /// subject of the detail page header
    pub track1_similar: Vec<Festival>,

    /// Lesser-known festivals
    #[serde(default)]
    pub track2_unpopular: Option<Vec<Festival>>,
}

impl RecommendationResponse {
    /// First similar festival, used for the detail page header
    pub fn base_festival(&self) -> Option<&Festival> {
        self.track1_similar.first()
    }
}

/// Failure body of the recommendation endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_uses_api_field_names() {
        let festival: Festival = serde_json::from_str(
            r#"{
                "contentid": "2631543",
                "title": "Seoul Lantern Festival",
                "addr1": "Cheonggyecheon-ro, Jung-gu",
                "overview": "Lanterns along the stream",
                "firstimage": "http://example.com/a.jpg",
                "sigungucode": "24"
            }"#,
        )
        .unwrap();

        assert_eq!(festival.content_id, "2631543");
        assert_eq!(festival.title(), Some("Seoul Lantern Festival"));
        assert_eq!(festival.address.as_deref(), Some("Cheonggyecheon-ro, Jung-gu"));
        assert_eq!(festival.image_url(), Some("http://example.com/a.jpg"));
        assert_eq!(festival.sigungucode.as_deref(), Some("24"));
    }

    #[test]
    fn test_only_contentid_is_required() {
        let festival: Festival = serde_json::from_str(r#"{"contentid": "1"}"#).unwrap();
        assert!(festival.title().is_none());
        assert!(festival.address.is_none());
        assert!(festival.overview.is_none());
        assert!(festival.image_url().is_none());
        assert!(festival.sigungucode.is_none());

        assert!(serde_json::from_str::<Festival>(r#"{"title": "A"}"#).is_err());
    }

    #[test]
    fn test_numeric_ids_and_codes_are_accepted() {
        let festival: Festival =
            serde_json::from_str(r#"{"contentid": 42, "sigungucode": 7}"#).unwrap();
        assert_eq!(festival.content_id, "42");
        assert_eq!(festival.sigungucode.as_deref(), Some("7"));

        let festival: Festival =
            serde_json::from_str(r#"{"contentid": "42", "sigungucode": null}"#).unwrap();
        assert!(festival.sigungucode.is_none());
    }

    #[test]
    fn test_empty_image_url_counts_as_missing() {
        let festival: Festival =
            serde_json::from_str(r#"{"contentid": "1", "firstimage": ""}"#).unwrap();
        assert!(festival.image_url().is_none());
    }

    #[test]
    fn test_response_track2_may_be_absent() {
        let response: RecommendationResponse =
            serde_json::from_str(r#"{"track1_similar": [{"contentid": "1", "title": "A"}]}"#)
                .unwrap();
        assert_eq!(response.base_festival().and_then(Festival::title), Some("A"));
        assert!(response.track2_unpopular.is_none());
    }

    #[test]
    fn test_response_without_track1_is_malformed() {
        assert!(
            serde_json::from_str::<RecommendationResponse>(r#"{"track2_unpopular": []}"#).is_err()
        );
    }

    #[test]
    fn test_error_body_detail_is_optional() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"detail": "not found"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("not found"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"message": "x"}"#).unwrap();
        assert!(body.detail.is_none());
    }
}
