//! Shape of the AniList `Page` response.
//!
//! The body is checked level by level so a mismatch reports the JSON path
//! where it happened (`data.Page.media[3]`) instead of only a line/column.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::anime::error::{FetchError, FetchResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: i64,
    pub current_page: i64,
    pub last_page: i64,
    pub has_next_page: bool,
    pub per_page: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaTitle {
    pub romaji: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    pub extra_large: String,
    pub large: String,
    pub medium: String,
    pub color: Option<String>,
}

/// One raw media entry as returned by AniList.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    pub title: MediaTitle,
    #[serde(rename = "type")]
    pub media_type: String,
    pub cover_image: CoverImage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub page_info: PageInfo,
    pub media: Vec<Media>,
}

/// Parse and validate a raw response body.
pub fn parse_page(body: &str) -> FetchResult<Page> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| FetchError::validation("$", e))?;

    let data = object_field(&root, "data", "data")?;
    let page = object_field(data, "Page", "data.Page")?;

    let page_info = typed_field::<PageInfo>(page, "pageInfo", "data.Page.pageInfo")?;

    let media_path = "data.Page.media";
    let media = match page.get("media") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode(item, &format!("{media_path}[{i}]")))
            .collect::<FetchResult<Vec<Media>>>()?,
        Some(other) => {
            return Err(FetchError::validation(
                media_path,
                format!("expected an array, found {}", kind(other)),
            ));
        }
        None => return Err(FetchError::validation(media_path, "missing field")),
    };

    Ok(Page { page_info, media })
}

fn object_field<'a>(value: &'a Value, key: &str, path: &str) -> FetchResult<&'a Value> {
    match value.get(key) {
        Some(v @ Value::Object(_)) => Ok(v),
        Some(other) => Err(FetchError::validation(
            path,
            format!("expected an object, found {}", kind(other)),
        )),
        None => Err(FetchError::validation(path, "missing field")),
    }
}

fn typed_field<T: DeserializeOwned>(value: &Value, key: &str, path: &str) -> FetchResult<T> {
    let field = value
        .get(key)
        .ok_or_else(|| FetchError::validation(path, "missing field"))?;
    decode(field, path)
}

fn decode<T: DeserializeOwned>(value: &Value, path: &str) -> FetchResult<T> {
    T::deserialize(value).map_err(|e| FetchError::validation(path, e))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn media(id: i64, color: Value) -> Value {
        json!({
            "id": id,
            "type": "ANIME",
            "title": { "romaji": format!("Title {id}") },
            "coverImage": {
                "extraLarge": format!("https://s4.anilist.co/xl/{id}.jpg"),
                "large": format!("https://s4.anilist.co/l/{id}.jpg"),
                "medium": format!("https://s4.anilist.co/m/{id}.jpg"),
                "color": color,
            }
        })
    }

    fn page(media: Vec<Value>) -> Value {
        json!({
            "data": { "Page": {
                "pageInfo": {
                    "total": 100, "currentPage": 1, "lastPage": 8,
                    "hasNextPage": true, "perPage": 13
                },
                "media": media,
            }}
        })
    }

    fn path_of(err: FetchError) -> String {
        match err {
            FetchError::Validation { path, .. } => path,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn parses_valid_page() {
        let body = page(vec![media(1, json!("#e4a15d")), media(2, Value::Null)]).to_string();
        let parsed = parse_page(&body).unwrap();

        assert_eq!(parsed.page_info.per_page, 13);
        assert!(parsed.page_info.has_next_page);
        assert_eq!(parsed.media.len(), 2);
        assert_eq!(parsed.media[0].cover_image.color.as_deref(), Some("#e4a15d"));
        assert_eq!(parsed.media[1].cover_image.color, None);
        assert_eq!(parsed.media[1].media_type, "ANIME");
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        assert_eq!(path_of(parse_page("{not json").unwrap_err()), "$");
    }

    #[test]
    fn missing_page_info_reports_its_path() {
        let mut body = page(vec![media(1, Value::Null)]);
        body["data"]["Page"]
            .as_object_mut()
            .unwrap()
            .remove("pageInfo");
        let err = parse_page(&body.to_string()).unwrap_err();
        assert_eq!(path_of(err), "data.Page.pageInfo");
    }

    #[test]
    fn mistyped_media_entry_reports_its_index() {
        let mut bad = media(2, Value::Null);
        bad["id"] = json!("two");
        let body = page(vec![media(1, Value::Null), bad]).to_string();
        assert_eq!(path_of(parse_page(&body).unwrap_err()), "data.Page.media[1]");
    }

    #[test]
    fn missing_cover_resolution_is_rejected() {
        let mut bad = media(1, Value::Null);
        bad["coverImage"]
            .as_object_mut()
            .unwrap()
            .remove("extraLarge");
        let err = parse_page(&page(vec![bad]).to_string()).unwrap_err();
        match err {
            FetchError::Validation { path, message } => {
                assert_eq!(path, "data.Page.media[0]");
                assert!(message.contains("extraLarge"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn null_data_is_rejected() {
        let err = parse_page(r#"{"data": null}"#).unwrap_err();
        assert_eq!(path_of(err), "data");
    }
}
