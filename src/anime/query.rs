use chrono::Datelike;
use serde::Serialize;
use serde_json::{Value, json};

pub const ANILIST_URL: &str = "https://graphql.anilist.co";

// https://anilist.github.io/ApiV2-GraphQL-Docs/
pub const QUERY: &str = r#"
query ($id: Int, $page: Int, $perPage: Int, $search: String, $averageScoreGreater: Int, $seasonYear: Int) {
  Page (page: $page, perPage: $perPage) {
    pageInfo {
      total
      currentPage
      lastPage
      hasNextPage
      perPage
    }
    media (id: $id, search: $search, averageScore_greater: $averageScoreGreater, type: ANIME, seasonYear: $seasonYear, sort: [SCORE_DESC]) {
      id
      type
      title {
        romaji
      }
      coverImage {
        extraLarge
        large
        medium
        color
      }
    }
  }
}
"#;

/// Variables of the recommendation query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAnimeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score_greater: Option<i64>,
    pub page: i64,
    pub per_page: i64,
    pub season_year: i32,
}

impl GetAnimeInput {
    /// Query for the current calendar year.
    pub fn new(average_score_greater: Option<i64>, page: i64, per_page: i64) -> Self {
        Self {
            average_score_greater,
            page,
            per_page,
            season_year: current_year(),
        }
    }

    pub fn with_season_year(mut self, year: i32) -> Self {
        self.season_year = year;
        self
    }

    /// JSON body of the POST request.
    pub fn request_body(&self) -> Value {
        json!({
            "query": QUERY,
            "variables": self,
        })
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
