//! AniList client: one GraphQL request, a strict shape check, and the
//! mapping from raw media entries to [`DisplayRecord`]s.

pub mod color;
pub mod error;
pub mod normalize;
pub mod query;
pub mod schema;
pub mod transport;

pub use error::{FetchError, FetchResult};
pub use normalize::DisplayRecord;
pub use query::{ANILIST_URL, GetAnimeInput};
pub use schema::PageInfo;
pub use transport::{FixtureTransport, HttpTransport, Transport, TransportResponse};

use log::{debug, info};

/// Normalized result of one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub page_info: PageInfo,
    pub records: Vec<DisplayRecord>,
}

/// Fetch the top-scoring titles of `input.season_year`.
///
/// Exactly one call goes through `transport`. A non-success status is a
/// transport failure; a body with the wrong shape is a validation failure.
pub async fn fetch_anime(
    transport: &dyn Transport,
    url: &str,
    input: &GetAnimeInput,
) -> FetchResult<Recommendations> {
    debug!(
        "fetch_anime: POST {} via {} (variables={:?})",
        url,
        transport.name(),
        input
    );

    let response = transport.post_json(url, &input.request_body()).await?;
    if !response.is_success() {
        return Err(FetchError::status(response.status, &response.body));
    }

    let page = schema::parse_page(&response.body)?;
    info!(
        "fetch_anime: {} media (page {}/{}, total {}, has_next={})",
        page.media.len(),
        page.page_info.current_page,
        page.page_info.last_page,
        page.page_info.total,
        page.page_info.has_next_page
    );

    Ok(Recommendations {
        page_info: page.page_info,
        records: normalize::normalize(page.media),
    })
}
