//! Translation of search arguments into a SearXNG request URL.

use reqwest::Url;

use super::format::OutputFormat;
use super::params::SearchParams;

/// Path of the SearXNG search endpoint, relative to the instance root.
const SEARCH_SEGMENT: &str = "search";

/// Build `<base>/search?...` for one call.
///
/// The base path is kept as a prefix (`https://host/searx` and
/// `https://host/searx/` both give `https://host/searx/search`). Query and
/// fragment of the base are dropped.
pub fn build_search_url(base: &Url, params: &SearchParams, format: OutputFormat) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    // A validated base can always be a base, so segments are available.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(SEARCH_SEGMENT);
    }

    {
        let mut query = url.query_pairs_mut();
        if let Some(value) = format.query_value() {
            query.append_pair("format", value);
        }
        for (key, value) in params.query_pairs() {
            query.append_pair(key, &value);
        }
    }

    url
}
