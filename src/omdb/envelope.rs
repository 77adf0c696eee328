//! JSON envelope of the search endpoint.
//!
//! ```json
//! { "Response": "True", "totalResults": "512",
//!   "Search": [ { "Title": "..", "Year": "..", "Type": "..", "Poster": "..", "imdbID": ".." } ] }
//! { "Response": "False", "Error": "Movie not found!" }
//! ```

use crate::model::{FetchError, ImdbId, MovieSummary, Poster, SearchPage};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response", default)]
    response: Option<String>,
    #[serde(rename = "Search", default)]
    search: Option<Vec<RawMovie>>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMovie {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(rename = "Poster", default)]
    poster: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: String,
}

impl TryFrom<RawMovie> for MovieSummary {
    type Error = FetchError;

    fn try_from(raw: RawMovie) -> Result<Self, Self::Error> {
        let imdb_id = ImdbId::new(raw.imdb_id)
            .map_err(|e| FetchError::Transport(format!("malformed search record: {e}")))?;
        Ok(MovieSummary::new(
            imdb_id,
            raw.title,
            raw.year,
            raw.kind,
            Poster::from_raw(raw.poster),
        ))
    }
}

/// Parse a search response body.
///
/// Only `"Response": "True"` is success; any other or missing value is an
/// upstream rejection carrying the `Error` text.
///
/// # Errors
/// [`FetchError::Transport`] for bodies that are not the expected JSON.
pub fn parse_search_response(body: &str) -> Result<SearchPage, FetchError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)
        .map_err(|e| FetchError::Transport(format!("invalid search response: {e}")))?;

    if envelope.response.as_deref() != Some("True") {
        return Err(FetchError::upstream(envelope.error));
    }

    let records = envelope.search.ok_or_else(|| {
        FetchError::Transport("successful search response without results array".to_string())
    })?;

    let movies = records
        .into_iter()
        .map(MovieSummary::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let total_results = envelope
        .total_results
        .and_then(|raw| raw.trim().parse::<u32>().ok());

    Ok(SearchPage {
        movies,
        total_results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TRANSPORT_ERROR_MESSAGE, UPSTREAM_FALLBACK_MESSAGE};

    const BATMAN_PAGE: &str = r#"{
        "Search": [
            {"Title":"Batman Begins","Year":"2005","imdbID":"tt0372784","Type":"movie","Poster":"https://m.media-amazon.com/images/M/bb.jpg"},
            {"Title":"Batman: The Animated Series","Year":"1992–1995","imdbID":"tt0103359","Type":"series","Poster":"N/A"}
        ],
        "totalResults":"512",
        "Response":"True"
    }"#;

    #[test]
    fn parses_successful_page_in_order() {
        let page = parse_search_response(BATMAN_PAGE).unwrap();

        assert_eq!(page.movies.len(), 2);
        assert_eq!(page.movies[0].title(), "Batman Begins");
        assert_eq!(page.movies[0].imdb_id().as_str(), "tt0372784");
        assert_eq!(page.movies[0].kind(), "movie");
        assert_eq!(
            page.movies[0].poster().url(),
            Some("https://m.media-amazon.com/images/M/bb.jpg")
        );
        assert_eq!(page.movies[1].year(), "1992–1995");
        assert_eq!(page.movies[1].poster(), &Poster::NotAvailable);
        assert_eq!(page.total_results, Some(512));
    }

    #[test]
    fn false_response_surfaces_upstream_error() {
        let err =
            parse_search_response(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap_err();
        assert_eq!(err, FetchError::Upstream("Movie not found!".to_string()));
    }

    #[test]
    fn false_response_without_error_uses_fallback() {
        let err = parse_search_response(r#"{"Response":"False"}"#).unwrap_err();
        assert_eq!(err.user_message(), UPSTREAM_FALLBACK_MESSAGE);
    }

    #[test]
    fn missing_response_field_is_upstream_rejection() {
        let err = parse_search_response(r#"{"Error":"Invalid API key!"}"#).unwrap_err();
        assert_eq!(err, FetchError::Upstream("Invalid API key!".to_string()));
    }

    #[test]
    fn non_json_body_is_transport_error() {
        let err = parse_search_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(err.user_message(), TRANSPORT_ERROR_MESSAGE);
    }

    #[test]
    fn success_without_results_array_is_transport_error() {
        let err = parse_search_response(r#"{"Response":"True"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn record_without_imdb_id_is_transport_error() {
        let body = r#"{"Response":"True","Search":[{"Title":"Nameless"}]}"#;
        assert!(matches!(
            parse_search_response(body),
            Err(FetchError::Transport(_))
        ));
    }

    #[test]
    fn record_with_blank_imdb_id_is_transport_error() {
        let body = r#"{"Response":"True","Search":[{"Title":"Blank","imdbID":""}]}"#;
        assert!(matches!(
            parse_search_response(body),
            Err(FetchError::Transport(_))
        ));
    }

    #[test]
    fn missing_optional_fields_default() {
        let body = r#"{"Response":"True","Search":[{"imdbID":"tt1"}]}"#;
        let page = parse_search_response(body).unwrap();
        let movie = &page.movies[0];
        assert_eq!(movie.title(), "");
        assert_eq!(movie.year(), "");
        assert_eq!(movie.poster(), &Poster::NotAvailable);
        assert_eq!(page.total_results, None);
    }

    #[test]
    fn unparseable_total_results_is_ignored() {
        let body = r#"{"Response":"True","totalResults":"lots","Search":[{"imdbID":"tt1"}]}"#;
        assert_eq!(parse_search_response(body).unwrap().total_results, None);
    }
}
