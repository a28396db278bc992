// Tests for the page-parsing half of the metadata resolver; no network
// involved, the fetch path is exercised manually.

use movieshelf::resolver::{MetadataError, MetadataResolver};

const INCEPTION_URL: &str = "https://www.themoviedb.org/movie/27205-inception";

fn resolver() -> MetadataResolver {
    MetadataResolver::new().unwrap()
}

#[test]
fn test_parses_title_and_catalog_id() {
    let body = "<html><body><h2>Inception</h2></body></html>";
    let entry = resolver().parse_page(INCEPTION_URL, body).unwrap();

    assert_eq!(entry.title, "Inception");
    assert_eq!(entry.catalog_id, "27205");
    assert_eq!(entry.folder_token(), "Inception [tmdbid-27205]");
}

#[test]
fn test_first_heading_wins() {
    let body = "<html><body><h2>Dune</h2><h2>Related Movies</h2></body></html>";
    let entry = resolver()
        .parse_page("https://www.themoviedb.org/movie/438631-dune-part-one", body)
        .unwrap();

    assert_eq!(entry.folder_token(), "Dune [tmdbid-438631]");
}

#[test]
fn test_title_is_sanitized() {
    let body = "<html><body><h2>Amélie: Special?</h2></body></html>";
    let entry = resolver()
        .parse_page("https://www.themoviedb.org/movie/194-amelie", body)
        .unwrap();

    assert_eq!(entry.title, "Amelie Special");
}

#[test]
fn test_missing_heading_is_typed() {
    let body = "<html><body><p>nothing here</p></body></html>";
    let err = resolver().parse_page(INCEPTION_URL, body).unwrap_err();

    assert!(matches!(err, MetadataError::MissingHeading));
}

#[test]
fn test_title_empty_after_sanitization_is_typed() {
    let body = "<html><body><h2>???</h2></body></html>";
    let err = resolver().parse_page(INCEPTION_URL, body).unwrap_err();

    assert!(matches!(err, MetadataError::EmptyTitle));
}

#[test]
fn test_url_without_catalog_id_is_typed() {
    let body = "<html><body><h2>Inception</h2></body></html>";
    let err = resolver()
        .parse_page("https://www.themoviedb.org/tv/1399-game-of-thrones", body)
        .unwrap_err();

    assert!(matches!(err, MetadataError::MissingCatalogId(_)));
}

#[test]
fn test_catalog_id_extraction() {
    let resolver = resolver();

    assert_eq!(
        resolver.catalog_id_from_url("https://www.themoviedb.org/movie/27205-inception"),
        Some("27205".to_string())
    );
    // The id must be followed by the slug dash
    assert_eq!(
        resolver.catalog_id_from_url("https://www.themoviedb.org/movie/27205"),
        None
    );
    assert_eq!(resolver.catalog_id_from_url("https://example.com/"), None);
}
