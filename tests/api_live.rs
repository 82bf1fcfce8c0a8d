//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use country_lookup::Client;

#[test]
fn fetch_france() {
    let cli = Client::default();
    let countries = cli.fetch_countries("france").unwrap();
    assert!(!countries.is_empty());
    assert!(countries.iter().any(|c| c.common_name == "France"));
    let fr = countries
        .iter()
        .find(|c| c.common_name == "France")
        .unwrap();
    assert_eq!(fr.capital.as_deref(), Some("Paris"));
    assert!(fr.population > 0);
    assert!(!fr.flag_url.is_empty());
    assert!(fr.languages.values().any(|l| l == "French"));
}

#[test]
fn fetch_gibberish_fails_as_service_error() {
    let cli = Client::default();
    // The service answers misses with a 404 + error object, which must
    // surface as a failure, not an empty list.
    let err = cli.fetch_countries("zzzzzzzz").unwrap_err();
    assert!(matches!(err, country_lookup::FetchError::Service(_)));
}
