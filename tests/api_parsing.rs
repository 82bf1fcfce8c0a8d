use country_lookup::models::{Country, RawCountry};

#[test]
fn parse_sample_json() {
    let sample = r#"
    [
      {
        "name":{"common":"France","official":"French Republic"},
        "capital":["Paris"],
        "population":67000000,
        "flags":{"svg":"https://flagcdn.com/fr.svg","png":"https://flagcdn.com/w320/fr.png"},
        "languages":{"fra":"French"}
      }
    ]
    "#;

    let raw: Vec<RawCountry> = serde_json::from_str(sample).unwrap();
    assert_eq!(raw.len(), 1);

    let countries: Vec<Country> = raw.into_iter().map(Country::from).collect();
    let fr = &countries[0];
    assert_eq!(fr.common_name, "France");
    assert_eq!(fr.capital.as_deref(), Some("Paris"));
    assert_eq!(fr.population, 67_000_000);
    assert_eq!(fr.flag_url, "https://flagcdn.com/fr.svg");
    assert_eq!(fr.language_names(), "French");
}

#[test]
fn parse_territory_without_capital_or_languages() {
    let sample = r#"
    [
      {
        "name":{"common":"Bouvet Island"},
        "capital":[],
        "population":0,
        "flags":{"svg":"https://flagcdn.com/bv.svg"}
      }
    ]
    "#;

    let raw: Vec<RawCountry> = serde_json::from_str(sample).unwrap();
    let c = Country::from(raw.into_iter().next().unwrap());
    assert_eq!(c.capital, None);
    assert_eq!(c.population, 0);
    assert!(c.languages.is_empty());
}

#[test]
fn not_found_payload_is_not_a_country_array() {
    // The service answers misses with an error object, not an array.
    let sample = r#"{"status":404,"message":"Not Found"}"#;
    assert!(serde_json::from_str::<Vec<RawCountry>>(sample).is_err());
}

#[test]
fn multiple_languages_join_in_stable_order() {
    let sample = r#"
    [
      {
        "name":{"common":"Switzerland"},
        "capital":["Bern"],
        "population":8654622,
        "flags":{"svg":"ch.svg"},
        "languages":{"fra":"French","gsw":"Swiss German","ita":"Italian","roh":"Romansh"}
      }
    ]
    "#;

    let raw: Vec<RawCountry> = serde_json::from_str(sample).unwrap();
    let c = Country::from(raw.into_iter().next().unwrap());
    // BTreeMap orders by language code: fra, gsw, ita, roh
    assert_eq!(
        c.language_names(),
        "French, Swiss German, Italian, Romansh"
    );
}
