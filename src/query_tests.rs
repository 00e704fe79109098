//! Tests for query construction

use super::*;

// ── Format ───────────────────────────────────────────────────────────

#[test]
fn test_format_from_name_is_case_insensitive() {
    assert_eq!("Pauper".parse::<Format>().unwrap(), Format::Pauper);
    assert_eq!(" modern ".parse::<Format>().unwrap(), Format::Modern);
    assert_eq!("PENNY".parse::<Format>().unwrap(), Format::Penny);
}

#[test]
fn test_format_unknown_name_rejected() {
    match "frontier".parse::<Format>() {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("frontier")),
        other => panic!("Expected InvalidArgument, got: {other:?}"),
    }
}

#[test]
fn test_format_menu_numbers() {
    assert_eq!(Format::from_menu_number(1).unwrap(), Format::Standard);
    assert_eq!(Format::from_menu_number(6).unwrap(), Format::Pauper);
    assert_eq!(Format::from_menu_number(10).unwrap(), Format::Penny);
    assert!(Format::from_menu_number(0).is_err());
    assert!(Format::from_menu_number(11).is_err());
    for format in Format::ALL {
        assert_eq!(Format::from_menu_number(format.menu_number()).unwrap(), format);
    }
}

#[test]
fn test_format_parse_selection_accepts_number_or_name() {
    assert_eq!(Format::parse_selection("3").unwrap(), Format::Legacy);
    assert_eq!(Format::parse_selection("vintage").unwrap(), Format::Vintage);
    assert!(Format::parse_selection("42").is_err());
    assert!(Format::parse_selection("").is_err());
}

#[test]
fn test_format_default_is_pauper() {
    assert_eq!(Format::default(), Format::Pauper);
}

// ── ColorFilter ──────────────────────────────────────────────────────

#[test]
fn test_color_filter_accepts_subset() {
    let colors = ColorFilter::parse("wu").unwrap();
    assert_eq!(colors.as_string(), "wu");
}

#[test]
fn test_color_filter_rejects_unknown_letter() {
    match ColorFilter::parse("wx") {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains('x')),
        other => panic!("Expected InvalidArgument, got: {other:?}"),
    }
}

#[test]
fn test_color_filter_rejects_empty() {
    assert!(matches!(
        ColorFilter::parse("   "),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_color_filter_canonical_order_and_dedup() {
    assert_eq!(ColorFilter::parse("RU").unwrap().as_string(), "ur");
    assert_eq!(ColorFilter::parse("ggwg").unwrap().as_string(), "wg");
    assert_eq!(ColorFilter::parse("gbruw").unwrap().as_string(), "wubrg");
}

// ── SearchQuery ──────────────────────────────────────────────────────

#[test]
fn test_query_string_minimal() {
    let query = SearchQuery::new("neo", Format::Pauper).unwrap();
    assert_eq!(query.to_query_string(), "f:pauper e:neo");
}

#[test]
fn test_query_string_with_all_filters() {
    let query = SearchQuery::new("NEO", Format::Pauper)
        .unwrap()
        .with_colors(Some(ColorFilter::parse("ur").unwrap()))
        .with_common_only(true);
    assert_eq!(query.to_query_string(), "f:pauper e:neo c:ur r:common");
}

#[test]
fn test_query_string_has_no_duplicate_clauses() {
    let query = SearchQuery::new("dmu", Format::Modern)
        .unwrap()
        .with_colors(Some(ColorFilter::parse("bb").unwrap()))
        .with_common_only(true);
    let rendered = query.to_query_string();
    let tokens: Vec<&str> = rendered.split(' ').collect();
    assert_eq!(tokens, vec!["f:modern", "e:dmu", "c:b", "r:common"]);

    let mut keys: Vec<&str> = tokens.iter().map(|t| t.split(':').next().unwrap()).collect();
    keys.dedup();
    assert_eq!(keys.len(), tokens.len());
}

#[test]
fn test_query_string_only_supplied_filters() {
    let query = SearchQuery::new("mh2", Format::Legacy)
        .unwrap()
        .with_common_only(true);
    assert_eq!(query.to_query_string(), "f:legacy e:mh2 r:common");
}

#[test]
fn test_set_code_validation() {
    assert!(matches!(
        SearchQuery::new("", Format::Pauper),
        Err(Error::InvalidArgument(_))
    ));
    assert!(SearchQuery::new("ne o", Format::Pauper).is_err());
    assert!(SearchQuery::new("e:neo", Format::Pauper).is_err());
    assert_eq!(validate_set_code("  MH3 ").unwrap(), "mh3");
}

#[test]
fn test_api_url_is_encoded() {
    let query = SearchQuery::new("neo", Format::Pauper).unwrap();
    let options = SearchOptions {
        order: SearchOrder::Set,
        unique: Some(UniqueMode::Prints),
    };
    assert_eq!(
        query.api_url("https://api.scryfall.com/", &options),
        "https://api.scryfall.com/cards/search?q=f%3Apauper%20e%3Aneo&order=set&unique=prints"
    );
}

#[test]
fn test_search_options_params() {
    let defaults = SearchOptions::default();
    assert_eq!(
        defaults.params(),
        vec![("order".to_string(), "name".to_string())]
    );

    let prints = SearchOptions {
        order: SearchOrder::Set,
        unique: Some(UniqueMode::Prints),
    };
    assert_eq!(
        prints.params(),
        vec![
            ("order".to_string(), "set".to_string()),
            ("unique".to_string(), "prints".to_string()),
        ]
    );
}
