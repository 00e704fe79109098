//! Tests for search response decoding

use super::{CardRecord, ScryfallError, SearchPage};

#[test]
fn test_card_record_deserialize_full() {
    let card_json = r#"{
        "object": "card",
        "name": "Lightning Bolt",
        "set": "clu",
        "collector_number": "141",
        "rarity": "uncommon",
        "colors": ["R"],
        "color_identity": ["R"],
        "type_line": "Instant"
    }"#;

    let card: CardRecord = serde_json::from_str(card_json).unwrap();
    assert_eq!(card.name, "Lightning Bolt");
    assert_eq!(card.set, "clu");
    assert_eq!(card.collector_number, "141");
    assert_eq!(card.rarity, "uncommon");
    assert_eq!(card.colors.as_deref(), Some(&["R".to_string()][..]));
    assert_eq!(card.color_identity, vec!["R"]);
    assert_eq!(card.raw()["type_line"], "Instant");
    assert_eq!(card.set_upper(), "CLU");
}

#[test]
fn test_card_record_missing_colors_on_double_faced() {
    let card_json = r#"{
        "name": "Delver of Secrets // Insectile Aberration",
        "set": "isd",
        "collector_number": "51",
        "rarity": "common",
        "color_identity": ["U"],
        "card_faces": [{"name": "Delver of Secrets"}, {"name": "Insectile Aberration"}]
    }"#;

    let card: CardRecord = serde_json::from_str(card_json).unwrap();
    assert!(card.colors.is_none());
    assert_eq!(card.color_identity, vec!["U"]);
    assert!(card.raw().get("card_faces").is_some());
}

#[test]
fn test_card_record_missing_required_field_fails() {
    let card_json = r#"{
        "name": "Lightning Bolt",
        "set": "clu",
        "rarity": "uncommon"
    }"#;

    let err = serde_json::from_str::<CardRecord>(card_json).unwrap_err();
    assert!(err.to_string().contains("collector_number"));
}

#[test]
fn test_card_record_keeps_raw_fields_when_serialized() {
    let card_json = serde_json::json!({
        "name": "Counterspell",
        "set": "mh2",
        "collector_number": "267",
        "rarity": "uncommon",
        "colors": ["U"],
        "color_identity": ["U"],
        "mana_cost": "{U}{U}",
        "prices": { "eur": "0.50" }
    });

    let card: CardRecord = serde_json::from_value(card_json.clone()).unwrap();
    let back = serde_json::to_value(&card).unwrap();
    assert_eq!(back, card_json);
}

#[test]
fn test_search_page_defaults() {
    let page: SearchPage = serde_json::from_str(r#"{"object": "list", "data": []}"#).unwrap();
    assert!(page.data.is_empty());
    assert!(!page.has_more);
    assert!(page.next_page.is_none());
    assert!(page.total_cards.is_none());
}

#[test]
fn test_search_page_with_next_page() {
    let page: SearchPage = serde_json::from_str(
        r#"{
            "object": "list",
            "total_cards": 250,
            "has_more": true,
            "next_page": "https://api.scryfall.com/cards/search?page=2&q=e%3Aneo",
            "data": []
        }"#,
    )
    .unwrap();
    assert!(page.has_more);
    assert_eq!(page.total_cards, Some(250));
    assert!(page.next_page.unwrap().contains("page=2"));
}

#[test]
fn test_scryfall_error_body() {
    let err: ScryfallError = serde_json::from_str(
        r#"{"object": "error", "status": 404, "code": "not_found", "details": "Your query didn't match any cards."}"#,
    )
    .unwrap();
    assert_eq!(err.status, 404);
    assert_eq!(err.code, "not_found");
    assert!(err.details.contains("didn't match"));
}

#[test]
fn test_card_record_serializes_exactly_as_received() {
    // null colors and missing color_identity must not be normalised
    let card_json = serde_json::json!({
        "name": "Fable of the Mirror-Breaker // Reflection of Kiki-Jiki",
        "set": "neo",
        "collector_number": "141",
        "rarity": "rare",
        "colors": null,
        "layout": "transform"
    });

    let card: CardRecord = serde_json::from_value(card_json.clone()).unwrap();
    assert!(card.colors.is_none());
    assert!(card.color_identity.is_empty());

    let back = serde_json::to_value(&card).unwrap();
    assert_eq!(back, card_json);
    assert!(back.get("color_identity").is_none());
    assert!(back["colors"].is_null());
}
