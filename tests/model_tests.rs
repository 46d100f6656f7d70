// tests/model_tests.rs - Wire-shape tests for the shared data models
//
// These run without any UI features: the model layer compiles for every
// target and carries the coercion rules the forms rely on.

use mlbb_store::web_app::model::{
    Account, AccountDraft, AccountFilters, AccountFormInput, Order, OrderRequest, Rank,
};

#[test]
fn test_rank_labels_round_trip() {
    for rank in Rank::ALL {
        let label = rank.to_string();
        assert_eq!(Rank::parse(&label), Some(rank), "label {}", label);

        let json = serde_json::to_string(&rank).unwrap();
        assert_eq!(json, format!("\"{}\"", label));
    }
}

#[test]
fn test_rank_rejects_unknown_labels() {
    assert_eq!(Rank::parse("mythic"), None); // case-sensitive wire labels
    assert_eq!(Rank::parse("Immortal"), None);
    assert!(serde_json::from_str::<Rank>("\"Immortal\"").is_err());
}

#[test]
fn test_account_full_round_trip() {
    let account = Account {
        id: 12,
        title: "Akun Mythic 120 hero".to_string(),
        description: Some("Full emblem".to_string()),
        rank: Rank::Mythic,
        price: 1250000.0,
        hero_count: Some(120),
        skin_count: Some(88),
        login_method: "Moonton".to_string(),
        email_access: true,
        images: vec!["cover.png".to_string()],
    };

    let json = serde_json::to_string(&account).unwrap();
    let back: Account = serde_json::from_str(&json).unwrap();
    assert_eq!(back, account);
}

#[test]
fn test_account_minimal_wire_shape() {
    // The backend may omit every optional field
    let json = r#"{"id":1,"title":"Akun","rank":"Epic","price":50000}"#;
    let account: Account = serde_json::from_str(json).unwrap();

    assert_eq!(account.rank, Rank::Epic);
    assert_eq!(account.description, None);
    assert_eq!(account.hero_count, None);
    assert_eq!(account.skin_count, None);
    assert!(account.login_method.is_empty());
    assert!(!account.email_access);
    assert!(account.images.is_empty());
}

#[test]
fn test_draft_body_for_minimal_form() {
    // Title and price filled, counts left blank
    let input = AccountFormInput {
        title: "X".to_string(),
        price: "50000".to_string(),
        ..AccountFormInput::default()
    };
    let draft = input.to_draft();

    let body: serde_json::Value = serde_json::to_value(&draft).unwrap();
    assert_eq!(body["title"], "X");
    assert_eq!(body["price"], 50000.0);
    assert_eq!(body["rank"], "Epic");
    assert_eq!(body["login_method"], "Moonton");
    assert_eq!(body["email_access"], false);
    assert_eq!(body["images"], serde_json::json!([]));

    // Blank counts are absent from the body, not null
    assert!(body.get("hero_count").is_none());
    assert!(body.get("skin_count").is_none());
}

#[test]
fn test_draft_images_coercion() {
    let input = AccountFormInput {
        images: "a.png, b.png".to_string(),
        ..AccountFormInput::default()
    };
    assert_eq!(input.to_draft().images, vec!["a.png", "b.png"]);

    let spaced = AccountFormInput {
        images: "  c.png ,d.png  ".to_string(),
        ..AccountFormInput::default()
    };
    assert_eq!(spaced.to_draft().images, vec!["c.png", "d.png"]);

    let blank = AccountFormInput {
        images: "   ".to_string(),
        ..AccountFormInput::default()
    };
    assert!(blank.to_draft().images.is_empty());
}

#[test]
fn test_draft_price_coercion() {
    let blank = AccountFormInput::default();
    assert_eq!(blank.to_draft().price, 0.0);

    let fractional = AccountFormInput {
        price: "49999.5".to_string(),
        ..AccountFormInput::default()
    };
    assert_eq!(fractional.to_draft().price, 49999.5);
}

#[test]
fn test_filters_query_pairs_partial_set() {
    // {q:"", rank:"Mythic", min_price:"", max_price:"100000"}
    let filters = AccountFilters {
        q: String::new(),
        rank: "Mythic".to_string(),
        min_price: String::new(),
        max_price: "100000".to_string(),
    };

    let pairs = filters.query_pairs();
    assert_eq!(
        pairs,
        vec![("rank", "Mythic".to_string()), ("max_price", "100000".to_string())]
    );
}

#[test]
fn test_filters_preserve_entered_text() {
    // Values are passed through unchanged, including whitespace
    let filters = AccountFilters {
        q: " sultan ".to_string(),
        ..AccountFilters::default()
    };
    assert_eq!(filters.query_pairs(), vec![("q", " sultan ".to_string())]);
}

#[test]
fn test_order_request_body() {
    let order = OrderRequest {
        account_id: 7,
        buyer_name: "Budi".to_string(),
        whatsapp: "081234567890".to_string(),
    };

    let body: serde_json::Value = serde_json::to_value(&order).unwrap();
    assert_eq!(body["account_id"], 7);
    assert_eq!(body["buyer_name"], "Budi");
    assert_eq!(body["whatsapp"], "081234567890");
}

#[test]
fn test_order_response_shapes() {
    let bare: Order = serde_json::from_str(r#"{"id":3}"#).unwrap();
    assert_eq!(bare.id, 3);

    let echoed: Order = serde_json::from_str(
        r#"{"id":3,"account_id":7,"buyer_name":"Budi","whatsapp":"0812","status":"new"}"#,
    )
    .unwrap();
    assert_eq!(echoed.account_id, 7);
    assert_eq!(echoed.buyer_name, "Budi");
}
