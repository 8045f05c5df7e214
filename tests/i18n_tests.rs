use ocfmt::i18n::{Catalog, Key, Translate};
use ocfmt::traffic::{TrafficType, label_for_wire};

#[test]
fn test_catalog_english_defaults() {
    let catalog = Catalog::new();
    assert_eq!(catalog.translate(Key::Today), "Today");
    assert_eq!(catalog.translate(Key::Yesterday), "Yesterday");
    assert_eq!(catalog.translate(Key::Tomorrow), "Tomorrow");
    assert_eq!(catalog.translate(Key::DaysAgo), "days ago");
    assert_eq!(catalog.translate(Key::Days), "days");
}

#[test]
fn test_catalog_override_wins() {
    let mut catalog = Catalog::new();
    catalog.set(Key::Today, "امروز");
    assert_eq!(catalog.translate(Key::Today), "امروز");
    assert_eq!(catalog.translate(Key::Tomorrow), "Tomorrow");
}

#[test]
fn test_key_display_uses_wire_name() {
    assert_eq!(Key::DaysAgo.to_string(), "DAYS_AGO");
    assert_eq!(Key::MonthlyTransmit.to_string(), "MONTHLY_TRANSMIT");
}

#[test]
fn test_traffic_labels() {
    let catalog = Catalog::new();
    assert_eq!(TrafficType::Free.label(&catalog), "Free");
    assert_eq!(TrafficType::MonthlyTransmit.label(&catalog), "Monthly Transmit");
    assert_eq!(TrafficType::TotallyReceive.label(&catalog), "Totally Receive");
}

#[test]
fn test_traffic_label_uses_translator() {
    let translate = |key: Key| format!("<{key}>");
    assert_eq!(
        TrafficType::MonthlyReceive.label(&translate),
        "<MONTHLY_RECEIVE>"
    );
}

#[test]
fn test_traffic_wire_names_parse() {
    for tt in TrafficType::ALL {
        assert_eq!(tt.wire_name().parse::<TrafficType>(), Ok(tt));
    }
    assert!("monthly".parse::<TrafficType>().is_err());
}

#[test]
fn test_unknown_traffic_passes_through() {
    let catalog = Catalog::new();
    assert_eq!(label_for_wire("TotallyTransmit", &catalog), "Totally Transmit");
    assert_eq!(label_for_wire("Unlimited", &catalog), "Unlimited");
}

#[test]
fn test_traffic_serde_matches_backend() {
    let tt: TrafficType = serde_json::from_str("\"MonthlyTransmit\"").unwrap();
    assert_eq!(tt, TrafficType::MonthlyTransmit);
    assert_eq!(
        serde_json::to_string(&TrafficType::Free).unwrap(),
        "\"Free\""
    );
}
