use ringstats::types::{DisplayMode, ScoringType, SessionKind, SessionRecord};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn test_scoring_type_wire_names() {
    assert_eq!(ScoringType::from_str("TENTH").unwrap(), ScoringType::Tenth);
    assert_eq!(ScoringType::Whole.to_string(), "WHOLE");
    assert!(ScoringType::from_str("tenths").is_err());
    assert!(ScoringType::Tenth.is_decimal());
    assert!(!ScoringType::Whole.is_decimal());
}

#[test]
fn test_session_kind_wire_names() {
    let names: Vec<String> = SessionKind::iter().map(|k| k.to_string()).collect();
    assert_eq!(names, vec!["TRAINING", "WETTKAMPF", "TROCKENTRAINING", "MENTAL"]);
    assert_eq!(SessionKind::from_str("WETTKAMPF").unwrap(), SessionKind::Competition);

    let shooting: Vec<SessionKind> = SessionKind::iter().filter(|k| k.is_shooting()).collect();
    assert_eq!(shooting, vec![SessionKind::Training, SessionKind::Competition]);
}

#[test]
fn test_display_mode_names() {
    assert_eq!(DisplayMode::from_str("projected").unwrap(), DisplayMode::Projected);
    assert_eq!(DisplayMode::PerShot.to_string(), "per_shot");
    assert_eq!(DisplayMode::default(), DisplayMode::PerShot);
}

#[test]
fn test_session_record_from_host_json() {
    let json = r#"{
        "id": "abc",
        "date": "2025-03-14T18:30:00",
        "kind": "WETTKAMPF",
        "discipline": {
            "id": "lg60",
            "name": "Luftgewehr 60",
            "seriesCount": 6,
            "shotsPerSeries": 10,
            "scoringType": "TENTH"
        },
        "series": [
            { "position": 1, "scoreTotal": 103.4, "isPractice": false, "shots": ["10.4", "9.9"] },
            { "position": 2, "isPractice": true }
        ]
    }"#;

    let session: SessionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(session.kind, SessionKind::Competition);
    assert_eq!(session.scoring_type(), ScoringType::Tenth);
    assert_eq!(session.discipline_id(), Some("lg60"));
    assert_eq!(session.series[0].score_total, Some(103.4));
    assert_eq!(session.series[0].shots.len(), 2);
    assert_eq!(session.series[1].score_total, None);
    assert_eq!(session.series[1].shot_count, 10);
    assert!(!session.series[1].is_scored());
    assert!(session.wellbeing.is_none());
}
