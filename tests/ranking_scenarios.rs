//! End-to-end ranking scenarios over realistic catalog rows.

use cinerank::ranking::RankingEngine;
use cinerank::record::Record;
use cinerank::response::parse_records;
use serde_json::json;

#[test]
fn exact_title_outranks_longer_variant() {
    let records = parse_records(&json!([
        {"titre": "The Matrix Reloaded", "genre": "Science-fiction"},
        {"titre": "Matrix", "genre": "Science-fiction"}
    ]))
    .unwrap();

    let ranked = RankingEngine::new().rank(records, "Matrix");

    assert_eq!(
        ranked[0].record.get_field("titre").unwrap().as_text(),
        Some("Matrix")
    );
    assert_eq!(ranked[0].score(), 10.0);
    assert!(ranked[1].score() < 10.0);
}

#[test]
fn financing_bonus_beats_slightly_closer_title() {
    let records = parse_records(&json!([
        {"titre": "Amélie", "plan_financement": "x.pdf"},
        {"titre": "Amelie"}
    ]))
    .unwrap();

    let ranked = RankingEngine::new().rank(records, "Amelie");

    // 5/6 * 10 + 5 = 13.33.. vs 10.0 for the accent-free exact match.
    assert!(ranked[0].record.has_field("plan_financement"));
    assert!((ranked[0].score() - (5.0 / 6.0 * 10.0 + 5.0)).abs() < 1e-9);
    assert_eq!(ranked[1].score(), 10.0);
}

#[test]
fn backend_order_survives_ties() {
    let rows = json!([
        {"titre": "None", "dateimmatriculation": "2024-03-01"},
        {"titre": "None", "dateimmatriculation": "2023-07-12"},
        {"titre": "None", "dateimmatriculation": "2021-01-30"}
    ]);
    let records = parse_records(&rows).unwrap();

    // Placeholder titles resolve to nothing, so every score ties at zero
    // and the backend's recency order must survive.
    let ranked = RankingEngine::new().rank(records, "Matrix");
    let dates: Vec<_> = ranked
        .iter()
        .map(|r| {
            r.record
                .get_field("dateimmatriculation")
                .unwrap()
                .as_text()
                .unwrap()
        })
        .collect();

    assert_eq!(dates, vec!["2024-03-01", "2023-07-12", "2021-01-30"]);
}

#[test]
fn scores_are_recomputed_per_invocation() {
    let engine = RankingEngine::new();
    let records: Vec<Record> = parse_records(&json!([
        {"titre": "Matrix"},
        {"titre": "Amélie"}
    ]))
    .unwrap();

    let by_matrix = engine.rank(records.clone(), "Matrix");
    let by_amelie = engine.rank(records, "Amélie");

    assert_eq!(
        by_matrix[0].record.get_field("titre").unwrap().as_text(),
        Some("Matrix")
    );
    assert_eq!(
        by_amelie[0].record.get_field("titre").unwrap().as_text(),
        Some("Amélie")
    );
    assert_eq!(by_matrix[0].score(), 10.0);
    assert_eq!(by_amelie[0].score(), 10.0);
}

#[test]
fn empty_record_list_ranks_to_empty() {
    let ranked = RankingEngine::new().rank(Vec::new(), "Matrix");
    assert!(ranked.is_empty());
}
