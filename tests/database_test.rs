// ABOUTME: Integration tests for SQLite persistence of spots and sessions
// ABOUTME: Uses in-memory databases; covers seeding, lookups, notes updates and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use surfcast::database::Database;
use surfcast::errors::ErrorCode;
use surfcast::intelligence::spot_performance;
use surfcast::models::{
    ConditionSample, DerivedFeatures, Season, SpotCategory, SurfSession, SurfSpot, TimeOfDay,
};

async fn fresh_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

fn new_spot(name: &str) -> SurfSpot {
    SurfSpot {
        id: 0,
        name: name.to_owned(),
        latitude: 58.75,
        longitude: 5.5,
        orientation: 265.0,
        description: Some("test spot".to_owned()),
        category: SpotCategory::BeachBreak,
        profile: None,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn new_session(spot_id: i64, rating: i32) -> SurfSession {
    let at = Utc.with_ymd_and_hms(2026, 10, 15, 7, 0, 0).unwrap();
    SurfSession {
        id: 0,
        spot_id,
        date_time: at,
        duration_minutes: Some(75),
        rating,
        board_type: Some("shortboard".to_owned()),
        notes: Some("glassy until the tide turned".to_owned()),
        conditions: ConditionSample {
            wave_height: Some(1.5),
            wave_period: Some(10.0),
            wave_direction: Some(270.0),
            wind_speed: Some(6.0),
            wind_direction: Some(90.0),
            air_temperature: Some(12.0),
            sources: vec!["synthetic".to_owned()],
            ..ConditionSample::default()
        },
        derived: DerivedFeatures {
            offshore_wind: true,
            swell_angle_difference: Some(5.0),
            swell_component: 1.49,
        },
        season: Season::Autumn,
        weekday: 3,
        time_of_day: TimeOfDay::Morning,
        surf_score: Some(9.0),
        created_at: at,
    }
}

#[tokio::test]
async fn schema_creation_is_idempotent() {
    let db = fresh_db().await;
    db.create_tables().await.unwrap();
    db.create_tables().await.unwrap();
}

#[tokio::test]
async fn seeding_inserts_six_spots_once() {
    let db = fresh_db().await;
    assert_eq!(db.seed_reference_spots().await.unwrap(), 6);
    // second run finds every name already present
    assert_eq!(db.seed_reference_spots().await.unwrap(), 0);

    let spots = db.list_spots().await.unwrap();
    assert_eq!(spots.len(), 6);
    let bore = db.get_spot_by_name("Bore").await.unwrap();
    assert_eq!(bore.orientation, 270.0);
    assert_eq!(bore.category, SpotCategory::BeachBreak);
    assert!(bore.profile.is_some());
    let reve = db.get_spot_by_name("Reve").await.unwrap();
    assert_eq!(reve.category, SpotCategory::ReefBreak);
}

#[tokio::test]
async fn spot_roundtrip_preserves_every_field() {
    let db = fresh_db().await;
    let mut spot = new_spot("Brusand");
    let id = db.save_spot(&spot).await.unwrap();
    spot.id = id;
    let loaded = db.get_spot_by_name("Brusand").await.unwrap();
    assert_eq!(loaded, spot);
}

#[tokio::test]
async fn duplicate_spot_name_is_rejected_as_conflict() {
    let db = fresh_db().await;
    db.save_spot(&new_spot("Brusand")).await.unwrap();
    let error = db.save_spot(&new_spot("Brusand")).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(error.http_status(), 409);
    // the first insert survives untouched
    assert_eq!(db.list_spots().await.unwrap().len(), 1);
}

#[tokio::test]
async fn renaming_onto_a_taken_name_is_rejected_as_conflict() {
    let db = fresh_db().await;
    db.save_spot(&new_spot("Brusand")).await.unwrap();
    let mut other = new_spot("Kvassheim");
    other.id = db.save_spot(&other).await.unwrap();
    other.name = "Brusand".to_owned();
    let error = db.update_spot(&other).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn session_rating_outside_the_scale_is_rejected() {
    let db = fresh_db().await;
    let spot_id = db.save_spot(&new_spot("Brusand")).await.unwrap();
    for rating in [0, 6, -1] {
        let error = db.save_session(&new_session(spot_id, rating)).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.http_status(), 400);
    }
    assert!(db.sessions_for_spot(spot_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_spot_lookup_is_not_found() {
    let db = fresh_db().await;
    let error = db.get_spot_by_name("Atlantis").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn spot_update_rewrites_reference_data() {
    let db = fresh_db().await;
    let mut spot = new_spot("Brusand");
    spot.id = db.save_spot(&spot).await.unwrap();
    spot.description = Some("works best at mid tide".to_owned());
    spot.category = SpotCategory::PointBreak;
    db.update_spot(&spot).await.unwrap();
    let loaded = db.get_spot_by_name("Brusand").await.unwrap();
    assert_eq!(loaded.category, SpotCategory::PointBreak);
    assert_eq!(loaded.description.as_deref(), Some("works best at mid tide"));
}

#[tokio::test]
async fn session_roundtrip_preserves_conditions_and_derived_features() {
    let db = fresh_db().await;
    let spot_id = db.save_spot(&new_spot("Brusand")).await.unwrap();
    let mut session = new_session(spot_id, 5);
    session.id = db.save_session(&session).await.unwrap();

    let loaded = db.sessions_for_spot(spot_id).await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], session);
}

#[tokio::test]
async fn notes_are_the_only_mutable_session_field() {
    let db = fresh_db().await;
    let spot_id = db.save_spot(&new_spot("Brusand")).await.unwrap();
    let mut session = new_session(spot_id, 4);
    session.id = db.save_session(&session).await.unwrap();

    db.update_session_notes(session.id, Some("actually all-time"))
        .await
        .unwrap();
    let loaded = db.sessions_for_spot(spot_id).await.unwrap();
    assert_eq!(loaded[0].notes.as_deref(), Some("actually all-time"));
    assert_eq!(loaded[0].rating, session.rating);

    let error = db
        .update_session_notes(9999, Some("ghost"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn deleted_sessions_disappear_from_history() {
    let db = fresh_db().await;
    let spot_id = db.save_spot(&new_spot("Brusand")).await.unwrap();
    let mut session = new_session(spot_id, 3);
    session.id = db.save_session(&session).await.unwrap();

    db.delete_session(session.id).await.unwrap();
    assert!(db.sessions_for_spot(spot_id).await.unwrap().is_empty());

    let error = db.delete_session(session.id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn stored_sessions_feed_the_performance_aggregator() {
    let db = fresh_db().await;
    let spot_id = db.save_spot(&new_spot("Brusand")).await.unwrap();
    for rating in [5, 4, 2] {
        db.save_session(&new_session(spot_id, rating)).await.unwrap();
    }
    let sessions = db.sessions_for_spot(spot_id).await.unwrap();
    let summary = spot_performance("Brusand", &sessions);
    assert_eq!(summary.total_sessions, 3);
    assert_eq!(summary.success_rate, 66.7);
}
