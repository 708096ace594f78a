// ABOUTME: SQLite persistence for surf spots and logged sessions via sqlx
// ABOUTME: Runtime queries, idempotent table creation and reference-spot seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! # Persistence
//!
//! SQLite-backed storage for the two durable entities: [`SurfSpot`] reference
//! data and [`SurfSession`] logs. Schema creation is idempotent
//! (`CREATE TABLE IF NOT EXISTS`), so [`Database::new`] can run on every
//! startup. Spot profiles and sample source lists are stored as JSON text
//! columns; everything else maps to plain columns.
//!
//! Sessions are immutable once logged except for their free-text notes, which
//! is the only field [`Database::update_session_notes`] touches.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Row, Sqlite, SqlitePool};
use std::str::FromStr;
use tracing::info;

use crate::constants::history;
use crate::errors::{AppError, AppResult};
use crate::intelligence::profiles::reference_profiles;
use crate::models::{
    ConditionSample, DerivedFeatures, Season, SpotCategory, SpotProfile, SurfSession, SurfSpot,
    TimeOfDay,
};

/// SQLite-backed store for spots and sessions
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (or create) the database and ensure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the database cannot be opened or the schema
    /// statements fail.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = if database_url.contains(":memory:") {
            // every pooled connection gets its own in-memory database, so an
            // in-memory store must stay on a single connection
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(database_url)
                .await?
        } else {
            SqlitePool::connect(&file_connection_url(database_url)).await?
        };
        let db = Self { pool };
        db.create_tables().await?;
        Ok(db)
    }

    /// Create tables and indexes; safe to run repeatedly.
    ///
    /// # Errors
    ///
    /// Returns an error when a schema statement fails.
    pub async fn create_tables(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS surf_spots (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                orientation REAL NOT NULL,
                description TEXT,
                category TEXT NOT NULL,
                profile TEXT,
                created_at TIMESTAMP NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_surf_spots_name ON surf_spots(name)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS surf_sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                spot_id INTEGER NOT NULL,
                date_time TIMESTAMP NOT NULL,
                duration_minutes INTEGER,
                rating INTEGER NOT NULL,
                board_type TEXT,
                notes TEXT,
                wave_height REAL,
                wave_period REAL,
                wave_direction REAL,
                wind_speed REAL,
                wind_direction REAL,
                wind_gust REAL,
                air_temperature REAL,
                water_temperature REAL,
                humidity REAL,
                pressure REAL,
                precipitation REAL,
                tide_height REAL,
                offshore_wind INTEGER NOT NULL,
                swell_angle_difference REAL,
                swell_component REAL NOT NULL,
                season TEXT NOT NULL,
                weekday INTEGER NOT NULL,
                time_of_day TEXT NOT NULL,
                data_sources TEXT NOT NULL,
                surf_score REAL,
                created_at TIMESTAMP NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_surf_sessions_spot_id ON surf_sessions(spot_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a spot and return its id.
    ///
    /// # Errors
    ///
    /// Returns a `ResourceAlreadyExists` error when the name is taken, or a
    /// database error on any other failure.
    pub async fn save_spot(&self, spot: &SurfSpot) -> AppResult<i64> {
        let profile_json = spot
            .profile
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let result = sqlx::query(
            r"
            INSERT INTO surf_spots
                (name, latitude, longitude, orientation, description, category, profile, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
        )
        .bind(&spot.name)
        .bind(spot.latitude)
        .bind(spot.longitude)
        .bind(spot.orientation)
        .bind(&spot.description)
        .bind(spot.category.to_string())
        .bind(profile_json)
        .bind(spot.created_at)
        .execute(&self.pool)
        .await
        .map_err(|error| duplicate_name_error(error, &spot.name))?;
        Ok(result.last_insert_rowid())
    }

    /// List all spots ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn list_spots(&self) -> AppResult<Vec<SurfSpot>> {
        let rows = sqlx::query("SELECT * FROM surf_spots ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(row_to_spot).collect()
    }

    /// Look up a spot by its unique name.
    ///
    /// # Errors
    ///
    /// Returns a `ResourceNotFound` error when no spot carries that name.
    pub async fn get_spot_by_name(&self, name: &str) -> AppResult<SurfSpot> {
        let row = sqlx::query("SELECT * FROM surf_spots WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => row_to_spot(row),
            None => Err(AppError::not_found(format!(
                "spot '{name}' is not registered"
            ))),
        }
    }

    /// Update a spot's mutable reference data.
    ///
    /// # Errors
    ///
    /// Returns a `ResourceNotFound` error when the id does not exist, or a
    /// `ResourceAlreadyExists` error when renaming onto a taken name.
    pub async fn update_spot(&self, spot: &SurfSpot) -> AppResult<()> {
        let profile_json = spot
            .profile
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let result = sqlx::query(
            r"
            UPDATE surf_spots
            SET name = ?1, latitude = ?2, longitude = ?3, orientation = ?4,
                description = ?5, category = ?6, profile = ?7
            WHERE id = ?8
            ",
        )
        .bind(&spot.name)
        .bind(spot.latitude)
        .bind(spot.longitude)
        .bind(spot.orientation)
        .bind(&spot.description)
        .bind(spot.category.to_string())
        .bind(profile_json)
        .bind(spot.id)
        .execute(&self.pool)
        .await
        .map_err(|error| duplicate_name_error(error, &spot.name))?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "spot id {} does not exist",
                spot.id
            )));
        }
        Ok(())
    }

    /// Seed the six Jæren reference spots; existing names are left untouched.
    ///
    /// Returns how many spots were inserted.
    ///
    /// # Errors
    ///
    /// Returns an error when an insert fails for any reason other than the
    /// spot already existing.
    pub async fn seed_reference_spots(&self) -> AppResult<usize> {
        let mut inserted = 0;
        for seed in reference_spot_seeds() {
            let profile_json = serde_json::to_string(&seed.profile)?;
            let result = sqlx::query(
                r"
                INSERT OR IGNORE INTO surf_spots
                    (name, latitude, longitude, orientation, description, category, profile, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                ",
            )
            .bind(seed.name)
            .bind(seed.latitude)
            .bind(seed.longitude)
            .bind(seed.orientation)
            .bind(seed.description)
            .bind(seed.category.to_string())
            .bind(profile_json)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
            inserted += usize::try_from(result.rows_affected()).unwrap_or(0);
        }
        info!(inserted, "seeded reference spots");
        Ok(inserted)
    }

    /// Insert a session and return its id.
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error when the rating is outside the 1-5
    /// scale, or an error when the insert or JSON encoding fails.
    pub async fn save_session(&self, session: &SurfSession) -> AppResult<i64> {
        if !(history::RATING_MIN..=history::RATING_MAX).contains(&session.rating) {
            return Err(AppError::out_of_range(format!(
                "session rating {} is outside the {}-{} scale",
                session.rating,
                history::RATING_MIN,
                history::RATING_MAX
            )));
        }
        let sources_json = serde_json::to_string(&session.conditions.sources)?;
        let result = sqlx::query(
            r"
            INSERT INTO surf_sessions
                (spot_id, date_time, duration_minutes, rating, board_type, notes,
                 wave_height, wave_period, wave_direction, wind_speed, wind_direction,
                 wind_gust, air_temperature, water_temperature, humidity, pressure,
                 precipitation, tide_height, offshore_wind, swell_angle_difference,
                 swell_component, season, weekday, time_of_day, data_sources,
                 surf_score, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                    ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27)
            ",
        )
        .bind(session.spot_id)
        .bind(session.date_time)
        .bind(session.duration_minutes)
        .bind(session.rating)
        .bind(&session.board_type)
        .bind(&session.notes)
        .bind(session.conditions.wave_height)
        .bind(session.conditions.wave_period)
        .bind(session.conditions.wave_direction)
        .bind(session.conditions.wind_speed)
        .bind(session.conditions.wind_direction)
        .bind(session.conditions.wind_gust)
        .bind(session.conditions.air_temperature)
        .bind(session.conditions.water_temperature)
        .bind(session.conditions.humidity)
        .bind(session.conditions.pressure)
        .bind(session.conditions.precipitation)
        .bind(session.conditions.tide_height)
        .bind(session.derived.offshore_wind)
        .bind(session.derived.swell_angle_difference)
        .bind(session.derived.swell_component)
        .bind(session.season.as_str())
        .bind(i64::from(session.weekday))
        .bind(session.time_of_day.as_str())
        .bind(sources_json)
        .bind(session.surf_score)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// List every logged session, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn list_sessions(&self) -> AppResult<Vec<SurfSession>> {
        let rows = sqlx::query("SELECT * FROM surf_sessions ORDER BY date_time")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(row_to_session).collect()
    }

    /// List the sessions logged at one spot, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn sessions_for_spot(&self, spot_id: i64) -> AppResult<Vec<SurfSession>> {
        let rows = sqlx::query("SELECT * FROM surf_sessions WHERE spot_id = ?1 ORDER BY date_time")
            .bind(spot_id)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(row_to_session).collect()
    }

    /// Replace a session's free-text notes, the only mutable session field.
    ///
    /// # Errors
    ///
    /// Returns a `ResourceNotFound` error when the id does not exist.
    pub async fn update_session_notes(&self, session_id: i64, notes: Option<&str>) -> AppResult<()> {
        let result = sqlx::query("UPDATE surf_sessions SET notes = ?1 WHERE id = ?2")
            .bind(notes)
            .bind(session_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "session id {session_id} does not exist"
            )));
        }
        Ok(())
    }

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// Returns a `ResourceNotFound` error when the id does not exist.
    pub async fn delete_session(&self, session_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM surf_sessions WHERE id = ?1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "session id {session_id} does not exist"
            )));
        }
        Ok(())
    }
}

/// Connection URL for a file-backed database, with `mode=rwc` so the file is
/// created when missing. A URL that already carries a query string gets the
/// parameter appended with `&`; one that already sets `mode` is left intact.
fn file_connection_url(database_url: &str) -> String {
    if !database_url.starts_with("sqlite:") || database_url.contains("mode=") {
        return database_url.to_owned();
    }
    if database_url.contains('?') {
        format!("{database_url}&mode=rwc")
    } else {
        format!("{database_url}?mode=rwc")
    }
}

fn duplicate_name_error(error: sqlx::Error, name: &str) -> AppError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            AppError::already_exists(format!("spot '{name}' is already registered"))
                .with_source(error)
        }
        _ => AppError::from(error),
    }
}

struct SpotSeed {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    orientation: f64,
    description: &'static str,
    category: SpotCategory,
    profile: SpotProfile,
}

/// The six Jæren reference spots with the original coordinates
fn reference_spot_seeds() -> Vec<SpotSeed> {
    let descriptions: [(&str, f64, f64, f64, &str); 6] = [
        (
            "Bore",
            58.8839,
            5.5528,
            270.0,
            "Popular beach break, works on most swell directions",
        ),
        (
            "Orre",
            58.8167,
            5.4833,
            285.0,
            "Exposed beach break, needs bigger swell",
        ),
        (
            "Hellestø",
            58.9333,
            5.6167,
            260.0,
            "More sheltered beach break, works on smaller swell",
        ),
        (
            "Sola Strand",
            58.8667,
            5.5833,
            275.0,
            "Long sandy beach with several peaks",
        ),
        (
            "Reve",
            58.7167,
            5.4333,
            290.0,
            "Reef break, needs bigger swell and the right tide",
        ),
        (
            "Sirevåg",
            58.7167,
            5.4000,
            300.0,
            "Protected bay, works on northerly swell",
        ),
    ];
    let profiles = reference_profiles();
    descriptions
        .into_iter()
        .filter_map(|(name, latitude, longitude, orientation, description)| {
            profiles
                .iter()
                .find(|(profile_name, _, _)| *profile_name == name)
                .map(|(_, category, profile)| SpotSeed {
                    name,
                    latitude,
                    longitude,
                    orientation,
                    description,
                    category: *category,
                    profile: *profile,
                })
        })
        .collect()
}

fn row_to_spot(row: sqlx::sqlite::SqliteRow) -> AppResult<SurfSpot> {
    let category_text: String = row.try_get("category")?;
    let profile_json: Option<String> = row.try_get("profile")?;
    let profile = profile_json
        .as_deref()
        .map(serde_json::from_str)
        .transpose()?;
    Ok(SurfSpot {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        orientation: row.try_get("orientation")?,
        description: row.try_get("description")?,
        category: SpotCategory::from_str(&category_text)?,
        profile,
        created_at: row.try_get("created_at")?,
    })
}

fn row_to_session(row: sqlx::sqlite::SqliteRow) -> AppResult<SurfSession> {
    let sources_json: String = row.try_get("data_sources")?;
    let sources: Vec<String> = serde_json::from_str(&sources_json)?;
    let season_text: String = row.try_get("season")?;
    let season = match season_text.as_str() {
        "winter" => Season::Winter,
        "spring" => Season::Spring,
        "summer" => Season::Summer,
        "autumn" => Season::Autumn,
        other => {
            return Err(AppError::internal(format!(
                "unknown season in database: {other}"
            )))
        }
    };
    let time_of_day_text: String = row.try_get("time_of_day")?;
    let time_of_day = match time_of_day_text.as_str() {
        "morning" => TimeOfDay::Morning,
        "afternoon" => TimeOfDay::Afternoon,
        "evening" => TimeOfDay::Evening,
        other => {
            return Err(AppError::internal(format!(
                "unknown time of day in database: {other}"
            )))
        }
    };
    let weekday: i64 = row.try_get("weekday")?;

    let conditions = ConditionSample {
        wave_height: row.try_get("wave_height")?,
        wave_period: row.try_get("wave_period")?,
        wave_direction: row.try_get("wave_direction")?,
        wind_speed: row.try_get("wind_speed")?,
        wind_direction: row.try_get("wind_direction")?,
        wind_gust: row.try_get("wind_gust")?,
        air_temperature: row.try_get("air_temperature")?,
        water_temperature: row.try_get("water_temperature")?,
        humidity: row.try_get("humidity")?,
        pressure: row.try_get("pressure")?,
        precipitation: row.try_get("precipitation")?,
        tide_height: row.try_get("tide_height")?,
        observed_at: None,
        sources,
    };
    let derived = DerivedFeatures {
        offshore_wind: row.try_get("offshore_wind")?,
        swell_angle_difference: row.try_get("swell_angle_difference")?,
        swell_component: row.try_get("swell_component")?,
    };

    Ok(SurfSession {
        id: row.try_get("id")?,
        spot_id: row.try_get("spot_id")?,
        date_time: row.try_get::<DateTime<Utc>, _>("date_time")?,
        duration_minutes: row.try_get("duration_minutes")?,
        rating: row.try_get("rating")?,
        board_type: row.try_get("board_type")?,
        notes: row.try_get("notes")?,
        conditions,
        derived,
        season,
        weekday: u8::try_from(weekday).unwrap_or(0),
        time_of_day,
        surf_score: row.try_get("surf_score")?,
        created_at: row.try_get("created_at")?,
    })
}
