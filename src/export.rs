// ABOUTME: CSV export of logged sessions joined with their spot reference data
// ABOUTME: Produces flat ML-ready rows; model training itself happens downstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! # Session Export
//!
//! Flattens logged sessions into CSV rows for downstream analysis. Each row
//! joins a session with its spot's name, coordinates and orientation. Ids,
//! free-text notes and source lists are deliberately left out; absent values
//! render as empty cells so a reader can apply its own imputation.

use std::collections::HashMap;
use std::io::Write;

use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::models::{SurfSession, SurfSpot};

/// Column order of the exported rows
pub const COLUMNS: [&str; 27] = [
    "spot_name",
    "latitude",
    "longitude",
    "spot_orientation",
    "date_time",
    "duration_minutes",
    "rating",
    "board_type",
    "wave_height",
    "wave_period",
    "wave_direction",
    "wind_speed",
    "wind_direction",
    "wind_gust",
    "air_temperature",
    "water_temperature",
    "humidity",
    "pressure",
    "precipitation",
    "tide_height",
    "offshore_wind",
    "swell_angle_difference",
    "swell_component",
    "season",
    "weekday",
    "time_of_day",
    "surf_score",
];

/// Write sessions as CSV rows, returning how many were written.
///
/// Sessions referencing a spot that is not in `spots` are skipped with a
/// warning rather than failing the whole export.
///
/// # Errors
///
/// Returns an error when writing to the underlying sink fails.
pub fn write_sessions_csv<W: Write>(
    out: W,
    spots: &[SurfSpot],
    sessions: &[SurfSession],
) -> AppResult<usize> {
    let spots_by_id: HashMap<i64, &SurfSpot> = spots.iter().map(|spot| (spot.id, spot)).collect();
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(COLUMNS).map_err(csv_error)?;

    let mut written = 0;
    for session in sessions {
        let Some(spot) = spots_by_id.get(&session.spot_id) else {
            warn!(
                session_id = session.id,
                spot_id = session.spot_id,
                "skipping session for unknown spot"
            );
            continue;
        };
        writer
            .write_record(session_record(session, spot))
            .map_err(csv_error)?;
        written += 1;
    }
    writer.flush().map_err(|error| {
        AppError::internal(format!("flushing CSV export failed: {error}"))
    })?;
    Ok(written)
}

fn session_record(session: &SurfSession, spot: &SurfSpot) -> Vec<String> {
    let conditions = &session.conditions;
    vec![
        spot.name.clone(),
        spot.latitude.to_string(),
        spot.longitude.to_string(),
        spot.orientation.to_string(),
        session.date_time.to_rfc3339(),
        opt_to_string(session.duration_minutes),
        session.rating.to_string(),
        session.board_type.clone().unwrap_or_default(),
        opt_to_string(conditions.wave_height),
        opt_to_string(conditions.wave_period),
        opt_to_string(conditions.wave_direction),
        opt_to_string(conditions.wind_speed),
        opt_to_string(conditions.wind_direction),
        opt_to_string(conditions.wind_gust),
        opt_to_string(conditions.air_temperature),
        opt_to_string(conditions.water_temperature),
        opt_to_string(conditions.humidity),
        opt_to_string(conditions.pressure),
        opt_to_string(conditions.precipitation),
        opt_to_string(conditions.tide_height),
        session.derived.offshore_wind.to_string(),
        opt_to_string(session.derived.swell_angle_difference),
        session.derived.swell_component.to_string(),
        session.season.as_str().to_owned(),
        session.weekday.to_string(),
        session.time_of_day.as_str().to_owned(),
        opt_to_string(session.surf_score),
    ]
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_error(error: csv::Error) -> AppError {
    AppError::internal(format!("writing CSV export failed: {error}"))
}
