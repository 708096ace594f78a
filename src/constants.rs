// ABOUTME: Named scoring constants for the surf condition scoring engine
// ABOUTME: Collects every threshold, weight and bucket bound in one audited place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! Scoring constants for the surf condition engine.
//!
//! Every threshold in the scoring formulas lives here under a named constant
//! so the bucketing stays reproducible across releases. The coarse model and
//! the weighted model use different thresholds on purpose (for example the
//! coarse optimal height band is 0.8-2.0 m while per-spot profiles carry
//! their own bands); they must never be merged.

/// Coarse-model wave height buckets (sub-score max 3.0)
pub mod wave_height {
    /// Lower bound of the optimal band (m), inclusive
    pub const OPTIMAL_MIN: f64 = 0.8;
    /// Upper bound of the optimal band (m), inclusive
    pub const OPTIMAL_MAX: f64 = 2.0;
    /// Lower bound of the rideable-but-small band (m), inclusive
    pub const ACCEPTABLE_MIN: f64 = 0.5;
    /// Upper bound of the big-but-manageable band (m), inclusive
    pub const ACCEPTABLE_MAX: f64 = 3.0;

    /// Sub-score inside the optimal band
    pub const OPTIMAL_SCORE: f64 = 3.0;
    /// Sub-score in either acceptable band
    pub const ACCEPTABLE_SCORE: f64 = 2.0;
    /// Sub-score everywhere else (flat or dangerous)
    pub const MARGINAL_SCORE: f64 = 0.5;
}

/// Coarse-model wave period buckets (sub-score max 3.0)
pub mod wave_period {
    /// Lower bound of the optimal band (s), inclusive
    pub const OPTIMAL_MIN: f64 = 8.0;
    /// Upper bound of the optimal band (s), inclusive
    pub const OPTIMAL_MAX: f64 = 15.0;
    /// Lower bound of the short-but-workable band (s), inclusive
    pub const ACCEPTABLE_MIN: f64 = 6.0;
    /// Upper bound of the long-groundswell band (s), inclusive
    pub const ACCEPTABLE_MAX: f64 = 20.0;

    /// Sub-score inside the optimal band
    pub const OPTIMAL_SCORE: f64 = 3.0;
    /// Sub-score in either acceptable band
    pub const ACCEPTABLE_SCORE: f64 = 2.0;
    /// Sub-score everywhere else (wind chop or freak groundswell)
    pub const MARGINAL_SCORE: f64 = 1.0;
}

/// Coarse-model wind buckets (sub-score max 4.0)
pub mod wind {
    /// Angular tolerance for the offshore test (deg): wind within this many
    /// degrees of the landward bearing (orientation + 180) counts as offshore
    pub const OFFSHORE_TOLERANCE_DEG: f64 = 90.0;
    /// Maximum wind speed for the full offshore bonus (m/s), inclusive
    pub const OFFSHORE_MAX_SPEED: f64 = 8.0;
    /// Maximum onshore wind speed that still keeps the face clean (m/s)
    pub const ONSHORE_LIGHT_MAX_SPEED: f64 = 5.0;
    /// Above this speed the session is blown out regardless of direction (m/s)
    pub const BLOWN_OUT_SPEED: f64 = 15.0;

    /// Sub-score for light offshore wind
    pub const OFFSHORE_SCORE: f64 = 4.0;
    /// Sub-score for light onshore wind
    pub const ONSHORE_LIGHT_SCORE: f64 = 2.0;
    /// Sub-score once the wind is too strong to surf
    pub const BLOWN_OUT_SCORE: f64 = 0.0;
    /// Sub-score for every other wind state
    pub const MODERATE_SCORE: f64 = 1.0;
}

/// Ceiling of the coarse composite score
pub const COARSE_SCORE_MAX: f64 = 10.0;

/// Weighted-model component weights; they sum to 1.0
pub mod weights {
    /// Wave height share of the composite score
    pub const WAVE_HEIGHT: f64 = 0.30;
    /// Wave direction share
    pub const WAVE_DIRECTION: f64 = 0.25;
    /// Wind (speed + direction combined) share
    pub const WIND: f64 = 0.25;
    /// Wave period share
    pub const WAVE_PERIOD: f64 = 0.10;
    /// Air temperature bonus share
    pub const TEMPERATURE: f64 = 0.05;
    /// Time-of-day bonus share
    pub const TIME_OF_DAY: f64 = 0.05;

    /// Speed fraction inside the wind sub-score
    pub const WIND_SPEED_FRACTION: f64 = 0.7;
    /// Direction fraction inside the wind sub-score
    pub const WIND_DIRECTION_FRACTION: f64 = 0.3;
}

/// Weighted-model general rules shared across all spot profiles
pub mod profile_rules {
    /// Below this wave height nothing is surfable (m)
    pub const ABSOLUTE_MIN_WAVE_HEIGHT: f64 = 0.3;
    /// Above this wave height conditions are dangerous (m)
    pub const ABSOLUTE_MAX_WAVE_HEIGHT: f64 = 5.0;
    /// Score assigned above the absolute maximum
    pub const DANGEROUS_HEIGHT_SCORE: f64 = 10.0;
    /// Scale applied to the height/min ratio below the optimal band
    pub const BELOW_RANGE_SCALE: f64 = 70.0;
    /// Decay per metre of excess above the optimal band
    pub const ABOVE_RANGE_DECAY_PER_M: f64 = 30.0;
    /// Floor of the above-range decay
    pub const ABOVE_RANGE_FLOOR: f64 = 20.0;

    /// Decay per degree of distance outside a direction sector
    pub const DIRECTION_DECAY_PER_DEG: f64 = 2.0;

    /// Ideal wind speed (m/s): enough to groom the face, not enough to chop it
    pub const IDEAL_WIND_SPEED: f64 = 8.0;
    /// Penalty per m/s of deviation from the ideal speed, under the spot max
    pub const SPEED_DEVIATION_PENALTY: f64 = 5.0;
    /// Base score at the spot's wind limit
    pub const OVER_LIMIT_BASE: f64 = 50.0;
    /// Decay per m/s of excess over the spot's wind limit
    pub const OVER_LIMIT_DECAY: f64 = 10.0;

    /// Lower bound of the ideal period band (s)
    pub const IDEAL_PERIOD_MIN: f64 = 7.0;
    /// Upper bound of the ideal period band (s)
    pub const IDEAL_PERIOD_MAX: f64 = 14.0;
    /// Decay per second under the ideal period band
    pub const BELOW_PERIOD_DECAY: f64 = 15.0;
    /// Floor of the short-period decay
    pub const BELOW_PERIOD_FLOOR: f64 = 30.0;
    /// Decay per second over the ideal period band
    pub const ABOVE_PERIOD_DECAY: f64 = 10.0;
    /// Floor of the long-period decay
    pub const ABOVE_PERIOD_FLOOR: f64 = 60.0;
}

/// Weighted-model temperature bonus
pub mod temperature {
    /// Full bonus at or above this air temperature (C)
    pub const BONUS_THRESHOLD: f64 = 15.0;
    /// Score per degree below the threshold
    pub const DEGREE_SCALE: f64 = 5.0;
}

/// Weighted-model time-of-day bonus, keyed by the hour of the evaluation
/// target time
pub mod time_of_day {
    /// Score for the early session, 06:00-09:59
    pub const EARLY_MORNING_SCORE: f64 = 100.0;
    /// Score for mid-day, 10:00-16:59
    pub const DAYTIME_SCORE: f64 = 70.0;
    /// Score for the evening glass-off, 17:00-19:59
    pub const EVENING_SCORE: f64 = 85.0;
    /// Score for night and the very early hours
    pub const NIGHT_SCORE: f64 = 30.0;
}

/// Weighted-model fallbacks substituted for absent sample fields.
///
/// The weighted model serves ranking, so an absent field degrades to a
/// neutral guess instead of zeroing the whole spot (unlike the coarse model,
/// which returns 0.0 on any missing input).
pub mod weighted_defaults {
    /// Assumed wave height when absent (m)
    pub const WAVE_HEIGHT: f64 = 0.5;
    /// Assumed swell direction when absent (deg)
    pub const WAVE_DIRECTION: f64 = 270.0;
    /// Assumed wind speed when absent (m/s)
    pub const WIND_SPEED: f64 = 5.0;
    /// Assumed wind direction when absent (deg)
    pub const WIND_DIRECTION: f64 = 90.0;
    /// Assumed wave period when absent (s)
    pub const WAVE_PERIOD: f64 = 8.0;
    /// Assumed air temperature when absent (C)
    pub const AIR_TEMPERATURE: f64 = 12.0;
}

/// Rationale-phrase thresholds and rating boundaries
pub mod rating {
    /// Weighted score at or above which conditions are Excellent
    pub const EXCELLENT_MIN: f64 = 80.0;
    /// Weighted score at or above which conditions are Good
    pub const GOOD_MIN: f64 = 65.0;
    /// Weighted score at or above which conditions are Fair
    pub const FAIR_MIN: f64 = 50.0;
    /// Weighted score at or above which conditions are Poor
    pub const POOR_MIN: f64 = 35.0;

    /// A period at or above this counts as long-period swell in rationales (s)
    pub const LONG_PERIOD_MIN: f64 = 10.0;
    /// Maximum number of rationale phrases
    pub const MAX_RATIONALE_PHRASES: usize = 3;
}

/// Seasonal pseudo-forecast model constants.
///
/// The simulation is a deterministic sinusoid keyed on day-of-year; these
/// values reproduce the reference pseudo-forecast exactly.
pub mod simulation {
    /// Base of the seasonal factor
    pub const SEASONAL_BASE: f64 = 0.7;
    /// Amplitude of the seasonal factor
    pub const SEASONAL_AMPLITUDE: f64 = 0.3;
    /// Day-of-year phase offset; puts the seasonal peak around midsummer
    pub const SEASONAL_PHASE_DAYS: f64 = 80.0;
    /// Days per year used by the seasonal sinusoid
    pub const DAYS_PER_YEAR: f64 = 365.0;

    /// Base simulated wave height before modulation (m)
    pub const WAVE_HEIGHT_BASE: f64 = 1.5;
    /// Amplitude of the short-cycle wave height wobble (m)
    pub const WAVE_HEIGHT_WOBBLE: f64 = 0.3;
    /// Angular frequency of the wave height wobble (per day)
    pub const WAVE_HEIGHT_FREQ: f64 = 0.1;
    /// Simulated wave height clamp (m)
    pub const WAVE_HEIGHT_MIN: f64 = 0.5;
    /// Simulated wave height clamp (m)
    pub const WAVE_HEIGHT_MAX: f64 = 3.0;

    /// Base simulated wave period (s)
    pub const WAVE_PERIOD_BASE: f64 = 8.0;
    /// Amplitude of the period swing (s)
    pub const WAVE_PERIOD_AMPLITUDE: f64 = 2.0;
    /// Angular frequency of the period swing (per day)
    pub const WAVE_PERIOD_FREQ: f64 = 0.05;
    /// Simulated period clamp (s)
    pub const WAVE_PERIOD_MIN: f64 = 4.0;
    /// Simulated period clamp (s)
    pub const WAVE_PERIOD_MAX: f64 = 15.0;

    /// Base simulated wind speed (m/s)
    pub const WIND_SPEED_BASE: f64 = 8.0;
    /// Amplitude of the wind speed swing (m/s)
    pub const WIND_SPEED_AMPLITUDE: f64 = 3.0;
    /// Angular frequency of the wind speed swing (per day)
    pub const WIND_SPEED_FREQ: f64 = 0.08;
    /// Simulated wind speed clamp (m/s)
    pub const WIND_SPEED_MIN: f64 = 2.0;
    /// Simulated wind speed clamp (m/s)
    pub const WIND_SPEED_MAX: f64 = 15.0;

    /// Amplitude of the wind direction swing around offshore (deg)
    pub const WIND_DIRECTION_AMPLITUDE: f64 = 30.0;
    /// Angular frequency of the wind direction swing (per day)
    pub const WIND_DIRECTION_FREQ: f64 = 0.03;
    /// Amplitude of the swell direction swing around the orientation (deg)
    pub const WAVE_DIRECTION_AMPLITUDE: f64 = 20.0;
    /// Angular frequency of the swell direction swing (per day)
    pub const WAVE_DIRECTION_FREQ: f64 = 0.02;

    /// Base simulated air temperature (C)
    pub const AIR_TEMP_BASE: f64 = 15.0;
    /// Amplitude of the seasonal temperature swing (C)
    pub const AIR_TEMP_AMPLITUDE: f64 = 10.0;
    /// Simulated air temperature floor (C)
    pub const AIR_TEMP_MIN: f64 = 5.0;

    /// Base simulated tide height (m)
    pub const TIDE_BASE: f64 = 0.5;
    /// Amplitude of the tide swing (m)
    pub const TIDE_AMPLITUDE: f64 = 0.3;
    /// Angular frequency of the tide swing (per day)
    pub const TIDE_FREQ: f64 = 0.1;
}

/// Session outcome thresholds used by the historical aggregator
pub mod history {
    /// Lowest accepted session rating
    pub const RATING_MIN: i32 = 1;

    /// Highest accepted session rating
    pub const RATING_MAX: i32 = 5;

    /// A session rated at or above this counts as a success (1-5 scale)
    pub const SUCCESS_RATING_MIN: i32 = 4;
}

/// Wave period estimates by wave height, used when no provider reports a
/// period. Bigger seas usually carry longer periods.
pub mod period_estimate {
    /// (height upper bound in m, estimated period in s); the final entry is
    /// the catch-all for anything larger
    pub const BUCKETS: [(f64, f64); 4] = [(0.5, 6.0), (1.0, 8.0), (1.5, 10.0), (2.0, 12.0)];
    /// Estimate for seas above the last bucket (s)
    pub const LARGE_SEA_PERIOD: f64 = 14.0;
    /// Source tag attached to estimated periods
    pub const SOURCE_TAG: &str = "estimated";
}
