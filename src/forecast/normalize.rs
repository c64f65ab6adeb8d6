use thiserror::Error;

use super::models::*;

/// Provider payload does not have the aligned-array shape we expect
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataShapeError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {field} has {actual} entries but the time axis has {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Field {field} is null at index {index}")]
    MissingValue { field: &'static str, index: usize },
}

/// Take a required field out of the payload
fn required<T>(value: Option<T>, field: &'static str) -> Result<T, DataShapeError> {
    value.ok_or(DataShapeError::MissingField(field))
}

/// Check that a per-field array lines up with its time axis
fn aligned<T>(values: Vec<T>, field: &'static str, expected: usize) -> Result<Vec<T>, DataShapeError> {
    if values.len() != expected {
        return Err(DataShapeError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(values)
}

/// Aligned array with no null entries
fn filled<T>(
    values: Option<Vec<Option<T>>>,
    field: &'static str,
    expected: usize,
) -> Result<Vec<T>, DataShapeError> {
    aligned(required(values, field)?, field, expected)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| value.ok_or(DataShapeError::MissingValue { field, index }))
        .collect()
}

/// `YYYY-MM-DDTHH` prefix of an ISO 8601 local time
fn hour_of(time: &str) -> &str {
    time.get(..13).unwrap_or(time)
}

/// Convert an Open-Meteo payload into a [`NormalizedForecast`] for `location`
pub fn normalize(
    payload: ProviderForecast,
    location: Location,
) -> Result<NormalizedForecast, DataShapeError> {
    let timezone = required(payload.timezone, "timezone")?;
    let current = normalize_current(required(payload.current, "current")?)?;
    let mut hourly = normalize_hourly(required(payload.hourly, "hourly")?)?;

    // Open-Meteo starts the hourly axis at local midnight
    let elapsed = hourly
        .iter()
        .take_while(|h| hour_of(&h.time) < hour_of(&current.time))
        .count();
    hourly.drain(..elapsed);

    let daily = match payload.daily {
        Some(daily) => normalize_daily(daily)?,
        None => Vec::new(),
    };

    tracing::trace!(
        location = %location.name,
        hours = hourly.len(),
        days = daily.len(),
        "Normalized forecast"
    );

    Ok(NormalizedForecast {
        location,
        timezone,
        current,
        hourly,
        daily,
    })
}

fn normalize_current(current: ProviderCurrent) -> Result<HourlyRecord, DataShapeError> {
    Ok(HourlyRecord {
        time: required(current.time, "current.time")?,
        temperature: required(current.temperature_2m, "current.temperature_2m")?,
        wind_speed: required(current.wind_speed_10m, "current.wind_speed_10m")?,
        precipitation: required(current.precipitation, "current.precipitation")?,
        weather_code: required(current.weather_code, "current.weather_code")?,
        snow_depth: current.snow_depth,
    })
}

fn normalize_hourly(hourly: ProviderHourly) -> Result<Vec<HourlyRecord>, DataShapeError> {
    let time = required(hourly.time, "hourly.time")?;
    let len = time.len();

    let temperature = filled(hourly.temperature_2m, "hourly.temperature_2m", len)?;
    let wind_speed = filled(hourly.wind_speed_10m, "hourly.wind_speed_10m", len)?;
    let precipitation = filled(hourly.precipitation, "hourly.precipitation", len)?;
    let weather_code = filled(hourly.weather_code, "hourly.weather_code", len)?;
    let snow_depth = match hourly.snow_depth {
        Some(depths) => aligned(depths, "hourly.snow_depth", len)?,
        None => vec![None; len],
    };

    let records = time
        .into_iter()
        .zip(temperature)
        .zip(wind_speed)
        .zip(precipitation)
        .zip(weather_code)
        .zip(snow_depth)
        .map(
            |(((((time, temperature), wind_speed), precipitation), weather_code), snow_depth)| {
                HourlyRecord {
                    time,
                    temperature,
                    wind_speed,
                    precipitation,
                    weather_code,
                    snow_depth,
                }
            },
        )
        .collect();

    Ok(records)
}

fn normalize_daily(daily: ProviderDaily) -> Result<Vec<DailyRecord>, DataShapeError> {
    let time = required(daily.time, "daily.time")?;
    let len = time.len();

    let weather_code = filled(daily.weather_code, "daily.weather_code", len)?;
    let temperature_max = filled(daily.temperature_2m_max, "daily.temperature_2m_max", len)?;
    let temperature_min = filled(daily.temperature_2m_min, "daily.temperature_2m_min", len)?;
    let precipitation_sum = filled(daily.precipitation_sum, "daily.precipitation_sum", len)?;
    let wind_speed_max = filled(daily.wind_speed_10m_max, "daily.wind_speed_10m_max", len)?;

    let records = time
        .into_iter()
        .zip(weather_code)
        .zip(temperature_max)
        .zip(temperature_min)
        .zip(precipitation_sum)
        .zip(wind_speed_max)
        .map(
            |(((((date, weather_code), temperature_max), temperature_min), precipitation_sum), wind_speed_max)| {
                DailyRecord {
                    date,
                    temperature_max,
                    temperature_min,
                    precipitation_sum,
                    wind_speed_max,
                    weather_code,
                }
            },
        )
        .collect();

    Ok(records)
}
