use crate::forecast::models::HourlyRecord;

/// Hours of forecast the scoring looks at
pub const WINDOW_HOURS: usize = 24;

/// Highest WMO code that still counts as a clear-ish sky
const CLEAR_SKY_MAX_CODE: i32 = 3;

/// The leading slice of the hourly forecast used for scoring
#[derive(Debug, Clone, Copy)]
pub struct AnalysisWindow<'a> {
    hours: &'a [HourlyRecord],
}

impl<'a> AnalysisWindow<'a> {
    /// First [`WINDOW_HOURS`] records, or fewer when the forecast is shorter
    pub fn from_hourly(hourly: &'a [HourlyRecord]) -> Self {
        let end = hourly.len().min(WINDOW_HOURS);
        Self {
            hours: &hourly[..end],
        }
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Arithmetic mean of a field, 0 for an empty window
    fn mean(&self, field: impl Fn(&HourlyRecord) -> f64) -> f64 {
        if self.hours.is_empty() {
            return 0.0;
        }
        self.hours.iter().map(field).sum::<f64>() / self.hours.len() as f64
    }

    pub fn mean_temperature(&self) -> f64 {
        self.mean(|h| h.temperature)
    }

    pub fn mean_wind_speed(&self) -> f64 {
        self.mean(|h| h.wind_speed)
    }

    pub fn mean_precipitation(&self) -> f64 {
        self.mean(|h| h.precipitation)
    }

    /// Mean snow depth in metres; hours without a value count as 0
    pub fn mean_snow_depth(&self) -> f64 {
        self.mean(|h| h.snow_depth.unwrap_or(0.0))
    }

    /// Whether any hour carried a snow depth at all
    pub fn has_snow_data(&self) -> bool {
        self.hours.iter().any(|h| h.snow_depth.is_some())
    }

    /// Fraction of hours with a clear to partly cloudy weather code
    pub fn clear_ratio(&self) -> f64 {
        let clear = self
            .hours
            .iter()
            .filter(|h| h.weather_code <= CLEAR_SKY_MAX_CODE)
            .count();
        clear as f64 / self.hours.len().max(1) as f64
    }

    /// Aggregate every figure the activity models read
    pub fn conditions(&self) -> WindowConditions {
        WindowConditions {
            temperature: self.mean_temperature(),
            wind_speed: self.mean_wind_speed(),
            precipitation: self.mean_precipitation(),
            snow_depth_cm: self.mean_snow_depth() * 100.0,
            snow_reported: self.has_snow_data(),
            clear_ratio: self.clear_ratio(),
        }
    }
}

/// Window-level aggregates shared by all activity models
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowConditions {
    /// Mean °C
    pub temperature: f64,
    /// Mean km/h
    pub wind_speed: f64,
    /// Mean mm per hour
    pub precipitation: f64,
    /// Mean snow depth in centimetres, unknown hours counted as 0
    pub snow_depth_cm: f64,
    pub snow_reported: bool,
    /// 0.0 to 1.0
    pub clear_ratio: f64,
}
