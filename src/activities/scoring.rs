//! Rule-based suitability models for the four activities.
//!
//! Each model reads only the window aggregates, walks its rules in a fixed order and
//! records a reason fragment for every rule that fires. The total is clamped to 0..=100
//! once at the end; a few penalties floor the running total at 0 immediately, which is
//! called out where it happens.

use super::models::{ActivityScore, ActivityType, RankedActivities};
use super::window::{AnalysisWindow, WindowConditions};
use crate::forecast::models::NormalizedForecast;

/// Score every activity against the first day of the forecast, best first
pub fn rank_activities(forecast: &NormalizedForecast) -> RankedActivities {
    let window = AnalysisWindow::from_hourly(&forecast.hourly);
    let conditions = window.conditions();

    let scores = ActivityType::ALL
        .iter()
        .map(|activity| activity.evaluate(&conditions))
        .collect();
    let ranked = RankedActivities::from_scores(scores);

    tracing::debug!(
        location = %forecast.location.name,
        window_hours = window.len(),
        best = ?ranked.best().map(|s| s.activity),
        "Ranked activities"
    );

    ranked
}

impl ActivityType {
    /// Run this activity's model over the window aggregates
    pub fn evaluate(&self, conditions: &WindowConditions) -> ActivityScore {
        match self {
            Self::Skiing => score_skiing(conditions),
            Self::Surfing => score_surfing(conditions),
            Self::IndoorSightseeing => score_indoor_sightseeing(conditions),
            Self::OutdoorSightseeing => score_outdoor_sightseeing(conditions),
        }
    }
}

fn score_skiing(c: &WindowConditions) -> ActivityScore {
    let mut score: i32 = 0;
    let mut reasons = Vec::new();

    if (-20.0..=2.0).contains(&c.temperature) {
        if c.temperature <= -2.0 {
            score += 35;
            reasons.push(format!("Ideal skiing temperature ({:.1}°C)", c.temperature));
        } else {
            score += 20;
            reasons.push(format!("Marginal skiing temperature ({:.1}°C)", c.temperature));
        }
    } else if c.temperature > 2.0 {
        reasons.push(format!("Too warm for skiing ({:.1}°C)", c.temperature));
    } else {
        reasons.push(format!("Too extreme cold for skiing ({:.1}°C)", c.temperature));
    }

    if c.snow_depth_cm >= 30.0 {
        score += 40;
        reasons.push(format!("Good snow depth ({:.0}cm)", c.snow_depth_cm));
    } else if c.snow_depth_cm >= 10.0 {
        score += 20;
        reasons.push(format!("Moderate snow depth ({:.0}cm)", c.snow_depth_cm));
    } else if c.snow_reported {
        reasons.push(format!("Insufficient snow depth ({:.0}cm)", c.snow_depth_cm));
    } else {
        reasons.push("Snow depth unknown, assuming insufficient snow".to_string());
    }

    if c.wind_speed > 60.0 {
        // floor before any later bonus
        score = (score - 30).max(0);
        reasons.push(format!("Dangerous wind ({:.0}km/h)", c.wind_speed));
    } else if c.wind_speed <= 30.0 {
        score += 15;
        reasons.push(format!("Calm winds ({:.0}km/h)", c.wind_speed));
    }

    if c.precipitation > 0.0 && c.precipitation <= 2.0 && c.temperature < 0.0 {
        score += 10;
        reasons.push("Light fresh powder expected".to_string());
    }

    ActivityScore::new(ActivityType::Skiing, score, &reasons)
}

fn score_surfing(c: &WindowConditions) -> ActivityScore {
    let mut score: i32 = 0;
    let mut reasons = Vec::new();

    if (18.0..=32.0).contains(&c.temperature) {
        score += 30;
        reasons.push(format!("Warm temperature ({:.1}°C)", c.temperature));
    } else if (12.0..18.0).contains(&c.temperature) {
        score += 15;
        reasons.push(format!(
            "Cool temperature, wetsuit recommended ({:.1}°C)",
            c.temperature
        ));
    } else if c.temperature < 12.0 {
        reasons.push(format!(
            "Too cold, surfing would be uncomfortable ({:.1}°C)",
            c.temperature
        ));
    }

    if (10.0..=30.0).contains(&c.wind_speed) {
        score += 40;
        reasons.push(format!("Wind ideal for waves ({:.0}km/h)", c.wind_speed));
    } else if c.wind_speed > 30.0 && c.wind_speed <= 50.0 {
        score += 15;
        reasons.push(format!(
            "Strong wind, experienced surfers only ({:.0}km/h)",
            c.wind_speed
        ));
    } else if c.wind_speed < 10.0 {
        score += 20;
        reasons.push(format!("Light wind, flat water likely ({:.0}km/h)", c.wind_speed));
    } else {
        score = (score - 20).max(0);
        reasons.push(format!("Dangerous wind ({:.0}km/h)", c.wind_speed));
    }

    // the heavy rain penalty is left to the final clamp
    if c.precipitation < 1.0 {
        score += 20;
        reasons.push("Dry conditions".to_string());
    } else if c.precipitation < 5.0 {
        score += 10;
        reasons.push(format!("Light rain ({:.1}mm/h)", c.precipitation));
    } else {
        score -= 10;
        reasons.push(format!("Heavy rain ({:.1}mm/h)", c.precipitation));
    }

    if c.clear_ratio >= 0.6 {
        score += 10;
        reasons.push("Mostly clear skies".to_string());
    }

    ActivityScore::new(ActivityType::Surfing, score, &reasons)
}

fn score_indoor_sightseeing(c: &WindowConditions) -> ActivityScore {
    let mut score: i32 = 50;
    let mut reasons = Vec::new();

    if c.precipitation >= 5.0 {
        score += 30;
        reasons.push(format!(
            "Heavy rain makes indoor venues attractive ({:.1}mm/h)",
            c.precipitation
        ));
    } else if c.precipitation >= 2.0 {
        score += 15;
        reasons.push(format!(
            "Rain makes indoor venues appealing ({:.1}mm/h)",
            c.precipitation
        ));
    }

    if c.temperature < 0.0 {
        score += 20;
        reasons.push(format!("Freezing outside ({:.1}°C)", c.temperature));
    } else if c.temperature > 35.0 {
        score += 15;
        reasons.push(format!("Extreme heat outside ({:.1}°C)", c.temperature));
    }

    if c.wind_speed > 60.0 {
        score += 15;
        reasons.push(format!("Strong wind, outdoor unsafe ({:.0}km/h)", c.wind_speed));
    }

    if c.precipitation < 1.0 && (18.0..=28.0).contains(&c.temperature) && c.wind_speed < 20.0 {
        score -= 15;
        reasons.push("Great outdoor weather, indoor less appealing".to_string());
    }

    if reasons.is_empty() {
        reasons.push("Moderate conditions — both viable".to_string());
    }

    ActivityScore::new(ActivityType::IndoorSightseeing, score, &reasons)
}

fn score_outdoor_sightseeing(c: &WindowConditions) -> ActivityScore {
    let mut score: i32 = 0;
    let mut reasons = Vec::new();

    if (15.0..=28.0).contains(&c.temperature) {
        score += 35;
        reasons.push(format!("Comfortable temperature ({:.1}°C)", c.temperature));
    } else if (5.0..15.0).contains(&c.temperature) {
        score += 20;
        reasons.push(format!("Cool but pleasant ({:.1}°C)", c.temperature));
    } else if c.temperature > 28.0 && c.temperature <= 35.0 {
        score += 15;
        reasons.push(format!("Hot, stay hydrated ({:.1}°C)", c.temperature));
    } else {
        reasons.push(format!("Uncomfortable temperature ({:.1}°C)", c.temperature));
    }

    if c.clear_ratio >= 0.7 {
        score += 30;
        reasons.push("Mostly clear skies".to_string());
    } else if c.clear_ratio >= 0.4 {
        score += 15;
        reasons.push("Partly cloudy".to_string());
    } else {
        reasons.push("Mostly overcast".to_string());
    }

    if c.precipitation < 0.5 {
        score += 25;
        reasons.push("Dry conditions".to_string());
    } else if c.precipitation < 2.0 {
        score += 10;
        reasons.push(format!("Light showers possible ({:.1}mm/h)", c.precipitation));
    } else {
        score -= 15;
        reasons.push(format!("Rain likely ({:.1}mm/h)", c.precipitation));
    }

    if c.wind_speed > 50.0 {
        score -= 20;
        reasons.push(format!("Strong winds ({:.0}km/h)", c.wind_speed));
    } else if c.wind_speed < 20.0 {
        score += 10;
        reasons.push(format!("Light winds ({:.0}km/h)", c.wind_speed));
    }

    ActivityScore::new(ActivityType::OutdoorSightseeing, score, &reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::models::{HourlyRecord, Location};
    use proptest::prelude::*;

    fn conditions(temperature: f64, wind_speed: f64, precipitation: f64) -> WindowConditions {
        WindowConditions {
            temperature,
            wind_speed,
            precipitation,
            snow_depth_cm: 0.0,
            snow_reported: false,
            clear_ratio: 0.0,
        }
    }

    fn uniform_forecast(
        hours: usize,
        temperature: f64,
        wind_speed: f64,
        precipitation: f64,
        weather_code: i32,
        snow_depth: Option<f64>,
    ) -> NormalizedForecast {
        let record = HourlyRecord {
            time: "2026-01-10T00:00".to_string(),
            temperature,
            wind_speed,
            precipitation,
            weather_code,
            snow_depth,
        };
        NormalizedForecast {
            location: Location::from_coordinates(46.02, 7.75),
            timezone: "Europe/Zurich".to_string(),
            current: record.clone(),
            hourly: vec![record; hours],
            daily: Vec::new(),
        }
    }

    fn score_of(ranked: &RankedActivities, activity: ActivityType) -> u8 {
        ranked.get(activity).unwrap().score
    }

    #[test]
    fn test_ideal_skiing_scenario() {
        let forecast = uniform_forecast(24, -8.0, 20.0, 0.5, 73, Some(0.5));
        let ranked = rank_activities(&forecast);
        let skiing = ranked.get(ActivityType::Skiing).unwrap();

        assert!(skiing.score >= 70, "score was {}", skiing.score);
        assert!(skiing.suitable);
        assert_eq!(skiing.score, 100);
        assert!(skiing.reason.contains("Light fresh powder"));
    }

    #[test]
    fn test_ideal_outdoor_scenario() {
        let forecast = uniform_forecast(24, 22.0, 10.0, 0.0, 1, None);
        let ranked = rank_activities(&forecast);

        let outdoor = score_of(&ranked, ActivityType::OutdoorSightseeing);
        let indoor = score_of(&ranked, ActivityType::IndoorSightseeing);
        assert!(outdoor >= 70);
        assert!(outdoor > indoor);
        assert_eq!(outdoor, 100);
        assert_eq!(indoor, 35);

        // surfing ties at 100 and keeps its earlier evaluation slot
        assert_eq!(score_of(&ranked, ActivityType::Surfing), 100);
        let order: Vec<ActivityType> = ranked.iter().map(|s| s.activity).collect();
        assert_eq!(
            &order[..2],
            &[ActivityType::Surfing, ActivityType::OutdoorSightseeing]
        );
    }

    #[test]
    fn test_heavy_rain_scenario() {
        let forecast = uniform_forecast(24, 12.0, 15.0, 10.0, 65, None);
        let ranked = rank_activities(&forecast);

        let indoor = ranked.get(ActivityType::IndoorSightseeing).unwrap();
        let outdoor = score_of(&ranked, ActivityType::OutdoorSightseeing);
        assert!(indoor.score >= 60);
        assert!(indoor.suitable);
        assert!(indoor.score > outdoor);
    }

    #[test]
    fn test_high_wind_lowers_skiing() {
        let windy = rank_activities(&uniform_forecast(24, -5.0, 80.0, 0.0, 3, Some(0.4)));
        let calm = rank_activities(&uniform_forecast(24, -5.0, 15.0, 0.0, 3, Some(0.4)));

        let windy_score = score_of(&windy, ActivityType::Skiing);
        let calm_score = score_of(&calm, ActivityType::Skiing);
        assert!(windy_score < calm_score);
        assert_eq!(windy_score, 45);
        assert_eq!(calm_score, 90);
    }

    #[test]
    fn test_empty_forecast_still_ranks_four() {
        let forecast = uniform_forecast(0, 0.0, 0.0, 0.0, 0, None);
        let ranked = rank_activities(&forecast);

        assert_eq!(ranked.len(), 4);
        // every aggregate is 0: indoor keeps its baseline, outdoor only gets the dry and calm bonuses
        assert_eq!(score_of(&ranked, ActivityType::IndoorSightseeing), 50);
        assert_eq!(score_of(&ranked, ActivityType::OutdoorSightseeing), 35);
        assert_eq!(score_of(&ranked, ActivityType::Skiing), 35);
        assert_eq!(score_of(&ranked, ActivityType::Surfing), 40);
    }

    #[test]
    fn test_missing_snow_depth_treated_as_zero() {
        let forecast = uniform_forecast(24, -8.0, 20.0, 0.0, 0, None);
        let skiing = rank_activities(&forecast)
            .get(ActivityType::Skiing)
            .unwrap()
            .clone();

        // ideal temperature + calm, no snow contribution
        assert_eq!(skiing.score, 50);
        assert!(skiing.reason.contains("Snow depth unknown"));
    }

    #[test]
    fn test_zero_snow_depth_reads_differently_from_unknown() {
        let known = score_skiing(&WindowConditions {
            snow_reported: true,
            ..conditions(-8.0, 20.0, 0.0)
        });
        let unknown = score_skiing(&conditions(-8.0, 20.0, 0.0));

        assert_eq!(known.score, unknown.score);
        assert!(known.reason.contains("Insufficient snow depth (0cm)"));
        assert!(unknown.reason.contains("Snow depth unknown"));
    }

    #[test]
    fn test_skiing_temperature_bands() {
        assert_eq!(score_skiing(&conditions(-2.0, 45.0, 0.0)).score, 35);
        assert_eq!(score_skiing(&conditions(-20.0, 45.0, 0.0)).score, 35);
        assert_eq!(score_skiing(&conditions(-1.9, 45.0, 0.0)).score, 20);
        assert_eq!(score_skiing(&conditions(2.0, 45.0, 0.0)).score, 20);

        let warm = score_skiing(&conditions(2.1, 45.0, 0.0));
        assert_eq!(warm.score, 0);
        assert!(warm.reason.starts_with("Too warm"));

        let frigid = score_skiing(&conditions(-20.1, 45.0, 0.0));
        assert_eq!(frigid.score, 0);
        assert!(frigid.reason.starts_with("Too extreme"));
    }

    #[test]
    fn test_skiing_snow_bands() {
        let with_snow = |cm: f64| WindowConditions {
            snow_depth_cm: cm,
            snow_reported: true,
            ..conditions(5.0, 45.0, 0.0)
        };
        assert_eq!(score_skiing(&with_snow(30.0)).score, 40);
        assert_eq!(score_skiing(&with_snow(29.9)).score, 20);
        assert_eq!(score_skiing(&with_snow(10.0)).score, 20);
        assert_eq!(score_skiing(&with_snow(9.9)).score, 0);
    }

    #[test]
    fn test_skiing_wind_penalty_floors_before_powder_bonus() {
        // too warm for points, dangerous wind floors at 0, powder needs sub-zero so nothing else
        let s = score_skiing(&conditions(3.0, 61.0, 1.0));
        assert_eq!(s.score, 0);

        // too cold for points: 0 - 30 floors to 0, then powder adds 10
        let s = score_skiing(&conditions(-25.0, 61.0, 1.0));
        assert_eq!(s.score, 10);
        assert!(s.reason.contains("Dangerous wind"));
    }

    #[test]
    fn test_skiing_wind_boundaries() {
        assert_eq!(score_skiing(&conditions(5.0, 30.0, 0.0)).score, 15);
        assert_eq!(score_skiing(&conditions(5.0, 30.1, 0.0)).score, 0);
        assert_eq!(score_skiing(&conditions(-5.0, 60.0, 0.0)).score, 35);
        assert_eq!(score_skiing(&conditions(-5.0, 60.1, 0.0)).score, 5);
    }

    #[test]
    fn test_skiing_powder_bonus_needs_light_cold_precipitation() {
        assert_eq!(score_skiing(&conditions(-5.0, 45.0, 2.0)).score, 45);
        assert_eq!(score_skiing(&conditions(-5.0, 45.0, 2.1)).score, 35);
        assert_eq!(score_skiing(&conditions(-5.0, 45.0, 0.0)).score, 35);
        assert_eq!(score_skiing(&conditions(0.0, 45.0, 1.0)).score, 20);
    }

    #[test]
    fn test_skiing_reason_order() {
        let s = score_skiing(&WindowConditions {
            snow_depth_cm: 50.0,
            snow_reported: true,
            ..conditions(-8.0, 20.0, 0.5)
        });
        let parts: Vec<&str> = s.reason.split(". ").collect();
        assert_eq!(parts.len(), 4);
        assert!(parts[0].starts_with("Ideal skiing temperature"));
        assert!(parts[1].starts_with("Good snow depth"));
        assert!(parts[2].starts_with("Calm winds"));
        assert!(parts[3].starts_with("Light fresh powder"));
    }

    #[test]
    fn test_surfing_ideal_conditions() {
        let s = score_surfing(&WindowConditions {
            clear_ratio: 0.6,
            ..conditions(25.0, 20.0, 0.0)
        });
        assert_eq!(s.score, 100);
        assert!(s.reason.contains("ideal for waves"));
    }

    #[test]
    fn test_surfing_temperature_bands() {
        // calm wind +20, dry +20 on every case
        assert_eq!(score_surfing(&conditions(18.0, 5.0, 0.0)).score, 70);
        assert_eq!(score_surfing(&conditions(32.0, 5.0, 0.0)).score, 70);
        assert_eq!(score_surfing(&conditions(12.0, 5.0, 0.0)).score, 55);
        assert_eq!(score_surfing(&conditions(33.0, 5.0, 0.0)).score, 40);

        let cold = score_surfing(&conditions(11.9, 5.0, 0.0));
        assert_eq!(cold.score, 40);
        assert!(cold.reason.contains("uncomfortable"));
    }

    #[test]
    fn test_surfing_wind_bands() {
        assert_eq!(score_surfing(&conditions(20.0, 10.0, 0.0)).score, 90);
        assert_eq!(score_surfing(&conditions(20.0, 30.0, 0.0)).score, 90);
        assert_eq!(score_surfing(&conditions(20.0, 50.0, 0.0)).score, 65);
        assert_eq!(score_surfing(&conditions(20.0, 9.9, 0.0)).score, 70);

        let storm = score_surfing(&conditions(20.0, 50.1, 0.0));
        assert_eq!(storm.score, 30);
        assert!(storm.reason.contains("Dangerous"));
        assert!(!storm.reason.contains("experienced"));
    }

    #[test]
    fn test_surfing_wind_penalty_floors_at_zero() {
        // cold (0) - 20 floors to 0, then heavy rain -10 is clamped only at the end
        let s = score_surfing(&conditions(5.0, 70.0, 8.0));
        assert_eq!(s.score, 0);

        // cold (0) - 20 floors to 0, dry adds 20
        let s = score_surfing(&conditions(5.0, 70.0, 0.0));
        assert_eq!(s.score, 20);
    }

    #[test]
    fn test_surfing_precipitation_bands() {
        assert_eq!(score_surfing(&conditions(20.0, 20.0, 0.9)).score, 90);
        assert_eq!(score_surfing(&conditions(20.0, 20.0, 1.0)).score, 80);
        assert_eq!(score_surfing(&conditions(20.0, 20.0, 5.0)).score, 60);
    }

    #[test]
    fn test_indoor_baseline_and_fallback_reason() {
        let s = score_indoor_sightseeing(&conditions(10.0, 25.0, 1.0));
        assert_eq!(s.score, 50);
        assert_eq!(s.reason, "Moderate conditions — both viable");
    }

    #[test]
    fn test_indoor_bonuses_stack() {
        let s = score_indoor_sightseeing(&conditions(-3.0, 70.0, 6.0));
        assert_eq!(s.score, 100); // 50 + 30 + 20 + 15 clamped
        assert_eq!(s.reason.split(". ").count(), 3);

        assert_eq!(score_indoor_sightseeing(&conditions(36.0, 10.0, 2.0)).score, 80);
        assert_eq!(score_indoor_sightseeing(&conditions(10.0, 10.0, 4.9)).score, 65);
    }

    #[test]
    fn test_indoor_great_weather_penalty() {
        let s = score_indoor_sightseeing(&conditions(18.0, 19.9, 0.9));
        assert_eq!(s.score, 35);
        assert!(s.reason.contains("Great outdoor weather"));
        assert!(!s.reason.contains("Moderate conditions"));

        assert_eq!(score_indoor_sightseeing(&conditions(28.1, 10.0, 0.0)).score, 50);
        assert_eq!(score_indoor_sightseeing(&conditions(22.0, 20.0, 0.0)).score, 50);
    }

    #[test]
    fn test_outdoor_temperature_bands() {
        // overcast, rain -15, calm +10 in each case
        assert_eq!(score_outdoor_sightseeing(&conditions(15.0, 10.0, 3.0)).score, 30);
        assert_eq!(score_outdoor_sightseeing(&conditions(28.0, 10.0, 3.0)).score, 30);
        assert_eq!(score_outdoor_sightseeing(&conditions(5.0, 10.0, 3.0)).score, 15);
        assert_eq!(score_outdoor_sightseeing(&conditions(35.0, 10.0, 3.0)).score, 10);
        assert_eq!(score_outdoor_sightseeing(&conditions(35.1, 10.0, 3.0)).score, 0);
        assert_eq!(score_outdoor_sightseeing(&conditions(4.9, 10.0, 3.0)).score, 0);
    }

    #[test]
    fn test_outdoor_clear_ratio_bands() {
        let with_ratio = |r: f64| WindowConditions {
            clear_ratio: r,
            ..conditions(0.0, 30.0, 1.0)
        };
        // uncomfortable 0, light showers +10, breezy 0
        assert_eq!(score_outdoor_sightseeing(&with_ratio(0.7)).score, 40);
        assert_eq!(score_outdoor_sightseeing(&with_ratio(0.4)).score, 25);
        let overcast = score_outdoor_sightseeing(&with_ratio(0.39));
        assert_eq!(overcast.score, 10);
        assert!(overcast.reason.contains("overcast"));
    }

    #[test]
    fn test_outdoor_penalties_apply_before_single_clamp() {
        // 0 + 0 - 15 - 20 = -35, clamped once
        let s = score_outdoor_sightseeing(&conditions(-10.0, 60.0, 4.0));
        assert_eq!(s.score, 0);
        assert!(!s.suitable);
        assert_eq!(s.reason.split(". ").count(), 4);

        // comfortable +35, clear +30, rain -15, strong wind -20
        let s = score_outdoor_sightseeing(&WindowConditions {
            clear_ratio: 1.0,
            ..conditions(20.0, 51.0, 2.0)
        });
        assert_eq!(s.score, 30);
    }

    #[test]
    fn test_ranking_ties_keep_evaluation_order() {
        // skiing 35, surfing 40, indoor 50, outdoor 35 (see empty forecast test)
        let ranked = rank_activities(&uniform_forecast(0, 0.0, 0.0, 0.0, 0, None));
        let order: Vec<ActivityType> = ranked.iter().map(|s| s.activity).collect();
        assert_eq!(
            order,
            vec![
                ActivityType::IndoorSightseeing,
                ActivityType::Surfing,
                ActivityType::Skiing,
                ActivityType::OutdoorSightseeing,
            ]
        );
    }

    #[test]
    fn test_only_first_day_is_scored() {
        let mut forecast = uniform_forecast(24, -8.0, 20.0, 0.0, 0, Some(0.5));
        let mut later = forecast.hourly[0].clone();
        later.temperature = 30.0;
        forecast.hourly.extend(std::iter::repeat(later).take(24));

        let skiing = score_of(&rank_activities(&forecast), ActivityType::Skiing);
        assert_eq!(skiing, 90);
    }

    fn arb_hour() -> impl Strategy<Value = HourlyRecord> {
        (
            -40.0..45.0f64,
            0.0..120.0f64,
            0.0..30.0f64,
            prop::sample::select(vec![0, 1, 2, 3, 45, 61, 65, 73, 95]),
            prop::option::of(0.0..3.0f64),
        )
            .prop_map(
                |(temperature, wind_speed, precipitation, weather_code, snow_depth)| HourlyRecord {
                    time: "2026-03-01T00:00".to_string(),
                    temperature,
                    wind_speed,
                    precipitation,
                    weather_code,
                    snow_depth,
                },
            )
    }

    fn arb_forecast() -> impl Strategy<Value = NormalizedForecast> {
        prop::collection::vec(arb_hour(), 0..48).prop_map(|hourly| {
            let current = hourly.first().cloned().unwrap_or(HourlyRecord {
                time: "2026-03-01T00:00".to_string(),
                temperature: 0.0,
                wind_speed: 0.0,
                precipitation: 0.0,
                weather_code: 0,
                snow_depth: None,
            });
            NormalizedForecast {
                location: Location::from_coordinates(0.0, 0.0),
                timezone: "UTC".to_string(),
                current,
                hourly,
                daily: Vec::new(),
            }
        })
    }

    proptest! {
        #[test]
        fn prop_always_four_distinct_activities(forecast in arb_forecast()) {
            let ranked = rank_activities(&forecast);
            prop_assert_eq!(ranked.len(), 4);
            for activity in ActivityType::ALL {
                prop_assert_eq!(ranked.iter().filter(|s| s.activity == activity).count(), 1);
            }
        }

        #[test]
        fn prop_scores_bounded_and_suitability_consistent(forecast in arb_forecast()) {
            for s in rank_activities(&forecast).iter() {
                prop_assert!(s.score <= 100);
                prop_assert_eq!(s.suitable, s.score >= 60);
                prop_assert!(!s.reason.trim().is_empty());
            }
        }

        #[test]
        fn prop_sorted_descending(forecast in arb_forecast()) {
            let ranked = rank_activities(&forecast);
            let scores: Vec<u8> = ranked.iter().map(|s| s.score).collect();
            prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn prop_ranking_is_deterministic(forecast in arb_forecast()) {
            prop_assert_eq!(rank_activities(&forecast), rank_activities(&forecast));
        }
    }
}
