use serde::Serialize;
use utoipa::ToSchema;

use crate::forecast::models::Location;

/// Scores at or above this are considered suitable
pub const SUITABLE_THRESHOLD: u8 = 60;

/// The fixed set of activities we score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Skiing,
    Surfing,
    IndoorSightseeing,
    OutdoorSightseeing,
}

impl ActivityType {
    /// Evaluation order; ties in the ranking keep this order
    pub const ALL: [ActivityType; 4] = [
        Self::Skiing,
        Self::Surfing,
        Self::IndoorSightseeing,
        Self::OutdoorSightseeing,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Skiing => "Skiing",
            Self::Surfing => "Surfing",
            Self::IndoorSightseeing => "Indoor Sightseeing",
            Self::OutdoorSightseeing => "Outdoor Sightseeing",
        }
    }
}

/// One activity's suitability for the analysis window
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActivityScore {
    pub activity: ActivityType,
    pub name: String,
    /// 0 to 100
    pub score: u8,
    pub suitable: bool,
    pub reason: String,
}

impl ActivityScore {
    /// Build a score from an unclamped total and the reason fragments in evaluation order
    pub fn new(activity: ActivityType, raw_score: i32, reasons: &[String]) -> Self {
        let score = raw_score.clamp(0, 100) as u8;
        Self {
            activity,
            name: activity.display_name().to_string(),
            score,
            suitable: score >= SUITABLE_THRESHOLD,
            reason: reasons.join(". "),
        }
    }
}

/// All four activity scores, best first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedActivities(Vec<ActivityScore>);

impl RankedActivities {
    /// Sort by score descending; the sort is stable so equal scores keep evaluation order
    pub fn from_scores(mut scores: Vec<ActivityScore>) -> Self {
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        Self(scores)
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> std::slice::Iter<'_, ActivityScore> {
        self.0.iter()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest scoring activity
    pub fn best(&self) -> Option<&ActivityScore> {
        self.0.first()
    }

    /// Score for a specific activity regardless of its rank
    #[allow(dead_code)]
    pub fn get(&self, activity: ActivityType) -> Option<&ActivityScore> {
        self.0.iter().find(|s| s.activity == activity)
    }

    pub fn into_inner(self) -> Vec<ActivityScore> {
        self.0
    }
}

// ============================================================================
// API Response Models
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct ActivitiesResponse {
    pub location: Location,
    pub timezone: String,
    pub activities: Vec<ActivityScore>,
}
