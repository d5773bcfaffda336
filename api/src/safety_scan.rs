//! Risk assessment of a recipient address.

use serde::Deserialize;
use serde::Serialize;

/// Highest score a single component can reach.
pub const MAX_COMPONENT_SCORE: u32 = 10;

/// Letter grade summarising an assessment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::Display,
)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Maps a percentage (0 to 100) onto a grade.
    pub fn from_percentage(percent: u32) -> Self {
        match percent {
            90.. => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub name: String,
    pub score: u32,
    pub description: String,
}

impl ComponentScore {
    pub fn new(name: impl Into<String>, score: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: score.min(MAX_COMPONENT_SCORE),
            description: description.into(),
        }
    }

    /// Width of the score bar, 0 to 100.
    pub fn percentage(&self) -> u32 {
        self.score * 100 / MAX_COMPONENT_SCORE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    components: Vec<ComponentScore>,
}

impl RiskAssessment {
    pub fn new(components: Vec<ComponentScore>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[ComponentScore] {
        &self.components
    }

    pub fn score(&self) -> u32 {
        self.components.iter().map(|c| c.score).sum()
    }

    pub fn max_score(&self) -> u32 {
        self.components.len() as u32 * MAX_COMPONENT_SCORE
    }

    /// An assessment with no components grades as F.
    pub fn grade(&self) -> Grade {
        match self.max_score() {
            0 => Grade::F,
            max => Grade::from_percentage(self.score() * 100 / max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries() {
        assert_eq!(Grade::from_percentage(100), Grade::A);
        assert_eq!(Grade::from_percentage(90), Grade::A);
        assert_eq!(Grade::from_percentage(89), Grade::B);
        assert_eq!(Grade::from_percentage(70), Grade::C);
        assert_eq!(Grade::from_percentage(60), Grade::D);
        assert_eq!(Grade::from_percentage(59), Grade::F);
    }

    #[test]
    fn twenty_eight_of_thirty_is_an_a() {
        let assessment = RiskAssessment::new(vec![
            ComponentScore::new("Address Validity", 10, ""),
            ComponentScore::new("Chain History", 9, ""),
            ComponentScore::new("Scam Database", 9, ""),
        ]);
        assert_eq!(assessment.score(), 28);
        assert_eq!(assessment.max_score(), 30);
        assert_eq!(assessment.grade(), Grade::A);
    }

    #[test]
    fn component_scores_are_capped() {
        let component = ComponentScore::new("x", 14, "");
        assert_eq!(component.score, 10);
        assert_eq!(component.percentage(), 100);
        assert_eq!(RiskAssessment::new(vec![]).grade(), Grade::F);
    }
}
