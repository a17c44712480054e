use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MAX_SELECTED_INSTRUCTIONS: usize = 3;

/// Personalization options a student can switch on for the tutor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionToggle {
    SimpleLanguage,
    RealWorldExamples,
    CodingApplications,
    StepByStep,
    Visual,
    DataScience,
}

impl InstructionToggle {
    pub const ALL: [InstructionToggle; 6] = [
        InstructionToggle::SimpleLanguage,
        InstructionToggle::RealWorldExamples,
        InstructionToggle::CodingApplications,
        InstructionToggle::StepByStep,
        InstructionToggle::Visual,
        InstructionToggle::DataScience,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::SimpleLanguage => "simple_language",
            Self::RealWorldExamples => "real_world_examples",
            Self::CodingApplications => "coding_applications",
            Self::StepByStep => "step_by_step",
            Self::Visual => "visual",
            Self::DataScience => "data_science",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SimpleLanguage => "Use simple language",
            Self::RealWorldExamples => "Include real-world examples",
            Self::CodingApplications => "Focus on coding applications",
            Self::StepByStep => "Step-by-step breakdown",
            Self::Visual => "Visual explanations",
            Self::DataScience => "Connect to Data Science",
        }
    }

    /// Text appended to the system instruction when the toggle is active.
    pub fn fragment(&self) -> &'static str {
        match self {
            Self::SimpleLanguage => {
                "Always use simple, easy-to-understand language without complex jargon."
            }
            Self::RealWorldExamples => "Always provide real-world examples and practical scenarios.",
            Self::CodingApplications => {
                "Emphasize how to implement concepts in Python or programming."
            }
            Self::StepByStep => {
                "Break down explanations into very detailed step-by-step instructions."
            }
            Self::Visual => "Describe concepts in visual terms (diagrams, graphs) when possible.",
            Self::DataScience => {
                "Always relate concepts to data science and machine learning applications."
            }
        }
    }
}

impl FromStr for InstructionToggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == s || t.label() == s)
            .ok_or_else(|| format!("Invalid instruction toggle: {}", s))
    }
}

impl fmt::Display for InstructionToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
