use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::ParseEnumError;

/// Subject area a course belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Programming,
    Design,
    Business,
    Marketing,
    DataScience,
    PersonalDevelopment,
    Photography,
    Music,
    HealthFitness,
    Language,
}

impl Domain {
    pub const ALL: [Domain; 10] = [
        Domain::Programming,
        Domain::Design,
        Domain::Business,
        Domain::Marketing,
        Domain::DataScience,
        Domain::PersonalDevelopment,
        Domain::Photography,
        Domain::Music,
        Domain::HealthFitness,
        Domain::Language,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Programming => "programming",
            Domain::Design => "design",
            Domain::Business => "business",
            Domain::Marketing => "marketing",
            Domain::DataScience => "data_science",
            Domain::PersonalDevelopment => "personal_development",
            Domain::Photography => "photography",
            Domain::Music => "music",
            Domain::HealthFitness => "health_fitness",
            Domain::Language => "language",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .iter()
            .copied()
            .find(|domain| domain.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("domain", s))
    }
}
