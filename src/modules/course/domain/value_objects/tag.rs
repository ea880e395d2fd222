use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::ParseEnumError;

/// Topic label attached to a course. Stored as its snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Backend,
    Frontend,
    Fullstack,
    Mobile,
    Devops,
    Database,
    Security,
    Testing,
    Api,
    Cloud,
    Ai,
    MachineLearning,
    WebDevelopment,
    GameDevelopment,
    BeginnerFriendly,
    Advanced,
    Certified,
    Free,
    Paid,
}

impl Tag {
    pub const ALL: [Tag; 19] = [
        Tag::Backend,
        Tag::Frontend,
        Tag::Fullstack,
        Tag::Mobile,
        Tag::Devops,
        Tag::Database,
        Tag::Security,
        Tag::Testing,
        Tag::Api,
        Tag::Cloud,
        Tag::Ai,
        Tag::MachineLearning,
        Tag::WebDevelopment,
        Tag::GameDevelopment,
        Tag::BeginnerFriendly,
        Tag::Advanced,
        Tag::Certified,
        Tag::Free,
        Tag::Paid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Backend => "backend",
            Tag::Frontend => "frontend",
            Tag::Fullstack => "fullstack",
            Tag::Mobile => "mobile",
            Tag::Devops => "devops",
            Tag::Database => "database",
            Tag::Security => "security",
            Tag::Testing => "testing",
            Tag::Api => "api",
            Tag::Cloud => "cloud",
            Tag::Ai => "ai",
            Tag::MachineLearning => "machine_learning",
            Tag::WebDevelopment => "web_development",
            Tag::GameDevelopment => "game_development",
            Tag::BeginnerFriendly => "beginner_friendly",
            Tag::Advanced => "advanced",
            Tag::Certified => "certified",
            Tag::Free => "free",
            Tag::Paid => "paid",
        }
    }

    /// Whether the tag describes pricing rather than subject matter.
    pub fn is_pricing(&self) -> bool {
        matches!(self, Tag::Free | Tag::Paid)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("tag", s))
    }
}
