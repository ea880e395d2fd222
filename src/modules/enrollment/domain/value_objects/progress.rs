use serde::Serialize;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

use super::status::Status;

/// Completion percentage (0–100) paired with a status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    percentage: f64,
    status: Status,
}

impl Progress {
    pub fn new(percentage: f64, status: Status) -> AppResult<Self> {
        Validator::validate_percentage(percentage)?;
        Ok(Self { percentage, status })
    }

    pub fn enrolled() -> Self {
        Self {
            percentage: 0.0,
            status: Status::Enrolled,
        }
    }

    pub fn started() -> Self {
        Self {
            percentage: 0.0,
            status: Status::Started,
        }
    }

    pub fn completed() -> Self {
        Self {
            percentage: 100.0,
            status: Status::Completed,
        }
    }

    /// Derive progress from `done` out of `total` units. `touched` marks
    /// work that has begun without finishing any unit.
    pub(crate) fn from_ratio(done: usize, total: usize, touched: bool) -> Self {
        if total == 0 || done >= total {
            return Self::completed();
        }
        let raw = done as f64 * 100.0 / total as f64;
        let percentage = (raw * 100.0).round() / 100.0;
        let status = if done > 0 || touched {
            Status::InProgress
        } else {
            Status::Started
        };
        Self { percentage, status }
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_bounded() {
        assert!(Progress::new(0.0, Status::Started).is_ok());
        assert!(Progress::new(100.0, Status::Completed).is_ok());
        assert!(Progress::new(100.5, Status::Completed).is_err());
        assert!(Progress::new(-1.0, Status::Started).is_err());
    }

    #[test]
    fn ratio_rounds_to_two_places() {
        let progress = Progress::from_ratio(1, 3, false);
        assert_eq!(progress.percentage(), 33.33);
        assert_eq!(progress.status(), Status::InProgress);

        assert_eq!(Progress::from_ratio(0, 3, false).status(), Status::Started);
        assert_eq!(Progress::from_ratio(0, 3, true).status(), Status::InProgress);
        assert!(Progress::from_ratio(3, 3, false).is_completed());
    }
}
