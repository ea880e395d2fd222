use std::fmt;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Multiple-choice question attached to a lesson.
///
/// The correct answer never leaves the aggregate: callers can only test a
/// candidate with `check_answer`. The persistence layer reads it through a
/// crate-private accessor.
#[derive(Clone, PartialEq, Eq)]
pub struct Exercise {
    id: String,
    question: String,
    answers: Vec<String>,
    correct_answer: String,
    order: i32,
}

impl Exercise {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answers: Vec<String>,
        correct_answer: impl Into<String>,
        order: i32,
    ) -> AppResult<Self> {
        let id = id.into();
        let question = question.into();
        let correct_answer = correct_answer.into();

        Validator::validate_required("exercise id", &id)?;
        Validator::validate_required("question", &question)?;
        Self::validate_answers(&answers, &correct_answer)?;

        Ok(Self {
            id,
            question,
            answers,
            correct_answer,
            order,
        })
    }

    fn validate_answers(answers: &[String], correct_answer: &str) -> AppResult<()> {
        if answers.len() < 2 {
            return Err(AppError::ValidationError(
                "at least 2 answers are required".to_string(),
            ));
        }
        Validator::validate_required("correct answer", correct_answer)?;
        if !answers.iter().any(|a| a == correct_answer) {
            return Err(AppError::ValidationError(
                "correct answer must be one of the provided answers".to_string(),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn check_answer(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    pub(crate) fn correct_answer_for_storage(&self) -> &str {
        &self.correct_answer
    }

    pub fn update_question(&mut self, question: impl Into<String>) -> AppResult<()> {
        let question = question.into();
        Validator::validate_required("question", &question)?;
        self.question = question;
        Ok(())
    }

    pub fn update_answers(
        &mut self,
        answers: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> AppResult<()> {
        let correct_answer = correct_answer.into();
        Self::validate_answers(&answers, &correct_answer)?;
        self.answers = answers;
        self.correct_answer = correct_answer;
        Ok(())
    }

    pub fn update_order(&mut self, order: i32) {
        self.order = order;
    }
}

impl fmt::Debug for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exercise")
            .field("id", &self.id)
            .field("question", &self.question)
            .field("answers", &self.answers)
            .field("correct_answer", &"<redacted>")
            .field("order", &self.order)
            .finish()
    }
}
