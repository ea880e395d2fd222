use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::enrollment::application::dto::EnrollmentDto;
use crate::modules::enrollment::domain::EnrollmentRepository;
use crate::shared::application::Query;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::query::GetMyEnrollmentsQuery;

pub struct GetMyEnrollmentsHandler {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl GetMyEnrollmentsHandler {
    pub fn new(enrollment_repository: Arc<dyn EnrollmentRepository>) -> Self {
        Self {
            enrollment_repository,
        }
    }
}

#[async_trait]
impl Query<GetMyEnrollmentsQuery, Vec<EnrollmentDto>> for GetMyEnrollmentsHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        query: GetMyEnrollmentsQuery,
    ) -> AppResult<Vec<EnrollmentDto>> {
        Validator::validate_required("user id", &query.user_id)?;

        let enrollments = self
            .enrollment_repository
            .get_all_by_user_id(ctx, &query.user_id)
            .await
            .context("failed to get enrollments")?;

        Ok(enrollments.iter().map(EnrollmentDto::from).collect())
    }
}
