use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::course::application::dto::CourseDto;
use crate::modules::course::domain::{Course, CourseLevel, CourseRepository, Domain, Tag};
use crate::shared::application::Query;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppResult, ResultExt};

use super::{query::GetAllCoursesQuery, result::GetAllCoursesResult};

/// Parsed form of the optional filters
#[derive(Debug)]
struct CourseFilter {
    domain: Option<Domain>,
    level: Option<CourseLevel>,
    tag: Option<Tag>,
}

impl CourseFilter {
    fn parse(query: &GetAllCoursesQuery) -> AppResult<Self> {
        // empty strings mean "no filter"
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        Ok(Self {
            domain: present(&query.domain)
                .map(str::parse::<Domain>)
                .transpose()
                .context("invalid domain filter")?,
            level: present(&query.level)
                .map(str::parse::<CourseLevel>)
                .transpose()
                .context("invalid level filter")?,
            tag: present(&query.tag)
                .map(str::parse::<Tag>)
                .transpose()
                .context("invalid tag filter")?,
        })
    }

    fn matches(&self, course: &Course) -> bool {
        self.domain.map_or(true, |d| course.domain() == d)
            && self.level.map_or(true, |l| course.level() == l)
            && self.tag.map_or(true, |t| course.has_tag(t))
    }
}

/// Query handler listing courses with in-memory filtering
pub struct GetAllCoursesHandler {
    course_repository: Arc<dyn CourseRepository>,
}

impl GetAllCoursesHandler {
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }
}

#[async_trait]
impl Query<GetAllCoursesQuery, GetAllCoursesResult> for GetAllCoursesHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        query: GetAllCoursesQuery,
    ) -> AppResult<GetAllCoursesResult> {
        let filter = CourseFilter::parse(&query)?;
        let courses = self
            .course_repository
            .get_all(ctx)
            .await
            .context("failed to get courses")?;

        Ok(courses
            .iter()
            .filter(|course| filter.matches(course))
            .map(CourseDto::from)
            .collect())
    }
}
