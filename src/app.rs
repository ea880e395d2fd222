//! Composition root: wires repositories into command and query handlers.

use std::sync::Arc;

use crate::log_info;
use crate::modules::course::application::{
    CourseDto, CoursesByTeacherHandler, CoursesByTeacherQuery, CreateCourseCommand,
    CreateCourseHandler, CreateCourseResult, DeleteCourseCommand, DeleteCourseHandler,
    GetAllCoursesHandler, GetAllCoursesQuery, GetAllCoursesResult, GetCourseDetailsHandler,
    GetCourseDetailsQuery, GetModuleLessonsHandler, GetModuleLessonsQuery, LessonDto,
    ReorderLessonsCommand, ReorderLessonsHandler, UpdateCourseCommand, UpdateCourseHandler,
    UpdateCourseResult,
};
use crate::modules::course::domain::{CourseRepository, LessonRepository, ModuleRepository};
use crate::modules::course::infrastructure::{
    CourseRepositoryImpl, LessonRepositoryImpl, ModuleRepositoryImpl,
};
use crate::modules::enrollment::application::{
    CompleteLessonCommand, CompleteLessonHandler, CompleteLessonResult, EnrollInCourseCommand,
    EnrollInCourseHandler, EnrollInCourseResult, EnrollmentDto, GetMyEnrollmentsHandler,
    GetMyEnrollmentsQuery,
};
use crate::modules::enrollment::domain::EnrollmentRepository;
use crate::modules::enrollment::infrastructure::EnrollmentRepositoryImpl;
use crate::modules::user::application::{
    RegisterUserCommand, RegisterUserHandler, RegisterUserResult,
};
use crate::modules::user::domain::UserRepository;
use crate::modules::user::infrastructure::UserRepositoryImpl;
use crate::shared::application::{Logged, Query, UseCase};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::Database;

type Command<C, R> = Arc<dyn UseCase<C, R>>;
type Read<Q, R> = Arc<dyn Query<Q, R>>;

pub struct Commands {
    pub register_user: Command<RegisterUserCommand, RegisterUserResult>,
    pub create_course: Command<CreateCourseCommand, CreateCourseResult>,
    pub update_course: Command<UpdateCourseCommand, UpdateCourseResult>,
    pub delete_course: Command<DeleteCourseCommand, ()>,
    pub reorder_lessons: Command<ReorderLessonsCommand, ()>,
    pub enroll_in_course: Command<EnrollInCourseCommand, EnrollInCourseResult>,
    pub complete_lesson: Command<CompleteLessonCommand, CompleteLessonResult>,
}

pub struct Queries {
    pub get_all_courses: Read<GetAllCoursesQuery, GetAllCoursesResult>,
    pub get_course_details: Read<GetCourseDetailsQuery, CourseDto>,
    pub courses_by_teacher: Read<CoursesByTeacherQuery, Vec<CourseDto>>,
    pub get_module_lessons: Read<GetModuleLessonsQuery, Vec<LessonDto>>,
    pub get_my_enrollments: Read<GetMyEnrollmentsQuery, Vec<EnrollmentDto>>,
}

/// Repository ports the application is built from
#[derive(Clone)]
pub struct Repositories {
    pub courses: Arc<dyn CourseRepository>,
    pub modules: Arc<dyn ModuleRepository>,
    pub lessons: Arc<dyn LessonRepository>,
    pub users: Arc<dyn UserRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
}

impl Repositories {
    pub fn postgres(db: &Arc<Database>) -> Self {
        Self {
            courses: Arc::new(CourseRepositoryImpl::new(Arc::clone(db))),
            modules: Arc::new(ModuleRepositoryImpl::new(Arc::clone(db))),
            lessons: Arc::new(LessonRepositoryImpl::new(Arc::clone(db))),
            users: Arc::new(UserRepositoryImpl::new(Arc::clone(db))),
            enrollments: Arc::new(EnrollmentRepositoryImpl::new(Arc::clone(db))),
        }
    }
}

/// Every command and query, each wrapped in the logging decorator
pub struct Application {
    pub commands: Commands,
    pub queries: Queries,
}

impl Application {
    pub fn new(repos: Repositories) -> Self {
        let commands = Commands {
            register_user: Arc::new(Logged::new(
                "register_user",
                RegisterUserHandler::new(Arc::clone(&repos.users)),
            )),
            create_course: Arc::new(Logged::new(
                "create_course",
                CreateCourseHandler::new(Arc::clone(&repos.courses), Arc::clone(&repos.users)),
            )),
            update_course: Arc::new(Logged::new(
                "update_course",
                UpdateCourseHandler::new(Arc::clone(&repos.courses)),
            )),
            delete_course: Arc::new(Logged::new(
                "delete_course",
                DeleteCourseHandler::new(Arc::clone(&repos.courses)),
            )),
            reorder_lessons: Arc::new(Logged::new(
                "reorder_lessons",
                ReorderLessonsHandler::new(Arc::clone(&repos.modules), Arc::clone(&repos.lessons)),
            )),
            enroll_in_course: Arc::new(Logged::new(
                "enroll_in_course",
                EnrollInCourseHandler::new(
                    Arc::clone(&repos.enrollments),
                    Arc::clone(&repos.courses),
                    Arc::clone(&repos.users),
                ),
            )),
            complete_lesson: Arc::new(Logged::new(
                "complete_lesson",
                CompleteLessonHandler::new(
                    Arc::clone(&repos.enrollments),
                    Arc::clone(&repos.courses),
                ),
            )),
        };

        let queries = Queries {
            get_all_courses: Arc::new(Logged::new(
                "get_all_courses",
                GetAllCoursesHandler::new(Arc::clone(&repos.courses)),
            )),
            get_course_details: Arc::new(Logged::new(
                "get_course_details",
                GetCourseDetailsHandler::new(Arc::clone(&repos.courses)),
            )),
            courses_by_teacher: Arc::new(Logged::new(
                "courses_by_teacher",
                CoursesByTeacherHandler::new(Arc::clone(&repos.courses)),
            )),
            get_module_lessons: Arc::new(Logged::new(
                "get_module_lessons",
                GetModuleLessonsHandler::new(
                    Arc::clone(&repos.modules),
                    Arc::clone(&repos.lessons),
                ),
            )),
            get_my_enrollments: Arc::new(Logged::new(
                "get_my_enrollments",
                GetMyEnrollmentsHandler::new(Arc::clone(&repos.enrollments)),
            )),
        };

        Self { commands, queries }
    }
}

/// Owns the connection pool and the application built on top of it.
pub struct ApplicationContainer {
    database: Arc<Database>,
    application: Application,
}

impl ApplicationContainer {
    /// Connect the pool described by `config` and wire every handler.
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let database = Arc::new(Database::connect(&config.database)?);
        Ok(Self::from_database(database))
    }

    pub fn from_database(database: Arc<Database>) -> Self {
        let application = Application::new(Repositories::postgres(&database));
        log_info!("Application container initialized");
        Self {
            database,
            application,
        }
    }

    pub fn application(&self) -> &Application {
        &self.application
    }

    pub fn database(&self) -> &Arc<Database> {
        &self.database
    }

    /// Close the pool. Later calls are no-ops and return false.
    pub fn close(&self) -> bool {
        self.database.close()
    }
}
