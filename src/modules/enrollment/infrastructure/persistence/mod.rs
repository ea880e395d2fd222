pub mod enrollment_repository_impl;

pub use enrollment_repository_impl::EnrollmentRepositoryImpl;
