pub mod enrollment_repository;

pub use enrollment_repository::EnrollmentRepository;

#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
