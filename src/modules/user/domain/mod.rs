pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::User;
pub use repositories::UserRepository;
pub use value_objects::Role;
