mod command;
mod handler;
mod result;

pub use command::RegisterUserCommand;
pub use handler::RegisterUserHandler;
pub use result::RegisterUserResult;
