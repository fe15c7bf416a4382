pub mod book;
pub mod circulation;
pub mod errors;
pub mod user;
pub mod value_objects;

pub use book::Book;
pub use errors::*;
pub use user::User;
pub use value_objects::*;
