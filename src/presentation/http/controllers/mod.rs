pub mod albums;
pub mod users;
