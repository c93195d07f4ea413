pub mod albums;
pub mod users;

pub use albums::AlbumCounterDto;
pub use users::UserDto;
