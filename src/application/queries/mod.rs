pub mod albums;
pub mod users;

pub use albums::AlbumQueryService;
pub use users::UserQueryService;
