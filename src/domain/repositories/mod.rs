pub mod player_repository;
pub mod room_repository;
pub mod score_repository;
pub mod user_directory;

pub use player_repository::*;
pub use room_repository::*;
pub use score_repository::*;
pub use user_directory::*;
