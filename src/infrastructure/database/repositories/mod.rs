mod player_repo;
mod room_repo;
mod score_repo;

pub use player_repo::*;
pub use room_repo::*;
pub use score_repo::*;
