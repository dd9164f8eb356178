mod get_player_history;
mod get_score_history;
mod transfer_points;

pub use get_player_history::*;
pub use get_score_history::*;
pub use transfer_points::*;
