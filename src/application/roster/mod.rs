mod add_guest_player;
mod list_players;
mod remove_player;
mod update_player;

pub use add_guest_player::*;
pub use list_players::*;
pub use remove_player::*;
pub use update_player::*;
