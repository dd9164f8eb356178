mod player;
mod room;
mod score_entry;

pub use player::*;
pub use room::*;
pub use score_entry::*;
