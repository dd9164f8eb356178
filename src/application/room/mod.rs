mod check_user_room_status;
mod create_room;
mod end_room;
mod get_room_by_code;
mod get_room_details;
mod join_room;
mod list_user_rooms;

pub use check_user_room_status::*;
pub use create_room::*;
pub use end_room::*;
pub use get_room_by_code::*;
pub use get_room_details::*;
pub use join_room::*;
pub use list_user_rooms::*;
