pub mod app_state;
pub mod database;
pub mod services;

pub use app_state::AppState;
