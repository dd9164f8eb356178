pub mod broadcaster;
pub mod entities;
pub mod events;
pub mod repositories;
