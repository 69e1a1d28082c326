pub mod checkpoint;
pub mod collision;
pub mod input;
pub mod movement;
pub mod player;
pub mod presentation;
