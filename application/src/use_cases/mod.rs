//! Use cases (application services)

pub mod game_controller;
pub mod load_datasets;
pub mod player_name;
