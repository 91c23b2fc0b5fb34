pub mod camera;
pub mod config;
pub mod controls;
pub mod data;
pub mod globe;
pub mod graph;
pub mod lights;

pub use config::*;
pub use data::*;
