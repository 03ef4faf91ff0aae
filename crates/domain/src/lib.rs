#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod mission;
mod name;
mod probe;
mod render;
mod service;
mod template;

pub use error::*;
pub use exercise::*;
pub use mission::{Mission, MissionExercise, MissionOptions, build_mission, select};
pub use name::*;
pub use probe::*;
pub use render::*;
pub use service::*;
pub use template::*;
