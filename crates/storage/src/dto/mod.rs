pub mod completed_workout;
pub mod exercise;
pub mod session;
pub mod stats;
pub mod workout;
