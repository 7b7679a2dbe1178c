pub mod completed_workout;
pub mod exercise;
pub mod workout;
