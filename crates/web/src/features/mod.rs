pub mod completed_workouts;
pub mod exercises;
pub mod sessions;
pub mod stats;
pub mod workouts;
