mod completed_workout;
mod exercise;
mod workout;
mod workout_exercise;
mod workout_status;

pub use completed_workout::{CompletedExercise, CompletedSet, CompletedWorkout};
pub use exercise::{Exercise, MuscleGroup, ParseMuscleGroupError};
pub use workout::{DIFFICULTIES, Workout};
pub use workout_exercise::{WorkoutExercise, WorkoutExerciseDetail};
pub use workout_status::WorkoutStatus;
