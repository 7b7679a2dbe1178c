use chrono::Utc;
use storage::{
    models::{MuscleGroup, Workout, WorkoutExerciseDetail},
    services::session::ActiveWorkout,
};
use uuid::Uuid;

fn entry(exercise_id: &str, name: &str, sets: i32, rest_time: i32) -> WorkoutExerciseDetail {
    WorkoutExerciseDetail {
        workout_exercise_id: Uuid::new_v4(),
        exercise_id: exercise_id.to_string(),
        name: name.to_string(),
        muscle_group: MuscleGroup::Chest,
        description: String::new(),
        tutorial_url: None,
        image_url: None,
        sets,
        reps: 10,
        rest_time,
        weight: None,
        duration: None,
        display_order: 0,
    }
}

/// Started session over two exercises: 2 sets with 30s rest, then 1 set
pub fn active_workout() -> ActiveWorkout {
    let now = Utc::now();
    let workout = Workout {
        workout_id: Uuid::new_v4(),
        name: "Push day".to_string(),
        description: None,
        duration: None,
        difficulty: None,
        created_at: now,
        updated_at: now,
    };

    let mut session = ActiveWorkout::new(
        &workout,
        vec![entry("1", "Push-ups", 2, 30), entry("4", "Plank", 1, 0)],
    )
    .unwrap();
    session.start().unwrap();
    session
}
