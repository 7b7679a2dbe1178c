//! Building a workout from an editable list of exercises and turning the
//! result into create or update requests.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::dto::workout::{
    CreateWorkoutRequest, DEFAULT_REPS, DEFAULT_SETS, UpdateWorkoutRequest, WorkoutExerciseInput,
};
use crate::models::{Exercise, Workout, WorkoutExerciseDetail};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    #[error("Please enter a workout name")]
    MissingName,

    #[error("Please add at least one exercise to your workout")]
    NoExercises,

    #[error("No exercise at position {0}")]
    IndexOutOfRange(usize),
}

/// An exercise as configured in the draft, before it has a stored order
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub exercise_id: String,
    pub sets: i32,
    pub reps: i32,
    pub rest_time: i32,
    pub weight: Option<Decimal>,
    pub duration: Option<i32>,
}

impl PlannedExercise {
    pub fn new(exercise: &Exercise) -> Self {
        let input = WorkoutExerciseInput::new(exercise.exercise_id.clone());

        Self {
            exercise_id: input.exercise_id,
            sets: input.sets,
            reps: input.reps,
            rest_time: input.rest_time,
            weight: None,
            duration: None,
        }
    }

    /// Zero sets or reps fall back to the defaults
    fn to_input(&self, display_order: usize) -> WorkoutExerciseInput {
        WorkoutExerciseInput {
            exercise_id: self.exercise_id.clone(),
            sets: if self.sets > 0 { self.sets } else { DEFAULT_SETS },
            reps: if self.reps > 0 { self.reps } else { DEFAULT_REPS },
            rest_time: self.rest_time.max(0),
            weight: self.weight,
            duration: self.duration,
            display_order: Some(i32::try_from(display_order).unwrap_or(i32::MAX)),
        }
    }

    fn same_parameters(&self, other: &PlannedExercise) -> bool {
        self.sets == other.sets
            && self.reps == other.reps
            && self.rest_time == other.rest_time
            && self.weight == other.weight
            && self.duration == other.duration
    }
}

impl From<&WorkoutExerciseDetail> for PlannedExercise {
    fn from(detail: &WorkoutExerciseDetail) -> Self {
        Self {
            exercise_id: detail.exercise_id.clone(),
            sets: detail.sets,
            reps: detail.reps,
            rest_time: detail.rest_time,
            weight: detail.weight,
            duration: detail.duration,
        }
    }
}

/// Difference between the stored exercise list and the drafted one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseChanges {
    pub additions: Vec<WorkoutExerciseInput>,
    pub updates: Vec<WorkoutExerciseInput>,
    pub deletions: Vec<String>,
}

impl ExerciseChanges {
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.updates.is_empty() && self.deletions.is_empty()
    }
}

/// Exercises are matched by exercise id. Drafted entries carry their
/// position as display order; retained entries are updated when their
/// parameters or position changed.
pub fn reconcile(stored: &[PlannedExercise], drafted: &[PlannedExercise]) -> ExerciseChanges {
    let stored_by_id: HashMap<&str, (usize, &PlannedExercise)> = stored
        .iter()
        .enumerate()
        .map(|(index, exercise)| (exercise.exercise_id.as_str(), (index, exercise)))
        .collect();
    let drafted_ids: HashSet<&str> = drafted.iter().map(|e| e.exercise_id.as_str()).collect();

    let mut changes = ExerciseChanges::default();

    for (index, exercise) in drafted.iter().enumerate() {
        match stored_by_id.get(exercise.exercise_id.as_str()) {
            None => changes.additions.push(exercise.to_input(index)),
            Some((stored_index, stored)) => {
                if *stored_index != index || !stored.same_parameters(exercise) {
                    changes.updates.push(exercise.to_input(index));
                }
            }
        }
    }

    let mut deleted = HashSet::new();
    for exercise in stored {
        let id = exercise.exercise_id.as_str();
        if !drafted_ids.contains(id) && deleted.insert(id) {
            changes.deletions.push(exercise.exercise_id.clone());
        }
    }

    changes
}

/// What saving a draft should send to the API
#[derive(Debug, Clone)]
pub enum WorkoutSubmission {
    Create(CreateWorkoutRequest),
    Update {
        workout_id: Uuid,
        request: UpdateWorkoutRequest,
    },
}

/// Editable workout, either new or loaded from a stored one
#[derive(Debug, Clone, Default)]
pub struct WorkoutDraft {
    workout_id: Option<Uuid>,
    name: String,
    description: String,
    exercises: Vec<PlannedExercise>,
    stored: Vec<PlannedExercise>,
}

impl WorkoutDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// `entries` must be in display order
    pub fn from_stored(workout: &Workout, entries: &[WorkoutExerciseDetail]) -> Self {
        let exercises: Vec<PlannedExercise> = entries.iter().map(PlannedExercise::from).collect();

        Self {
            workout_id: Some(workout.workout_id),
            name: workout.name.clone(),
            description: workout.description.clone().unwrap_or_default(),
            stored: exercises.clone(),
            exercises,
        }
    }

    pub fn workout_id(&self) -> Option<Uuid> {
        self.workout_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn exercises(&self) -> &[PlannedExercise] {
        &self.exercises
    }

    pub fn add(&mut self, exercise: PlannedExercise) {
        self.exercises.push(exercise);
    }

    pub fn replace(
        &mut self,
        index: usize,
        exercise: PlannedExercise,
    ) -> Result<(), CompositionError> {
        let slot = self
            .exercises
            .get_mut(index)
            .ok_or(CompositionError::IndexOutOfRange(index))?;
        *slot = exercise;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<PlannedExercise, CompositionError> {
        if index >= self.exercises.len() {
            return Err(CompositionError::IndexOutOfRange(index));
        }
        Ok(self.exercises.remove(index))
    }

    pub fn validate(&self) -> Result<(), CompositionError> {
        if self.name.trim().is_empty() {
            return Err(CompositionError::MissingName);
        }

        if self.exercises.is_empty() {
            return Err(CompositionError::NoExercises);
        }

        Ok(())
    }

    pub fn changes(&self) -> ExerciseChanges {
        reconcile(&self.stored, &self.exercises)
    }

    fn description_field(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_string())
    }

    pub fn submit(&self) -> Result<WorkoutSubmission, CompositionError> {
        self.validate()?;

        let name = self.name.trim().to_string();

        let Some(workout_id) = self.workout_id else {
            return Ok(WorkoutSubmission::Create(CreateWorkoutRequest {
                name,
                description: self.description_field(),
                duration: None,
                difficulty: None,
                exercises: self
                    .exercises
                    .iter()
                    .enumerate()
                    .map(|(index, exercise)| exercise.to_input(index))
                    .collect(),
            }));
        };

        let changes = self.changes();

        Ok(WorkoutSubmission::Update {
            workout_id,
            request: UpdateWorkoutRequest {
                name: Some(name),
                // An empty description clears the stored one
                description: Some(self.description.trim().to_string()),
                duration: None,
                difficulty: None,
                exercises: Some(changes.additions),
                exercises_to_update: Some(changes.updates),
                exercises_to_delete: Some(changes.deletions),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::MuscleGroup;

    fn planned(id: &str, sets: i32) -> PlannedExercise {
        PlannedExercise {
            exercise_id: id.to_string(),
            sets,
            reps: 10,
            rest_time: 60,
            weight: None,
            duration: None,
        }
    }

    fn stored_workout() -> (Workout, Vec<WorkoutExerciseDetail>) {
        let workout = Workout {
            workout_id: Uuid::new_v4(),
            name: "Leg day".to_string(),
            description: None,
            duration: None,
            difficulty: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let entries = ["2", "10"]
            .iter()
            .enumerate()
            .map(|(index, id)| WorkoutExerciseDetail {
                workout_exercise_id: Uuid::new_v4(),
                exercise_id: id.to_string(),
                name: format!("Exercise {id}"),
                muscle_group: MuscleGroup::Legs,
                description: String::new(),
                tutorial_url: None,
                image_url: None,
                sets: 3,
                reps: 10,
                rest_time: 60,
                weight: None,
                duration: None,
                display_order: index as i32,
            })
            .collect();

        (workout, entries)
    }

    #[test]
    fn test_reconcile_additions_and_deletions() {
        let stored = vec![planned("1", 3), planned("2", 3)];
        let drafted = vec![planned("2", 3), planned("3", 3)];

        let changes = reconcile(&stored, &drafted);

        let added: Vec<&str> = changes
            .additions
            .iter()
            .map(|e| e.exercise_id.as_str())
            .collect();
        assert_eq!(added, vec!["3"]);
        assert_eq!(changes.additions[0].display_order, Some(1));
        assert_eq!(changes.deletions, vec!["1".to_string()]);
        // "2" moved from position 1 to 0
        assert_eq!(changes.updates.len(), 1);
        assert_eq!(changes.updates[0].display_order, Some(0));
    }

    #[test]
    fn test_reconcile_unchanged_list_is_empty() {
        let stored = vec![planned("1", 3), planned("2", 4)];
        let changes = reconcile(&stored, &stored.clone());
        assert!(changes.is_empty());
    }

    #[test]
    fn test_reconcile_detects_parameter_change() {
        let stored = vec![planned("1", 3)];
        let drafted = vec![planned("1", 5)];

        let changes = reconcile(&stored, &drafted);

        assert!(changes.additions.is_empty());
        assert!(changes.deletions.is_empty());
        assert_eq!(changes.updates.len(), 1);
        assert_eq!(changes.updates[0].sets, 5);
    }

    #[test]
    fn test_validate_requires_name_and_exercises() {
        let mut draft = WorkoutDraft::new();
        draft.add(planned("1", 3));
        assert_eq!(draft.validate(), Err(CompositionError::MissingName));

        draft.set_name("  ");
        assert_eq!(draft.validate(), Err(CompositionError::MissingName));

        draft.set_name("Push");
        draft.remove(0).unwrap();
        assert_eq!(draft.validate(), Err(CompositionError::NoExercises));
        assert_eq!(
            CompositionError::NoExercises.to_string(),
            "Please add at least one exercise to your workout"
        );
    }

    #[test]
    fn test_replace_and_remove_bounds() {
        let mut draft = WorkoutDraft::new();
        draft.add(planned("1", 3));

        draft.replace(0, planned("4", 2)).unwrap();
        assert_eq!(draft.exercises()[0].exercise_id, "4");

        assert_eq!(
            draft.replace(1, planned("5", 2)),
            Err(CompositionError::IndexOutOfRange(1))
        );
        assert_eq!(draft.remove(3), Err(CompositionError::IndexOutOfRange(3)));
    }

    #[test]
    fn test_new_draft_submits_create_request() {
        let mut draft = WorkoutDraft::new();
        draft.set_name(" Full body ");
        draft.set_description("");
        draft.add(planned("9", 0));
        draft.add(planned("1", 4));

        let WorkoutSubmission::Create(request) = draft.submit().unwrap() else {
            panic!("expected a create request");
        };

        assert_eq!(request.name, "Full body");
        assert_eq!(request.description, None);
        assert_eq!(request.exercises.len(), 2);
        assert_eq!(request.exercises[0].sets, DEFAULT_SETS);
        assert_eq!(request.exercises[1].display_order, Some(1));
    }

    #[test]
    fn test_stored_draft_submits_reconciled_update() {
        let (workout, entries) = stored_workout();
        let mut draft = WorkoutDraft::from_stored(&workout, &entries);
        assert!(draft.changes().is_empty());

        draft.remove(1).unwrap();
        draft.add(planned("7", 3));

        let WorkoutSubmission::Update {
            workout_id,
            request,
        } = draft.submit().unwrap()
        else {
            panic!("expected an update request");
        };

        assert_eq!(workout_id, workout.workout_id);
        assert_eq!(request.name.as_deref(), Some("Leg day"));
        assert_eq!(
            request.exercises_to_delete,
            Some(vec!["10".to_string()])
        );
        let added = request.exercises.unwrap();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].exercise_id, "7");
        assert_eq!(request.exercises_to_update, Some(vec![]));
    }

    #[test]
    fn test_cleared_fields_are_sent_on_update() {
        let (mut workout, mut entries) = stored_workout();
        workout.description = Some("Old notes".to_string());
        entries[0].weight = Some(Decimal::new(1000, 1));
        entries[0].duration = Some(30);

        let mut draft = WorkoutDraft::from_stored(&workout, &entries);
        draft.set_description("");
        let mut first = draft.exercises()[0].clone();
        first.weight = None;
        first.duration = None;
        draft.replace(0, first).unwrap();

        let WorkoutSubmission::Update { request, .. } = draft.submit().unwrap() else {
            panic!("expected an update request");
        };

        assert_eq!(request.description.as_deref(), Some(""));
        let updates = request.exercises_to_update.unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].exercise_id, "2");
        assert_eq!(updates[0].weight, None);
        assert_eq!(updates[0].duration, None);
    }
}
