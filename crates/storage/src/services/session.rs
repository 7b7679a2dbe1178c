//! Active workout progression.
//!
//! A session walks a fixed list of planned exercises with two cursors,
//! `(exercise_index, set_index)`. Completing a set either moves to the next
//! set of the same exercise (arming the rest countdown), rolls over to the
//! first set of the next exercise, or finishes the workout. The captured set
//! data starts as a copy of the plan and is edited in place while training.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use super::clock::format_clock;
use super::countdown::Countdown;
use crate::dto::completed_workout::RecordCompletedWorkoutRequest;
use crate::dto::session::{RestState, SessionResponse, UpdateSetRequest};
use crate::models::{
    CompletedExercise, CompletedSet, Workout, WorkoutExerciseDetail, WorkoutStatus,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Workout has no exercises")]
    EmptyWorkout,

    #[error("Exercise '{0}' has no sets")]
    NoSets(String),

    #[error("Workout has not been started")]
    NotStarted,

    #[error("Workout has already been started")]
    AlreadyStarted,

    #[error("Workout is no longer active")]
    Finished,

    #[error("Already at the first set")]
    AtFirstSet,

    #[error("Already at the last set")]
    AtLastSet,

    #[error("No set {set_index} for exercise {exercise_index}")]
    SetOutOfRange {
        exercise_index: usize,
        set_index: usize,
    },
}

/// What happened when the current set was completed
#[derive(Debug, Clone)]
pub enum SetOutcome {
    /// Moved to the next set of the same exercise
    NextSet { rest_seconds: u32 },
    /// Moved to the first set of the next exercise, no rest
    NextExercise,
    /// The last set of the last exercise was completed
    Finished(Box<RecordCompletedWorkoutRequest>),
}

#[derive(Debug, Clone)]
pub struct ActiveWorkout {
    workout_id: Uuid,
    name: String,
    description: Option<String>,
    exercises: Vec<WorkoutExerciseDetail>,
    exercise_index: usize,
    set_index: usize,
    rest: Option<Countdown>,
    elapsed_seconds: u32,
    timer_running: bool,
    status: WorkoutStatus,
    started_at: Option<DateTime<Utc>>,
    completed: Vec<CompletedExercise>,
    /// Finished record not yet acknowledged as stored
    unsaved: Option<RecordCompletedWorkoutRequest>,
    completed_workout_id: Option<Uuid>,
}

impl ActiveWorkout {
    pub fn new(
        workout: &Workout,
        exercises: Vec<WorkoutExerciseDetail>,
    ) -> Result<Self, SessionError> {
        if exercises.is_empty() {
            return Err(SessionError::EmptyWorkout);
        }

        if let Some(exercise) = exercises.iter().find(|exercise| exercise.sets < 1) {
            return Err(SessionError::NoSets(exercise.name.clone()));
        }

        let completed = exercises.iter().map(planned_completion).collect();

        Ok(Self {
            workout_id: workout.workout_id,
            name: workout.name.clone(),
            description: workout.description.clone(),
            exercises,
            exercise_index: 0,
            set_index: 0,
            rest: None,
            elapsed_seconds: 0,
            timer_running: true,
            status: WorkoutStatus::NotStarted,
            started_at: None,
            completed,
            unsaved: None,
            completed_workout_id: None,
        })
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.status {
            WorkoutStatus::NotStarted => {
                self.status = WorkoutStatus::InProgress;
                self.started_at = Some(Utc::now());
                Ok(())
            }
            WorkoutStatus::InProgress => Err(SessionError::AlreadyStarted),
            WorkoutStatus::Completed | WorkoutStatus::Canceled => Err(SessionError::Finished),
        }
    }

    pub fn workout_id(&self) -> Uuid {
        self.workout_id
    }

    pub fn status(&self) -> WorkoutStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    pub fn set_index(&self) -> usize {
        self.set_index
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn is_resting(&self) -> bool {
        self.rest.is_some()
    }

    pub fn rest(&self) -> Option<&Countdown> {
        self.rest.as_ref()
    }

    pub fn current_exercise(&self) -> &WorkoutExerciseDetail {
        &self.exercises[self.exercise_index]
    }

    pub fn completed_exercises(&self) -> &[CompletedExercise] {
        &self.completed
    }

    pub fn completed_workout_id(&self) -> Option<Uuid> {
        self.completed_workout_id
    }

    /// Remember where the finished workout was stored
    pub fn set_completed_workout_id(&mut self, id: Uuid) {
        self.completed_workout_id = Some(id);
        self.unsaved = None;
    }

    /// The finished record while it has not been stored yet
    pub fn unsaved_record(&self) -> Option<&RecordCompletedWorkoutRequest> {
        self.unsaved.as_ref()
    }

    fn set_count(&self, exercise_index: usize) -> usize {
        usize::try_from(self.exercises[exercise_index].sets).unwrap_or(0)
    }

    pub fn is_first_set(&self) -> bool {
        self.exercise_index == 0 && self.set_index == 0
    }

    pub fn is_last_set_of_exercise(&self) -> bool {
        self.set_index + 1 >= self.set_count(self.exercise_index)
    }

    pub fn is_last_set(&self) -> bool {
        self.exercise_index + 1 == self.exercises.len() && self.is_last_set_of_exercise()
    }

    pub fn total_sets(&self) -> usize {
        (0..self.exercises.len()).map(|i| self.set_count(i)).sum()
    }

    /// Share of planned sets before the cursor
    pub fn progress_percent(&self) -> f64 {
        if self.status == WorkoutStatus::Completed {
            return 100.0;
        }

        let done: usize =
            (0..self.exercise_index).map(|i| self.set_count(i)).sum::<usize>() + self.set_index;

        done as f64 / self.total_sets() as f64 * 100.0
    }

    /// Up to three exercises from the cursor, skipping the current one when
    /// its last set is up.
    pub fn upcoming(&self) -> &[WorkoutExerciseDetail] {
        let end = (self.exercise_index + 3).min(self.exercises.len());
        let start = self.exercise_index + usize::from(self.is_last_set_of_exercise());

        &self.exercises[start.min(end)..end]
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.status {
            WorkoutStatus::InProgress => Ok(()),
            WorkoutStatus::NotStarted => Err(SessionError::NotStarted),
            WorkoutStatus::Completed | WorkoutStatus::Canceled => Err(SessionError::Finished),
        }
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        Ok(())
    }

    /// On a completed session whose record was never stored, hands the same
    /// record out again so saving can be retried.
    pub fn complete_set(&mut self) -> Result<SetOutcome, SessionError> {
        if let Some(record) = &self.unsaved {
            return Ok(SetOutcome::Finished(Box::new(record.clone())));
        }

        self.ensure_in_progress()?;

        if self.is_last_set() {
            let record = self.finish(Utc::now());
            return Ok(SetOutcome::Finished(Box::new(record)));
        }

        if self.is_last_set_of_exercise() {
            self.exercise_index += 1;
            self.set_index = 0;
            self.rest = None;
            return Ok(SetOutcome::NextExercise);
        }

        let rest_seconds = u32::try_from(self.current_exercise().rest_time).unwrap_or(0);
        self.set_index += 1;
        self.rest = if rest_seconds > 0 {
            let mut countdown = Countdown::new(rest_seconds);
            countdown.start();
            if !self.timer_running {
                countdown.pause();
            }
            Some(countdown)
        } else {
            None
        };

        Ok(SetOutcome::NextSet { rest_seconds })
    }

    fn finish(&mut self, completed_at: DateTime<Utc>) -> RecordCompletedWorkoutRequest {
        self.status = WorkoutStatus::Completed;
        self.rest = None;

        let record = RecordCompletedWorkoutRequest {
            workout_id: Some(self.workout_id),
            name: self.name.clone(),
            description: self.description.clone(),
            completed_at: Some(completed_at),
            duration_seconds: i32::try_from(self.elapsed_seconds).unwrap_or(i32::MAX),
            exercises: self.completed.clone(),
        };
        self.unsaved = Some(record.clone());

        record
    }

    /// Ends the rest period early
    pub fn finish_rest(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.rest = None;
        Ok(())
    }

    pub fn previous_set(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;

        if self.set_index > 0 {
            self.set_index -= 1;
        } else if self.exercise_index > 0 {
            self.exercise_index -= 1;
            self.set_index = self.set_count(self.exercise_index) - 1;
        } else {
            return Err(SessionError::AtFirstSet);
        }

        self.rest = None;
        Ok(())
    }

    pub fn next_set(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;

        if !self.is_last_set_of_exercise() {
            self.set_index += 1;
        } else if self.exercise_index + 1 < self.exercises.len() {
            self.exercise_index += 1;
            self.set_index = 0;
        } else {
            return Err(SessionError::AtLastSet);
        }

        self.rest = None;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.timer_running = false;
        if let Some(rest) = self.rest.as_mut() {
            rest.pause();
        }
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.timer_running = true;
        if let Some(rest) = self.rest.as_mut() {
            rest.resume();
        }
        Ok(())
    }

    /// Returns whether the clock is running afterwards
    pub fn toggle_pause(&mut self) -> Result<bool, SessionError> {
        if self.timer_running {
            self.pause()?;
        } else {
            self.resume()?;
        }
        Ok(self.timer_running)
    }

    pub fn update_set(
        &mut self,
        exercise_index: usize,
        set_index: usize,
        patch: &UpdateSetRequest,
    ) -> Result<&CompletedSet, SessionError> {
        self.ensure_active()?;

        let set = self
            .completed
            .get_mut(exercise_index)
            .and_then(|exercise| exercise.completed_sets.get_mut(set_index))
            .ok_or(SessionError::SetOutOfRange {
                exercise_index,
                set_index,
            })?;

        if let Some(reps) = patch.reps {
            set.reps = reps;
        }
        if let Some(weight) = patch.weight {
            set.weight = Some(weight);
        }
        if let Some(duration) = patch.duration {
            set.duration = Some(duration);
        }

        Ok(set)
    }

    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.status = WorkoutStatus::Canceled;
        self.rest = None;
        Ok(())
    }

    /// One-second tick. Returns `true` when this tick ended the rest period.
    pub fn tick(&mut self) -> bool {
        if self.status != WorkoutStatus::InProgress || !self.timer_running {
            return false;
        }

        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);

        let rest_over = self.rest.as_mut().is_some_and(Countdown::tick);
        if rest_over {
            self.rest = None;
        }
        rest_over
    }

    pub fn snapshot(&self, session_id: Uuid) -> SessionResponse {
        SessionResponse {
            session_id,
            workout_id: self.workout_id,
            workout_name: self.name.clone(),
            status: self.status,
            exercise_index: self.exercise_index,
            set_index: self.set_index,
            total_exercises: self.exercises.len(),
            current_exercise: (!self.is_finished()).then(|| self.current_exercise().clone()),
            resting: self.is_resting(),
            rest: self.rest.as_ref().map(|rest| RestState {
                duration: rest.duration(),
                remaining: rest.remaining(),
                paused: rest.is_paused(),
                progress_percent: rest.progress_percent(),
            }),
            elapsed_seconds: self.elapsed_seconds,
            elapsed_display: format_clock(self.elapsed_seconds),
            timer_running: self.timer_running,
            progress_percent: self.progress_percent(),
            is_first_set: self.is_first_set(),
            is_last_set: self.is_last_set(),
            upcoming: self.upcoming().to_vec(),
            completed_exercises: self.completed.clone(),
            completed_workout_id: self.completed_workout_id,
        }
    }
}

/// Captured data starts out as the plan: one set per planned set
fn planned_completion(exercise: &WorkoutExerciseDetail) -> CompletedExercise {
    let planned_set = CompletedSet {
        reps: exercise.reps,
        weight: exercise.weight,
        duration: exercise.duration,
    };

    CompletedExercise {
        exercise_id: exercise.exercise_id.clone(),
        name: exercise.name.clone(),
        muscle_group: exercise.muscle_group,
        sets: exercise.sets,
        reps: exercise.reps,
        rest_time: exercise.rest_time,
        weight: exercise.weight,
        duration: exercise.duration,
        completed_sets: vec![planned_set; usize::try_from(exercise.sets).unwrap_or(0)],
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::MuscleGroup;

    fn workout() -> Workout {
        Workout {
            workout_id: Uuid::new_v4(),
            name: "Upper body".to_string(),
            description: Some("Push and pull".to_string()),
            duration: Some(45),
            difficulty: Some("intermediate".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn entry(id: &str, sets: i32, rest_time: i32) -> WorkoutExerciseDetail {
        WorkoutExerciseDetail {
            workout_exercise_id: Uuid::new_v4(),
            exercise_id: id.to_string(),
            name: format!("Exercise {id}"),
            muscle_group: MuscleGroup::Chest,
            description: String::new(),
            tutorial_url: None,
            image_url: None,
            sets,
            reps: 10,
            rest_time,
            weight: Some(Decimal::new(600, 1)),
            duration: None,
            display_order: 0,
        }
    }

    fn started(exercises: Vec<WorkoutExerciseDetail>) -> ActiveWorkout {
        let mut session = ActiveWorkout::new(&workout(), exercises).unwrap();
        session.start().unwrap();
        session
    }

    #[test]
    fn test_new_rejects_empty_workout() {
        let result = ActiveWorkout::new(&workout(), vec![]);
        assert_eq!(result.unwrap_err(), SessionError::EmptyWorkout);
    }

    #[test]
    fn test_new_rejects_exercise_without_sets() {
        let result = ActiveWorkout::new(&workout(), vec![entry("1", 3, 60), entry("2", 0, 60)]);
        assert_eq!(
            result.unwrap_err(),
            SessionError::NoSets("Exercise 2".to_string())
        );
    }

    #[test]
    fn test_completed_sets_are_prefilled_from_plan() {
        let session = started(vec![entry("1", 3, 60), entry("2", 2, 60)]);

        let completed = session.completed_exercises();
        assert_eq!(completed.len(), 2);
        assert_eq!(completed[0].completed_sets.len(), 3);
        assert_eq!(completed[1].completed_sets.len(), 2);
        assert_eq!(completed[0].completed_sets[0].reps, 10);
        assert_eq!(
            completed[0].completed_sets[0].weight,
            Some(Decimal::new(600, 1))
        );
    }

    #[test]
    fn test_complete_set_requires_start() {
        let mut session = ActiveWorkout::new(&workout(), vec![entry("1", 2, 60)]).unwrap();
        assert_eq!(
            session.complete_set().unwrap_err(),
            SessionError::NotStarted
        );
    }

    #[test]
    fn test_start_twice_fails() {
        let mut session = started(vec![entry("1", 2, 60)]);
        assert_eq!(session.start().unwrap_err(), SessionError::AlreadyStarted);
    }

    #[test]
    fn test_progression_through_sets_and_exercises() {
        let mut session = started(vec![entry("1", 2, 30), entry("2", 1, 60)]);

        match session.complete_set().unwrap() {
            SetOutcome::NextSet { rest_seconds } => assert_eq!(rest_seconds, 30),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!((session.exercise_index(), session.set_index()), (0, 1));
        assert!(session.is_resting());

        assert!(matches!(
            session.complete_set().unwrap(),
            SetOutcome::NextExercise
        ));
        assert_eq!((session.exercise_index(), session.set_index()), (1, 0));
        assert!(!session.is_resting());

        match session.complete_set().unwrap() {
            SetOutcome::Finished(record) => {
                assert_eq!(record.workout_id, Some(session.workout_id()));
                assert_eq!(record.name, "Upper body");
                assert_eq!(record.exercises.len(), 2);
                assert!(record.completed_at.is_some());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(session.status(), WorkoutStatus::Completed);
        assert_eq!(session.progress_percent(), 100.0);

        assert_eq!(session.complete_set().unwrap_err(), SessionError::Finished);
    }

    #[test]
    fn test_unsaved_record_is_handed_out_again() {
        let mut session = started(vec![entry("1", 1, 0)]);

        let SetOutcome::Finished(first) = session.complete_set().unwrap() else {
            panic!("expected the workout to finish");
        };
        assert!(session.unsaved_record().is_some());

        let SetOutcome::Finished(retry) = session.complete_set().unwrap() else {
            panic!("expected the same record again");
        };
        assert_eq!(retry.completed_at, first.completed_at);
        assert_eq!(retry.exercises.len(), 1);

        session.set_completed_workout_id(Uuid::new_v4());
        assert!(session.unsaved_record().is_none());
        assert_eq!(session.complete_set().unwrap_err(), SessionError::Finished);
    }

    #[test]
    fn test_every_planned_set_is_visited_once() {
        let mut session = started(vec![entry("1", 3, 10), entry("2", 1, 10), entry("3", 4, 10)]);
        let total = session.total_sets();

        let mut completions = 0;
        loop {
            completions += 1;
            if let SetOutcome::Finished(_) = session.complete_set().unwrap() {
                break;
            }
        }

        assert_eq!(completions, total);
        assert_eq!(total, 8);
    }

    #[test]
    fn test_zero_rest_time_skips_rest() {
        let mut session = started(vec![entry("1", 2, 0)]);

        match session.complete_set().unwrap() {
            SetOutcome::NextSet { rest_seconds } => assert_eq!(rest_seconds, 0),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!session.is_resting());
    }

    #[test]
    fn test_tick_counts_elapsed_and_ends_rest() {
        let mut session = started(vec![entry("1", 2, 2)]);
        session.complete_set().unwrap();

        assert!(!session.tick());
        assert!(session.is_resting());
        assert_eq!(session.rest().unwrap().remaining(), 1);

        assert!(session.tick());
        assert!(!session.is_resting());
        assert_eq!(session.elapsed_seconds(), 2);
    }

    #[test]
    fn test_tick_ignored_before_start() {
        let mut session = ActiveWorkout::new(&workout(), vec![entry("1", 2, 60)]).unwrap();
        session.tick();
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn test_pause_stops_clock_and_rest() {
        let mut session = started(vec![entry("1", 2, 5)]);
        session.complete_set().unwrap();
        session.tick();

        assert!(!session.toggle_pause().unwrap());
        session.tick();
        session.tick();

        assert_eq!(session.elapsed_seconds(), 1);
        assert_eq!(session.rest().unwrap().remaining(), 4);
        assert!(session.rest().unwrap().is_paused());

        assert!(session.toggle_pause().unwrap());
        session.tick();
        assert_eq!(session.elapsed_seconds(), 2);
        assert_eq!(session.rest().unwrap().remaining(), 3);
    }

    #[test]
    fn test_rest_armed_while_paused_starts_paused() {
        let mut session = started(vec![entry("1", 2, 5)]);
        session.pause().unwrap();
        session.complete_set().unwrap();

        assert!(session.rest().unwrap().is_paused());
    }

    #[test]
    fn test_finish_rest() {
        let mut session = started(vec![entry("1", 2, 60)]);
        session.complete_set().unwrap();
        assert!(session.is_resting());

        session.finish_rest().unwrap();
        assert!(!session.is_resting());
        assert_eq!(session.set_index(), 1);
    }

    #[test]
    fn test_navigation_boundaries() {
        let mut session = started(vec![entry("1", 2, 60), entry("2", 2, 60)]);

        assert!(session.is_first_set());
        assert_eq!(session.previous_set().unwrap_err(), SessionError::AtFirstSet);

        session.next_set().unwrap();
        session.next_set().unwrap();
        assert_eq!((session.exercise_index(), session.set_index()), (1, 0));

        session.previous_set().unwrap();
        assert_eq!((session.exercise_index(), session.set_index()), (0, 1));

        session.next_set().unwrap();
        session.next_set().unwrap();
        assert!(session.is_last_set());
        assert_eq!(session.next_set().unwrap_err(), SessionError::AtLastSet);
    }

    #[test]
    fn test_navigation_clears_rest() {
        let mut session = started(vec![entry("1", 3, 60)]);
        session.complete_set().unwrap();
        assert!(session.is_resting());

        session.previous_set().unwrap();
        assert!(!session.is_resting());
        assert_eq!(session.set_index(), 0);
    }

    #[test]
    fn test_update_set_merges_partial_data() {
        let mut session = started(vec![entry("1", 2, 60)]);

        let patch = UpdateSetRequest {
            reps: Some(8),
            weight: None,
            duration: Some(40),
        };
        let set = session.update_set(0, 1, &patch).unwrap().clone();

        assert_eq!(set.reps, 8);
        assert_eq!(set.weight, Some(Decimal::new(600, 1)));
        assert_eq!(set.duration, Some(40));
        assert_eq!(session.completed_exercises()[0].completed_sets[0].reps, 10);
    }

    #[test]
    fn test_update_set_out_of_range() {
        let mut session = started(vec![entry("1", 2, 60)]);

        let result = session.update_set(0, 2, &UpdateSetRequest::default());
        assert_eq!(
            result.unwrap_err(),
            SessionError::SetOutOfRange {
                exercise_index: 0,
                set_index: 2
            }
        );
        assert!(session.update_set(1, 0, &UpdateSetRequest::default()).is_err());
    }

    #[test]
    fn test_progress_accounts_for_uneven_set_counts() {
        let mut session = started(vec![entry("1", 1, 0), entry("2", 3, 0)]);
        assert_eq!(session.progress_percent(), 0.0);

        session.complete_set().unwrap();
        assert_eq!(session.progress_percent(), 25.0);

        session.complete_set().unwrap();
        assert_eq!(session.progress_percent(), 50.0);
    }

    #[test]
    fn test_upcoming_exercises() {
        let mut session = started(vec![
            entry("1", 2, 0),
            entry("2", 1, 0),
            entry("3", 1, 0),
            entry("4", 1, 0),
        ]);

        let ids: Vec<&str> = session
            .upcoming()
            .iter()
            .map(|e| e.exercise_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        session.complete_set().unwrap();
        let ids: Vec<&str> = session
            .upcoming()
            .iter()
            .map(|e| e.exercise_id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3"]);

        session.complete_set().unwrap();
        session.complete_set().unwrap();
        session.complete_set().unwrap();
        assert!(session.is_last_set());
        assert!(session.upcoming().is_empty());
    }

    #[test]
    fn test_cancel_ends_session() {
        let mut session = started(vec![entry("1", 2, 60)]);
        session.complete_set().unwrap();

        session.cancel().unwrap();

        assert_eq!(session.status(), WorkoutStatus::Canceled);
        assert!(!session.is_resting());
        assert_eq!(session.cancel().unwrap_err(), SessionError::Finished);
        assert_eq!(session.next_set().unwrap_err(), SessionError::Finished);
        assert!(!session.tick());
    }

    #[test]
    fn test_snapshot() {
        let mut session = started(vec![entry("1", 2, 90), entry("2", 1, 0)]);
        session.complete_set().unwrap();
        session.tick();

        let snapshot = session.snapshot(Uuid::nil());

        assert_eq!(snapshot.status, WorkoutStatus::InProgress);
        assert_eq!(snapshot.set_index, 1);
        assert_eq!(snapshot.total_exercises, 2);
        assert_eq!(snapshot.elapsed_display, "00:01");
        assert!(snapshot.resting);
        assert_eq!(snapshot.rest.as_ref().unwrap().remaining, 89);
        assert_eq!(
            snapshot.current_exercise.as_ref().unwrap().exercise_id,
            "1"
        );
        assert!(!snapshot.is_first_set);
        assert!(!snapshot.is_last_set);
    }
}
