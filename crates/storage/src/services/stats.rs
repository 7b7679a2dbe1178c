use std::collections::HashMap;

use chrono::{DateTime, Datelike, TimeDelta, Utc};

use super::clock::format_hours_minutes;
use crate::dto::stats::{FrequencyBucket, MuscleGroupCount, Period, StatsResponse};
use crate::models::{CompletedWorkout, MuscleGroup};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const TOP_MUSCLE_GROUPS: usize = 5;

/// Totals and muscle groups cover every workout; the frequency chart only
/// the selected period.
pub fn summarize(
    workouts: &[CompletedWorkout],
    period: Period,
    now: DateTime<Utc>,
) -> StatsResponse {
    let total_duration_seconds: i64 = workouts
        .iter()
        .map(|workout| i64::from(workout.duration_seconds))
        .sum();

    let frequency = frequency(workouts, period, now);
    let max_frequency = frequency
        .iter()
        .map(|bucket| bucket.count)
        .max()
        .unwrap_or(0)
        .max(1);

    StatsResponse {
        total_workouts: workouts.len() as u32,
        total_exercises: workouts
            .iter()
            .map(|workout| workout.exercises.len() as u32)
            .sum(),
        total_duration_seconds,
        total_duration_display: format_hours_minutes(total_duration_seconds),
        period,
        frequency,
        max_frequency,
        top_muscle_groups: top_muscle_groups(workouts, TOP_MUSCLE_GROUPS),
    }
}

/// Workout counts per bucket, oldest bucket first
pub fn frequency(
    workouts: &[CompletedWorkout],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<FrequencyBucket> {
    let start = period.start(now);
    let in_period = workouts
        .iter()
        .filter(|workout| workout.completed_at >= start && workout.completed_at <= now);

    match period {
        Period::Week => {
            let days: Vec<_> = (0..7)
                .rev()
                .map(|offset| (now - TimeDelta::days(offset)).date_naive())
                .collect();
            let mut counts = vec![0u32; days.len()];

            for workout in in_period {
                let date = workout.completed_at.date_naive();
                if let Some(index) = days.iter().position(|day| *day == date) {
                    counts[index] += 1;
                }
            }

            days.iter()
                .zip(counts)
                .map(|(day, count)| FrequencyBucket {
                    label: day.format("%a").to_string(),
                    count,
                })
                .collect()
        }
        Period::Month => {
            let mut counts = [0u32; 4];

            for workout in in_period {
                let week = ((workout.completed_at.day() - 1) / 7).min(3) as usize;
                counts[week] += 1;
            }

            counts
                .iter()
                .enumerate()
                .map(|(index, count)| FrequencyBucket {
                    label: format!("Week {}", index + 1),
                    count: *count,
                })
                .collect()
        }
        Period::Year => {
            let mut counts = [0u32; 12];

            for workout in in_period {
                counts[workout.completed_at.month0() as usize] += 1;
            }

            MONTH_LABELS
                .iter()
                .zip(counts)
                .map(|(label, count)| FrequencyBucket {
                    label: label.to_string(),
                    count,
                })
                .collect()
        }
    }
}

/// Exercise counts per muscle group, most trained first
pub fn top_muscle_groups(workouts: &[CompletedWorkout], limit: usize) -> Vec<MuscleGroupCount> {
    let mut counts: HashMap<MuscleGroup, u32> = HashMap::new();

    for exercise in workouts.iter().flat_map(|workout| &workout.exercises) {
        *counts.entry(exercise.muscle_group).or_default() += 1;
    }

    let mut ranked: Vec<MuscleGroupCount> = counts
        .into_iter()
        .map(|(muscle_group, count)| MuscleGroupCount {
            muscle_group,
            count,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.muscle_group.cmp(&b.muscle_group))
    });
    ranked.truncate(limit);
    ranked
}
