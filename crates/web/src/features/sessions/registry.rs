use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use storage::services::session::ActiveWorkout;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

const TICK: Duration = Duration::from_secs(1);

/// Sessions nobody has looked at for this long are dropped
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(4 * 60 * 60);

pub type SharedWorkout = Arc<Mutex<ActiveWorkout>>;

/// A running session and the task that drives its clocks
struct LiveSession {
    workout: SharedWorkout,
    ticker: JoinHandle<()>,
    last_seen: Mutex<Instant>,
}

impl Drop for LiveSession {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

/// In-memory sessions keyed by session id
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, LiveSession>>>,
    idle_timeout: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionRegistry {
    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            idle_timeout,
        }
    }

    /// Register a session and start ticking it once per second
    pub async fn insert(&self, workout: ActiveWorkout) -> (Uuid, SharedWorkout) {
        self.sweep().await;

        let session_id = Uuid::new_v4();
        let workout = Arc::new(Mutex::new(workout));
        let ticker = spawn_ticker(session_id, workout.clone());

        let mut sessions = self.sessions.write().await;
        sessions.insert(
            session_id,
            LiveSession {
                workout: workout.clone(),
                ticker,
                last_seen: Mutex::new(Instant::now()),
            },
        );

        tracing::info!(%session_id, active = sessions.len(), "Session started");

        (session_id, workout)
    }

    pub async fn get(&self, session_id: Uuid) -> Option<SharedWorkout> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&session_id)?;

        *session.last_seen.lock().await = Instant::now();
        Some(session.workout.clone())
    }

    /// Drop a session, stopping its ticker. Returns whether it existed.
    pub async fn remove(&self, session_id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&session_id).is_some();

        if removed {
            tracing::info!(%session_id, "Session discarded");
        }

        removed
    }

    /// Drop sessions idle for longer than the timeout. Returns how many went.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, session| {
            now.duration_since(*session.last_seen.get_mut()) < self.idle_timeout
        });

        let expired = before - sessions.len();
        if expired > 0 {
            tracing::info!(expired, active = sessions.len(), "Expired idle sessions");
        }
        expired
    }

    /// Sweep idle sessions in the background every `period`
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let registry = self.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval.tick().await;

            loop {
                interval.tick().await;
                registry.sweep().await;
            }
        })
    }
}

fn spawn_ticker(session_id: Uuid, workout: SharedWorkout) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;

            let mut workout = workout.lock().await;
            if workout.is_finished() {
                break;
            }
            if workout.tick() {
                tracing::debug!(%session_id, "Rest finished");
            }
        }

        tracing::debug!(%session_id, "Session ticker stopped");
    })
}
