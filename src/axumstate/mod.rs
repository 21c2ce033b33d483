use std::sync::{Arc, Mutex};

use crate::config::DEFAULT_MOISTURE_LEVEL;
use crate::error::RelayError;

/// Latest moisture level reported by the sensor, shared by all request handlers.
///
/// Every write is a single assignment under the lock, the last completed write wins.
#[derive(Debug, Clone)]
pub struct MoistureState {
    level: Arc<Mutex<f64>>,
}

impl MoistureState {
    pub fn new(level: f64) -> Self {
        Self {
            level: Arc::new(Mutex::new(level)),
        }
    }

    pub fn level(&self) -> Result<f64, RelayError> {
        self.level
            .lock()
            .map(|level| *level)
            .map_err(|_| RelayError::StatePoisoned)
    }

    pub fn set_level(&self, new_level: f64) -> Result<(), RelayError> {
        let mut level = self.level.lock().map_err(|_| RelayError::StatePoisoned)?;
        *level = new_level;
        Ok(())
    }
}

impl Default for MoistureState {
    fn default() -> Self {
        Self::new(DEFAULT_MOISTURE_LEVEL)
    }
}

/// All shared state involved in http (sensor & client) communication
#[derive(Debug, Clone, Default)]
pub struct AxumState {
    pub moisture: MoistureState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default_level() {
        let state = MoistureState::default();
        assert_eq!(state.level().unwrap(), 50.0);
    }

    #[test]
    fn clones_share_the_same_cell() {
        let state = MoistureState::default();
        let handle = state.clone();

        handle.set_level(12.25).unwrap();
        assert_eq!(state.level().unwrap(), 12.25);
    }

    #[test]
    fn concurrent_writers_leave_one_of_their_values() {
        let state = MoistureState::default();
        let values = [10.0, 20.0, 30.0, 40.0, 55.5, 99.9];

        let threads: Vec<_> = values
            .iter()
            .map(|&value| {
                let state = state.clone();
                std::thread::spawn(move || state.set_level(value).unwrap())
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }

        assert!(values.contains(&state.level().unwrap()));
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let state = MoistureState::default();
        let poisoner = state.clone();

        let _ = std::thread::spawn(move || {
            let _guard = poisoner.level.lock().unwrap();
            panic!("poison the moisture lock");
        })
        .join();

        assert_eq!(state.level(), Err(RelayError::StatePoisoned));
        assert_eq!(state.set_level(1.0), Err(RelayError::StatePoisoned));
    }
}
