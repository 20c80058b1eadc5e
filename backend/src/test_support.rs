//! Shared doubles for unit tests. Only compiled under `cfg(test)`.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::NewAdvocate;

/// Clock that only moves when told to.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, delta: Duration) {
        let delta = match TimeDelta::from_std(delta) {
            Ok(delta) => delta,
            Err(error) => panic!("failed to convert Duration to TimeDelta: {error}"),
        };
        *self.lock_clock() += delta;
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Advocate attributes with the given name, city and experience.
pub fn new_advocate(first_name: &str, city: &str, years_of_experience: i32) -> NewAdvocate {
    NewAdvocate {
        first_name: first_name.to_owned(),
        last_name: "Tester".to_owned(),
        city: city.to_owned(),
        degree: "MD".to_owned(),
        years_of_experience,
        phone_number: 5_550_000_000,
    }
}
