//! Test utilities for the commons crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and when the `test-support` feature is enabled.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::decorators::Instrumentation;
use crate::server::{AppDependencies, ServerConfig};
use crate::settings::{
    CorsSettings, DEFAULT_DESCRIPTION, DEFAULT_TITLE, ServerSettings, Settings, SwaggerSettings,
};

/// Clock returning a settable instant.
///
/// # Examples
/// ```
/// use chrono::Duration;
/// use commons::test_support::{SteppingClock, fixed_instant};
/// use mockable::Clock;
///
/// let clock = SteppingClock::new(fixed_instant());
/// clock.advance(Duration::minutes(5));
/// assert_eq!(clock.utc(), fixed_instant() + Duration::minutes(5));
/// ```
#[derive(Debug)]
pub struct SteppingClock(Mutex<DateTime<Utc>>);

impl SteppingClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Mutex::new(start))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Fixed instant used as the starting point of test clocks.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Settings equal to an empty environment.
pub fn default_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: None,
            port: None,
            log_calls: true,
            time_calls: true,
        },
        cors: CorsSettings {
            allowed_origins: Vec::new(),
            allowed_methods: Vec::new(),
            allowed_headers: Vec::new(),
            allow_credentials: true,
            max_age: None,
        },
        swagger: SwaggerSettings {
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            contact_name: None,
            contact_email: None,
            groups: Vec::new(),
        },
    }
}

/// Application dependencies over an empty store, stamped by `clock`.
///
/// Falls back to [`default_settings`] when `settings` is `None`.
///
/// # Panics
/// Panics when the settings do not validate.
pub fn app_dependencies(settings: Option<Settings>, clock: Arc<dyn Clock>) -> AppDependencies {
    let settings = settings.unwrap_or_else(default_settings);
    let config = ServerConfig::from_settings(&settings)
        .expect("test settings should validate")
        .with_instrumentation(Instrumentation::disabled())
        .with_clock(clock);
    AppDependencies::from_config(&config)
}
