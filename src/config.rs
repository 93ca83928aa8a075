use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::services::notification_queue::DEFAULT_DISPLAY_DURATION;
use crate::services::overdue_monitor::OverdueMode;
use crate::services::scheduler::DEFAULT_OVERDUE_INTERVAL;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub overdue_interval: Duration,
    pub notification_display: Duration,
    pub overdue_mode: OverdueMode,
    pub seed_sample_todos: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            overdue_interval: DEFAULT_OVERDUE_INTERVAL,
            notification_display: DEFAULT_DISPLAY_DURATION,
            overdue_mode: OverdueMode::Repeat,
            seed_sample_todos: true,
        }
    }
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parse_var(&lookup, "TODO_BIND_ADDR")?.unwrap_or(defaults.bind_addr);
        let overdue_interval = parse_var::<u64, _>(&lookup, "OVERDUE_CHECK_INTERVAL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.overdue_interval);
        let notification_display = parse_var::<u64, _>(&lookup, "NOTIFICATION_DISPLAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.notification_display);
        let overdue_mode = match parse_var::<bool, _>(&lookup, "OVERDUE_NOTIFY_ONCE")? {
            Some(true) => OverdueMode::Once,
            Some(false) => OverdueMode::Repeat,
            None => defaults.overdue_mode,
        };
        let seed_sample_todos =
            parse_var(&lookup, "SEED_SAMPLE_TODOS")?.unwrap_or(defaults.seed_sample_todos);

        if overdue_interval.is_zero() {
            return Err(AppError::Config(
                "OVERDUE_CHECK_INTERVAL_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            overdue_interval,
            notification_display,
            overdue_mode,
            seed_sample_todos,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {:?}", key, raw))),
    }
}
