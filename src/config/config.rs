use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `development` exposes internal error detail in 500 responses.
    pub environment: String,
}

impl ServerConfig {
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrackerConfig {
    /// Local hour from which a day without walks raises the reminder.
    pub walk_reminder_hour: u32,
    pub max_message_length: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub tracker: TrackerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3001,
                environment: "production".to_string(),
            },
            tracker: TrackerConfig {
                walk_reminder_hour: 18,
                max_message_length: 1000,
            },
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port as i64)?
            .set_default("server.environment", defaults.server.environment)?
            .set_default("tracker.walk_reminder_hour", defaults.tracker.walk_reminder_hour as i64)?
            .set_default("tracker.max_message_length", defaults.tracker.max_message_length as i64)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("PAWLOG").separator("__"))
            // Bare PORT keeps the usual hosting-platform contract working.
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        let app_config: AppConfig = settings.try_deserialize()?;

        if app_config.tracker.walk_reminder_hour > 23 {
            return Err(config::ConfigError::Message(format!(
                "tracker.walk_reminder_hour must be between 0 and 23, got {}",
                app_config.tracker.walk_reminder_hour
            )));
        }

        Ok(app_config)
    }
}
