pub struct RatingSettings {
    /// Rating points corresponding to a 10x strength ratio.
    pub scale: f64,
    pub k_factor: f64,
    pub default_rating: i64,
    pub anonymous_name: &'static str,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            scale: 400.0,
            k_factor: 32.0,
            default_rating: 1000,
            anonymous_name: "ANON",
        }
    }
}

pub struct StorageSettings {
    pub database_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: "gamenight_elo.db".to_string(),
        }
    }
}

pub struct AppConfig {
    pub rating: RatingSettings,
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}
