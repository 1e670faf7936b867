use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// CSV file with one row per course
    #[serde(default = "default_courses_path")]
    pub courses_path: String,

    /// CSV file with (course, required course) pairs
    #[serde(default = "default_prerequisites_path")]
    pub prerequisites_path: String,

    /// CSV file with (course, career label) pairs
    #[serde(default = "default_careers_path")]
    pub careers_path: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_courses_path() -> String {
    "data/courses.csv".to_string()
}

fn default_prerequisites_path() -> String {
    "data/prerequisites.csv".to_string()
}

fn default_careers_path() -> String {
    "data/careers.csv".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
