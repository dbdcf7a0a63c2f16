use anyhow::Result;
use serde::Deserialize;
use anyhow::{anyhow, Context};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_log_format() -> String { "text".into() }

/// Database settings. Either `url` is given directly, or it is assembled
/// from `driver`/`server`/`name`/`user`/`password` (the `DB_*` variables).
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            driver: String::new(),
            server: String::new(),
            name: String::new(),
            user: String::new(),
            password: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

/// Like `load_from_file`, but a file that does not exist yields the defaults.
/// Unreadable or malformed files are still errors.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content).with_context(|| format!("invalid config file {path}")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(e).with_context(|| format!("cannot read config file {path}")),
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to defaults plus
    /// environment when the file is missing, then normalize and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_or_default(&config_path())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.normalize_with(env_lookup)?;
        self.database.validate()?;
        Ok(())
    }

    /// Same as `normalize_and_validate` without the database check, but with
    /// an explicit variable source.
    pub fn normalize_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| anyhow!("SERVER_PORT must be a port number, got {port:?}"))?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.format = format;
        }
        self.server.normalize()?;
        self.database.normalize_with(&lookup)?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Resolve `url`: explicit value first, then `DATABASE_URL`, then the
    /// `DB_DRIVER`/`DB_SERVER`/`DB_NAME`/`DB_USER`/`DB_PASSWORD` parts.
    /// Parts already present in the file win over the environment.
    pub fn normalize_with<F>(&mut self, lookup: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if !self.url.trim().is_empty() {
            return Ok(());
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()) {
            self.url = url;
            return Ok(());
        }

        let fill = |field: &mut String, key: &str| {
            if field.trim().is_empty() {
                if let Some(v) = lookup(key) {
                    *field = v;
                }
            }
        };
        fill(&mut self.driver, "DB_DRIVER");
        fill(&mut self.server, "DB_SERVER");
        fill(&mut self.name, "DB_NAME");
        fill(&mut self.user, "DB_USER");
        fill(&mut self.password, "DB_PASSWORD");

        if !self.driver.trim().is_empty() {
            self.url = assemble_url(&self.driver, &self.server, &self.name, &self.user, &self.password)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!(
                "database.url is empty; set it in config.toml, DATABASE_URL, or DB_DRIVER/DB_SERVER/DB_NAME/DB_USER/DB_PASSWORD"
            ));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.to_lowercase().starts_with("sqlite:")
    }
}

/// Build a connection URL from its parts. Credentials are percent-encoded.
pub fn assemble_url(driver: &str, server: &str, name: &str, user: &str, password: &str) -> Result<String> {
    let driver = driver.trim().to_lowercase();
    match driver.as_str() {
        "postgres" | "postgresql" | "pg" => {
            if server.trim().is_empty() || name.trim().is_empty() {
                return Err(anyhow!("DB_SERVER and DB_NAME are required for the postgres driver"));
            }
            let auth = match (user.is_empty(), password.is_empty()) {
                (true, _) => String::new(),
                (false, true) => format!("{}@", urlencoding::encode(user)),
                (false, false) => format!("{}:{}@", urlencoding::encode(user), urlencoding::encode(password)),
            };
            Ok(format!("postgres://{auth}{}/{}", server.trim(), name.trim()))
        }
        "sqlite" => {
            let name = name.trim();
            if name.is_empty() || name == ":memory:" {
                Ok("sqlite::memory:".to_string())
            } else {
                Ok(format!("sqlite://{name}?mode=rwc"))
            }
        }
        other => Err(anyhow!("unsupported database driver {other:?}; expected postgres or sqlite")),
    }
}
