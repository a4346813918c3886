use std::fmt;
use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use spacecapy_core::error::{Result, SpaceCapyError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub web: WebSection,

    #[serde(default)]
    pub storage: StorageSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            web: WebSection::default(),
            storage: StorageSection::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SpaceCapyError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.web.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        Ok(SocketAddr::new(self.web.listen_ip()?, self.web.port))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSection {
    /// IPv4 or IPv6 literal (`0.0.0.0`, `::`); hostnames are not resolved.
    #[serde(default = "default_listen_host")]
    pub listen_host: String,

    #[serde(default = "default_web_port")]
    pub port: u16,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            listen_host: default_listen_host(),
            port: default_web_port(),
        }
    }
}

impl WebSection {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(SpaceCapyError::Config("web.port must not be 0".into()));
        }
        self.listen_ip()?;
        Ok(())
    }

    pub fn listen_ip(&self) -> Result<IpAddr> {
        self.listen_host.trim().parse().map_err(|e| {
            SpaceCapyError::Config(format!(
                "web.listen_host must be an IP address, got {:?}: {e}",
                self.listen_host
            ))
        })
    }
}

fn default_listen_host() -> String {
    "0.0.0.0".into()
}
fn default_web_port() -> u16 {
    5002
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    Mysql,
    Memory,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default)]
    pub mysql: MySqlSection,

    #[serde(default)]
    pub memory: MemorySection,
}

impl StorageSection {
    pub fn validate(&self) -> Result<()> {
        // Only the selected backend has to be usable.
        match self.backend {
            Backend::Mysql => self.mysql.validate(),
            Backend::Memory => self.memory.validate(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MySqlSection {
    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    #[serde(default = "default_db_user")]
    pub user: String,

    #[serde(default = "default_db_password")]
    pub password: String,

    #[serde(default = "default_db_name")]
    pub database: String,

    /// Create `images` / `visitor_counter` on startup when missing.
    #[serde(default)]
    pub bootstrap_schema: bool,
}

impl Default for MySqlSection {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: default_db_password(),
            database: default_db_name(),
            bootstrap_schema: false,
        }
    }
}

impl MySqlSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(SpaceCapyError::Config("storage.mysql.host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(SpaceCapyError::Config("storage.mysql.port must not be 0".into()));
        }
        if self.user.trim().is_empty() {
            return Err(SpaceCapyError::Config("storage.mysql.user must not be empty".into()));
        }
        if self.database.trim().is_empty() {
            return Err(SpaceCapyError::Config(
                "storage.mysql.database must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// Password is redacted.
impl fmt::Debug for MySqlSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlSection")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("bootstrap_schema", &self.bootstrap_schema)
            .finish()
    }
}

fn default_db_host() -> String {
    "db".into()
}
fn default_db_port() -> u16 {
    3306
}
fn default_db_user() -> String {
    "user".into()
}
fn default_db_password() -> String {
    "password".into()
}
fn default_db_name() -> String {
    "mydatabase".into()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemorySection {
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub initial_visitors: i64,
}

impl MemorySection {
    pub fn validate(&self) -> Result<()> {
        if self.images.iter().any(|u| u.trim().is_empty()) {
            return Err(SpaceCapyError::Config(
                "storage.memory.images must not contain empty urls".into(),
            ));
        }
        if self.initial_visitors < 0 {
            return Err(SpaceCapyError::Config(
                "storage.memory.initial_visitors must be >= 0".into(),
            ));
        }
        Ok(())
    }
}
