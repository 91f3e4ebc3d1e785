use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_MARKS_SERVICE_URL: &str = "http://192.168.29.250:3002";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub marks: MarksConfig,
    #[serde(default)]
    pub student: StudentConfig,
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            marks: MarksConfig::default(),
            student: StudentConfig::default(),
            seed_demo_data: default_seed(),
        }
    }
}

/// Runtime knobs shared by both binaries.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarksConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_marks_port")]
    pub port: u16,
}

impl Default for MarksConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_marks_port() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_student_port")]
    pub port: u16,
    /// Base URL of the marks service; no discovery, this is the only address used.
    #[serde(default = "default_marks_service_url")]
    pub marks_service_url: String,
    #[serde(default = "default_marks_timeout")]
    pub marks_timeout_secs: u64,
}

impl Default for StudentConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_student_port(),
            marks_service_url: default_marks_service_url(),
            marks_timeout_secs: default_marks_timeout(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_marks_port() -> u16 { 3002 }
fn default_student_port() -> u16 { 3001 }
fn default_marks_service_url() -> String { DEFAULT_MARKS_SERVICE_URL.into() }
fn default_marks_timeout() -> u64 { 5 }
fn default_seed() -> bool { true }

/// Read `CONFIG_PATH`, or `config.toml` when it is unset.
pub fn load_default() -> Result<AppConfig> {
    load_optional(std::env::var("CONFIG_PATH").ok().as_deref())
}

/// An explicit path must be readable. Without one, a missing `config.toml` means defaults.
pub fn load_optional(explicit: Option<&str>) -> Result<AppConfig> {
    match explicit {
        Some(path) => load_from_file(path),
        None if std::path::Path::new("config.toml").exists() => load_from_file("config.toml"),
        None => Ok(AppConfig::default()),
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {path}"))?;
    load_from_str(&content).with_context(|| format!("invalid config file {path}"))
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// File (if any), then environment overrides, then validation.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Apply overrides from a variable lookup. Split out from `std::env` so it can be
    /// exercised without touching process state.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("MARKS_HOST") { self.marks.host = v; }
        if let Some(v) = lookup("MARKS_PORT") { self.marks.port = parse_var("MARKS_PORT", &v)?; }
        if let Some(v) = lookup("STUDENT_HOST") { self.student.host = v; }
        if let Some(v) = lookup("STUDENT_PORT") { self.student.port = parse_var("STUDENT_PORT", &v)?; }
        if let Some(v) = lookup("MARKS_SERVICE_URL") { self.student.marks_service_url = v; }
        if let Some(v) = lookup("MARKS_TIMEOUT_SECS") {
            self.student.marks_timeout_secs = parse_var("MARKS_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = lookup("SEED_DEMO_DATA") { self.seed_demo_data = parse_var("SEED_DEMO_DATA", &v)?; }
        if let Some(v) = lookup("TOKIO_WORKER_THREADS") {
            self.server.worker_threads = Some(parse_var("TOKIO_WORKER_THREADS", &v)?);
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.marks.host = normalize_host(&self.marks.host);
        if self.marks.port == 0 {
            return Err(anyhow!("marks.port must be in 1..=65535"));
        }
        self.student.normalize_and_validate()?;
        if self.server.worker_threads == Some(0) {
            self.server.worker_threads = None;
        }
        Ok(())
    }
}

impl MarksConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StudentConfig {
    fn normalize_and_validate(&mut self) -> Result<()> {
        self.host = normalize_host(&self.host);
        if self.port == 0 {
            return Err(anyhow!("student.port must be in 1..=65535"));
        }
        if self.marks_timeout_secs == 0 {
            return Err(anyhow!("student.marks_timeout_secs must be a positive number of seconds"));
        }
        // 地址不合法时只告警：复合查询会按"成绩不可用"降级处理
        if reqwest::Url::parse(&self.marks_service_url).is_err() {
            warn!(url = %self.marks_service_url, "marks_service_url does not parse; marks will be unavailable");
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn marks_timeout(&self) -> Duration {
        Duration::from_secs(self.marks_timeout_secs)
    }
}

fn normalize_host(host: &str) -> String {
    if host.trim().is_empty() { default_host() } else { host.trim().to_string() }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| anyhow!("{key} has an invalid value: {value:?}"))
}
