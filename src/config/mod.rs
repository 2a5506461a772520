use crate::core::reminder::ReminderPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::category::{CaseCategory, PerCategory};
use crate::utils::time::{PST_OFFSET_HOURS, fixed_offset};
use chrono::{Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Rows shown by `shifts list` before asking for more.
    #[serde(default = "default_displayed_shifts")]
    pub displayed_shifts: usize,
    /// Past shifts older than this are never shown.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
    /// Offset of timestamps without a `Z` suffix in the calendar export.
    #[serde(default = "default_offset_hours")]
    pub source_utc_offset_hours: i32,
    /// Offset whose midnight splits shifts (fixed, no DST).
    #[serde(default = "default_offset_hours")]
    pub reference_utc_offset_hours: i32,
    #[serde(default = "default_reminder_lead")]
    pub reminder_lead_minutes: i64,
    #[serde(default = "default_reminder_min_delay")]
    pub reminder_min_delay_seconds: i64,
    /// How often `remind --watch` re-reads the stored schedule.
    #[serde(default = "default_watch_poll")]
    pub watch_poll_seconds: u64,
    #[serde(default)]
    pub multipliers: MultiplierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplierConfig {
    #[serde(default = "default_new_submission_multiplier")]
    pub new_submission: f64,
    #[serde(default = "default_unit_multiplier")]
    pub update: f64,
    #[serde(default = "default_unit_multiplier")]
    pub fab_support: f64,
}

fn default_displayed_shifts() -> usize {
    4
}
fn default_lookback_days() -> i64 {
    3
}
fn default_offset_hours() -> i32 {
    PST_OFFSET_HOURS
}
fn default_reminder_lead() -> i64 {
    2
}
fn default_reminder_min_delay() -> i64 {
    60
}
fn default_watch_poll() -> u64 {
    30
}
fn default_new_submission_multiplier() -> f64 {
    CaseCategory::NewSubmission.default_multiplier()
}
fn default_unit_multiplier() -> f64 {
    1.0
}

impl Default for MultiplierConfig {
    fn default() -> Self {
        Self {
            new_submission: default_new_submission_multiplier(),
            update: default_unit_multiplier(),
            fab_support: default_unit_multiplier(),
        }
    }
}

impl MultiplierConfig {
    pub fn to_per_category(&self) -> PerCategory<f64> {
        PerCategory::from_fn(|c| match c {
            CaseCategory::NewSubmission => self.new_submission,
            CaseCategory::Update => self.update,
            CaseCategory::FabSupport => self.fab_support,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            displayed_shifts: default_displayed_shifts(),
            lookback_days: default_lookback_days(),
            source_utc_offset_hours: default_offset_hours(),
            reference_utc_offset_hours: default_offset_hours(),
            reminder_lead_minutes: default_reminder_lead(),
            reminder_min_delay_seconds: default_reminder_min_delay(),
            watch_poll_seconds: default_watch_poll(),
            multipliers: MultiplierConfig::default(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg = serde_yaml::from_str(&content)?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("shiftlogger.sqlite"),
        };

        let config = Config::with_database(db_path);

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn source_offset(&self) -> AppResult<FixedOffset> {
        fixed_offset(self.source_utc_offset_hours)
    }

    pub fn reference_offset(&self) -> AppResult<FixedOffset> {
        fixed_offset(self.reference_utc_offset_hours)
    }

    pub fn reminder_policy(&self) -> AppResult<ReminderPolicy> {
        if self.reminder_lead_minutes < 0 || self.reminder_min_delay_seconds < 0 {
            return Err(AppError::Config(
                "reminder_lead_minutes and reminder_min_delay_seconds must not be negative".into(),
            ));
        }
        Ok(ReminderPolicy {
            lead: Duration::minutes(self.reminder_lead_minutes),
            min_delay: Duration::seconds(self.reminder_min_delay_seconds),
        })
    }
}
