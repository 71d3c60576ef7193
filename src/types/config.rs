//! Configuration structures for the hotel booking simulator
//!
//! Holds the simulation configuration, its validation logic, and the command
//! line surface. Configuration is resolved in priority order: CLI arguments,
//! then an optional JSON config file, then built-in defaults.

use crate::types::OutputFormat;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Flat fees charged for ancillary special requests, in dollars
pub mod special_request_fees {
    /// Room upgrade fee
    pub const UPGRADE: f64 = 50.00;

    /// Late checkout fee
    pub const LATE_CHECKOUT: f64 = 25.00;

    /// Extra amenities fee
    pub const EXTRA_AMENITIES: f64 = 35.00;

    /// Room service fee
    pub const ROOM_SERVICE: f64 = 45.00;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotel-sim",
    version,
    about = "Hotel booking simulator - drives a room inventory through simulated days",
    long_about = "Simulates a hotel's booking lifecycle over a number of virtual days,
producing an ordered log of business events (bookings, check-ins, check-outs,
cancellations, special requests) against a seeded room inventory.

EXAMPLES:
    # Run 30 days with default settings
    hotel-sim --days 30

    # Reproducible run
    hotel-sim --days 30 --seed 42

    # Use a configuration file, overriding the day count
    hotel-sim --config sim.json --days 90

    # Generate a configuration template
    hotel-sim --print-config > sim.json

    # Validate configuration without running
    hotel-sim --config sim.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments override file settings."
    )]
    pub config: Option<String>,

    /// Number of days to simulate
    #[arg(
        long,
        help = "Number of days to simulate",
        long_help = "Number of virtual days to simulate. Must be greater than 0. Default: 30"
    )]
    pub days: Option<u32>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// First simulated calendar date (YYYY-MM-DD)
    #[arg(long, help = "First simulated calendar date (YYYY-MM-DD)")]
    pub start_date: Option<NaiveDate>,

    /// Total number of rooms to seed in the inventory
    #[arg(long, help = "Total rooms in the seeded inventory")]
    pub total_rooms: Option<usize>,

    /// Number of floors to spread the rooms across
    #[arg(long, help = "Number of floors in the seeded inventory")]
    pub total_floors: Option<usize>,

    /// Probability of a standard advance booking per day (0.0-1.0)
    #[arg(long, help = "Standard booking probability (0.0-1.0)")]
    pub standard_booking_probability: Option<f64>,

    /// Probability of a walk-in booking per day (0.0-1.0)
    #[arg(long, help = "Walk-in booking probability (0.0-1.0)")]
    pub walk_in_probability: Option<f64>,

    /// Probability of a group booking per day (0.0-1.0)
    #[arg(long, help = "Group booking probability (0.0-1.0)")]
    pub group_booking_probability: Option<f64>,

    /// Probability of an extended-stay booking per day (0.0-1.0)
    #[arg(long, help = "Extended-stay booking probability (0.0-1.0)")]
    pub extended_stay_probability: Option<f64>,

    /// Probability of a loyalty-member booking per day (0.0-1.0)
    #[arg(long, help = "Loyalty booking probability (0.0-1.0)")]
    pub loyalty_booking_probability: Option<f64>,

    /// Probability of a special request per day (0.0-1.0)
    #[arg(long, help = "Special request probability (0.0-1.0)")]
    pub special_request_probability: Option<f64>,

    /// Per-reservation daily cancellation probability (0.0-1.0)
    #[arg(long, help = "Per-reservation daily cancellation probability (0.0-1.0)")]
    pub cancellation_probability: Option<f64>,

    /// Output format for the exported event log
    #[arg(
        long,
        help = "Output format for the event log (json or csv)",
        long_help = "Output format for the exported event log. Supported: json, csv. Default: json"
    )]
    pub output_format: Option<String>,

    /// Output path for the event log
    #[arg(long, help = "Output path for the event log file")]
    pub events_output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running the simulation
    #[arg(long, help = "Validate configuration without running the simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of days to simulate
    pub days: Option<u32>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// First simulated calendar date
    pub start_date: Option<NaiveDate>,

    /// Total number of rooms to seed
    pub total_rooms: Option<usize>,

    /// Number of floors to spread rooms across
    pub total_floors: Option<usize>,

    /// Standard booking probability
    pub standard_booking_probability: Option<f64>,

    /// Walk-in booking probability
    pub walk_in_probability: Option<f64>,

    /// Group booking probability
    pub group_booking_probability: Option<f64>,

    /// Extended-stay booking probability
    pub extended_stay_probability: Option<f64>,

    /// Loyalty booking probability
    pub loyalty_booking_probability: Option<f64>,

    /// Special request probability
    pub special_request_probability: Option<f64>,

    /// Per-reservation daily cancellation probability
    pub cancellation_probability: Option<f64>,

    /// Standard stay length range in nights
    pub standard_stay_nights: Option<(u32, u32)>,

    /// Walk-in stay length range in nights
    pub walk_in_stay_nights: Option<(u32, u32)>,

    /// Group stay length range in nights
    pub group_stay_nights: Option<(u32, u32)>,

    /// Extended stay length range in nights
    pub extended_stay_nights: Option<(u32, u32)>,

    /// Loyalty stay length range in nights
    pub loyalty_stay_nights: Option<(u32, u32)>,

    /// Group booking size range in rooms
    pub group_rooms: Option<(usize, usize)>,

    /// Loyalty discount fraction applied to reported amounts
    pub loyalty_discount: Option<f64>,

    /// Tax rate applied to quoted prices
    pub tax_rate: Option<f64>,

    /// Output format for the event log
    pub output_format: Option<OutputFormat>,

    /// Output path for the event log
    pub events_output: Option<String>,
}

/// Configuration for the hotel booking simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of days to simulate
    pub days: u32,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// First simulated calendar date
    pub start_date: NaiveDate,

    /// Total number of rooms to seed in the inventory
    pub total_rooms: usize,

    /// Number of floors to spread the rooms across
    pub total_floors: usize,

    /// Probability of a standard advance booking per day (0.0-1.0)
    pub standard_booking_probability: f64,

    /// Probability of a walk-in booking per day (0.0-1.0)
    pub walk_in_probability: f64,

    /// Probability of a group booking per day (0.0-1.0)
    pub group_booking_probability: f64,

    /// Probability of an extended-stay booking per day (0.0-1.0)
    pub extended_stay_probability: f64,

    /// Probability of a loyalty-member booking per day (0.0-1.0)
    pub loyalty_booking_probability: f64,

    /// Probability of a special request per day (0.0-1.0)
    pub special_request_probability: f64,

    /// Per-reservation daily cancellation probability (0.0-1.0)
    pub cancellation_probability: f64,

    /// Standard stay length range in nights (min, max)
    pub standard_stay_nights: (u32, u32),

    /// Walk-in stay length range in nights (min, max)
    pub walk_in_stay_nights: (u32, u32),

    /// Group stay length range in nights (min, max)
    pub group_stay_nights: (u32, u32),

    /// Extended stay length range in nights (min, max)
    pub extended_stay_nights: (u32, u32),

    /// Loyalty stay length range in nights (min, max)
    pub loyalty_stay_nights: (u32, u32),

    /// Group booking size range in rooms (min, max)
    pub group_rooms: (usize, usize),

    /// Loyalty discount fraction applied to reported amounts (0.0-1.0)
    pub loyalty_discount: f64,

    /// Tax rate applied to quoted prices
    pub tax_rate: f64,

    /// Output format for the exported event log
    pub output_format: OutputFormat,

    /// Output path for the event log, if export is requested
    pub events_output: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 30,
            seed: None,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid default date"),
            total_rooms: 100,
            total_floors: 5,
            standard_booking_probability: 0.5,
            walk_in_probability: 0.2,
            group_booking_probability: 0.15,
            extended_stay_probability: 0.2,
            loyalty_booking_probability: 0.3,
            special_request_probability: 0.25,
            cancellation_probability: 0.08,
            standard_stay_nights: (1, 7),
            walk_in_stay_nights: (1, 3),
            group_stay_nights: (2, 5),
            extended_stay_nights: (7, 14),
            loyalty_stay_nights: (2, 5),
            group_rooms: (3, 6),
            loyalty_discount: 0.1,
            tax_rate: 0.10,
            output_format: OutputFormat::Json,
            events_output: None,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// Invalid value supplied on the command line
    #[error("Invalid CLI value: {0}")]
    InvalidCliValue(String),
}

/// Validation errors for the simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Days count is invalid
    #[error("Days count must be greater than 0, got {0}")]
    InvalidDaysCount(u32),

    /// Room count is invalid
    #[error("Total rooms must be greater than 0, got {0}")]
    InvalidRoomCount(usize),

    /// Floor count is invalid
    #[error("Total floors must be greater than 0, got {0}")]
    InvalidFloorCount(usize),

    /// Probability value is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with the invalid probability
        field: &'static str,
        /// The invalid probability value
        value: f64,
    },

    /// Stay-night or room-count range is invalid
    #[error("Invalid range for {field}: min ({min}) must be >= 1 and <= max ({max})")]
    InvalidRange {
        /// Name of the field with the invalid range
        field: &'static str,
        /// Lower bound of the range
        min: u64,
        /// Upper bound of the range
        max: u64,
    },

    /// Tax rate is negative
    #[error("Tax rate must not be negative, got {0}")]
    InvalidTaxRate(f64),
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = if let Some(config_path) = &args.config {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        Self::apply_cli_overrides(&mut config, args)?;

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            days: file.days.unwrap_or(defaults.days),
            seed: file.seed.or(defaults.seed),
            start_date: file.start_date.unwrap_or(defaults.start_date),
            total_rooms: file.total_rooms.unwrap_or(defaults.total_rooms),
            total_floors: file.total_floors.unwrap_or(defaults.total_floors),
            standard_booking_probability: file
                .standard_booking_probability
                .unwrap_or(defaults.standard_booking_probability),
            walk_in_probability: file.walk_in_probability.unwrap_or(defaults.walk_in_probability),
            group_booking_probability: file
                .group_booking_probability
                .unwrap_or(defaults.group_booking_probability),
            extended_stay_probability: file
                .extended_stay_probability
                .unwrap_or(defaults.extended_stay_probability),
            loyalty_booking_probability: file
                .loyalty_booking_probability
                .unwrap_or(defaults.loyalty_booking_probability),
            special_request_probability: file
                .special_request_probability
                .unwrap_or(defaults.special_request_probability),
            cancellation_probability: file
                .cancellation_probability
                .unwrap_or(defaults.cancellation_probability),
            standard_stay_nights: file.standard_stay_nights.unwrap_or(defaults.standard_stay_nights),
            walk_in_stay_nights: file.walk_in_stay_nights.unwrap_or(defaults.walk_in_stay_nights),
            group_stay_nights: file.group_stay_nights.unwrap_or(defaults.group_stay_nights),
            extended_stay_nights: file.extended_stay_nights.unwrap_or(defaults.extended_stay_nights),
            loyalty_stay_nights: file.loyalty_stay_nights.unwrap_or(defaults.loyalty_stay_nights),
            group_rooms: file.group_rooms.unwrap_or(defaults.group_rooms),
            loyalty_discount: file.loyalty_discount.unwrap_or(defaults.loyalty_discount),
            tax_rate: file.tax_rate.unwrap_or(defaults.tax_rate),
            output_format: file.output_format.unwrap_or(defaults.output_format),
            events_output: file.events_output.or(defaults.events_output),
        }
    }

    /// Override configuration fields with CLI arguments
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) -> Result<(), ConfigError> {
        if let Some(days) = args.days {
            config.days = days;
        }
        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }
        if let Some(start_date) = args.start_date {
            config.start_date = start_date;
        }
        if let Some(total_rooms) = args.total_rooms {
            config.total_rooms = total_rooms;
        }
        if let Some(total_floors) = args.total_floors {
            config.total_floors = total_floors;
        }
        if let Some(p) = args.standard_booking_probability {
            config.standard_booking_probability = p;
        }
        if let Some(p) = args.walk_in_probability {
            config.walk_in_probability = p;
        }
        if let Some(p) = args.group_booking_probability {
            config.group_booking_probability = p;
        }
        if let Some(p) = args.extended_stay_probability {
            config.extended_stay_probability = p;
        }
        if let Some(p) = args.loyalty_booking_probability {
            config.loyalty_booking_probability = p;
        }
        if let Some(p) = args.special_request_probability {
            config.special_request_probability = p;
        }
        if let Some(p) = args.cancellation_probability {
            config.cancellation_probability = p;
        }
        if let Some(format) = args.output_format {
            config.output_format =
                format.parse().map_err(ConfigError::InvalidCliValue)?;
        }
        if let Some(path) = args.events_output {
            config.events_output = Some(path);
        }
        Ok(())
    }

    /// Validate the configuration, returning the first violation found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.days == 0 {
            return Err(ConfigValidationError::InvalidDaysCount(self.days));
        }
        if self.total_rooms == 0 {
            return Err(ConfigValidationError::InvalidRoomCount(self.total_rooms));
        }
        if self.total_floors == 0 {
            return Err(ConfigValidationError::InvalidFloorCount(self.total_floors));
        }

        let probabilities = [
            ("standard_booking_probability", self.standard_booking_probability),
            ("walk_in_probability", self.walk_in_probability),
            ("group_booking_probability", self.group_booking_probability),
            ("extended_stay_probability", self.extended_stay_probability),
            ("loyalty_booking_probability", self.loyalty_booking_probability),
            ("special_request_probability", self.special_request_probability),
            ("cancellation_probability", self.cancellation_probability),
            ("loyalty_discount", self.loyalty_discount),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::InvalidProbability { field, value });
            }
        }

        let night_ranges = [
            ("standard_stay_nights", self.standard_stay_nights),
            ("walk_in_stay_nights", self.walk_in_stay_nights),
            ("group_stay_nights", self.group_stay_nights),
            ("extended_stay_nights", self.extended_stay_nights),
            ("loyalty_stay_nights", self.loyalty_stay_nights),
        ];
        for (field, (min, max)) in night_ranges {
            if min < 1 || min > max {
                return Err(ConfigValidationError::InvalidRange {
                    field,
                    min: min as u64,
                    max: max as u64,
                });
            }
        }

        let (group_min, group_max) = self.group_rooms;
        if group_min < 1 || group_min > group_max {
            return Err(ConfigValidationError::InvalidRange {
                field: "group_rooms",
                min: group_min as u64,
                max: group_max as u64,
            });
        }

        if self.tax_rate < 0.0 {
            return Err(ConfigValidationError::InvalidTaxRate(self.tax_rate));
        }

        Ok(())
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.days, 30);
        assert_eq!(config.total_rooms, 100);
        assert_eq!(config.standard_stay_nights, (1, 7));
        assert_eq!(config.extended_stay_nights, (7, 14));
        assert!((config.tax_rate - 0.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_days_rejected() {
        let config = SimulationConfig { days: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidDaysCount(0))));
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let config = SimulationConfig { walk_in_probability: 1.5, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigValidationError::InvalidProbability { field: "walk_in_probability", .. }
        ));
    }

    #[test]
    fn test_inverted_stay_range_rejected() {
        let config = SimulationConfig { standard_stay_nights: (5, 2), ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidRange { field: "standard_stay_nights", .. })
        ));
    }

    #[test]
    fn test_zero_night_stay_range_rejected() {
        let config = SimulationConfig { walk_in_stay_nights: (0, 3), ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidRange { field: "walk_in_stay_nights", .. })
        ));
    }

    #[test]
    fn test_config_file_merges_with_defaults() {
        let file = ConfigFile { days: Some(7), seed: Some(99), ..Default::default() };
        let config = SimulationConfig::from_config_file(file);
        assert_eq!(config.days, 7);
        assert_eq!(config.seed, Some(99));
        // Untouched fields fall back to defaults
        assert_eq!(config.total_rooms, 100);
        assert!((config.cancellation_probability - 0.08).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let args = CliArgs::parse_from(["hotel-sim", "--days", "5", "--seed", "7"]);
        let config = SimulationConfig::from_cli_args(args).unwrap();
        assert_eq!(config.days, 5);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_invalid_output_format_on_cli() {
        let args = CliArgs::parse_from(["hotel-sim", "--output-format", "xml"]);
        assert!(matches!(
            SimulationConfig::from_cli_args(args),
            Err(ConfigError::InvalidCliValue(_))
        ));
    }

    #[test]
    fn test_print_json_round_trips() {
        let config = SimulationConfig::default();
        let json = config.print_json().unwrap();
        let parsed: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.days, config.days);
        assert_eq!(parsed.start_date, config.start_date);
    }
}
