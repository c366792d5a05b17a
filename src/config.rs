use crate::debounce::{DEFAULT_COOLDOWN_MS, DEFAULT_THRESHOLD};
use crate::error::AppError;
use crate::navigation::WheelBoundary;
use crate::scene::DEFAULT_POINT_COUNT;
use crate::section::Section;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Terminal portfolio with a camera-choreographed 3D background
#[derive(Parser, Debug)]
#[command(name = "nexus-folio", version)]
#[command(about = "Browse the portfolio with arrow keys, the mouse wheel, or number keys 1-7")]
pub struct Args {
    /// Frames rendered per second
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Minimum time between two wheel-driven section changes (ms)
    #[arg(long, default_value_t = DEFAULT_COOLDOWN_MS)]
    pub cooldown_ms: u64,

    /// Wheel delta a scroll must exceed to change section
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub wheel_threshold: f64,

    /// Delta reported for one terminal scroll notch
    #[arg(long, default_value_t = 100.0)]
    pub wheel_delta: f64,

    /// What scrolling past the first or last section does
    #[arg(long, value_enum, default_value_t = BoundaryArg::Wrap)]
    pub wheel_boundary: BoundaryArg,

    /// Duration of a camera move between sections (seconds)
    #[arg(long, default_value_t = 3.0)]
    pub tween_secs: f64,

    /// Skip the boot sequence
    #[arg(long)]
    pub skip_intro: bool,

    /// Seed for the point cloud and the boot sequence
    #[arg(long, default_value_t = 0x5eed)]
    pub seed: u64,

    /// Number of background points
    #[arg(long, default_value_t = DEFAULT_POINT_COUNT)]
    pub points: usize,

    /// Section to open on (name or 1-7)
    #[arg(long, default_value = "hero")]
    pub start: Section,

    /// Write logs to this file (logging is off without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryArg {
    Wrap,
    Clamp,
}

impl From<BoundaryArg> for WheelBoundary {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Wrap => WheelBoundary::Wrap,
            BoundaryArg::Clamp => WheelBoundary::Clamp,
        }
    }
}

/// Validated runtime settings
#[derive(Debug, Clone)]
pub struct Config {
    pub frame_interval: Duration,
    pub cooldown_ms: u64,
    pub wheel_threshold: f64,
    pub wheel_delta: f64,
    pub boundary: WheelBoundary,
    pub tween_duration: Duration,
    pub skip_intro: bool,
    pub seed: u64,
    pub point_count: usize,
    pub start: Section,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            frame_interval: Duration::from_secs(1) / 30,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            wheel_threshold: DEFAULT_THRESHOLD,
            wheel_delta: 100.0,
            boundary: WheelBoundary::Wrap,
            tween_duration: Duration::from_secs(3),
            skip_intro: false,
            seed: 0x5eed,
            point_count: DEFAULT_POINT_COUNT,
            start: Section::Hero,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if !args.tween_secs.is_finite() || args.tween_secs <= 0.0 {
            return Err(AppError::Config(format!(
                "--tween-secs must be a positive number, got {}",
                args.tween_secs
            )));
        }
        if !args.wheel_threshold.is_finite() || args.wheel_threshold < 0.0 {
            return Err(AppError::Config(format!(
                "--wheel-threshold must be zero or more, got {}",
                args.wheel_threshold
            )));
        }
        if !args.wheel_delta.is_finite() || args.wheel_delta <= 0.0 {
            return Err(AppError::Config(format!(
                "--wheel-delta must be positive, got {}",
                args.wheel_delta
            )));
        }
        Ok(Config {
            frame_interval: Duration::from_secs(1) / args.fps,
            cooldown_ms: args.cooldown_ms,
            wheel_threshold: args.wheel_threshold,
            wheel_delta: args.wheel_delta,
            boundary: args.wheel_boundary.into(),
            tween_duration: Duration::from_secs_f64(args.tween_secs),
            skip_intro: args.skip_intro,
            seed: args.seed,
            point_count: args.points,
            start: args.start,
            log_file: args.log_file,
            log_level: args.log_level,
        })
    }
}
