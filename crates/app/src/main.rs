mod telemetry;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use gdpt_core::model::TopicKey;
use services::{
    AppConfig, AppServices, Clock, DashboardService, QuizService, SignalPlayer,
};
use tracing::{error, info};
use ui::{App, UiApp, WebAudioSink, build_app_context};

const CONFIG_ENV: &str = "GDPT_CONFIG";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTopic { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTopic { raw } => write!(f, "invalid --topic value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  gdpt [--config <path>] [--topic <key>]");
    eprintln!();
    eprintln!("Topics:");
    let keys: Vec<&str> = TopicKey::ALL.iter().map(|t| t.as_str()).collect();
    eprintln!("  {}", keys.join(", "));
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {CONFIG_ENV}, GDPT_LOG, GDPT_LOG_FORMAT=json|pretty");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    topic: Option<TopicKey>,
    help: bool,
}

impl Args {
    /// `env_config` is the value of `GDPT_CONFIG`; `--config` wins over it.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env_config: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Args {
            config: env_config
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            ..Args::default()
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config = Some(PathBuf::from(require_value(&mut args, "--config")?));
                }
                "--topic" => {
                    let value = require_value(&mut args, "--topic")?;
                    let topic = value
                        .parse::<TopicKey>()
                        .map_err(|_| ArgsError::InvalidTopic { raw: value.clone() })?;
                    parsed.topic = Some(topic);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

struct DesktopApp {
    initial_topic: Option<TopicKey>,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn initial_topic(&self) -> Option<TopicKey> {
        self.initial_topic
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn signal_player(&self) -> Arc<SignalPlayer> {
        self.services.signal_player()
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig, services::ConfigError> {
    match path {
        Some(path) => AppConfig::load(path),
        None => {
            info!("no config file given, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1), std::env::var(CONFIG_ENV).ok())
        .inspect_err(|_| print_usage())?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let config = load_config(args.config.as_ref())?;
    let services = AppServices::seeded(&config, Clock::system(), Arc::new(WebAudioSink))?;
    info!(
        topic = args.topic.map(TopicKey::as_str),
        "starting desktop app"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        initial_topic: args.topic,
        services,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("GĐPT Kỹ năng")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    telemetry::init_tracing();
    if let Err(err) = run() {
        error!(error = %err, "fatal");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
