use agify::{ApiResponse, Config, Error, RateLimit};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;

pub struct CliOptions {
    pub names: Vec<String>,
    pub country: String,
    pub api_key: Option<String>,
    pub url: Option<String>,
    pub log_level: Option<String>,
    pub version: bool,
}

pub fn build_cli() -> Command {
    Command::new("agify")
        .about("Predict the age of a name using agify.io")
        .disable_version_flag(true)
        .arg(
            Arg::new("names")
                .value_name("NAME")
                .num_args(1..)
                .required_unless_present("version")
                .help("Name(s) to look up; more than one issues a batch request"),
        )
        .arg(
            Arg::new("country")
                .long("country")
                .num_args(1)
                .help("ISO 3166-1 alpha-2 country code to scope the prediction"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .num_args(1)
                .help("API key (overrides AGIFY_API_KEY)"),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .num_args(1)
                .help("Base URL of the service (overrides AGIFY_API_URL)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .num_args(1)
                .help("Override RUST_LOG level (e.g., info, debug)"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::SetTrue),
        )
}

impl CliOptions {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            names: m
                .get_many::<String>("names")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            country: m.get_one::<String>("country").cloned().unwrap_or_default(),
            api_key: m.get_one::<String>("api-key").cloned(),
            url: m.get_one::<String>("url").cloned(),
            log_level: m.get_one::<String>("log-level").cloned(),
            version: m.get_flag("version"),
        }
    }

    /// Flags win over the environment.
    pub fn apply(&self, mut cfg: Config) -> Config {
        if let Some(url) = &self.url {
            cfg.base_url = url.clone();
        }
        if let Some(key) = &self.api_key {
            cfg.api_key = Some(key.clone()).filter(|k| !k.is_empty());
        }
        cfg
    }
}

pub fn init_logging(level: Option<&str>) {
    // Respect explicit level, else RUST_LOG, else info. Logs go to stderr.
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(lvl) = level {
        builder.parse_filters(lvl);
    }
    builder.init();
}

#[derive(Serialize)]
struct ErrorOut {
    message: String,
    status: Option<u16>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output<T> {
    Ok {
        result: T,
        rate_limit: Option<RateLimit>,
    },
    Err {
        error: ErrorOut,
        rate_limit: Option<RateLimit>,
    },
}

/// Renders a response as one JSON document; the flag tells whether it failed.
pub fn render<T: Serialize>(resp: ApiResponse<T>) -> anyhow::Result<(String, bool)> {
    let (result, rate_limit) = resp.into_parts();
    let (out, failed) = match result {
        Ok(result) => (Output::Ok { result, rate_limit }, false),
        Err(e) => (
            Output::Err {
                error: error_out(&e),
                rate_limit,
            },
            true,
        ),
    };
    Ok((serde_json::to_string(&out)?, failed))
}

fn error_out(e: &Error) -> ErrorOut {
    ErrorOut {
        message: e.to_string(),
        status: e.status(),
    }
}
