use std::fmt;
use std::sync::Arc;

use backend::{BackendConfig, DEFAULT_API_URL};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use drive_core::model::Role;
use services::{AppServices, Clock};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, RouteNode, UiApp, build_app_context, route_tree};

const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_LOG_FILTER: &str = "app=info,services=info,backend=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPageSize { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPageSize { raw } => write!(f, "invalid --page-size value: {raw}"),
            ArgsError::InvalidApiUrl { raw } => {
                write!(f, "invalid API URL (expected http:// or https://): {raw}")
            }
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

struct DesktopApp {
    role: Role,
    page_size: u32,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn role(&self) -> Role {
        self.role
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    api_url: String,
    token: Option<String>,
    role: Role,
    page_size: u32,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--api-url <url>] [--token <token>] [--user-type <type>] [--page-size <n>]");
    eprintln!("  cargo run -p app -- routes [--user-type <type>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {DEFAULT_API_URL}");
    eprintln!("  --user-type ADMIN (ADMIN, SCHOOL_ADMIN, COLLECTOR, ASSISTANT)");
    eprintln!("  --page-size {DEFAULT_PAGE_SIZE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRIVE_API_URL, DRIVE_API_TOKEN, DRIVE_USER_TYPE, DRIVE_PAGE_SIZE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Routes,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "routes" => Some(Self::Routes),
            _ => None,
        }
    }
}

impl Args {
    /// Parse flags on top of environment defaults; flags win.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let mut api_url = env("DRIVE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let mut token = env("DRIVE_API_TOKEN");
        let mut role = Role::from_user_type(env("DRIVE_USER_TYPE").as_deref());
        let mut page_size = match env("DRIVE_PAGE_SIZE") {
            Some(raw) => parse_page_size(raw)?,
            None => DEFAULT_PAGE_SIZE,
        };
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    api_url = require_value(args, "--api-url")?;
                }
                "--token" => {
                    let value = require_value(args, "--token")?;
                    token = (!value.trim().is_empty()).then_some(value);
                }
                "--user-type" => {
                    let value = require_value(args, "--user-type")?;
                    role = Role::from_user_type(Some(&value));
                }
                "--page-size" => {
                    page_size = parse_page_size(require_value(args, "--page-size")?)?;
                }
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url: check_api_url(api_url)?,
            token,
            role,
            page_size,
            help,
        })
    }

    fn backend_config(&self) -> BackendConfig {
        let config = BackendConfig::new(self.api_url.clone());
        match &self.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

/// Flag and environment values go through the same scheme check.
fn check_api_url(raw: String) -> Result<String, ArgsError> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(raw)
    } else {
        Err(ArgsError::InvalidApiUrl { raw })
    }
}

fn parse_page_size(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ArgsError::InvalidPageSize { raw }),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn render_routes(nodes: &[RouteNode], depth: usize, out: &mut String) {
    for node in nodes {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{:<24} {}\n", node.path, node.label));
        render_routes(&node.children, depth + 1, out);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };
    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter(), |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    match cmd {
        Command::Routes => {
            let mut out = String::new();
            render_routes(&route_tree(parsed.role), 0, &mut out);
            print!("{out}");
            Ok(())
        }
        Command::Ui => {
            init_tracing();
            info!(
                api_url = %parsed.api_url,
                role = parsed.role.as_user_type(),
                page_size = parsed.page_size,
                "starting admin dashboard"
            );

            let services = AppServices::http(parsed.backend_config(), Clock::default())?;
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                role: parsed.role,
                page_size: parsed.page_size,
                services,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Drive Admin")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
