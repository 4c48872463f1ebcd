use std::{net::IpAddr, path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use spotop::{
    config::{self, Config},
    error, info,
    server::{self, AppState},
    success, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Address to bind (overrides HOST)
    #[clap(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides PORT)
    #[clap(long, short)]
    port: Option<u16>,

    /// Directory with the static pages (overrides PUBLIC_DIR)
    #[clap(long)]
    public_dir: Option<PathBuf>,

    /// Open the login page in the default browser once the server is up
    #[clap(long)]
    open: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    // RUST_LOG may come from a .env file, so load it before the subscriber.
    for path in config::load_env() {
        info!("Loaded environment from {}", path.display());
    }

    init_tracing();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(public_dir) = cli.public_dir {
        config.public_dir = public_dir;
    }

    for name in config.missing_credentials() {
        warning!("{} is not set; the Spotify login will not work", name);
    }
    if !config.public_dir.is_dir() {
        warning!(
            "Public directory {} not found, static pages will return 404",
            config.public_dir.display()
        );
    }

    let listener = match server::bind(&config).await {
        Ok(listener) => listener,
        Err(e) => error!(
            "Cannot listen on {}:{}. Err: {}",
            config.host, config.port, e
        ),
    };

    let port = listener.local_addr().map_or(config.port, |addr| addr.port());
    let local_url = format!("http://localhost:{port}");
    success!("App running at {}", local_url);

    if cli.open && webbrowser::open(&format!("{local_url}/login")).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}/login",
            local_url
        );
    }

    let state = Arc::new(AppState::new(config));
    if let Err(e) = server::serve(listener, state).await {
        error!("Server stopped: {}", e);
    }
}
