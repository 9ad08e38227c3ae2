// SPDX-License-Identifier: MPL-2.0
//! `postboard-toast` shows one toast through the toast service and prints the
//! container markup each time the toast changes phase, until it is gone.

use postboard::application::ToastService;
use postboard::config::{self, Config};
use postboard::error::{Error, Result};
use postboard::i18n::fluent::I18n;
use postboard::infrastructure::{Document, SystemClock};
use postboard::ui::notifications::{Expiry, Kind, Manager, Notification, Phase, ToastLabels};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: postboard-toast [OPTIONS] MESSAGE...

Options:
  --kind KIND        success, error, info or warning (unknown kinds show as info)
  --duration MS      display time in milliseconds; 0 or less keeps the toast
  --lang LANG        locale for the close button and kind labels
  --config PATH      settings file (defaults to the user config directory)
  -v, --verbose      log lifecycle events to stderr
  -h, --help         print this help";

const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct Flags {
    kind: Kind,
    duration_ms: Option<i64>,
    lang: Option<String>,
    config_path: Option<PathBuf>,
    verbose: bool,
    message: String,
}

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let kind: Option<String> = args.opt_value_from_str("--kind")?;
    let duration_ms: Option<i64> = args.opt_value_from_str("--duration")?;
    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;

    let message = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect::<Vec<_>>()
        .join(" ");
    if message.trim().is_empty() {
        return Err(Error::Cli("missing MESSAGE".to_string()));
    }

    Ok(Some(Flags {
        kind: kind.as_deref().map_or(Kind::Info, Kind::parse),
        duration_ms,
        lang,
        config_path,
        verbose,
        message,
    }))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}

async fn run(flags: Flags) -> Result<()> {
    let config = load_config(flags.config_path.as_ref())?;

    let mut i18n = I18n::new(None, &config);
    if let Some(lang) = &flags.lang {
        if let Err(err) = i18n.set_locale_str(lang) {
            tracing::warn!(error = %err, locale = %i18n.current_locale(), "keeping current locale");
        }
    }

    let manager = Manager::new(
        Document::new(),
        SystemClock,
        config.toasts.clone(),
        ToastLabels::from_i18n(&i18n),
    );
    let service = ToastService::new(manager);
    let driver = service.spawn_driver();

    let message = flags.message;
    let id = match flags.duration_ms {
        Some(millis) => service.show(message, flags.kind, Expiry::from_millis(millis)),
        None => match flags.kind {
            Kind::Success => service.success(message),
            Kind::Error => service.error(message),
            Kind::Info => service.info(message),
            Kind::Warning => service.warning(message),
        },
    };
    println!("{}", service.snapshot_html());

    let persistent = service.with(|manager| {
        manager
            .get(&id)
            .is_some_and(|toast| toast.expiry().is_persistent())
    });
    if persistent {
        println!("(persistent toast, not waiting for it to close)");
        driver.abort();
        return Ok(());
    }

    let mut phase = Phase::Visible;
    loop {
        tokio::time::sleep(POLL_INTERVAL).await;
        match service.with(|manager| manager.get(&id).map(Notification::phase)) {
            Some(current) if current != phase => {
                phase = current;
                println!("{}", service.snapshot_html());
            }
            Some(_) => {}
            None => break,
        }
    }
    println!("{}", service.snapshot_html());
    driver.abort();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    init_tracing(flags.verbose);

    match run(flags).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
