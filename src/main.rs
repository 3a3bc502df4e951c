// synth-chat — Terminal chat panels for a synthesizer patch assistant
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use std::fs::OpenOptions;
use std::io::IsTerminal as _;
use synth_chat::Cli;
use synth_chat::app::{AppConfig, responder::CannedResponder};
use synth_chat::error::AppError;

#[allow(clippy::exit)]
fn main() {
    if let Err(err) = run() {
        if let Some(app_error) = extract_app_error(&err) {
            eprintln!("{}", app_error.user_message());
            std::process::exit(app_error.exit_code());
        }
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = AppConfig::from_cli(&cli)?;
    if !std::io::stdout().is_terminal() {
        return Err(anyhow::Error::new(AppError::NotATerminal));
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let responder = CannedResponder::new(cli.response.clone(), config.response_delay);
        let mut app = synth_chat::app::App::new(config, Box::new(responder));
        tracing::info!(panel = ?app.panel_mode, "starting chat panels");

        synth_chat::app::run_tui(&mut app).await.map_err(|e| {
            tracing::error!("terminal loop failed: {e}");
            e.context(AppError::TerminalFailed)
        })
    })
}

fn extract_app_error(err: &anyhow::Error) -> Option<AppError> {
    // Context layers only downcast through the top-level error, not through `chain()`.
    err.downcast_ref::<AppError>()
        .cloned()
        .or_else(|| err.chain().find_map(|cause| cause.downcast_ref::<AppError>().cloned()))
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = cli.log_file.as_ref() else {
        if std::env::var_os("RUST_LOG").is_some() {
            eprintln!(
                "RUST_LOG is set, but tracing is disabled without --log-file <PATH>. \
Use --log-file to enable diagnostics."
            );
        }
        return Ok(());
    };

    let directives = cli
        .log_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_owned());
    let filter = tracing_subscriber::EnvFilter::try_new(directives.as_str())
        .map_err(|e| anyhow::anyhow!("invalid tracing filter `{directives}`: {e}"))?;

    let mut options = OpenOptions::new();
    options.create(true).write(true);
    if cli.log_append {
        options.append(true);
    } else {
        options.truncate(true);
    }
    let file = options
        .open(path)
        .map_err(|e| anyhow::anyhow!("failed to open log file {}: {e}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;

    tracing::info!(
        target: "diagnostics",
        version = env!("CARGO_PKG_VERSION"),
        log_file = %path.display(),
        log_filter = %directives,
        log_append = cli.log_append,
        panel = ?cli.panel,
        "tracing enabled"
    );

    Ok(())
}
