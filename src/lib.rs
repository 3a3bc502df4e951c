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

pub mod app;
pub mod error;
pub mod ui;

use clap::Parser;

pub use app::PanelMode;

#[derive(Parser, Debug)]
#[command(name = "synth-chat", about = "Chat panels for describing synth patches")]
pub struct Cli {
    /// Which panels to show: the chat panel, the docked side panel, or both
    #[arg(long, value_enum, default_value_t = PanelMode::Both)]
    pub panel: PanelMode,

    /// Text the built-in responder answers with
    #[arg(long, default_value = app::responder::DEFAULT_RESPONSE)]
    pub response: String,

    /// Delay before the built-in responder answers (milliseconds)
    #[arg(long, value_name = "MS", default_value_t = 600)]
    pub response_delay_ms: u64,

    /// Rows scrolled per mouse-wheel notch
    #[arg(long, value_name = "N", default_value_t = app::DEFAULT_SCROLL_LINES)]
    pub scroll_lines: usize,

    /// Width of the docked side panel (columns)
    #[arg(long, value_name = "COLS", default_value_t = app::DEFAULT_SIDE_WIDTH)]
    pub side_width: u16,

    /// Write tracing diagnostics to this file (disabled when omitted)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to `RUST_LOG`, then `info`)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
