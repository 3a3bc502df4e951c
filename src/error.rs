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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Terminal is not interactive")]
    NotATerminal,
    #[error("Terminal I/O failed")]
    TerminalFailed,
}

impl AppError {
    pub const INVALID_CONFIG_EXIT_CODE: i32 = 2;
    pub const NOT_A_TERMINAL_EXIT_CODE: i32 = 20;
    pub const TERMINAL_FAILED_EXIT_CODE: i32 = 21;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig(_) => Self::INVALID_CONFIG_EXIT_CODE,
            Self::NotATerminal => Self::NOT_A_TERMINAL_EXIT_CODE,
            Self::TerminalFailed => Self::TERMINAL_FAILED_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidConfig(detail) => format!("Invalid configuration: {detail}."),
            Self::NotATerminal => {
                "synth-chat needs an interactive terminal. Run it outside of a pipe.".to_owned()
            }
            Self::TerminalFailed => {
                "The terminal stopped responding; the session ended.".to_owned()
            }
        }
    }
}
