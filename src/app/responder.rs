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

use std::time::Duration;
use tokio::sync::mpsc;

pub const DEFAULT_RESPONSE: &str = "This is a response";
pub const DROPPED_REPLY: &str = "no answer was produced";

/// Messages delivered to the event loop from outside the terminal:
/// responder replies and side-panel submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    Response(String),
    ResponseFailed(String),
    SidePanelPrompt(String),
}

/// One-shot handle a responder uses to answer a submitted message.
/// Dropping it unanswered reports a failure so the placeholder never lingers.
#[derive(Debug)]
pub struct ReplyHandle {
    tx: Option<mpsc::UnboundedSender<PanelEvent>>,
}

impl ReplyHandle {
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<PanelEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    pub fn respond(mut self, text: impl Into<String>) {
        self.deliver(PanelEvent::Response(text.into()));
    }

    pub fn fail(mut self, reason: impl Into<String>) {
        self.deliver(PanelEvent::ResponseFailed(reason.into()));
    }

    fn deliver(&mut self, event: PanelEvent) {
        let Some(tx) = self.tx.take() else {
            return;
        };
        if tx.send(event).is_err() {
            tracing::warn!("chat panel closed before the response arrived");
        }
    }
}

impl Drop for ReplyHandle {
    fn drop(&mut self) {
        if self.tx.is_some() {
            tracing::warn!("responder dropped a request without answering");
            self.deliver(PanelEvent::ResponseFailed(DROPPED_REPLY.to_owned()));
        }
    }
}

/// Receives every submitted chat message. Implementations answer through the
/// [`ReplyHandle`], immediately or later from a spawned task.
pub trait ChatResponder {
    fn message_submitted(&mut self, text: String, reply: ReplyHandle);
}

/// Answers every message with the same text after a fixed delay.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    text: String,
    delay: Duration,
}

impl CannedResponder {
    #[must_use]
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self { text: text.into(), delay }
    }

    /// Replies synchronously; handy when no runtime is around.
    #[must_use]
    pub fn immediate(text: impl Into<String>) -> Self {
        Self::new(text, Duration::ZERO)
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::immediate(DEFAULT_RESPONSE)
    }
}

impl ChatResponder for CannedResponder {
    fn message_submitted(&mut self, text: String, reply: ReplyHandle) {
        tracing::debug!(chars = text.chars().count(), "canned responder received message");
        if self.delay.is_zero() {
            reply.respond(self.text.clone());
            return;
        }
        let response = self.text.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            reply.respond(response);
        });
    }
}
