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

use super::list_layout;

/// Text shown while a response is on its way.
pub const PLACEHOLDER_TEXT: &str = "Thinking...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// Typed by the user; drawn right-aligned.
    User,
    /// Responses and status lines; drawn left-aligned.
    System,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: MessageRole,
    pub text: String,
    /// Set for the pending-response placeholder, which is removed when the response lands.
    pub transient: bool,
    /// Row of the bubble's top edge in content coordinates. Written by [`MessageList::relayout`].
    pub y_offset: usize,
    pub height: usize,
    pub bubble_width: u16,
}

impl ChatMessage {
    fn new(id: MessageId, role: MessageRole, text: String, transient: bool) -> Self {
        Self { id, role, text, transient, y_offset: 0, height: 0, bubble_width: 0 }
    }

    #[cfg(test)]
    pub(crate) fn test_new(role: MessageRole, text: &str) -> Self {
        Self::new(MessageId(0), role, text.to_owned(), false)
    }
}

/// Ordered chat history. Messages only ever leave through
/// [`MessageList::remove_placeholder`] or [`MessageList::clear`].
#[derive(Debug, Default)]
pub struct MessageList {
    messages: Vec<ChatMessage>,
    next_id: u64,
    total_height: usize,
}

impl MessageList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> MessageId {
        self.push(MessageRole::User, text.into(), false)
    }

    pub fn push_system(&mut self, text: impl Into<String>) -> MessageId {
        self.push(MessageRole::System, text.into(), false)
    }

    /// Append the "Thinking..." placeholder.
    pub fn push_placeholder(&mut self) -> MessageId {
        self.push(MessageRole::System, PLACEHOLDER_TEXT.to_owned(), true)
    }

    fn push(&mut self, role: MessageRole, text: String, transient: bool) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, role, text, transient));
        id
    }

    /// Remove the most recent placeholder. Matches on the transient flag, so a
    /// real response that happens to read "Thinking..." is left alone.
    pub fn remove_placeholder(&mut self) -> bool {
        let Some(idx) = self.messages.iter().rposition(|m| m.transient) else {
            return false;
        };
        self.messages.remove(idx);
        true
    }

    #[doc(hidden)]
    #[must_use]
    pub fn has_placeholder(&self) -> bool {
        self.messages.iter().any(|m| m.transient)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.total_height = 0;
    }

    /// Recompute every bubble's offset and height for a list `width` columns
    /// wide. Returns the total content height.
    pub fn relayout(&mut self, width: u16) -> usize {
        let layout = list_layout::compute(&self.messages, width);
        for (msg, slot) in self.messages.iter_mut().zip(layout.slots) {
            msg.y_offset = slot.y_offset;
            msg.height = slot.height;
            msg.bubble_width = slot.width;
        }
        self.total_height = layout.total_height;
        self.total_height
    }

    /// Total content height as of the last [`MessageList::relayout`].
    #[must_use]
    pub fn total_height(&self) -> usize {
        self.total_height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ChatMessage> {
        self.messages.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }

    /// Messages whose bubble intersects rows `[top, top + height)`.
    pub fn visible(&self, top: usize, height: usize) -> impl Iterator<Item = &ChatMessage> {
        let bottom = top.saturating_add(height);
        self.messages
            .iter()
            .filter(|m| m.height > 0)
            .skip_while(move |m| m.y_offset + m.height <= top)
            .take_while(move |m| m.y_offset < bottom)
    }
}

impl<'a> IntoIterator for &'a MessageList {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
