// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shape-tolerant views over OpenAI-style chat completion JSON.
//!
//! Providers disagree on which fields they send and what type they give
//! them, so every accessor returns `None` (or an empty iterator) on a shape
//! mismatch instead of failing.

use serde_json::Value;

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn list_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// View over a chat completion request body
#[derive(Clone, Copy, Debug)]
pub struct ChatRequest<'a>(&'a Value);

impl<'a> ChatRequest<'a> {
    /// Wrap a parsed request body; only JSON objects qualify.
    pub fn new(value: &'a Value) -> Option<Self> {
        value.is_object().then_some(Self(value))
    }

    pub fn model(&self) -> Option<&'a str> {
        str_field(self.0, "model")
    }

    pub fn messages(&self) -> impl DoubleEndedIterator<Item = ChatMessage<'a>> + 'a {
        list_field(self.0, "messages").iter().map(ChatMessage)
    }

    pub fn message_count(&self) -> usize {
        list_field(self.0, "messages").len()
    }

    pub fn tool_count(&self) -> usize {
        list_field(self.0, "tools").len()
    }

    /// Whether the request asked for a streamed response (JSON truthiness)
    pub fn stream(&self) -> bool {
        match self.0.get("stream") {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
            Some(Value::Null) | None => false,
        }
    }

    /// The most recent message with role `user`
    pub fn last_user_message(&self) -> Option<ChatMessage<'a>> {
        self.messages().rev().find(|m| m.role() == Some("user"))
    }

    /// Total characters across string contents of `system` messages
    pub fn system_prompt_chars(&self) -> usize {
        self.messages()
            .filter(|m| m.role() == Some("system"))
            .filter_map(|m| m.content_str())
            .map(|c| c.chars().count())
            .sum()
    }
}

/// View over one entry of a request's `messages` list
#[derive(Clone, Copy, Debug)]
pub struct ChatMessage<'a>(&'a Value);

impl<'a> ChatMessage<'a> {
    pub fn role(&self) -> Option<&'a str> {
        str_field(self.0, "role")
    }

    /// Content when it is a plain string
    pub fn content_str(&self) -> Option<&'a str> {
        str_field(self.0, "content")
    }

    /// Content as text: a plain string, or the joined `text` of content parts
    pub fn content_text(&self) -> Option<String> {
        match self.0.get("content")? {
            Value::String(s) => Some(s.clone()),
            Value::Array(parts) => Some(
                parts
                    .iter()
                    .filter_map(|p| str_field(p, "text"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            _ => None,
        }
    }
}

/// View over a response object: a full completion or one streamed chunk
#[derive(Clone, Copy, Debug)]
pub struct ChatResponse<'a>(&'a Value);

impl<'a> ChatResponse<'a> {
    pub fn new(value: &'a Value) -> Option<Self> {
        value.is_object().then_some(Self(value))
    }

    pub fn choices(&self) -> impl Iterator<Item = Choice<'a>> + 'a {
        list_field(self.0, "choices").iter().map(Choice)
    }

    /// Top-level `reasoning`, sent by some OSS backends
    pub fn reasoning(&self) -> Option<&'a str> {
        str_field(self.0, "reasoning")
    }
}

/// View over one entry of a response's `choices` list
#[derive(Clone, Copy, Debug)]
pub struct Choice<'a>(&'a Value);

impl<'a> Choice<'a> {
    pub fn delta(&self) -> Option<Delta<'a>> {
        self.0.get("delta").filter(|d| d.is_object()).map(Delta)
    }

    pub fn message_content(&self) -> Option<&'a str> {
        self.0.get("message").and_then(|m| str_field(m, "content"))
    }

    pub fn message_reasoning(&self) -> Option<&'a str> {
        self.0.get("message").and_then(|m| str_field(m, "reasoning"))
    }

    pub fn text(&self) -> Option<&'a str> {
        str_field(self.0, "text")
    }

    pub fn reasoning(&self) -> Option<&'a str> {
        str_field(self.0, "reasoning")
    }
}

/// View over a streamed `delta` fragment
#[derive(Clone, Copy, Debug)]
pub struct Delta<'a>(&'a Value);

impl<'a> Delta<'a> {
    /// `content`, falling back to `text` when content is not a string
    pub fn text(&self) -> Option<&'a str> {
        str_field(self.0, "content").or_else(|| str_field(self.0, "text"))
    }

    pub fn reasoning(&self) -> Option<&'a str> {
        str_field(self.0, "reasoning")
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
