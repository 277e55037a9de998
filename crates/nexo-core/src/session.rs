//! Chat session - the session-owned conversation state
//!
//! The conversation log is explicit session state with single-writer
//! discipline: only [`ChatSession::ask`] appends to it. The responder
//! itself stays pure; chart attachments are resolved here against the
//! chart data supplied at construction.

use crate::responder::Responder;
use crate::types::{AnswerBundle, ChartRef, ChatMessage, SalesPoint};

/// One user's conversation with the canned responder
#[derive(Debug)]
pub struct ChatSession {
    responder: Responder,
    sales_by_day: Vec<SalesPoint>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Create a session seeded with the assistant welcome message
    #[must_use]
    pub fn new(
        responder: Responder,
        welcome_text: impl Into<String>,
        sales_by_day: Vec<SalesPoint>,
    ) -> Self {
        Self {
            responder,
            sales_by_day,
            messages: vec![ChatMessage::assistant(welcome_text)],
        }
    }

    /// Ask a question and append both sides of the exchange
    ///
    /// Blank input is ignored and returns `None`; the conversation log is
    /// untouched. Otherwise returns the appended assistant message.
    pub fn ask(&mut self, query: &str) -> Option<&ChatMessage> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(query));

        let bundle = self.responder.answer(query);
        let reply = self.build_reply(bundle);
        self.messages.push(reply);

        self.messages.last()
    }

    /// The full conversation log, oldest first
    #[inline]
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in the log, welcome message included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// A session always holds at least the welcome message
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn build_reply(&self, bundle: AnswerBundle) -> ChatMessage {
        let mut reply = ChatMessage::assistant(bundle.text).with_steps(bundle.steps);
        if let Some(chart) = bundle.chart {
            reply = match chart {
                ChartRef::SalesByDay => reply.with_chart(self.sales_by_day.clone()),
            };
        }
        reply
    }
}
