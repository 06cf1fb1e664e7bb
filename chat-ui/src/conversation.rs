//! Conversation state machine: the transcript plus the single in-flight request.
//!
//! The transcript is an immutable snapshot. Every transition builds a new
//! [`Conversation`] and swaps it in, so views holding an older snapshot never
//! observe a half-applied change.

use std::sync::Arc;

use chat_types::{ChatResponse, Message};
use dioxus_logger::tracing::{debug, error, warn};

use crate::backend::{BackendError, ChatBackend};

/// Shown in place of the answer when the backend call fails for any reason.
pub const ERROR_REPLY: &str =
    "Sorry, something went wrong while contacting the server. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Arc<[Message]>,
}

impl Conversation {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The placeholder of the request in flight, if any.
    pub fn pending(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.pending)
    }

    fn pending_position(&self, id: &str) -> Option<usize> {
        self.messages.iter().position(|m| m.pending && m.id == id)
    }

    fn appended(&self, new_messages: impl IntoIterator<Item = Message>) -> Self {
        let mut messages = self.messages.to_vec();
        messages.extend(new_messages);
        Self {
            messages: messages.into(),
        }
    }

    fn replaced(&self, index: usize, message: Message) -> Self {
        let mut messages = self.messages.to_vec();
        messages[index] = message;
        Self {
            messages: messages.into(),
        }
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

/// Ticket for an accepted submission. Dispatching it performs the one backend
/// call that belongs to this submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    text: String,
    placeholder_id: String,
}

impl Submission {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder_id(&self) -> &str {
        &self.placeholder_id
    }

    pub async fn dispatch<B: ChatBackend + ?Sized>(self, backend: &B) -> Completion {
        let outcome = backend.ask(&self.text).await;
        Completion::new(self, outcome)
    }
}

/// Backend outcome paired with the submission it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    submission: Submission,
    outcome: Result<ChatResponse, BackendError>,
}

impl Completion {
    pub fn new(submission: Submission, outcome: Result<ChatResponse, BackendError>) -> Self {
        Self {
            submission,
            outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatController {
    conversation: Conversation,
    input: String,
    state: RequestState,
}

impl ChatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == RequestState::InFlight
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Append the user message and the pending placeholder, then hand back the
    /// ticket for the backend call. Blank text or a request already in flight
    /// makes this a no-op.
    pub fn submit(&mut self, text: &str) -> Option<Submission> {
        if text.trim().is_empty() {
            return None;
        }
        if self.is_loading() {
            debug!("Dropping submission while a request is in flight");
            return None;
        }

        let placeholder = Message::pending_assistant();
        let placeholder_id = placeholder.id.clone();
        self.conversation = self
            .conversation
            .appended([Message::user(text), placeholder]);
        self.input.clear();
        self.state = RequestState::InFlight;

        debug!(
            messages = self.conversation.len(),
            "Submitted message, awaiting reply"
        );

        Some(Submission {
            text: text.to_string(),
            placeholder_id,
        })
    }

    /// Submit whatever is in the input buffer.
    pub fn submit_input(&mut self) -> Option<Submission> {
        let text = self.input.clone();
        self.submit(&text)
    }

    /// Resolve the placeholder of `completion`'s submission in place and leave
    /// the loading state. Returns false when that placeholder is not pending.
    pub fn complete(&mut self, completion: Completion) -> bool {
        let Completion {
            submission,
            outcome,
        } = completion;

        let Some(index) = self
            .conversation
            .pending_position(&submission.placeholder_id)
        else {
            warn!(
                "No pending message {} to resolve, ignoring completion",
                submission.placeholder_id
            );
            if self.conversation.pending().is_none() {
                self.state = RequestState::Idle;
            }
            return false;
        };

        let placeholder = &self.conversation.messages()[index];
        let resolved = match outcome {
            Ok(ChatResponse { response, logs }) => {
                debug!(steps = logs.len(), "Assistant reply received");
                placeholder.resolved(response, Some(logs))
            }
            Err(e) => {
                error!("Chat request failed: {}", e);
                placeholder.resolved(ERROR_REPLY, None)
            }
        };

        self.conversation = self.conversation.replaced(index, resolved);
        self.state = RequestState::Idle;
        true
    }
}
