//! Drives the chat controller end to end against scripted in-memory backends.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use chat_types::{ChatResponse, Role, TraceStep};
use chat_ui::{
    parse_chat_response, present, BackendError, ChatBackend, ChatController, ERROR_REPLY,
};
use futures::executor::block_on;
use serde_json::json;

/// Replies from a fixed script and records every question it was asked.
#[derive(Default)]
struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<ChatResponse, BackendError>>>,
    asked: RefCell<Vec<String>>,
    calls: Cell<usize>,
}

impl ScriptedBackend {
    fn with_replies(replies: Vec<Result<ChatResponse, BackendError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl ChatBackend for ScriptedBackend {
    async fn ask(&self, message: &str) -> Result<ChatResponse, BackendError> {
        self.calls.set(self.calls.get() + 1);
        self.asked.borrow_mut().push(message.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Request("script exhausted".to_string())))
    }
}

fn crispr_reply() -> Result<ChatResponse, BackendError> {
    parse_chat_response(
        &json!({
            "response": "CRISPR is...",
            "logs": [{"step": "search", "tool": "pubmed"}]
        })
        .to_string(),
    )
}

#[test]
fn crispr_question_resolves_to_answer_with_one_step_trace() {
    let backend = ScriptedBackend::with_replies(vec![crispr_reply()]);
    let mut controller = ChatController::new();
    controller.set_input("What is CRISPR?");

    let submission = controller.submit_input().expect("accepted");

    // User bubble then the loading bubble, before the backend has been called.
    let during = controller.conversation().clone();
    assert_eq!(during.len(), 2);
    assert_eq!(during.messages()[0].content, "What is CRISPR?");
    assert!(during.messages()[1].pending);
    assert_eq!(backend.calls.get(), 0);

    let completion = block_on(submission.dispatch(&backend));
    assert!(controller.complete(completion));

    let messages = controller.conversation().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].content, "CRISPR is...");
    assert!(!messages[1].pending);

    let trace = present(messages[1].trace()).expect("trace control");
    assert!(trace.label(false).ends_with("(1 steps)"));
    assert_eq!(trace.blocks.len(), 1);

    assert_eq!(backend.asked.borrow().as_slice(), ["What is CRISPR?"]);
    assert!(!controller.is_loading());
}

#[test]
fn failed_request_shows_error_bubble_without_trace_and_unlocks_input() {
    let backend = ScriptedBackend::with_replies(vec![Err(BackendError::Status {
        status: 500,
        detail: "Agent not initialized".to_string(),
    })]);
    let mut controller = ChatController::new();

    let submission = controller.submit("test").expect("accepted");
    let completion = block_on(submission.dispatch(&backend));
    controller.complete(completion);

    let last = controller.conversation().last().expect("reply");
    assert_eq!(last.content, ERROR_REPLY);
    assert!(last.logs.is_none());
    assert!(present(last.trace()).is_none());
    assert!(!controller.is_loading());

    // The conversation stays usable.
    controller.set_input("again");
    assert!(controller.can_submit());
}

#[test]
fn malformed_body_collapses_to_the_same_error_reply() {
    let backend = ScriptedBackend::with_replies(vec![parse_chat_response("{\"result\": 1}")]);
    let mut controller = ChatController::new();

    let submission = controller.submit("test").expect("accepted");
    controller.complete(block_on(submission.dispatch(&backend)));

    let last = controller.conversation().last().expect("reply");
    assert_eq!(last.content, ERROR_REPLY);
    assert!(last.logs.is_none());
}

#[test]
fn second_submit_while_loading_dispatches_nothing() {
    let backend = ScriptedBackend::with_replies(vec![crispr_reply()]);
    let mut controller = ChatController::new();

    let first = controller.submit("first").expect("accepted");
    assert!(controller.submit("second").is_none());
    assert_eq!(controller.conversation().len(), 2);

    controller.complete(block_on(first.dispatch(&backend)));

    assert_eq!(backend.calls.get(), 1);
    assert_eq!(controller.conversation().len(), 2);
}

#[test]
fn whitespace_submissions_never_reach_the_backend() {
    let backend = ScriptedBackend::default();
    let mut controller = ChatController::new();

    for text in ["", "   ", "\n\t"] {
        assert!(controller.submit(text).is_none());
    }

    assert!(controller.conversation().is_empty());
    assert_eq!(backend.calls.get(), 0);
}

#[test]
fn successive_exchanges_append_in_submission_order() {
    let backend = ScriptedBackend::with_replies(vec![
        crispr_reply(),
        Err(BackendError::Request("offline".to_string())),
        Ok(ChatResponse {
            response: "Cas9 cuts DNA.".to_string(),
            logs: vec![],
        }),
    ]);
    let mut controller = ChatController::new();

    for question in ["What is CRISPR?", "And TALENs?", "What does Cas9 do?"] {
        let submission = controller.submit(question).expect("accepted");
        controller.complete(block_on(submission.dispatch(&backend)));
        assert!(controller.conversation().pending().is_none());
    }

    let contents: Vec<&str> = controller
        .conversation()
        .messages()
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(
        contents,
        vec![
            "What is CRISPR?",
            "CRISPR is...",
            "And TALENs?",
            ERROR_REPLY,
            "What does Cas9 do?",
            "Cas9 cuts DNA.",
        ]
    );

    // Empty trace attaches but renders no control.
    let last = controller.conversation().last().expect("reply");
    assert_eq!(last.trace().map(<[TraceStep]>::len), Some(0));
    assert!(present(last.trace()).is_none());
}
