//! Chat orchestration: input buffer -> query endpoint -> formatter -> session.

use crate::ai::{ChatResult, QueryBackend};
use crate::format::format_response;
use crate::session::ChatSession;
use crate::types::{Message, SavedChat};
use std::rc::Rc;

/// Text being edited in place for the message at `index`.
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
    pub index: usize,
    pub text: String,
}

pub struct ChatController {
    session: ChatSession,
    input: String,
    editing: Option<EditDraft>,
    backend: Rc<dyn QueryBackend>,
}

impl ChatController {
    pub fn new(backend: Rc<dyn QueryBackend>) -> Self {
        Self {
            session: ChatSession::new(),
            input: String::new(),
            editing: None,
            backend,
        }
    }

    pub fn backend(&self) -> Rc<dyn QueryBackend> {
        Rc::clone(&self.backend)
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    pub fn saved_chats(&self) -> impl Iterator<Item = &SavedChat> {
        self.session.saved_chats()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input buffer. Typing and speech transcripts both land
    /// here; whichever writes last wins.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// First half of a send: validate and append the user message.
    ///
    /// Returns the query to issue, or `None` when `text` is blank.
    pub fn prepare_send(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring blank message");
            return None;
        }
        self.session.append(Message::user(text));
        Some(text.to_string())
    }

    /// Second half of a send: append the formatted answer, or log the
    /// failure. The input buffer is cleared either way.
    pub fn finish_send(&mut self, result: ChatResult<String>) {
        match result {
            Ok(raw) => self.session.append(Message::bot(format_response(&raw))),
            Err(err) => tracing::error!("Query failed: {}", err),
        }
        self.input.clear();
    }

    pub async fn send(&mut self, text: &str) {
        let Some(query) = self.prepare_send(text) else {
            return;
        };
        let backend = self.backend();
        let result = backend.query(&query).await;
        self.finish_send(result);
    }

    /// Send whatever is currently in the input buffer.
    pub async fn send_input(&mut self) {
        let text = self.input.clone();
        self.send(&text).await;
    }

    pub fn edit_message(&mut self, index: usize, new_text: &str) -> bool {
        self.session.edit(index, new_text)
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn begin_edit(&mut self, index: usize) {
        if let Some(message) = self.session.messages().get(index) {
            self.editing = Some(EditDraft {
                index,
                text: message.text.clone(),
            });
        }
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.editing.as_mut() {
            draft.text = text.into();
        }
    }

    /// Apply the open draft. A blank draft is ignored and stays open.
    pub fn commit_edit(&mut self) -> bool {
        let Some(draft) = self.editing.as_ref() else {
            return false;
        };
        if !self.session.edit(draft.index, &draft.text) {
            return false;
        }
        self.editing = None;
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn save_chat(&mut self) -> Option<u32> {
        self.editing = None;
        self.session.save()
    }

    pub fn select_chat(&mut self, id: u32) {
        self.editing = None;
        self.session.select(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatError;
    use crate::types::Sender;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct ScriptedBackend {
        replies: RefCell<Vec<ChatResult<String>>>,
        seen: RefCell<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<ChatResult<String>>) -> Rc<Self> {
            Rc::new(Self {
                replies: RefCell::new(replies),
                seen: RefCell::new(Vec::new()),
            })
        }
    }

    #[async_trait(?Send)]
    impl QueryBackend for ScriptedBackend {
        async fn query(&self, text: &str) -> ChatResult<String> {
            self.seen.borrow_mut().push(text.to_string());
            self.replies.borrow_mut().remove(0)
        }
    }

    fn backend_error() -> ChatError {
        ChatError::Backend {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_appends_user_and_formatted_bot() {
        let backend = ScriptedBackend::new(vec![Ok("**hi**".to_string())]);
        let mut controller = ChatController::new(backend.clone());
        controller.set_input("hello");

        controller.send_input().await;

        assert_eq!(
            controller.messages(),
            &[Message::user("hello"), Message::bot("<b>hi</b>")]
        );
        assert_eq!(controller.input(), "");
        assert_eq!(backend.seen.borrow().as_slice(), &["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_send_failure_keeps_user_message() {
        let backend = ScriptedBackend::new(vec![Err(backend_error())]);
        let mut controller = ChatController::new(backend);
        controller.set_input("hello");

        controller.send_input().await;

        assert_eq!(controller.messages(), &[Message::user("hello")]);
        assert_eq!(controller.input(), "");
    }

    #[tokio::test]
    async fn test_send_blank_is_noop() {
        let backend = ScriptedBackend::new(Vec::new());
        let mut controller = ChatController::new(backend.clone());
        controller.set_input("   ");

        controller.send_input().await;

        assert!(controller.messages().is_empty());
        assert_eq!(controller.input(), "   ");
        assert!(backend.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_send_keeps_raw_untrimmed_text() {
        let backend = ScriptedBackend::new(vec![Ok("ok".to_string())]);
        let mut controller = ChatController::new(backend.clone());

        controller.send("  spaced out \n").await;

        assert_eq!(controller.messages()[0].text, "  spaced out \n");
        assert_eq!(backend.seen.borrow()[0], "  spaced out \n");
    }

    #[test]
    fn test_split_send_out_of_order_replies() {
        let backend = ScriptedBackend::new(Vec::new());
        let mut controller = ChatController::new(backend);

        let first = controller.prepare_send("first");
        let second = controller.prepare_send("second");
        assert_eq!(first.as_deref(), Some("first"));
        assert_eq!(second.as_deref(), Some("second"));

        controller.finish_send(Ok("answer two".to_string()));
        controller.finish_send(Ok("answer one".to_string()));

        let texts: Vec<&str> = controller.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "answer two", "answer one"]);
    }

    #[test]
    fn test_edit_draft_flow() {
        let mut controller = ChatController::new(ScriptedBackend::new(Vec::new()));
        controller.prepare_send("hello");
        controller.finish_send(Ok("hi".to_string()));

        controller.begin_edit(0);
        assert_eq!(
            controller.editing(),
            Some(&EditDraft {
                index: 0,
                text: "hello".to_string()
            })
        );

        controller.set_edit_text("  ");
        assert!(!controller.commit_edit());
        assert!(controller.editing().is_some());
        assert_eq!(controller.messages()[0].text, "hello");

        controller.set_edit_text("hello again");
        assert!(controller.commit_edit());
        assert!(controller.editing().is_none());
        assert_eq!(controller.messages()[0].text, "hello again");
        assert_eq!(controller.messages()[0].sender, Sender::User);
        assert_eq!(controller.messages().len(), 2);
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut controller = ChatController::new(ScriptedBackend::new(Vec::new()));
        controller.prepare_send("hello");
        controller.begin_edit(0);
        controller.set_edit_text("changed");
        controller.cancel_edit();

        assert!(controller.editing().is_none());
        assert_eq!(controller.messages()[0].text, "hello");
    }

    #[test]
    fn test_begin_edit_missing_index_does_nothing() {
        let mut controller = ChatController::new(ScriptedBackend::new(Vec::new()));
        controller.begin_edit(3);
        assert!(controller.editing().is_none());
        assert!(!controller.commit_edit());
    }

    #[test]
    fn test_save_and_select_through_controller() {
        let mut controller = ChatController::new(ScriptedBackend::new(Vec::new()));
        controller.prepare_send("question");
        controller.finish_send(Ok("answer".to_string()));

        assert_eq!(controller.save_chat(), Some(1));
        assert!(controller.messages().is_empty());
        assert_eq!(controller.save_chat(), None);

        controller.select_chat(1);
        assert_eq!(controller.messages().len(), 2);

        controller.select_chat(2);
        assert!(controller.messages().is_empty());
        assert_eq!(controller.saved_chats().count(), 1);
    }
}
