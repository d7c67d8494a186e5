//! Chat overlay handlers

use nexus_core::ChatMessage;

use crate::request::{Panel, RequestToken};
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

pub const EMPTY_REPLY_TEXT: &str = "I couldn't process that request.";
pub const CHAT_ERROR_TEXT: &str = "Sorry, I encountered an error. Please try again later.";

pub fn handle_toggle(state: &mut AppState) -> UpdateResult {
    state.chat.open = !state.chat.open;
    state.ui_mode = if state.chat.open {
        UiMode::Chat
    } else {
        UiMode::Normal
    };
    UpdateResult::none()
}

/// Send the typed message; ignored when empty or while a reply is pending
pub fn handle_send(state: &mut AppState) -> UpdateResult {
    let text = state.chat.input.trim().to_string();
    if text.is_empty() || state.is_busy(Panel::Chat) {
        return UpdateResult::none();
    }

    state.chat.input.clear();
    state.chat.messages.push(ChatMessage::user(text.clone()));
    let token = state.requests.begin(Panel::Chat);
    UpdateResult::action(UpdateAction::Chat {
        token,
        message: text,
    })
}

pub fn handle_reply(state: &mut AppState, token: RequestToken, text: String) -> UpdateResult {
    if state.requests.complete(Panel::Chat, token) {
        let text = if text.trim().is_empty() {
            EMPTY_REPLY_TEXT.to_string()
        } else {
            text
        };
        state.chat.messages.push(ChatMessage::bot(text));
    }
    UpdateResult::none()
}

pub fn handle_failure(state: &mut AppState, token: RequestToken, error: String) -> UpdateResult {
    if state.requests.complete(Panel::Chat, token) {
        tracing::warn!("Chat request failed: {}", error);
        state.chat.messages.push(ChatMessage::bot(CHAT_ERROR_TEXT));
    }
    UpdateResult::none()
}
