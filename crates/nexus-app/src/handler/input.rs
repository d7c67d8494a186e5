//! Text field focus, editing and submission

use crate::message::Message;
use crate::state::{AppState, InputField, UiMode};

use super::UpdateResult;

pub fn handle_focus(state: &mut AppState, field: InputField) -> UpdateResult {
    match field {
        InputField::Code => {
            let Some(content) = state.current_file().map(|f| f.content.clone()) else {
                return UpdateResult::none();
            };
            state.editor.code_draft = content;
            state.ui_mode = UiMode::Input(field);
        }
        InputField::Chat => {
            state.chat.open = true;
            state.ui_mode = UiMode::Chat;
        }
        _ => state.ui_mode = UiMode::Input(field),
    }
    UpdateResult::none()
}

/// Leave text entry. Closing chat input closes the overlay; an unsaved code
/// draft is dropped.
pub fn handle_blur(state: &mut AppState) -> UpdateResult {
    match state.ui_mode {
        UiMode::Chat => state.chat.open = false,
        UiMode::Input(InputField::Code) => state.editor.code_draft.clear(),
        _ => {}
    }
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_changed(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(field) = state.focused_field() {
        *state.input_text_mut(field) = text;
    }
    UpdateResult::none()
}

/// Submit the focused field as the action it belongs to
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(field) = state.focused_field() else {
        return UpdateResult::none();
    };

    let follow_up = match field {
        InputField::Prompt => Some(Message::Generate),
        InputField::ResearchQuery => Some(Message::Research),
        InputField::ImagePrompt => Some(Message::AnalyzeImage),
        InputField::ImageSource => None,
        InputField::Code => Some(Message::EditFile {
            index: state.editor.file_index,
            content: std::mem::take(&mut state.editor.code_draft),
        }),
        // Chat keeps its input focused between messages
        InputField::Chat => return UpdateResult::message(Message::SendChat),
    };

    state.ui_mode = UiMode::Normal;
    match follow_up {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}
