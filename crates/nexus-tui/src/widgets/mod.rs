//! Custom widget components

mod admin;
mod chat;
mod dashboard;
pub mod editor;
mod footer;
mod header;
pub mod input;
mod landing;
pub mod modal_overlay;
mod notice;
mod settings;

pub use admin::AdminPanel;
pub use chat::ChatPanel;
pub use dashboard::Dashboard;
pub use editor::EditorView;
pub use footer::Footer;
pub use header::MainHeader;
pub use input::TextInput;
pub use landing::Landing;
pub use notice::NoticeModal;
pub use settings::AccountSettings;
