//! Comment form controller shared by the page server and the browser.
//!
//! The server renders existing comments with [`CommentBlock`]; the browser
//! build (`wasm32`) wires [`Controller`] to the live document so that a
//! submitted comment is validated and shown inline without any request.

use std::time::Duration;

pub mod controller;
pub mod page;
pub mod record;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use controller::{Controller, ControllerError, Outcome};
pub use page::{Element, Field, Page, Scheduler};
pub use record::{CommentRecord, FieldKey};
pub use render::CommentBlock;

/// id of the comment form
pub const FORM_ID: &str = "add-comment-form";
/// id of the container holding the heading and every rendered comment
pub const COMMENTS_DISPLAY_ID: &str = "comments-display";

pub const FIELD_SELECTOR: &str = "input[type=text], textarea";
pub const INPUT_GROUP_SELECTOR: &str = ".form-input";
pub const ERROR_BANNER_SELECTOR: &str = ".form-error";
pub const SUCCESS_BANNER_SELECTOR: &str = ".form-success";
pub const HEADING_SELECTOR: &str = "h2";

/// set on an input group whose field is empty
pub const INPUT_ERROR_CLASS: &str = "input-error";
/// shared by the success and the error banner
pub const SHOW_MESSAGE_CLASS: &str = "show-form-message";
/// initial state of a freshly inserted comment, removed to start the transition
pub const COMMENT_HIDDEN_CLASS: &str = "comment-hidden";

pub const SUCCESS_BANNER_TIMEOUT: Duration = Duration::from_millis(5000);
/// gives the document a frame to apply the hidden style before revealing
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);
