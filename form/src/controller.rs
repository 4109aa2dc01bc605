use ::log::{debug, info};

use crate::page::{Element, Field, Page, Scheduler};
use crate::record::{CommentRecord, FieldKey};
use crate::{
    COMMENT_HIDDEN_CLASS, INPUT_ERROR_CLASS, REVEAL_DELAY, SHOW_MESSAGE_CLASS,
    SUCCESS_BANNER_TIMEOUT,
};

#[derive(Debug, ::thiserror::Error)]
pub enum ControllerError {
    #[error("element `{0}` not found")]
    MissingElement(&'static str),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("render error: {0}")]
    Render(#[from] ::askama::Error),
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// every field was filled; the comment is now shown under the heading
    Posted(CommentRecord),
    /// `name` attributes of the fields left empty
    Rejected(Vec<String>),
}

impl Outcome {
    pub fn is_posted(&self) -> bool {
        matches!(self, Outcome::Posted(_))
    }
}

/// Validates the comment form and shows accepted comments inline.
///
/// Holds no state of its own: everything lives in the page, so a controller
/// can be rebuilt for every submit event.
pub struct Controller<P, S> {
    page: P,
    scheduler: S,
}

impl<P: Page, S: Scheduler> Controller<P, S> {
    pub fn new(page: P, scheduler: S) -> Self {
        Self { page, scheduler }
    }

    pub fn handle_submit(&self) -> Result<Outcome, ControllerError> {
        let fields = self.page.fields()?;
        let error_banner = self.page.error_banner()?;

        let empty = self.validate(&fields)?;
        if !empty.is_empty() {
            debug!("comment rejected, empty fields: {:?}", &empty);
            error_banner.add_class(SHOW_MESSAGE_CLASS);
            return Ok(Outcome::Rejected(empty));
        }

        error_banner.remove_class(SHOW_MESSAGE_CLASS);
        self.show_success_banner()?;

        let record = take_record(&fields);
        self.show_comment(&record)?;
        info!("comment posted by `{}`", &record.user_name);

        Ok(Outcome::Posted(record))
    }

    /// Flags every empty field's input group and clears the flag on filled
    /// ones. Returns the names of the empty fields.
    fn validate(&self, fields: &[P::Field]) -> Result<Vec<String>, ControllerError> {
        let mut empty = vec![];

        for field in fields {
            let container = field
                .container()
                .ok_or(ControllerError::MissingElement(crate::INPUT_GROUP_SELECTOR))?;

            if field.value().is_empty() {
                container.add_class(INPUT_ERROR_CLASS);
                empty.push(field.name());
            } else {
                container.remove_class(INPUT_ERROR_CLASS);
            }
        }

        Ok(empty)
    }

    fn show_success_banner(&self) -> Result<(), ControllerError> {
        let banner = self.page.success_banner()?;
        banner.add_class(SHOW_MESSAGE_CLASS);

        self.scheduler.schedule(
            SUCCESS_BANNER_TIMEOUT,
            Box::new(move || banner.remove_class(SHOW_MESSAGE_CLASS)),
        );

        Ok(())
    }

    fn show_comment(&self, record: &CommentRecord) -> Result<(), ControllerError> {
        let block = self.page.insert_comment(record)?;

        self.scheduler.schedule(
            REVEAL_DELAY,
            Box::new(move || block.remove_class(COMMENT_HIDDEN_CLASS)),
        );

        Ok(())
    }
}

/// Moves the values of the known fields into a record, clearing them.
fn take_record<F: Field>(fields: &[F]) -> CommentRecord {
    let mut record = CommentRecord::default();

    for field in fields {
        if let Some(key) = FieldKey::from_name(&field.name()) {
            record.set(key, field.value());
            field.set_value("");
        }
    }

    record
}
