use ::askama::Template;

use crate::record::CommentRecord;

/// Markup of a single comment.
///
/// `fresh` wraps the block in the `new-comment comment-hidden` container the
/// entrance transition runs on. User text goes through askama's HTML escaping.
#[derive(Debug, Template)]
#[template(path = "comment.html")]
pub struct CommentBlock<'a> {
    pub record: &'a CommentRecord,
    pub fresh: bool,
}

impl<'a> CommentBlock<'a> {
    /// A block as seeded by the server.
    pub fn seeded(record: &'a CommentRecord) -> Self {
        Self {
            record,
            fresh: false,
        }
    }

    /// A block appended by the form, starting hidden.
    pub fn fresh(record: &'a CommentRecord) -> Self {
        Self {
            record,
            fresh: true,
        }
    }
}
