use comment_form::CommentRecord;

use crate::data::seed_comments;

#[derive(Debug, Default, Clone)]
pub struct Registry {
    /// comments rendered on the home page, in display order
    pub comments: Vec<(&'static str, CommentRecord)>,
}

impl Registry {
    pub fn seeded() -> Self {
        Self {
            comments: seed_comments(),
        }
    }
}
