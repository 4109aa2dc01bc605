/// One comment, either seeded by the server or typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRecord {
    pub user_name: String,
    pub content: String,
}

impl CommentRecord {
    pub fn new(user_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            content: content.into(),
        }
    }

    /// Stores `value` in the slot `key` maps to.
    pub fn set(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::Name => self.user_name = value,
            FieldKey::Comment => self.content = value,
        }
    }
}

/// Form fields the controller knows about, keyed by their `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Comment,
}

impl FieldKey {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "comment" => Some(Self::Comment),
            _ => None,
        }
    }
}
