use serde::{Deserialize, Serialize};

/// Who authored a thread, stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorType {
    Business,
    Freelancer,
    #[default]
    Guest,
}

/// A discussion thread. Stored in the `forumthread` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumThread {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author_type: AuthorType,
    pub author_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A reply within a thread. Stored in the `forumpost` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumPost {
    pub thread_id: String,
    pub content: String,
    pub author_name: String,
}
