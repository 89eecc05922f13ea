//! Anonymous peer-support forum.
//!
//! The board is a fixed set of sample threads. New posts are validated and
//! turned into a `ForumPost`, but nothing is kept once the caller drops it.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::SupportError;
use crate::search;

/// Display name given to every new post.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous Student";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ForumCategory {
    General,
    Academic,
    Anxiety,
    Relationships,
    JkSpecific,
    Success,
}

impl ForumCategory {
    pub const ALL: [ForumCategory; 6] = [
        ForumCategory::General,
        ForumCategory::Academic,
        ForumCategory::Anxiety,
        ForumCategory::Relationships,
        ForumCategory::JkSpecific,
        ForumCategory::Success,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ForumCategory::General => "General Support",
            ForumCategory::Academic => "Academic Stress",
            ForumCategory::Anxiety => "Anxiety & Worry",
            ForumCategory::Relationships => "Relationships & Family",
            ForumCategory::JkSpecific => "J&K Student Life",
            ForumCategory::Success => "Success Stories",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ForumCategory::General => "Share your experiences and find peer support",
            ForumCategory::Academic => "Discuss study pressure, exams, and academic challenges",
            ForumCategory::Anxiety => "Support for anxiety, panic, and worry-related concerns",
            ForumCategory::Relationships => {
                "Navigate family dynamics, friendships, and social connections"
            }
            ForumCategory::JkSpecific => "Discussions specific to students in Jammu & Kashmir",
            ForumCategory::Success => "Share your progress and celebrate victories",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    pub author: String,
    pub created_at: Timestamp,
    pub replies: u32,
    pub likes: u32,
    pub views: u32,
    pub sticky: bool,
    pub tags: Vec<String>,
    pub last_activity: Timestamp,
}

impl ForumPost {
    fn matches_search(&self, needle: &str) -> bool {
        search::matches_any(
            needle,
            [self.title.as_str(), self.content.as_str()]
                .into_iter()
                .chain(self.tags.iter().map(String::as_str)),
        )
    }
}

/// Board query. `None` on any field means "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PostFilter {
    pub search: Option<String>,
    pub category: Option<ForumCategory>,
}

impl PostFilter {
    pub fn matches(&self, post: &ForumPost) -> bool {
        search::needle(self.search.as_deref())
            .is_none_or(|needle| post.matches_search(&needle))
            && self.category.is_none_or(|c| post.category == c)
    }
}

/// Posts matching `filter`, in board order.
pub fn filter_posts<'a>(posts: &'a [ForumPost], filter: &PostFilter) -> Vec<&'a ForumPost> {
    posts.iter().filter(|p| filter.matches(p)).collect()
}

struct Entry {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    category: ForumCategory,
    author: &'static str,
    posted_mins_ago: i64,
    replies: u32,
    likes: u32,
    views: u32,
    sticky: bool,
    tags: &'static [&'static str],
    active_mins_ago: i64,
}

const ENTRIES: [Entry; 4] = [
    Entry {
        id: "1",
        title: "Feeling overwhelmed with final exams approaching",
        content: "I'm a final year student and feeling really anxious about upcoming exams. The pressure from family and my own expectations is getting too much. Anyone else going through this?",
        category: ForumCategory::Academic,
        author: "Anonymous Butterfly",
        posted_mins_ago: 2 * 60,
        replies: 12,
        likes: 8,
        views: 45,
        sticky: false,
        tags: &["exams", "anxiety", "final year"],
        active_mins_ago: 30,
    },
    Entry {
        id: "2",
        title: "How I overcame social anxiety in college",
        content: "Wanted to share my journey of dealing with social anxiety. It took time but I found some strategies that really helped...",
        category: ForumCategory::Success,
        author: "Anonymous Phoenix",
        posted_mins_ago: 5 * 60,
        replies: 23,
        likes: 34,
        views: 128,
        sticky: true,
        tags: &["social anxiety", "success story", "college"],
        active_mins_ago: 15,
    },
    Entry {
        id: "3",
        title: "Dealing with family pressure about career choices",
        content: "My family wants me to pursue engineering but I'm more interested in psychology. The constant arguments are affecting my mental health. How do I handle this?",
        category: ForumCategory::Relationships,
        author: "Anonymous Seeker",
        posted_mins_ago: 8 * 60,
        replies: 18,
        likes: 15,
        views: 67,
        sticky: false,
        tags: &["family pressure", "career", "conflict"],
        active_mins_ago: 45,
    },
    Entry {
        id: "4",
        title: "Resources for students in Kashmir valley",
        content: "Collecting a list of mental health resources specifically available for students in Kashmir. Please add if you know any...",
        category: ForumCategory::JkSpecific,
        author: "Anonymous Helper",
        posted_mins_ago: 12 * 60,
        replies: 9,
        likes: 21,
        views: 89,
        sticky: false,
        tags: &["Kashmir", "resources", "help"],
        active_mins_ago: 2 * 60,
    },
];

/// The sample threads, dated relative to `now`.
pub fn sample_posts(now: Timestamp) -> Vec<ForumPost> {
    ENTRIES
        .iter()
        .map(|e| ForumPost {
            id: e.id.to_string(),
            title: e.title.to_string(),
            content: e.content.to_string(),
            category: e.category,
            author: e.author.to_string(),
            created_at: now - SignedDuration::from_mins(e.posted_mins_ago),
            replies: e.replies,
            likes: e.likes,
            views: e.views,
            sticky: e.sticky,
            tags: e.tags.iter().map(|t| t.to_string()).collect(),
            last_activity: now - SignedDuration::from_mins(e.active_mins_ago),
        })
        .collect()
}

/// A post as submitted from the compose form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub category: Option<ForumCategory>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn required(value: &str, field: &'static str) -> Result<String, SupportError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SupportError::MissingField(field));
    }
    Ok(value.to_string())
}

impl NewPost {
    /// Validate the form and build the post it describes. Title, content and
    /// category are all required; blank tags are dropped.
    pub fn submit(self, now: Timestamp) -> Result<ForumPost, SupportError> {
        let title = required(&self.title, "title")?;
        let content = required(&self.content, "content")?;
        let category = self.category.ok_or(SupportError::MissingField("category"))?;

        let tags = self
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        debug!(category = ?category, "forum post accepted");

        Ok(ForumPost {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            category,
            author: ANONYMOUS_AUTHOR.to_string(),
            created_at: now,
            replies: 0,
            likes: 0,
            views: 0,
            sticky: false,
            tags,
            last_activity: now,
        })
    }
}

/// Compact relative age: minutes under an hour, hours under a day, then
/// days. Times in the future read as "0m ago".
pub fn format_time_ago(then: Timestamp, now: Timestamp) -> String {
    let minutes = ((now.as_second() - then.as_second()) / 60).max(0);
    match minutes {
        0..60 => format!("{minutes}m ago"),
        60..1440 => format!("{}h ago", minutes / 60),
        _ => format!("{}d ago", minutes / 1440),
    }
}
