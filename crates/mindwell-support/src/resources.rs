//! Self-help resource library.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SupportError;
use crate::language::Language;
use crate::search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResourceKind {
    Article,
    Video,
    Audio,
    Exercise,
    Guide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Stress,
    Anxiety,
    Depression,
    Mindfulness,
    Academic,
    Trauma,
    Relationships,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Stress,
        Category::Anxiety,
        Category::Depression,
        Category::Mindfulness,
        Category::Academic,
        Category::Trauma,
        Category::Relationships,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Stress => "Stress Management",
            Category::Anxiety => "Anxiety Support",
            Category::Depression => "Depression Help",
            Category::Mindfulness => "Mindfulness",
            Category::Academic => "Academic Support",
            Category::Trauma => "Trauma Recovery",
            Category::Relationships => "Relationships",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ResourceKind,
    pub category: Category,
    pub language: Language,
    pub duration: Option<String>,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub author: String,
    pub rating: f64,
    pub downloads: Option<u32>,
}

impl Resource {
    fn matches_search(&self, needle: &str) -> bool {
        search::matches_any(
            needle,
            [self.title.as_str(), self.description.as_str()]
                .into_iter()
                .chain(self.tags.iter().map(String::as_str)),
        )
    }
}

/// Library query. `None` on any field means "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResourceFilter {
    pub search: Option<String>,
    pub category: Option<Category>,
    pub language: Option<Language>,
    pub kind: Option<ResourceKind>,
}

impl ResourceFilter {
    pub fn matches(&self, resource: &Resource) -> bool {
        search::needle(self.search.as_deref())
            .is_none_or(|needle| resource.matches_search(&needle))
            && self.category.is_none_or(|c| resource.category == c)
            && self.language.is_none_or(|l| resource.language == l)
            && self.kind.is_none_or(|k| resource.kind == k)
    }
}

struct Entry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    kind: ResourceKind,
    category: Category,
    language: Language,
    duration: &'static str,
    difficulty: Difficulty,
    tags: &'static [&'static str],
    author: &'static str,
    rating: f64,
    downloads: u32,
}

const ENTRIES: [Entry; 6] = [
    Entry {
        id: "1",
        title: "Managing Academic Stress in J&K Universities",
        description: "Comprehensive guide for students dealing with academic pressure in the unique context of J&K educational system.",
        kind: ResourceKind::Article,
        category: Category::Academic,
        language: Language::En,
        duration: "10 min read",
        difficulty: Difficulty::Beginner,
        tags: &["academic pressure", "study tips", "J&K context"],
        author: "Dr. Priya Sharma",
        rating: 4.8,
        downloads: 1250,
    },
    Entry {
        id: "2",
        title: "तनाव प्रबंधन के लिए श्वास तकनीकें",
        description: "सरल श्वास अभ्यास जो तनाव और चिंता को कम करने में मदद करते हैं। दैनिक जीवन में उपयोग के लिए व्यावहारिक तकनीकें।",
        kind: ResourceKind::Exercise,
        category: Category::Stress,
        language: Language::Hi,
        duration: "15 minutes",
        difficulty: Difficulty::Beginner,
        tags: &["breathing", "relaxation", "daily practice"],
        author: "डॉ. अर्जुन मेहता",
        rating: 4.9,
        downloads: 890,
    },
    Entry {
        id: "3",
        title: "ذہنی سکون کے لیے مراقبہ",
        description: "اسلامی تعلیمات کے مطابق مراقبہ اور ذکر کی تکنیکیں جو ذہنی سکون اور روحانی بہتری کے لیے مفید ہیں۔",
        kind: ResourceKind::Audio,
        category: Category::Mindfulness,
        language: Language::Ur,
        duration: "20 minutes",
        difficulty: Difficulty::Intermediate,
        tags: &["meditation", "Islamic", "spiritual healing"],
        author: "ڈاکٹر فاطمہ خان",
        rating: 4.7,
        downloads: 650,
    },
    Entry {
        id: "4",
        title: "Understanding PTSD in Conflict-Affected Areas",
        description: "Educational video addressing trauma responses common in conflict-affected regions like J&K, with culturally sensitive approaches to healing.",
        kind: ResourceKind::Video,
        category: Category::Trauma,
        language: Language::En,
        duration: "25 minutes",
        difficulty: Difficulty::Intermediate,
        tags: &["PTSD", "trauma recovery", "conflict zones"],
        author: "Dr. Rajesh Kumar",
        rating: 4.9,
        downloads: 2100,
    },
    Entry {
        id: "5",
        title: "Sleep Hygiene for Students",
        description: "Evidence-based strategies for improving sleep quality, especially important for students dealing with irregular schedules and stress.",
        kind: ResourceKind::Guide,
        category: Category::Stress,
        language: Language::En,
        duration: "12 min read",
        difficulty: Difficulty::Beginner,
        tags: &["sleep", "health", "student life"],
        author: "Dr. Meera Patel",
        rating: 4.6,
        downloads: 1800,
    },
    Entry {
        id: "6",
        title: "रिश्तों में संवाद कौशल",
        description: "पारिवारिक और दोस्ती के रिश्तों में बेहतर संवाद के लिए व्यावहारिक सुझाव। सांस्कृतिक संदर्भ के साथ।",
        kind: ResourceKind::Article,
        category: Category::Relationships,
        language: Language::Hi,
        duration: "8 min read",
        difficulty: Difficulty::Beginner,
        tags: &["communication", "relationships", "family"],
        author: "डॉ. सुनीता वर्मा",
        rating: 4.5,
        downloads: 720,
    },
];

static CATALOG: LazyLock<Vec<Resource>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|e| Resource {
            id: e.id.to_string(),
            title: e.title.to_string(),
            description: e.description.to_string(),
            kind: e.kind,
            category: e.category,
            language: e.language,
            duration: Some(e.duration.to_string()),
            difficulty: e.difficulty,
            tags: e.tags.iter().map(|t| t.to_string()).collect(),
            author: e.author.to_string(),
            rating: e.rating,
            downloads: Some(e.downloads),
        })
        .collect()
});

/// The full library, in display order.
pub fn catalog() -> &'static [Resource] {
    &CATALOG
}

/// Resources matching every criterion of `filter`, in catalog order.
pub fn filter_resources(filter: &ResourceFilter) -> Vec<&'static Resource> {
    catalog().iter().filter(|r| filter.matches(r)).collect()
}

pub fn find_resource(id: &str) -> Result<&'static Resource, SupportError> {
    catalog()
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| SupportError::ResourceNotFound(id.to_string()))
}
