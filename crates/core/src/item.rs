use liquid_core::model::Object;
use liquid_core::model::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::slug;

/// A single piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl ContentItem {
    /// Slug derived from `title`, both timestamps set to now.
    pub fn new<T: Into<String>, C: Into<String>>(title: T, content: C) -> Self {
        let title = title.into();
        let slug = slug::slugify(&title);
        let now = OffsetDateTime::now_utc();
        Self {
            title,
            content: content.into(),
            slug,
            created_at: now,
            updated_at: now,
        }
    }

    /// Use a declared slug instead of the derived one. An empty slug is ignored.
    pub fn with_slug<S: Into<String>>(mut self, slug: S) -> Self {
        let slug = slug.into();
        if !slug.is_empty() {
            self.slug = slug;
        }
        self
    }

    pub fn with_created_at(mut self, created_at: OffsetDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_updated_at(mut self, updated_at: OffsetDateTime) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub(crate) fn attributes(&self) -> Object {
        let mut attributes = Object::new();
        attributes.insert("title".into(), Value::scalar(self.title.clone()));
        attributes.insert("content".into(), Value::scalar(self.content.clone()));
        attributes.insert("slug".into(), Value::scalar(self.slug.clone()));
        attributes.insert("created_at".into(), timestamp_value(self.created_at));
        attributes.insert("updated_at".into(), timestamp_value(self.updated_at));
        attributes
    }
}

fn timestamp_value(at: OffsetDateTime) -> Value {
    match format_timestamp(at) {
        Some(at) => Value::scalar(at),
        None => Value::Nil,
    }
}

pub(crate) fn format_timestamp(at: OffsetDateTime) -> Option<String> {
    at.format(&Rfc3339).ok()
}

pub(crate) fn parse_timestamp(at: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(at, &Rfc3339)
}

/// A [`ContentItem`] with an author and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub item: ContentItem,
    pub author: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn new<T, C, A>(title: T, content: C, author: A) -> Self
    where
        T: Into<String>,
        C: Into<String>,
        A: Into<String>,
    {
        Self::from_item(ContentItem::new(title, content), author)
    }

    pub fn from_item<A: Into<String>>(item: ContentItem, author: A) -> Self {
        Self {
            item,
            author: author.into(),
            categories: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn attributes(&self) -> Object {
        let mut attributes = self.item.attributes();
        attributes.insert("author".into(), Value::scalar(self.author.clone()));
        attributes.insert("categories".into(), string_array(&self.categories));
        attributes.insert("tags".into(), string_array(&self.tags));
        attributes
    }
}

fn string_array(values: &[String]) -> Value {
    Value::Array(values.iter().map(|v| Value::scalar(v.clone())).collect())
}
