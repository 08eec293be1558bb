use time::OffsetDateTime;

use crate::BlogPost;
use crate::ContentItem;
use crate::Entry;
use crate::item::format_timestamp;
use crate::item::parse_timestamp;

/// One element of a content file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub(crate) struct Record {
    title: String,
    content: String,
    author: String,
    #[serde(default, skip_serializing_if = "is_empty")]
    categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "is_empty")]
    tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

fn is_empty(values: &Option<Vec<String>>) -> bool {
    values.as_ref().is_none_or(Vec::is_empty)
}

impl Record {
    /// Timestamps the record leaves out are set to `now`.
    ///
    /// On failure, returns the name of the offending field.
    pub(crate) fn into_post(
        self,
        now: OffsetDateTime,
    ) -> Result<BlogPost, (&'static str, time::error::Parse)> {
        let Record {
            title,
            content,
            author,
            categories,
            tags,
            slug,
            created_at,
            updated_at,
        } = self;

        let created_at = created_at
            .map(|at| parse_timestamp(&at))
            .transpose()
            .map_err(|e| ("created_at", e))?
            .unwrap_or(now);
        let updated_at = updated_at
            .map(|at| parse_timestamp(&at))
            .transpose()
            .map_err(|e| ("updated_at", e))?
            .unwrap_or(now);

        let mut item = ContentItem::new(title, content)
            .with_created_at(created_at)
            .with_updated_at(updated_at);
        if let Some(slug) = slug {
            item = item.with_slug(slug);
        }
        let post = BlogPost::from_item(item, author)
            .with_categories(categories.unwrap_or_default())
            .with_tags(tags.unwrap_or_default());
        Ok(post)
    }

    pub(crate) fn from_entry(entry: &Entry) -> Self {
        let (item, author, categories, tags) = match entry {
            Entry::Item(item) => (item, String::new(), None, None),
            Entry::Post(post) => (
                &post.item,
                post.author.clone(),
                Some(post.categories.clone()),
                Some(post.tags.clone()),
            ),
        };
        Self {
            title: item.title.clone(),
            content: item.content.clone(),
            author,
            categories,
            tags,
            slug: Some(item.slug.clone()),
            created_at: format_timestamp(item.created_at),
            updated_at: format_timestamp(item.updated_at),
        }
    }
}
