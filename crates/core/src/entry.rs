use std::fmt;

use liquid_core::model::Object;

use crate::BlogPost;
use crate::ContentItem;

/// What every kind of content exposes.
pub trait Content {
    fn item(&self) -> &ContentItem;

    fn title(&self) -> &str {
        &self.item().title
    }

    fn content(&self) -> &str {
        &self.item().content
    }

    fn slug(&self) -> &str {
        &self.item().slug
    }

    /// Attributes as seen from a template.
    fn to_object(&self) -> Object;
}

impl Content for ContentItem {
    fn item(&self) -> &ContentItem {
        self
    }

    fn to_object(&self) -> Object {
        self.attributes()
    }
}

impl Content for BlogPost {
    fn item(&self) -> &ContentItem {
        &self.item
    }

    fn to_object(&self) -> Object {
        self.attributes()
    }
}

/// Any content held by a [`ContentRepository`][crate::ContentRepository].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Item(ContentItem),
    Post(BlogPost),
}

impl Content for Entry {
    fn item(&self) -> &ContentItem {
        match self {
            Self::Item(item) => item,
            Self::Post(post) => post.item(),
        }
    }

    fn to_object(&self) -> Object {
        match self {
            Self::Item(item) => item.to_object(),
            Self::Post(post) => post.to_object(),
        }
    }
}

impl From<ContentItem> for Entry {
    fn from(item: ContentItem) -> Self {
        Self::Item(item)
    }
}

impl From<BlogPost> for Entry {
    fn from(post: BlogPost) -> Self {
        Self::Post(post)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(item) => write!(f, "{:?} ({})", item.title, item.slug),
            Self::Post(post) => write!(
                f,
                "{:?} by {} ({})",
                post.item.title, post.author, post.item.slug
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn entry_delegates() {
        let entry = Entry::from(BlogPost::new("Hello World", "Hi", "A"));
        assert_eq!(entry.title(), "Hello World");
        assert_eq!(entry.content(), "Hi");
        assert_eq!(entry.slug(), "hello-world");
        assert!(entry.to_object().contains_key("author"));

        let entry = Entry::from(ContentItem::new("About", "Me"));
        assert_eq!(entry.slug(), "about");
        assert!(!entry.to_object().contains_key("author"));
    }

    #[test]
    fn display() {
        let entry = Entry::from(BlogPost::new("Hello World", "Hi", "A"));
        assert_eq!(entry.to_string(), r#""Hello World" by A (hello-world)"#);
    }
}
