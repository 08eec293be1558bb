use std::collections::HashMap;
use std::fs;
use std::io;
use std::path;

use time::OffsetDateTime;

use crate::Content as _;
use crate::Entry;
use crate::Error;
use crate::Reporter;
use crate::Result;
use crate::Warning;
use crate::record::Record;

pub const DEFAULT_CONTENT_FILE: &str = "content.json";

/// Content keyed by slug, listed in the order slugs were first added.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContentRepository {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl ContentRepository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Insert `entry`, replacing any entry with the same slug in place.
    pub fn add<E: Into<Entry>>(&mut self, entry: E) {
        let entry = entry.into();
        match self.index.get(entry.slug()) {
            Some(&position) => {
                log::trace!("Replacing {entry}");
                self.entries[position] = entry;
            }
            None => {
                self.index
                    .insert(entry.slug().to_owned(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, slug: &str) -> Option<&Entry> {
        self.index.get(slug).map(|&position| &self.entries[position])
    }

    pub fn list_all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add every record of the JSON array at `path` as a [`BlogPost`][crate::BlogPost].
    ///
    /// Returns how many entries the repository gained; records whose slug is already
    /// present replace that entry and are not counted.
    ///
    /// A missing file is reported and adds nothing. Every record is checked before any
    /// is added, so a malformed record leaves the repository unchanged.
    pub fn load(&mut self, path: &path::Path, reporter: &mut dyn Reporter) -> Result<usize> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                reporter.warning(Warning::ContentUnavailable {
                    path: path.to_owned(),
                });
                return Ok(0);
            }
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_owned(),
                    source,
                });
            }
        };

        let records: Vec<serde_json::Value> =
            serde_json::from_str(&content).map_err(|source| Error::Parse {
                path: path.to_owned(),
                source,
            })?;

        let now = OffsetDateTime::now_utc();
        let posts = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let record: Record =
                    serde_json::from_value(record).map_err(|source| Error::Malformed {
                        path: path.to_owned(),
                        index,
                        source,
                    })?;
                record
                    .into_post(now)
                    .map_err(|(field, source)| Error::Timestamp {
                        path: path.to_owned(),
                        index,
                        field,
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let records = posts.len();
        let before = self.len();
        for post in posts {
            self.add(post);
        }
        let added = self.len() - before;
        log::debug!(
            "Loaded {records} records from `{}`, {added} new entries",
            path.display()
        );
        Ok(added)
    }

    /// Write every entry, in listing order, as a JSON array of records.
    pub fn save(&self, path: &path::Path) -> Result<()> {
        let records: Vec<_> = self.entries.iter().map(Record::from_entry).collect();
        let mut content = serde_json::to_string_pretty(&records).map_err(Error::Serialize)?;
        content.push('\n');
        fs::write(path, content).map_err(|source| Error::Write {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("Saved {} entries to `{}`", records.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::BlogPost;
    use crate::ContentItem;

    #[test]
    fn add_and_get() {
        let mut repo = ContentRepository::new();
        repo.add(BlogPost::new("Hello World", "Hi", "A"));
        assert_eq!(repo.get("hello-world").unwrap().title(), "Hello World");
        assert!(repo.get("goodbye").is_none());
    }

    #[test]
    fn list_in_insertion_order() {
        let mut repo = ContentRepository::new();
        repo.add(ContentItem::new("Zebra", ""));
        repo.add(ContentItem::new("Apple", ""));
        repo.add(ContentItem::new("Mango", ""));
        let slugs: Vec<_> = repo.list_all().iter().map(|e| e.slug()).collect();
        assert_eq!(slugs, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn same_slug_replaces_in_place() {
        let mut repo = ContentRepository::new();
        repo.add(ContentItem::new("First", "old"));
        repo.add(ContentItem::new("Second", ""));
        repo.add(ContentItem::new("first", "new"));
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.list_all()[0].content(), "new");
        assert_eq!(repo.list_all()[0].title(), "first");
        assert_eq!(repo.get("first").unwrap().content(), "new");
    }

    #[test]
    fn load_fixture() {
        let mut repo = ContentRepository::new();
        let mut warnings = Vec::<Warning>::new();
        let count = repo
            .load(path::Path::new("tests/fixtures/content/posts.json"), &mut warnings)
            .unwrap();
        assert_eq!(count, 3);
        assert_eq!(repo.len(), 3);
        assert!(warnings.is_empty());

        let Entry::Post(post) = repo.get("my-first-blog-post").unwrap() else {
            panic!("expected a post");
        };
        assert_eq!(post.author, "John Doe");
        assert_eq!(post.categories, vec!["Rust", "Web Development"]);
        assert_eq!(post.tags, vec!["blog", "tutorial"]);

        assert!(repo.get("another-blog-post").is_some());
        assert!(repo.get("about-this-site").is_some());
    }

    #[test]
    fn load_not_found() {
        let mut repo = ContentRepository::new();
        repo.add(ContentItem::new("Kept", ""));
        let mut warnings = Vec::<Warning>::new();
        let count = repo
            .load(
                path::Path::new("tests/fixtures/content/does_not_exist.json"),
                &mut warnings,
            )
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(repo.len(), 1);
        assert!(matches!(
            warnings.as_slice(),
            [Warning::ContentUnavailable { .. }]
        ));
    }

    #[test]
    fn load_missing_field() {
        let mut repo = ContentRepository::new();
        let result = repo.load(
            path::Path::new("tests/fixtures/content/missing_author.json"),
            &mut Vec::<Warning>::new(),
        );
        assert!(matches!(result, Err(Error::Malformed { index: 1, .. })));
        assert!(repo.is_empty());
    }

    #[test]
    fn load_invalid_syntax() {
        let mut repo = ContentRepository::new();
        let result = repo.load(
            path::Path::new("tests/fixtures/content/invalid_syntax.json"),
            &mut Vec::<Warning>::new(),
        );
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn load_counts_distinct_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(
            &path,
            r#"[
                {"title": "Hello World", "content": "first", "author": "A"},
                {"title": "hello world", "content": "second", "author": "B"}
            ]"#,
        )
        .unwrap();
        let mut repo = ContentRepository::new();
        assert_eq!(repo.load(&path, &mut Vec::<Warning>::new()).unwrap(), 1);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("hello-world").unwrap().content(), "second");

        assert_eq!(repo.load(&path, &mut Vec::<Warning>::new()).unwrap(), 0);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn load_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, "[]").unwrap();
        let mut repo = ContentRepository::new();
        assert_eq!(repo.load(&path, &mut Vec::<Warning>::new()).unwrap(), 0);
        assert!(repo.is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        let at = time::macros::datetime!(2024-06-01 18:45:30.25 UTC);
        let item = |title: &str, content: &str| {
            ContentItem::new(title, content)
                .with_created_at(at)
                .with_updated_at(at)
        };
        let mut repo = ContentRepository::new();
        repo.add(BlogPost::from_item(item("Hello World", "Hi"), "A").with_tags(["intro"]));
        repo.add(BlogPost::from_item(item("Second", "More"), "B").with_categories(["News"]));
        repo.save(&path).unwrap();

        let mut reloaded = ContentRepository::new();
        reloaded.load(&path, &mut Vec::<Warning>::new()).unwrap();
        assert_eq!(reloaded, repo);
    }
}
