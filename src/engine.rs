use std::path;

use folio_config::ConfigStore;
use folio_config::Reporter;
use folio_core::Content as _;
use folio_core::ContentRepository;
use liquid::model::Value;
use relative_path::RelativePath;

use crate::error::Result;
use crate::resolver::Resolver;
use crate::site::SiteBuilder;
use crate::storage::Storage;
use crate::template::POST_TEMPLATE;
use crate::template::Templates;

/// Output path of the rendered listing of all entries.
pub const INDEX_PAGE: &str = "index.html";

/// Drives a build: load content, render every page, hand the result to storage.
///
/// All collaborators are borrowed; the engine owns nothing.
pub struct SiteEngine<'a> {
    config: &'a ConfigStore,
    content: &'a mut ContentRepository,
    content_source: &'a path::Path,
    templates: &'a mut Templates,
    resolver: &'a Resolver,
    storage: &'a dyn Storage,
}

impl<'a> SiteEngine<'a> {
    pub fn new(
        config: &'a ConfigStore,
        content: &'a mut ContentRepository,
        content_source: &'a path::Path,
        templates: &'a mut Templates,
        resolver: &'a Resolver,
        storage: &'a dyn Storage,
    ) -> Self {
        Self {
            config,
            content,
            content_source,
            templates,
            resolver,
            storage,
        }
    }

    /// Load content and templates.
    ///
    /// The config is used as already loaded.
    pub fn initialize(&mut self, reporter: &mut dyn Reporter) -> Result<()> {
        self.content.load(self.content_source, reporter)?;

        self.templates
            .set_globals(SiteBuilder::from_config(self.config.config()).into_globals());
        self.templates.setup()?;
        Ok(())
    }

    /// Render one page per entry plus the index, returning the number of pages written.
    ///
    /// Stops at the first failure; pages saved before it are left in place.
    pub fn generate(&self) -> Result<usize> {
        let entries = self.content.list_all();
        for entry in entries {
            log::trace!("Generating {entry}");
            let mut context = liquid::Object::new();
            context.insert("post".into(), Value::Object(entry.to_object()));
            let html = self.templates.render(POST_TEMPLATE, &context)?;
            let rel_path = self.resolver.resolve(entry.slug());
            self.storage.save(&rel_path, &html)?;
        }

        let index = self.templates.render_index(entries)?;
        self.storage.save(RelativePath::new(INDEX_PAGE), &index)?;
        Ok(entries.len() + 1)
    }

    pub fn deploy(&self) -> Result<()> {
        self.storage.deploy()
    }

    /// [`initialize`][Self::initialize], [`generate`][Self::generate], then [`deploy`][Self::deploy].
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<usize> {
        self.initialize(reporter)?;
        let pages = self.generate()?;
        log::debug!("Generated {pages} pages");
        self.deploy()?;
        Ok(pages)
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use folio_config::Warning;
    use folio_core::BlogPost;

    use super::*;
    use crate::error::Error;
    use crate::storage::FileSystemStorage;

    struct Project {
        _dir: tempfile::TempDir,
        root: path::PathBuf,
    }

    impl Project {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let root = dir.path().to_owned();
            fs::create_dir_all(root.join("templates")).unwrap();
            fs::write(
                root.join("templates").join("post.html"),
                "<h1>{{ post.title }}</h1>{{ post.content }} | {{ site.name }}",
            )
            .unwrap();
            fs::write(
                root.join("templates").join("index.html"),
                "{% for post in posts %}[{{ post.slug }}]{% endfor %}",
            )
            .unwrap();
            Self { _dir: dir, root }
        }

        fn write_content(&self, json: &str) -> path::PathBuf {
            let path = self.root.join("content.json");
            fs::write(&path, json).unwrap();
            path
        }

        fn build(&self, content_source: &path::Path) -> (Result<usize>, Vec<Warning>) {
            let mut config = ConfigStore::default();
            config.config_mut().template_dir = self.root.join("templates").display().to_string();
            let mut content = ContentRepository::new();
            let mut templates = Templates::new(config.config().template_dir());
            let resolver = Resolver::new(config.config().base_url.clone());
            let storage = FileSystemStorage::new(self.output()).unwrap();
            let mut engine = SiteEngine::new(
                &config,
                &mut content,
                content_source,
                &mut templates,
                &resolver,
                &storage,
            );
            let mut warnings = Vec::<Warning>::new();
            let result = engine.run(&mut warnings);
            (result, warnings)
        }

        fn output(&self) -> path::PathBuf {
            self.root.join("output")
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.output().join(name)).unwrap()
        }
    }

    #[test]
    fn generate_single_post() {
        let project = Project::new();
        let content = project.write_content(
            r#"[{"title": "Hello World", "content": "Hi", "author": "A"}]"#,
        );
        let (result, warnings) = project.build(&content);
        assert_eq!(result.unwrap(), 2);
        assert!(warnings.is_empty());
        assert_eq!(project.read("hello-world.html"), "<h1>Hello World</h1>Hi | My Blog");
        assert_eq!(project.read("index.html"), "[hello-world]");
    }

    #[test]
    fn generate_keeps_insertion_order() {
        let project = Project::new();
        let content = project.write_content(
            r#"[
                {"title": "Zebra", "content": "z", "author": "A"},
                {"title": "Apple", "content": "a", "author": "B"}
            ]"#,
        );
        let (result, _) = project.build(&content);
        assert_eq!(result.unwrap(), 3);
        assert_eq!(project.read("index.html"), "[zebra][apple]");
    }

    #[test]
    fn generate_without_content_file() {
        let project = Project::new();
        let (result, warnings) = project.build(&project.root.join("content.json"));
        assert_eq!(result.unwrap(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], Warning::ContentUnavailable { .. }));
        assert_eq!(project.read("index.html"), "");
    }

    #[test]
    fn missing_post_template_writes_nothing() {
        let project = Project::new();
        fs::remove_file(project.root.join("templates").join("post.html")).unwrap();
        let content = project.write_content(
            r#"[{"title": "Hello World", "content": "Hi", "author": "A"}]"#,
        );
        let (result, _) = project.build(&content);
        match result {
            Err(Error::TemplateNotFound { name, .. }) => assert_eq!(name, "post.html"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(!project.output().join("hello-world.html").exists());
        assert!(!project.output().join("index.html").exists());
    }

    #[test]
    fn malformed_content_fails_initialize() {
        let project = Project::new();
        let content = project.write_content(r#"[{"title": "Hello World", "content": "Hi"}]"#);
        let (result, _) = project.build(&content);
        assert!(matches!(result, Err(Error::Content(_))));
        assert!(!project.output().join("index.html").exists());
    }

    #[test]
    fn generate_from_populated_repository() {
        let project = Project::new();
        let config = ConfigStore::default();
        let mut content = ContentRepository::new();
        content.add(BlogPost::new("Hello World", "Hi", "A"));
        let mut templates = Templates::new(project.root.join("templates"));
        templates.set_globals(SiteBuilder::from_config(config.config()).into_globals());
        templates.setup().unwrap();
        let resolver = Resolver::new("http://localhost:8080");
        let storage = FileSystemStorage::new(project.output()).unwrap();
        let engine = SiteEngine::new(
            &config,
            &mut content,
            path::Path::new("unused.json"),
            &mut templates,
            &resolver,
            &storage,
        );
        assert_eq!(engine.generate().unwrap(), 2);
        engine.deploy().unwrap();
        assert_eq!(project.read("hello-world.html"), "<h1>Hello World</h1>Hi | My Blog");
        assert_eq!(project.read("index.html"), "[hello-world]");
    }
}
