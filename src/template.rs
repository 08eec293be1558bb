use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path;

use folio_core::Content as _;
use folio_core::Entry;
use liquid::model::Value;
use relative_path::RelativePathBuf;

use crate::error::Error;
use crate::error::Result;

/// Template every content entry is rendered with.
pub const POST_TEMPLATE: &str = "post.html";
/// Template the listing of all entries is rendered with.
pub const INDEX_TEMPLATE: &str = "index.html";

type Partials = liquid::partials::LazyCompiler<liquid::partials::InMemorySource>;

/// Liquid templates loaded from a directory, addressed by their path relative to it.
pub struct Templates {
    template_dir: path::PathBuf,
    globals: liquid::Object,
    compiled: HashMap<String, liquid::Template>,
    /// Sources that failed to parse, kept to report the failure when requested.
    invalid: HashMap<String, String>,
    parser: Option<liquid::Parser>,
}

impl Templates {
    /// Bind to `template_dir`. Nothing is loaded until [`setup`][Self::setup].
    pub fn new<P: Into<path::PathBuf>>(template_dir: P) -> Self {
        Self {
            template_dir: template_dir.into(),
            globals: liquid::Object::new(),
            compiled: HashMap::new(),
            invalid: HashMap::new(),
            parser: None,
        }
    }

    pub fn template_dir(&self) -> &path::Path {
        &self.template_dir
    }

    /// Variables available to every render, unless the render context shadows them.
    pub fn set_globals(&mut self, globals: liquid::Object) {
        self.globals = globals;
    }

    /// (Re)load and parse every file under the template directory.
    ///
    /// Each file is also available to the others through `{% include %}`. Files that
    /// are not UTF-8 are skipped. A template that fails to parse only fails the
    /// renders that ask for it.
    pub fn setup(&mut self) -> Result<()> {
        let sources = load_sources(&self.template_dir)?;

        let mut source = liquid::partials::InMemorySource::new();
        for (name, content) in &sources {
            source.add(name.clone(), content.clone());
        }
        let parser = liquid::ParserBuilder::with_stdlib()
            .filter(liquid_lib::jekyll::Slugify)
            .filter(liquid_lib::shopify::Pluralize)
            .filter(liquid_lib::extra::DateInTz)
            .partials(Partials::new(source))
            .build()
            .map_err(|source| Error::Compile {
                dir: self.template_dir.clone(),
                source,
            })?;

        let mut compiled = HashMap::with_capacity(sources.len());
        let mut invalid = HashMap::new();
        for (name, content) in sources {
            match parser.parse(&content) {
                Ok(template) => {
                    compiled.insert(name, template);
                }
                Err(e) => {
                    log::debug!("Template `{name}` failed to parse: {e}");
                    invalid.insert(name, content);
                }
            }
        }
        log::debug!(
            "Loaded {} templates from `{}`",
            compiled.len() + invalid.len(),
            self.template_dir.display()
        );
        self.compiled = compiled;
        self.invalid = invalid;
        self.parser = Some(parser);
        Ok(())
    }

    /// Whether `name` was found by [`setup`][Self::setup], parseable or not.
    pub fn contains(&self, name: &str) -> bool {
        self.compiled.contains_key(name) || self.invalid.contains_key(name)
    }

    /// Render the template `name` with `context` layered over the globals.
    pub fn render(&self, name: &str, context: &liquid::Object) -> Result<String> {
        let reparsed;
        let template = match self.compiled.get(name) {
            Some(template) => template,
            None => {
                reparsed = self.reparse(name)?;
                &reparsed
            }
        };

        let mut globals = self.globals.clone();
        for (key, value) in context.iter() {
            globals.insert(key.clone(), value.clone());
        }
        template
            .render(&globals)
            .map_err(|source| Error::Render {
                name: name.to_owned(),
                source,
            })
    }

    fn reparse(&self, name: &str) -> Result<liquid::Template> {
        let not_found = || Error::TemplateNotFound {
            name: name.to_owned(),
            dir: self.template_dir.clone(),
        };
        let content = self.invalid.get(name).ok_or_else(not_found)?;
        let parser = self.parser.as_ref().ok_or_else(not_found)?;
        parser.parse(content).map_err(|source| Error::TemplateParse {
            name: name.to_owned(),
            source,
        })
    }

    /// Render [`INDEX_TEMPLATE`] with `posts` bound to the given entries.
    pub fn render_index(&self, posts: &[Entry]) -> Result<String> {
        let posts = posts
            .iter()
            .map(|post| Value::Object(post.to_object()))
            .collect();
        let mut context = liquid::Object::new();
        context.insert("posts".into(), Value::Array(posts));
        self.render(INDEX_TEMPLATE, &context)
    }
}

impl fmt::Debug for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.compiled.keys().collect();
        names.sort();
        let mut invalid: Vec<_> = self.invalid.keys().collect();
        invalid.sort();
        f.debug_struct("Templates")
            .field("template_dir", &self.template_dir)
            .field("templates", &names)
            .field("invalid", &invalid)
            .finish()
    }
}

fn load_sources(root: &path::Path) -> Result<Vec<(String, String)>> {
    if !root.is_dir() {
        log::debug!("No template directory at `{}`", root.display());
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    let walker = walkdir::WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));
    for entry in walker {
        let entry = entry.map_err(|e| Error::Io {
            path: root.to_owned(),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_path = entry.path();
        let rel_path = file_path
            .strip_prefix(root)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok());
        let Some(rel_path) = rel_path else {
            log::warn!("Skipping template with unsupported path `{}`", file_path.display());
            continue;
        };
        log::trace!("Loading template `{rel_path}`");
        let bytes = fs::read(file_path).map_err(|source| Error::Io {
            path: file_path.to_owned(),
            source,
        })?;
        match String::from_utf8(bytes) {
            Ok(content) => sources.push((rel_path.into_string(), content)),
            Err(_) => log::warn!("Skipping `{}`, not valid UTF-8", file_path.display()),
        }
    }
    Ok(sources)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
