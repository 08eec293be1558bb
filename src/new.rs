use std::fs;
use std::io::Write;
use std::path;

use folio_config::ConfigStore;
use folio_config::DEFAULT_CONFIG_FILE;
use folio_config::Reporter;
use folio_core::BlogPost;
use folio_core::Content as _;
use folio_core::ContentRepository;
use folio_core::DEFAULT_CONTENT_FILE;

use crate::error::Error;
use crate::error::Result;

const POST_HTML: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>{{ post.title | escape }} | {{ site.name | escape }}</title>
    </head>
    <body>
        <article>
            <h1>{{ post.title | escape }}</h1>
            {% if post.author != "" %}<p>By {{ post.author | escape }}</p>{% endif %}
            <div>{{ post.content }}</div>
            {% assign tag_count = post.tags | size %}{% if tag_count > 0 %}<p>Tagged {{ post.tags | join: ", " | escape }}</p>{% endif %}
        </article>
        <a href="index.html">All posts</a>
    </body>
</html>
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>{{ site.name | escape }}</title>
    </head>
    <body>
        <h1>{{ site.name | escape }}</h1>
        <ul>
        {% for post in posts %}
            <li><a href="{{ post.slug }}.html">{{ post.title | escape }}</a></li>
        {% endfor %}
        </ul>
    </body>
</html>
"#;

fn sample_posts() -> [BlogPost; 2] {
    [
        BlogPost::new(
            "My First Blog Post",
            "This is the content of my first blog post.",
            "John Doe",
        )
        .with_categories(["Rust", "Web Development"])
        .with_tags(["blog", "tutorial"]),
        BlogPost::new(
            "Another Blog Post",
            "This is another blog post.",
            "Jane Smith",
        )
        .with_categories(["JavaScript", "Web Development"])
        .with_tags(["blog", "coding"]),
    ]
}

/// Lay out a ready-to-build project in `dest`.
///
/// Fails without touching anything already there.
pub fn create_new_project<P: AsRef<path::Path>>(
    dest: P,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    create_new_project_for_path(dest.as_ref(), reporter)
}

fn create_new_project_for_path(dest: &path::Path, reporter: &mut dyn Reporter) -> Result<()> {
    let config_path = dest.join(DEFAULT_CONFIG_FILE);
    let content_path = dest.join(DEFAULT_CONTENT_FILE);
    let config = ConfigStore::new(&config_path);
    let template_dir = dest.join(config.config().template_dir());
    let post_path = template_dir.join(crate::POST_TEMPLATE);
    let index_path = template_dir.join(crate::INDEX_TEMPLATE);
    for file in [&config_path, &content_path, &post_path, &index_path] {
        if file.exists() {
            return Err(Error::Exists { path: file.clone() });
        }
    }

    create_dir(dest)?;
    config.save(reporter)?;

    let mut content = ContentRepository::new();
    for post in sample_posts() {
        content.add(post);
    }
    content.save(&content_path)?;

    create_dir(&template_dir)?;
    create_file(&post_path, POST_HTML)?;
    create_file(&index_path, INDEX_HTML)?;

    Ok(())
}

/// Append `post` to the content file at `content_path`, creating the file if needed.
pub fn create_new_post(
    content_path: &path::Path,
    post: BlogPost,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let mut content = ContentRepository::new();
    content.load(content_path, reporter)?;
    if content.get(post.slug()).is_some() {
        return Err(Error::DuplicateSlug {
            slug: post.slug().to_owned(),
        });
    }
    log::info!("Adding {:?} to `{}`", post.title(), content_path.display());
    content.add(post);
    content.save(content_path)?;
    Ok(())
}

fn create_dir(path: &path::Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

fn create_file(path: &path::Path, content: &str) -> Result<()> {
    log::trace!("Creating file `{}`", path.display());

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::AlreadyExists => Error::Exists {
                path: path.to_owned(),
            },
            _ => Error::Io {
                path: path.to_owned(),
                source,
            },
        })?;
    file.write_all(content.as_bytes())
        .map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;

    Ok(())
}
