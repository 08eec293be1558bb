use relative_path::RelativePathBuf;

/// Maps a slug to where its page is written and where it is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    base_url: String,
}

impl Resolver {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Output path of the page for `slug`, relative to the output directory.
    pub fn resolve(&self, slug: &str) -> RelativePathBuf {
        RelativePathBuf::from(format!("{slug}.html"))
    }

    /// Public URL of the page for `slug`.
    ///
    /// The base URL is used as-is, so a trailing `/` produces a `//`.
    pub fn generate_url(&self, slug: &str) -> String {
        format!("{}/{slug}", self.base_url)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolve_appends_extension() {
        let resolver = Resolver::new("http://localhost:8080");
        assert_eq!(resolver.resolve("hello-world").as_str(), "hello-world.html");
        assert_eq!(resolver.resolve("").as_str(), ".html");
    }

    #[test]
    fn resolve_keeps_directories() {
        let resolver = Resolver::new("http://localhost:8080");
        assert_eq!(resolver.resolve("blog/intro").as_str(), "blog/intro.html");
    }

    #[test]
    fn generate_url_joins_with_slash() {
        let resolver = Resolver::new("http://localhost:8080");
        assert_eq!(
            resolver.generate_url("hello-world"),
            "http://localhost:8080/hello-world"
        );
    }

    #[test]
    fn generate_url_does_not_normalize() {
        let resolver = Resolver::new("https://example.com/");
        assert_eq!(
            resolver.generate_url("hello-world"),
            "https://example.com//hello-world"
        );
        let resolver = Resolver::new("");
        assert_eq!(resolver.generate_url("hello-world"), "/hello-world");
    }
}
