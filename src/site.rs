use folio_config::Config;
use liquid::model::Value;

/// The `site` object every template sees.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteBuilder {
    pub name: String,
    pub base_url: String,
    pub theme: String,
}

impl SiteBuilder {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.site_name.clone(),
            base_url: config.base_url.clone(),
            theme: config.theme.clone(),
        }
    }

    pub fn build(self) -> liquid::Object {
        let SiteBuilder {
            name,
            base_url,
            theme,
        } = self;

        let mut attributes = liquid::Object::new();
        attributes.insert("name".into(), Value::scalar(name));
        attributes.insert("base_url".into(), Value::scalar(base_url));
        attributes.insert("theme".into(), Value::scalar(theme));
        attributes
    }

    /// Globals for a [`Templates`][crate::Templates] set, with the site under `site`.
    pub fn into_globals(self) -> liquid::Object {
        let mut globals = liquid::Object::new();
        globals.insert("site".into(), Value::Object(self.build()));
        globals
    }
}
