use std::fmt;
use std::path;

/// Site-wide settings.
///
/// Every field has a fixed default; a config file may override any subset of them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub site_name: String,
    pub base_url: String,
    pub theme: String,
    pub output_dir: String,
    pub template_dir: String,
    pub markdown_library: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            site_name: "My Blog".to_owned(),
            base_url: "http://localhost:8080".to_owned(),
            theme: "default".to_owned(),
            output_dir: "output".to_owned(),
            template_dir: "templates".to_owned(),
            markdown_library: "mistune".to_owned(),
        }
    }
}

impl Config {
    /// Names of every setting, in declaration order.
    pub const KEYS: &'static [&'static str] = &[
        "site_name",
        "base_url",
        "theme",
        "output_dir",
        "template_dir",
        "markdown_library",
    ];

    /// Look up a setting by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "site_name" => &self.site_name,
            "base_url" => &self.base_url,
            "theme" => &self.theme,
            "output_dir" => &self.output_dir,
            "template_dir" => &self.template_dir,
            "markdown_library" => &self.markdown_library,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub fn output_dir(&self) -> &path::Path {
        path::Path::new(&self.output_dir)
    }

    pub fn template_dir(&self) -> &path::Path {
        path::Path::new(&self.template_dir)
    }

    pub(crate) fn apply(&mut self, overlay: Overlay) {
        let Overlay {
            site_name,
            base_url,
            theme,
            output_dir,
            template_dir,
            markdown_library,
        } = overlay;
        merge(&mut self.site_name, site_name);
        merge(&mut self.base_url, base_url);
        merge(&mut self.theme, theme);
        merge(&mut self.output_dir, output_dir);
        merge(&mut self.template_dir, template_dir);
        merge(&mut self.markdown_library, markdown_library);
    }
}

fn merge(current: &mut String, incoming: Option<String>) {
    if let Some(incoming) = incoming {
        *current = incoming;
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// The settings a config file actually names.
///
/// Keys are validated before this is built, so unknown fields never reach it.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub(crate) struct Overlay {
    site_name: Option<String>,
    base_url: Option<String>,
    theme: Option<String>,
    output_dir: Option<String>,
    template_dir: Option<String>,
    markdown_library: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_match_serialized_fields() {
        let value = serde_json::to_value(Config::default()).unwrap();
        let mut fields: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        fields.sort();
        let mut keys: Vec<_> = Config::KEYS.iter().map(|k| (*k).to_owned()).collect();
        keys.sort();
        assert_eq!(keys, fields);
    }

    #[test]
    fn get_every_key() {
        let config = Config::default();
        for key in Config::KEYS {
            assert!(config.get(key).is_some(), "{key} missing");
        }
        assert_eq!(config.get("base_url"), Some("http://localhost:8080"));
    }

    #[test]
    fn get_unknown_key() {
        assert_eq!(Config::default().get("author"), None);
    }

    #[test]
    fn apply_overrides_only_named_fields() {
        let mut config = Config::default();
        let overlay: Overlay =
            serde_json::from_str(r#"{"site_name": "Notes", "theme": null}"#).unwrap();
        config.apply(overlay);
        assert_eq!(config.site_name, "Notes");
        assert_eq!(config.theme, "default");
        assert_eq!(config.output_dir, "output");
    }

    #[test]
    fn display_is_json() {
        let rendered = Config::default().to_string();
        let parsed: Config = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
