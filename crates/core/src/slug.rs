/// Create a slug for a given title: lower-cased, with every space turned into a hyphen.
pub fn slugify<S: AsRef<str>>(title: S) -> String {
    slugify_str(title.as_ref())
}

fn slugify_str(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}
