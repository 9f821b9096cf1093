//! GitHub-flavored markdown anchor/slug generation for cross-links.

/// Generate an in-page table-of-contents link for an element name.
pub fn render_toc_link(text: &str) -> String {
    format!("[{}](#{})", text, github_slug(text))
}

/// Generate a TOC list item.
pub fn render_toc_item(title: &str) -> String {
    format!("* {}", render_toc_link(title))
}

/// GitHub heading anchor slug:
/// - lowercase
/// - strip everything that is not alphanumeric, space, or hyphen
///   (dots in `a.b.c` element paths disappear)
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
