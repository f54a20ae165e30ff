//! Avatar resolution: show the image when the URL is usable, otherwise the
//! name's initial.

/// What the card draws in the avatar slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarView {
    /// Image reference that looked loadable
    Image(String),
    /// Generated initial-letter avatar
    Initial(char),
}

impl AvatarView {
    /// `load_failed` is set once the image could not be loaded for display
    pub fn resolve(url: &str, name: &str, load_failed: bool) -> Self {
        let url = url.trim();
        if !load_failed && is_valid_image_url(url) {
            Self::Image(url.to_string())
        } else {
            Self::Initial(fallback_initial(name))
        }
    }
}

/// `http(s)://host/...` with a non-empty host, or an inline `data:image/` URI
pub fn is_valid_image_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return false;
    }
    if url.starts_with("data:image/") {
        return true;
    }

    let rest = match url.split_once("://") {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") => rest,
        _ => return false,
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    !host.is_empty()
}

/// First letter of the name, uppercased; `?` when the name is blank
pub fn fallback_initial(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}
