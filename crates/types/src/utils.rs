//! Path and domain helpers

/// Validate root path format: empty, or `/`-prefixed with no trailing `/`
pub fn is_valid_root_path(root_path: &str) -> bool {
    if root_path.is_empty() {
        return true;
    }

    root_path.starts_with('/') && !root_path.ends_with('/')
}

/// Validate that a link is a root-relative path
///
/// `//host/path` is protocol-relative and points off-site, so it is rejected.
pub fn is_root_relative_link(link: &str) -> bool {
    link.starts_with('/') && !link.starts_with("//")
}

/// Check a bare domain name, returning the reason it is rejected
pub fn check_domain(domain: &str) -> Result<(), String> {
    if domain.is_empty() {
        return Err("domain cannot be empty".to_string());
    }

    if domain.contains("://") {
        return Err("domain must not include a protocol scheme".to_string());
    }

    if domain.ends_with('/') {
        return Err("domain must not end with '/'".to_string());
    }

    if domain.contains('/') {
        return Err("domain must not include a path".to_string());
    }

    if domain.chars().any(char::is_whitespace) {
        return Err("domain must not contain whitespace".to_string());
    }

    Ok(())
}

/// Prefix a root-relative link with the site root path
pub fn join_root_path(root_path: &str, link: &str) -> String {
    if root_path.is_empty() {
        return link.to_string();
    }

    format!("{}{}", root_path, link)
}
