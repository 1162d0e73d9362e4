//! Lossy, display-safe fragments of endpoints and credentials.
//!
//! Slicing is done on `char`s, so short or non-ASCII inputs never panic.

/// Shorten an endpoint URL to `<first 8 chars of host>...<last two labels>`.
///
/// `https://api.example.com/v1/chat` becomes `api.exam...example.com`.
/// Hosts of eight characters or fewer repeat part of themselves; that is
/// expected.
pub fn redact_endpoint(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let rest = strip_scheme(url);
    let domain = rest.split('/').next().unwrap_or_default();

    let labels: Vec<&str> = domain.split('.').collect();
    let suffix = labels[labels.len().saturating_sub(2)..].join(".");

    format!("{}...{}", head(domain, 8), suffix)
}

/// Mask a credential, keeping only a few characters at each end.
///
/// Up to 12 characters: first 2 + `****` + last 2. Longer: first 4 +
/// `******` + last 4.
pub fn redact_credential(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }

    if secret.chars().count() <= 12 {
        format!("{}****{}", head(secret, 2), tail(secret, 2))
    } else {
        format!("{}******{}", head(secret, 4), tail(secret, 4))
    }
}

fn strip_scheme(url: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if let Some(prefix) = url.get(..scheme.len())
            && prefix.eq_ignore_ascii_case(scheme)
        {
            return &url[scheme.len()..];
        }
    }
    url
}

fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn tail(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    match s.char_indices().nth(count - n) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
