//! Host lookups in the top-level manifest

use super::sanitizer::sanitize;
use regex::Regex;
use tracing::debug;

/// Machine type the manifest assigns to `hostname`.
///
/// Finds a `hostname = … { … }` (or quoted `"hostname" = …`) binding, takes
/// the brace-delimited block that follows it and reads `field = "<type>"`
/// from that block. Every binding of the host is tried in order; the first
/// one declaring the field wins.
///
/// Both patterns embed `hostname` and `field`, so they are compiled per
/// call instead of once behind a `OnceLock`.
pub fn machine_type_for(manifest: &str, hostname: &str, field: &str) -> Option<String> {
    if hostname.is_empty() || field.is_empty() {
        return None;
    }

    let text = sanitize(manifest);
    let key = Regex::new(&format!(
        r#"(?i)(?:^|[^\w.-])"?{}"?\s*="#,
        regex::escape(hostname)
    ))
    .ok()?;
    let value = Regex::new(&format!(r#"\b{}\s*=\s*"([^"]+)""#, regex::escape(field))).ok()?;

    for binding in key.find_iter(&text) {
        let Some(block) = block_after(&text[binding.end()..]) else {
            continue;
        };
        if let Some(caps) = value.captures(block) {
            let machine_type = caps[1].to_string();
            debug!("host {} has machine type {}", hostname, machine_type);
            return Some(machine_type);
        }
    }

    None
}

/// Body of the first `{ … }` block before the binding's terminating `;`
fn block_after(rest: &str) -> Option<&str> {
    let open = rest.find(['{', ';'])?;
    if !rest[open..].starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, c) in rest[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[open + 1..open + offset]);
                }
            }
            _ => {}
        }
    }

    Some(&rest[open + 1..])
}
