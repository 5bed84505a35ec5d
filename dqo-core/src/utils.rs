//! Identifier case conversions shared by the model and the manifest.

/// Convert a string to snake_case (e.g., "createdAt" -> "created_at").
///
/// Acronyms stay together ("HTTPServer" -> "http_server") and `-` or
/// spaces are treated as word separators.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | ' ') {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }

        result.extend(c.to_lowercase());
    }

    result
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "createdAt" -> "CREATED_AT").
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Convert a string to PascalCase (e.g., "user_account" -> "UserAccount").
pub fn to_pascal_case(s: &str) -> String {
    to_snake_case(s).split('_').map(capitalize).collect()
}

/// Convert a string to camelCase (e.g., "created_at" -> "createdAt").
pub fn to_camel_case(s: &str) -> String {
    let snake = to_snake_case(s);
    let mut parts = snake.split('_').filter(|p| !p.is_empty());

    let mut result = parts.next().unwrap_or_default().to_string();
    for part in parts {
        result.push_str(&capitalize(part));
    }
    result
}

/// Check whether `s` is usable as a PHP identifier (constant, method or class name).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Check whether `s` is a `\`-separated path of identifiers, such as
/// `App\Db` or `\Money\Money`. A single leading separator is allowed.
pub fn is_qualified_name(s: &str) -> bool {
    s.strip_prefix('\\').unwrap_or(s).split('\\').all(is_identifier)
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
