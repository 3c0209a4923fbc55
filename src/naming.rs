//! Small string helpers shared by table import and template context.

/// Upper-cases the first character only: `sysUser` -> `SysUser`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character only: `SysUser` -> `sysUser`.
pub fn uncapitalize(value: &str) -> String {
    let mut chars = value.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Text after the last `separator`, or the whole value when it has none.
pub fn after_last<'a>(value: &'a str, separator: char) -> &'a str {
    match value.rfind(separator) {
        Some(index) => &value[index + separator.len_utf8()..],
        None => value,
    }
}

/// Text before the last `separator`, or the whole value when it has none.
pub fn before_last<'a>(value: &'a str, separator: char) -> &'a str {
    match value.rfind(separator) {
        Some(index) => &value[..index],
        None => value,
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
