use lofty::{ItemKey, Tag};

/// All text values stored under `key`, in tag order.
///
/// ID3v2.4 packs multiple values into one frame separated by NUL, so those
/// are split out as well.
pub(crate) fn texts(tag: Option<&Tag>, key: &ItemKey) -> Vec<String> {
    let Some(tag) = tag else {
        return Vec::new();
    };

    tag.get_strings(key)
        .flat_map(|value| value.split('\0'))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// First text value stored under `key`, or an empty string
pub(crate) fn first_text(tag: Option<&Tag>, key: &ItemKey) -> String {
    texts(tag, key).into_iter().next().unwrap_or_default()
}
