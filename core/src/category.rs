use serde::Deserialize;

pub const THUMB_SUFFIX: &str = "-cat";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    pub key: String,
    pub thumb_id: String,
}

pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("bronze", "bronze-cat"),
    ("painted", "painted-cat"),
    ("monumental", "monumental-cat"),
    ("photography", "photography-cat"),
    ("conceptual", "conceptual-cat"),
    ("jewelry", "jewelry-cat"),
];

/// Category key → thumbnail control id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryIndex {
    entries: Vec<CategoryEntry>,
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self {
            entries: DEFAULT_CATEGORIES
                .iter()
                .map(|(key, thumb_id)| CategoryEntry {
                    key: (*key).to_string(),
                    thumb_id: (*thumb_id).to_string(),
                })
                .collect(),
        }
    }
}

impl CategoryIndex {
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let key = normalize_category(&entry.key)?;
                let thumb_id = entry.thumb_id.trim().to_string();
                if thumb_id.is_empty() {
                    return None;
                }
                Some(CategoryEntry { key, thumb_id })
            })
            .collect();
        Self { entries }
    }

    pub fn thumb_for(&self, key: &str) -> Option<&str> {
        let key = normalize_category(key)?;
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.thumb_id.as_str())
    }
}

/// Trimmed, lower-cased key; `None` for blank labels.
pub fn normalize_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Category a thumbnail control jumps to. The image's alt text wins; otherwise
/// the control id with the `-cat` suffix stripped.
pub fn category_from_thumb(alt: Option<&str>, id: &str) -> Option<String> {
    let raw = match alt.map(str::trim) {
        Some(alt) if !alt.is_empty() => alt,
        _ => id,
    };
    let raw = raw.trim();
    let raw = raw.strip_suffix(THUMB_SUFFIX).unwrap_or(raw);
    normalize_category(raw)
}

/// Heading text for a category: the first word on its own line, the rest on
/// a second line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleLines {
    pub first: String,
    pub rest: Option<String>,
}

impl TitleLines {
    pub fn from_label(label: &str) -> Option<Self> {
        let mut words = label.split_whitespace();
        let first = words.next()?.to_string();
        let rest = words.collect::<Vec<_>>().join(" ");
        Some(Self {
            first,
            rest: if rest.is_empty() { None } else { Some(rest) },
        })
    }
}

/// Outcome of moving the `selected` marker between thumbnails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    pub deselect: Option<String>,
    pub select: String,
}

/// Remembers which thumbnail carries the `selected` marker.
#[derive(Clone, Debug, Default)]
pub struct ThumbSelection {
    current: Option<String>,
}

impl ThumbSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn select(&mut self, thumb_id: &str) -> SelectionChange {
        let deselect = match self.current.take() {
            Some(previous) if previous != thumb_id => Some(previous),
            _ => None,
        };
        self.current = Some(thumb_id.to_string());
        SelectionChange {
            deselect,
            select: thumb_id.to_string(),
        }
    }
}
