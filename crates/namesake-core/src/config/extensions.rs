/// Extension categories and the include/exclude extension filter.
///
/// Category toggles expand to fixed extension lists. A free-text list is then
/// applied token by token: plain tokens add an extension, `-`-prefixed tokens
/// remove one, so `"-.txt"` can punch a hole in the `document` category.
use crate::error::ParseOptionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Named groups of extensions a user can toggle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionCategory {
    Image,
    Video,
    Document,
    Archive,
    Audio,
    Other,
}

impl ExtensionCategory {
    pub const ALL: [ExtensionCategory; 6] = [
        Self::Image,
        Self::Video,
        Self::Document,
        Self::Archive,
        Self::Audio,
        Self::Other,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Document => "Document",
            Self::Archive => "Archive",
            Self::Audio => "Audio",
            Self::Other => "Other",
        }
    }

    /// The extensions this category expands to, lower-case with leading dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"],
            Self::Video => &[".mp4", ".avi", ".mkv", ".mov", ".wmv"],
            Self::Document => &[".pdf", ".doc", ".docx", ".txt"],
            Self::Archive => &[".zip", ".rar", ".7z", ".tar", ".gz"],
            Self::Audio => &[".mp3", ".wav", ".flac", ".ogg"],
            Self::Other => &[".exe", ".dll", ".iso"],
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Document => "document",
            Self::Archive => "archive",
            Self::Audio => "audio",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExtensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtensionCategory {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ParseOptionError {
                kind: "extension category",
                value: s.to_string(),
                expected: "image, video, document, archive, audio, other",
            })
    }
}

/// Whether the extension set selects files to keep or files to drop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Keep only files whose extension is in the set (or everything if the set is empty).
    #[default]
    Include,
    /// Drop files whose extension is in the set.
    Exclude,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        })
    }
}

impl FromStr for FilterMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "include" => Ok(Self::Include),
            "exclude" => Ok(Self::Exclude),
            _ => Err(ParseOptionError {
                kind: "filter mode",
                value: s.to_string(),
                expected: "include, exclude",
            }),
        }
    }
}

/// Normalize a user-typed extension: lower-case, leading `.` ensured.
///
/// Returns `None` for tokens that are empty after trimming.
pub fn normalize_extension(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let lower = token.to_lowercase();
    if lower.starts_with('.') {
        Some(lower)
    } else {
        Some(format!(".{lower}"))
    }
}

/// Resolved extension set plus the mode it is applied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionFilter {
    set: BTreeSet<String>,
    mode: FilterMode,
}

impl ExtensionFilter {
    /// Build the filter from category toggles and a free-text list.
    ///
    /// Tokens in `free_text` are separated by whitespace or commas and are
    /// applied in order after all categories.
    pub fn new(categories: &[ExtensionCategory], free_text: &str, mode: FilterMode) -> Self {
        let mut set: BTreeSet<String> = categories
            .iter()
            .flat_map(|c| c.extensions().iter().map(|e| (*e).to_string()))
            .collect();

        for token in free_text.split(|c: char| c.is_whitespace() || c == ',') {
            match token.strip_prefix('-') {
                Some(negated) => {
                    if let Some(ext) = normalize_extension(negated) {
                        set.remove(&ext);
                    }
                }
                None => {
                    if let Some(ext) = normalize_extension(token) {
                        set.insert(ext);
                    }
                }
            }
        }

        Self { set, mode }
    }

    /// A filter that lets every file through.
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.set.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Does a file with this (already normalized) extension pass?
    pub fn accepts(&self, extension: &str) -> bool {
        let member = self.set.contains(extension);
        match self.mode {
            FilterMode::Include => self.set.is_empty() || member,
            FilterMode::Exclude => !member,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_dot_and_lowercases() {
        assert_eq!(normalize_extension("LOG").as_deref(), Some(".log"));
        assert_eq!(normalize_extension(".Tmp").as_deref(), Some(".tmp"));
        assert_eq!(normalize_extension("   "), None);
    }

    #[test]
    fn categories_union_with_free_text() {
        let filter = ExtensionFilter::new(
            &[ExtensionCategory::Audio],
            "tmp .LOG",
            FilterMode::Include,
        );
        let exts: Vec<&str> = filter.extensions().collect();
        assert!(exts.contains(&".mp3"));
        assert!(exts.contains(&".tmp"));
        assert!(exts.contains(&".log"));
        assert_eq!(exts.len(), 6);
    }

    /// A `-` token removes an extension a category added.
    #[test]
    fn negated_token_removes_category_extension() {
        let filter = ExtensionFilter::new(
            &[ExtensionCategory::Document],
            "-txt, -.pdf",
            FilterMode::Include,
        );
        assert!(!filter.accepts(".txt"));
        assert!(!filter.accepts(".pdf"));
        assert!(filter.accepts(".docx"));
    }

    #[test]
    fn empty_include_set_accepts_everything() {
        let filter = ExtensionFilter::allow_all();
        assert!(filter.accepts(".anything"));
        assert!(filter.accepts(""));
    }

    #[test]
    fn include_and_exclude_are_symmetric() {
        let include = ExtensionFilter::new(&[], ".log", FilterMode::Include);
        let exclude = ExtensionFilter::new(&[], ".log", FilterMode::Exclude);

        assert!(include.accepts(".log"));
        assert!(!exclude.accepts(".log"));

        assert!(!include.accepts(".txt"));
        assert!(exclude.accepts(".txt"));
    }

    #[test]
    fn empty_exclude_set_rejects_nothing() {
        let filter = ExtensionFilter::new(&[], "", FilterMode::Exclude);
        assert!(filter.accepts(".log"));
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!("Image".parse::<ExtensionCategory>(), Ok(ExtensionCategory::Image));
        assert!("pictures".parse::<ExtensionCategory>().is_err());
    }
}
