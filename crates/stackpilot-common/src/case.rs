//! Conversions between the identifier casing conventions used by the CloudStack API.
//!
//! Values arrive on the wire as `Enabled`, `domainRouter` or `SecondaryStorageVM`,
//! while variants are looked up by their upper-underscore identifier
//! (`ENABLED`, `DOMAIN_ROUTER`, `SECONDARY_STORAGE_VM`).

/// A casing convention for multi-word identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseFormat {
    /// `domainRouter`
    LowerCamel,
    /// `DomainRouter`
    UpperCamel,
    /// `DOMAIN_ROUTER`
    UpperUnderscore,
    /// `domain_router`
    LowerUnderscore,
}

impl CaseFormat {
    /// Convert `value`, written in this format, into the `target` format
    ///
    /// Camel-case input is split where a lowercase letter or a digit is followed by an
    /// uppercase letter, so runs of capitals stay together (`SecondaryStorageVM`
    /// becomes `SECONDARY_STORAGE_VM`, `ocfs2Pool` becomes `OCFS2_POOL`).
    pub fn to(self, target: CaseFormat, value: &str) -> String {
        let words = self.split(value);
        target.join(&words)
    }

    fn split(self, value: &str) -> Vec<&str> {
        match self {
            CaseFormat::UpperUnderscore | CaseFormat::LowerUnderscore => {
                value.split('_').collect()
            }
            CaseFormat::LowerCamel | CaseFormat::UpperCamel => split_camel(value),
        }
    }

    fn join(self, words: &[&str]) -> String {
        match self {
            CaseFormat::UpperUnderscore => words
                .iter()
                .map(|word| word.to_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
            CaseFormat::LowerUnderscore => words
                .iter()
                .map(|word| word.to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
            CaseFormat::UpperCamel => words.iter().map(|word| capitalize(word)).collect(),
            CaseFormat::LowerCamel => words
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    if i == 0 {
                        word.to_lowercase()
                    } else {
                        capitalize(word)
                    }
                })
                .collect(),
        }
    }
}

fn split_camel(value: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut previous: Option<char> = None;

    for (idx, ch) in value.char_indices() {
        let boundary = previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if boundary && ch.is_uppercase() {
            words.push(&value[start..idx]);
            start = idx;
        }
        previous = Some(ch);
    }
    words.push(&value[start..]);
    words
}

/// Uppercase the first character and lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
