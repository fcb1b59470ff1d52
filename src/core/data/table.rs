use std::collections::BTreeMap;

/// Language code of the synthesized pseudolocale.
///
/// Never read from a source file; only written by the consistency check.
pub const PSEUDO_LANGUAGE: &str = "pseudo";

/// Values of one translation key, by language code.
pub type LanguageValues = BTreeMap<String, String>;

/// Translation table: key -> language -> stored value.
///
/// Values are kept exactly as they appear in `.lang` files after quote
/// unescaping, so an escaped newline is still the two characters `\n`.
/// Keys iterate in ascending order, which every emitter relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: BTreeMap<String, LanguageValues>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the values for `key`, inserting an empty set of values first if needed.
    pub fn entry_mut(&mut self, key: &str) -> &mut LanguageValues {
        self.entries.entry(key.to_string()).or_default()
    }

    /// Set the value of `key` in `language`, replacing any previous value.
    pub fn insert(&mut self, key: &str, language: &str, value: impl Into<String>) {
        self.entry_mut(key)
            .insert(language.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&LanguageValues> {
        self.entries.get(key)
    }

    /// Value of `key` in `language`, if present.
    pub fn value(&self, key: &str, language: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.get(language))
            .map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageValues)> {
        self.entries.iter().map(|(key, values)| (key.as_str(), values))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut LanguageValues)> {
        self.entries
            .iter_mut()
            .map(|(key, values)| (key.as_str(), values))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the keys for which `keep` returns true.
    pub fn retain_keys(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|key, _| keep(key));
    }

    /// Merge `other` into this table.
    ///
    /// Values from `other` overwrite existing values of the same key and
    /// language; languages absent from `other` are left untouched.
    pub fn extend(&mut self, other: TranslationTable) {
        for (key, values) in other.entries {
            self.entry_mut(&key).extend(values);
        }
    }
}
