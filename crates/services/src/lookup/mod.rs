use std::sync::Arc;

use kanji_core::model::CharacterRecord;
use wana_kana::{ConvertJapanese, IsJapaneseStr};

use crate::catalog::Catalog;

/// Outcome of a quick lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// A character from the dataset.
    Record(CharacterRecord),
    /// A kanji outside the dataset; only its stroke order can be shown.
    Glyph(char),
    NotFound,
}

/// Free-text lookup over the catalog by glyph, reading, or meaning.
#[derive(Clone)]
pub struct LookupService {
    catalog: Arc<Catalog>,
}

impl LookupService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Resolve user input to a character.
    ///
    /// A single Japanese character is looked up directly. Anything else is
    /// matched against meanings (case-insensitive) and against on/kun readings
    /// after romaji conversion; the first hit in catalog order wins.
    #[must_use]
    pub fn resolve(&self, input: &str) -> LookupResult {
        let term = input.trim();
        let mut chars = term.chars();
        let Some(first) = chars.next() else {
            return LookupResult::NotFound;
        };

        if chars.next().is_none() && is_japanese(first) {
            return match self.catalog.find_glyph(first) {
                Some(record) => LookupResult::Record(record.clone()),
                None => LookupResult::Glyph(first),
            };
        }

        let lower = term.to_lowercase();
        let kana = lower.as_str().to_hiragana();
        let found = self.catalog.characters().find(|record| {
            record.gloss().to_lowercase().contains(&lower)
                || (!kana.is_empty()
                    && record.readings().any(|reading| reading.kana.contains(&kana)))
        });

        if let Some(record) = found {
            return LookupResult::Record(record.clone());
        }

        if is_kanji(first) {
            return LookupResult::Glyph(first);
        }

        tracing::debug!(term, "lookup found nothing");
        LookupResult::NotFound
    }
}

fn is_japanese(c: char) -> bool {
    c.to_string().as_str().is_japanese()
}

fn is_kanji(c: char) -> bool {
    c.to_string().as_str().is_kanji()
}
