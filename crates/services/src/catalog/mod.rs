use std::sync::Arc;

use kanji_core::model::{CharacterRecord, ModuleId, StudyModule};

use crate::error::CatalogError;

mod data;

/// One row of a syllabary chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanaEntry {
    pub kana: char,
    pub romaji: &'static str,
}

/// Always-available kana reference chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabaryGuide {
    title: &'static str,
    entries: Vec<KanaEntry>,
}

impl SyllabaryGuide {
    #[must_use]
    pub fn title(&self) -> &str {
        self.title
    }

    #[must_use]
    pub fn entries(&self) -> &[KanaEntry] {
        &self.entries
    }
}

/// Read-only dataset of predefined modules and syllabary guides.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    modules: Vec<Arc<StudyModule>>,
    guides: Vec<SyllabaryGuide>,
}

impl Catalog {
    /// Load the built-in N5 modules and kana guides.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a built-in record fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut modules = Vec::with_capacity(data::KANJI_MODULES.len());
        for raw in data::KANJI_MODULES {
            let characters = raw
                .kanji
                .iter()
                .map(|k| {
                    CharacterRecord::new(
                        k.glyph,
                        k.on,
                        k.kun.map(str::to_owned),
                        k.gloss,
                        k.mnemonic,
                    )
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(kanji_core::Error::from)?;
            let module = StudyModule::new(ModuleId::new(raw.id), raw.title, characters)
                .map_err(kanji_core::Error::from)?;
            modules.push(Arc::new(module));
        }

        let guides = data::GUIDES
            .iter()
            .map(|raw| SyllabaryGuide {
                title: raw.title,
                entries: raw
                    .entries
                    .iter()
                    .map(|&(kana, romaji)| KanaEntry { kana, romaji })
                    .collect(),
            })
            .collect();

        Ok(Self { modules, guides })
    }

    #[must_use]
    pub fn modules(&self) -> &[Arc<StudyModule>] {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<Arc<StudyModule>> {
        self.modules.iter().find(|m| m.id() == id).cloned()
    }

    /// Resolve a selection to modules in catalog order.
    ///
    /// Unknown ids are ignored and repeated ids collapse to one entry.
    #[must_use]
    pub fn select(&self, ids: &[ModuleId]) -> Vec<Arc<StudyModule>> {
        self.modules
            .iter()
            .filter(|m| ids.contains(&m.id()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn guides(&self) -> &[SyllabaryGuide] {
        &self.guides
    }

    /// Every character in catalog order.
    pub fn characters(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.modules.iter().flat_map(|m| m.characters().iter())
    }

    #[must_use]
    pub fn find_glyph(&self, glyph: char) -> Option<&CharacterRecord> {
        self.characters().find(|c| c.glyph() == glyph)
    }
}
