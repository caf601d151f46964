use std::collections::HashSet;

use thiserror::Error;

use crate::model::character::CharacterRecord;
use crate::model::ids::ModuleId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module title cannot be empty")]
    EmptyTitle,

    #[error("module must contain at least one character")]
    NoCharacters,

    #[error("custom selection must include at least one module")]
    EmptySelection,
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// An ordered set of characters studied together.
///
/// Character order defines traversal order and is never reshuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyModule {
    id: ModuleId,
    title: String,
    characters: Vec<CharacterRecord>,
}

impl StudyModule {
    /// Title given to modules synthesized from a custom selection.
    pub const CUSTOM_TITLE: &'static str = "Custom Test";

    /// Creates a validated module.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::EmptyTitle` for a blank title and
    /// `ModuleError::NoCharacters` for an empty character list.
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        characters: Vec<CharacterRecord>,
    ) -> Result<Self, ModuleError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ModuleError::EmptyTitle);
        }
        if characters.is_empty() {
            return Err(ModuleError::NoCharacters);
        }

        Ok(Self {
            id,
            title,
            characters,
        })
    }

    /// Synthesizes a custom module from several source modules.
    ///
    /// Characters keep the order of `sources`; a glyph that appears in more than
    /// one source is kept only at its first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::EmptySelection` when `sources` is empty.
    pub fn combine<'a>(
        sources: impl IntoIterator<Item = &'a StudyModule>,
    ) -> Result<Self, ModuleError> {
        let mut seen = HashSet::new();
        let mut characters = Vec::new();
        let mut source_count = 0_usize;

        for module in sources {
            source_count += 1;
            for record in &module.characters {
                if seen.insert(record.glyph()) {
                    characters.push(record.clone());
                }
            }
        }

        if source_count == 0 {
            return Err(ModuleError::EmptySelection);
        }

        Self::new(ModuleId::CUSTOM, Self::CUSTOM_TITLE, characters)
    }

    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn characters(&self) -> &[CharacterRecord] {
        &self.characters
    }

    /// Number of characters; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Always false, kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Index of the final character.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.characters.len().saturating_sub(1)
    }

    #[must_use]
    pub fn character(&self, index: usize) -> Option<&CharacterRecord> {
        self.characters.get(index)
    }

    /// True when the module is the product of `combine`.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.id.is_custom()
    }
}
