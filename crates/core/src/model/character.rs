use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CharacterError {
    #[error("on reading cannot be empty")]
    EmptyOnReading,

    #[error("kun reading cannot be blank when present")]
    BlankKunReading,

    #[error("gloss cannot be empty")]
    EmptyGloss,
}

//
// ─── READINGS ──────────────────────────────────────────────────────────────────
//

/// Which family a reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingKind {
    /// Sino-Japanese reading.
    On,
    /// Native Japanese reading.
    Kun,
}

/// A single pronunciation of a character, written in hiragana.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading<'a> {
    pub kind: ReadingKind,
    pub kana: &'a str,
}

//
// ─── CHARACTER RECORD ──────────────────────────────────────────────────────────
//

/// One drillable character with its readings, meaning and mnemonic.
///
/// Records are created once when the dataset is loaded and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    glyph: char,
    on: String,
    kun: Option<String>,
    gloss: String,
    mnemonic: String,
}

impl CharacterRecord {
    /// Creates a validated record.
    ///
    /// # Errors
    ///
    /// Returns `CharacterError` if the on reading or gloss is empty, or a kun
    /// reading is supplied but blank.
    pub fn new(
        glyph: char,
        on: impl Into<String>,
        kun: Option<String>,
        gloss: impl Into<String>,
        mnemonic: impl Into<String>,
    ) -> Result<Self, CharacterError> {
        let on = on.into();
        if on.trim().is_empty() {
            return Err(CharacterError::EmptyOnReading);
        }
        if kun.as_deref().is_some_and(|k| k.trim().is_empty()) {
            return Err(CharacterError::BlankKunReading);
        }
        let gloss = gloss.into();
        if gloss.trim().is_empty() {
            return Err(CharacterError::EmptyGloss);
        }

        Ok(Self {
            glyph,
            on,
            kun,
            gloss,
            mnemonic: mnemonic.into(),
        })
    }

    #[must_use]
    pub fn glyph(&self) -> char {
        self.glyph
    }

    #[must_use]
    pub fn on(&self) -> &str {
        &self.on
    }

    #[must_use]
    pub fn kun(&self) -> Option<&str> {
        self.kun.as_deref()
    }

    #[must_use]
    pub fn gloss(&self) -> &str {
        &self.gloss
    }

    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Every reading present on this record, on reading first.
    pub fn readings(&self) -> impl Iterator<Item = Reading<'_>> {
        std::iter::once(Reading {
            kind: ReadingKind::On,
            kana: self.on.as_str(),
        })
        .chain(self.kun.as_deref().map(|kana| Reading {
            kind: ReadingKind::Kun,
            kana,
        }))
    }
}
