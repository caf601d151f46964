use kanji_core::model::CharacterRecord;

/// Placeholder shown for a missing kun reading.
pub const NO_READING: &str = "-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVm {
    pub glyph: char,
    pub on: String,
    pub kun: String,
    pub gloss: String,
    pub mnemonic: String,
    /// One-based position, e.g. `3 / 10`.
    pub position: String,
}

impl CardVm {
    #[must_use]
    pub fn readings_line(&self) -> String {
        format!("{} / {}", self.on, self.kun)
    }
}

#[must_use]
pub fn map_card(record: &CharacterRecord, index: usize, total: usize) -> CardVm {
    CardVm {
        glyph: record.glyph(),
        on: record.on().to_owned(),
        kun: record.kun().unwrap_or(NO_READING).to_owned(),
        gloss: record.gloss().to_owned(),
        mnemonic: record.mnemonic().to_owned(),
        position: format!("{} / {total}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_record_with_one_based_position() {
        let record =
            CharacterRecord::new('山', "さん", Some("やま".into()), "Mountain", "Three peaks.")
                .unwrap();
        let vm = map_card(&record, 0, 10);
        assert_eq!(vm.position, "1 / 10");
        assert_eq!(vm.readings_line(), "さん / やま");
    }

    #[test]
    fn missing_kun_shows_placeholder() {
        let record = CharacterRecord::new('校', "こう", None, "School", "").unwrap();
        let vm = map_card(&record, 4, 10);
        assert_eq!(vm.kun, NO_READING);
        assert_eq!(vm.readings_line(), "こう / -");
    }
}
