use std::fmt;
use std::str::FromStr;

/// Unique identifier for a study module.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u32);

impl ModuleId {
    /// Reserved id for modules synthesized from a custom selection.
    pub const CUSTOM: ModuleId = ModuleId(0);

    /// Creates a new `ModuleId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns true for the reserved custom-module id.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        *self == Self::CUSTOM
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ModuleId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ModuleId::new)
            .map_err(|_| ParseIdError {
                kind: "ModuleId".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_id_display() {
        let id = ModuleId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{id:?}"), "ModuleId(7)");
    }

    #[test]
    fn module_id_from_str() {
        let id: ModuleId = " 3 ".parse().unwrap();
        assert_eq!(id, ModuleId::new(3));
    }

    #[test]
    fn module_id_from_str_invalid() {
        let err = "three".parse::<ModuleId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse ModuleId from string");
    }

    #[test]
    fn custom_id_is_reserved_zero() {
        assert!(ModuleId::CUSTOM.is_custom());
        assert_eq!(ModuleId::CUSTOM.value(), 0);
        assert!(!ModuleId::new(1).is_custom());
    }
}
