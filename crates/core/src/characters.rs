// The three playable characters and their display names

use serde::{Deserialize, Serialize};

/// A known character identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    Catrina,
    Calavera,
    Mariachi,
}

impl Character {
    /// Look up a character by its canonical short id
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "catrina" => Some(Self::Catrina),
            "calavera" => Some(Self::Calavera),
            "mariachi" => Some(Self::Mariachi),
            _ => None,
        }
    }

    /// Presentation name used when substituting into a verse
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Catrina => "La Catrina",
            Self::Calavera => "El Calavera",
            Self::Mariachi => "El Mariachi",
        }
    }

    /// One-line character description
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Catrina => "Elegante dama de la muerte",
            Self::Calavera => "Cráneo festivo y colorido",
            Self::Mariachi => "Músico del más allá",
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Translate a caller-supplied identifier into a display name.
///
/// Unknown identifiers are returned verbatim, so callers can pass free-form
/// names without hitting an error path.
pub fn resolve(id: &str) -> &str {
    match Character::from_id(id) {
        Some(character) => character.display_name(),
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_resolve_to_display_names() {
        assert_eq!(resolve("catrina"), "La Catrina");
        assert_eq!(resolve("calavera"), "El Calavera");
        assert_eq!(resolve("mariachi"), "El Mariachi");
    }

    #[test]
    fn test_unknown_id_passes_through() {
        assert_eq!(resolve("huesuda"), "huesuda");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn test_from_id_is_case_sensitive() {
        assert_eq!(Character::from_id("catrina"), Some(Character::Catrina));
        assert_eq!(Character::from_id("Catrina"), None);
    }
}
