// Verse templates and the random selector

use serde::{Deserialize, Serialize};

use crate::characters;

/// Which pool a verse is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Selection,
    Victory,
    Defeat,
}

impl Category {
    /// Parse a category name. Unrecognized names fall back to `Selection`,
    /// the documented default, so this is total.
    pub fn from_name(name: &str) -> Self {
        match name {
            "victory" => Self::Victory,
            "defeat" => Self::Defeat,
            "selection" => Self::Selection,
            other => {
                tracing::debug!(category = other, "unknown category, defaulting to selection");
                Self::Selection
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Victory => "victory",
            Self::Defeat => "defeat",
        }
    }

    /// The fixed verse pool for this category
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Self::Selection => SELECTION_VERSES,
            Self::Victory => VICTORY_VERSES,
            Self::Defeat => DEFEAT_VERSES,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static SELECTION_VERSES: &[&str] = &[
    "En el reino de los muertos,\nTres guerreros han de luchar,\nCatrina, Calavera, Mariachi,\nEligen su destino final.",
    "Bajo la luna de octubre,\nLos espíritus despiertan,\nCon flores de cempasúchil,\nSus historias nos cuentan.",
    "En la noche de los muertos,\nDanza la tradición,\nTres personajes sagrados,\nBuscan la perfección.",
];

static VICTORY_VERSES: &[&str] = &[
    "¡Victoria para {winner}!\nLos ancestros celebran,\nCon música y alegría,\nSus triunfos veneran.",
    "En el campo de batalla,\n{winner} ha triunfado,\nLos espíritus aplauden,\nSu valor ha demostrado.",
    "¡Que viva {winner}!\nGrita la multitud,\nEn el Día de los Muertos,\nReina la virtud.",
];

static DEFEAT_VERSES: &[&str] = &[
    "No hay derrota en la muerte,\nSolo un nuevo comienzo,\nLos espíritus nos enseñan,\nQue todo es aprendizaje.",
    "Aunque {loser} no ganó,\nSu espíritu permanece,\nEn el reino de los muertos,\nTodo renace.",
    "La muerte no es el final,\nEs solo una transición,\n{loser} volverá más fuerte,\nCon nueva determinación.",
];

/// Names to splice into the chosen verse.
///
/// Only `winner` and `loser` carry meaning; any other key a caller sends on
/// the wire is dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Substitutions {
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub loser: Option<String>,
}

/// Draw one verse from the category's pool and substitute character names.
///
/// The draw is uniform and unseeded; successive calls are independent.
/// Supplied names are resolved through the character table first, so a known
/// id becomes its display name while anything else is spliced in verbatim.
/// A placeholder the chosen verse does not contain is simply left out.
pub fn generate(category: Category, substitutions: &Substitutions) -> String {
    let pool = category.templates();
    let index = fastrand::usize(..pool.len());
    tracing::trace!(category = %category, index, "drew verse");

    let mut verse = pool[index].to_string();
    if let Some(winner) = &substitutions.winner {
        verse = verse.replace("{winner}", characters::resolve(winner));
    }
    if let Some(loser) = &substitutions.loser {
        verse = verse.replace("{loser}", characters::resolve(loser));
    }
    verse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_draws_from_its_own_pool() {
        for category in [Category::Selection, Category::Victory, Category::Defeat] {
            for _ in 0..20 {
                let verse = generate(category, &Substitutions::default());
                assert!(!verse.is_empty());
                assert!(category.templates().contains(&verse.as_str()));
            }
        }
    }

    #[test]
    fn test_unknown_category_falls_back_to_selection() {
        assert_eq!(Category::from_name("fandango"), Category::Selection);
        assert_eq!(Category::from_name(""), Category::Selection);

        let verse = generate(Category::from_name("fandango"), &Substitutions::default());
        assert!(Category::Selection.templates().contains(&verse.as_str()));
    }

    #[test]
    fn test_winner_substitution_uses_display_name() {
        let subs = Substitutions {
            winner: Some("catrina".to_string()),
            ..Default::default()
        };
        for _ in 0..20 {
            let verse = generate(Category::Victory, &subs);
            assert!(!verse.contains("{winner}"));
            assert!(verse.contains("La Catrina"));
        }
    }

    #[test]
    fn test_unknown_loser_is_spliced_verbatim() {
        let subs = Substitutions {
            loser: Some("unknown_id".to_string()),
            ..Default::default()
        };
        for _ in 0..20 {
            let verse = generate(Category::Defeat, &subs);
            assert!(!verse.contains("{loser}"));
            // Two of the three defeat verses name the loser; the third has
            // no placeholder and must come through untouched.
            if verse.contains("unknown_id") {
                assert!(!verse.contains("{loser}"));
            } else {
                assert!(Category::Defeat.templates().contains(&verse.as_str()));
            }
        }
    }

    #[test]
    fn test_missing_substitution_leaves_placeholder() {
        // Without a winner supplied, victory verses keep their token.
        let verse = generate(Category::Victory, &Substitutions::default());
        assert!(verse.contains("{winner}"));
    }

    #[test]
    fn test_wire_names_round_trip() {
        assert_eq!(Category::from_name(Category::Victory.as_str()), Category::Victory);
        assert_eq!(Category::from_name(Category::Defeat.as_str()), Category::Defeat);
        assert_eq!(Category::from_name(Category::Selection.as_str()), Category::Selection);
    }
}
