use std::collections::HashMap;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use theater_core::{DomainError, DomainResult, Entity, PlayId};

/// Play genre; selects the pricing formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(DomainError::unknown_genre(other)),
        }
    }
}

/// A play as listed in the catalog.
///
/// The genre label is kept exactly as loaded. Catalogs may carry genres the
/// pricing rules do not know; those are rejected when a performance of the
/// play is priced, not when the catalog is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    id: PlayId,
    name: String,
    genre: String,
}

impl Play {
    pub fn new(id: PlayId, name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            genre: genre.into(),
        }
    }

    pub fn with_genre(id: PlayId, name: impl Into<String>, genre: Genre) -> Self {
        Self::new(id, name, genre.as_str())
    }

    pub fn id_typed(&self) -> &PlayId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw genre label as loaded.
    pub fn genre_label(&self) -> &str {
        &self.genre
    }

    /// Resolve the genre; fails with `UnknownGenre` for unrecognized labels.
    pub fn genre(&self) -> DomainResult<Genre> {
        self.genre.parse()
    }
}

impl Entity for Play {
    type Id = PlayId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Catalog entry as it appears in a serialized catalog (the id is the map key).
#[derive(Debug, Clone, Deserialize)]
struct PlayRecord {
    name: String,
    #[serde(alias = "type")]
    genre: String,
}

/// Read-only lookup from play identifier to play definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate identifiers.
    pub fn try_from_plays(plays: impl IntoIterator<Item = Play>) -> DomainResult<Self> {
        let mut catalog = HashMap::new();
        for play in plays {
            let id = Entity::id(&play).clone();
            if catalog.insert(id.clone(), play).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate play id in catalog: {id}"
                )));
            }
        }
        Ok(Self { plays: catalog })
    }

    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Look up a play; a dangling reference is a data-integrity error.
    pub fn resolve(&self, id: &PlayId) -> DomainResult<&Play> {
        self.get(id)
            .ok_or_else(|| DomainError::missing_play(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Play> {
        self.plays.values()
    }
}

/// Entries are read in document order through `try_from_plays`; a repeated
/// key fails the whole catalog.
impl<'de> Deserialize<'de> for PlayCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = PlayCatalog;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a map of play id to play definition")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut plays = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, record)) = map.next_entry::<PlayId, PlayRecord>()? {
                    plays.push(Play::new(id, record.name, record.genre));
                }
                PlayCatalog::try_from_plays(plays).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PlayId {
        PlayId::new(s).unwrap()
    }

    #[test]
    fn genre_parses_known_labels_only() {
        assert_eq!("tragedy".parse::<Genre>().unwrap(), Genre::Tragedy);
        assert_eq!("comedy".parse::<Genre>().unwrap(), Genre::Comedy);
        match "history".parse::<Genre>() {
            Err(DomainError::UnknownGenre(g)) => assert_eq!(g, "history"),
            other => panic!("Expected UnknownGenre, got {other:?}"),
        }
    }

    #[test]
    fn genre_labels_are_case_sensitive() {
        assert!("Tragedy".parse::<Genre>().is_err());
    }

    #[test]
    fn resolve_reports_missing_play() {
        let catalog =
            PlayCatalog::try_from_plays([Play::with_genre(id("hamlet"), "Hamlet", Genre::Tragedy)])
                .unwrap();

        assert_eq!(catalog.resolve(&id("hamlet")).unwrap().name(), "Hamlet");
        assert_eq!(
            catalog.resolve(&id("othello")).unwrap_err(),
            DomainError::MissingPlay(id("othello"))
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = PlayCatalog::try_from_plays([
            Play::with_genre(id("hamlet"), "Hamlet", Genre::Tragedy),
            Play::with_genre(id("hamlet"), "Hamlet (revival)", Genre::Tragedy),
        ])
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn catalog_deserializes_from_keyed_map() {
        let json = r#"{
            "hamlet": {"name": "Hamlet", "type": "tragedy"},
            "as-like": {"name": "As You Like It", "genre": "comedy"},
            "henry-v": {"name": "Henry V", "type": "history"}
        }"#;
        let catalog: PlayCatalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.len(), 3);
        let as_like = catalog.resolve(&id("as-like")).unwrap();
        assert_eq!(as_like.id_typed(), &id("as-like"));
        assert_eq!(as_like.genre().unwrap(), Genre::Comedy);

        // Unknown genres load; they only fail once priced.
        let henry = catalog.resolve(&id("henry-v")).unwrap();
        assert_eq!(henry.genre_label(), "history");
        assert!(henry.genre().is_err());
    }

    #[test]
    fn catalog_with_repeated_key_fails_to_load() {
        let json = r#"{
            "hamlet": {"name": "Hamlet", "type": "tragedy"},
            "hamlet": {"name": "Hamlet Musical", "type": "comedy"}
        }"#;
        let err = serde_json::from_str::<PlayCatalog>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate play id in catalog: hamlet"));
    }

    #[test]
    fn catalog_rejects_non_map_input() {
        assert!(serde_json::from_str::<PlayCatalog>(r#"["hamlet"]"#).is_err());
    }
}
