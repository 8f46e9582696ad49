//! Static portfolio catalog.
//!
//! The catalog is an immutable lookup table from project id to portfolio
//! entry. It is built once at startup and stays read-only for the lifetime
//! of the application; nothing is ever persisted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a portfolio project.
///
/// Trigger elements carry one of these; unknown ids are ignored by the
/// modal controller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProjectId {
    fn from(id: u32) -> Self {
        ProjectId(id)
    }
}

/// A single portfolio entry: one completed project shown on the site.
///
/// All fields are plain text or paths. The UI inserts each one as a text or
/// attribute node, never as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog key, matched against the trigger's project id
    pub id: ProjectId,
    /// Project title, also used as the detail image's alt text
    pub title: String,
    /// Path or URL of the detail image
    pub image: String,
    /// Short project description
    pub description: String,
    /// Call-to-action target, opened in a new context
    pub link: String,
}

/// Read-only mapping from [`ProjectId`] to [`CatalogEntry`].
///
/// Keys are unique; iteration order is ascending by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<ProjectId, CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from a list of entries. Keys must be unique; a
    /// duplicate id keeps the last entry seen.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let entries = entries.into_iter().map(|e| (e.id, e)).collect();
        Self { entries }
    }

    /// The builtin catalog shipped with the site: six sample projects.
    pub fn builtin() -> Self {
        Self::new([
            CatalogEntry {
                id: ProjectId(1),
                title: "La Barberia Stilosa".into(),
                image: "images/barber-at-work.jpg".into(),
                description: "Un sito vetrina elegante e moderno per una barberia di lusso. \
                    Il focus è sulle immagini di alta qualità e sulla facilità di prenotazione. \
                    Il design responsive assicura un'esperienza utente perfetta su ogni \
                    dispositivo, dal cellulare al desktop."
                    .into(),
                link: "#".into(),
            },
            CatalogEntry {
                id: ProjectId(2),
                title: "Ristorante La Brace".into(),
                image: "images/interno-ris.jpg".into(),
                description: "Sito web per un ristorante tipico, con un menu digitale \
                    interattivo e una galleria fotografica dei piatti. L'integrazione con \
                    Google Maps facilita la localizzazione del ristorante da parte dei clienti."
                    .into(),
                link: "#".into(),
            },
            CatalogEntry {
                id: ProjectId(3),
                title: "Studio Design Interni".into(),
                image: "images/sog-moderno.jpg".into(),
                description: "Un portfolio online minimalista e raffinato per uno studio di \
                    interior design. Il layout a griglia mette in risalto i progetti, con \
                    schede dettagliate per ogni lavoro completato. La palette di colori \
                    neutri riflette lo stile dello studio."
                    .into(),
                link: "#".into(),
            },
            CatalogEntry {
                id: ProjectId(4),
                title: "Clean Service Srl".into(),
                image: "images/pulizia.jpg".into(),
                description: "Sito web aziendale professionale per un'impresa di pulizie. \
                    La struttura è chiara e intuitiva, con una sezione dedicata ai servizi \
                    offerti e un form di contatto per richiedere preventivi personalizzati."
                    .into(),
                link: "#".into(),
            },
            CatalogEntry {
                id: ProjectId(5),
                title: "Palestra PowerFit".into(),
                image: "images/palestra.jpg".into(),
                description: "Un sito dinamico per una palestra, con una tabella orari dei \
                    corsi facile da consultare e aggiornare. L'integrazione con i social \
                    media permette di mostrare le ultime novità e gli eventi direttamente \
                    sulla homepage."
                    .into(),
                link: "#".into(),
            },
            CatalogEntry {
                id: ProjectId(6),
                title: "Legno & Passione".into(),
                image: "images/artigiano.jpg".into(),
                description: "Un piccolo e-commerce per un artigiano del legno. Il sito \
                    permette di vendere creazioni uniche online, con un sistema di pagamento \
                    sicuro e una gestione semplice degli ordini. Il design rustico richiama \
                    la natura del prodotto."
                    .into(),
                link: "#".into(),
            },
        ])
    }

    /// Look up an entry by id.
    pub fn get(&self, id: ProjectId) -> Option<&CatalogEntry> {
        self.entries.get(&id)
    }

    /// Iterate entries in ascending id order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_unique_entries() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        for n in 1..=6 {
            assert!(catalog.get(ProjectId(n)).is_some(), "missing entry {n}");
        }
    }

    #[test]
    fn lookup_returns_matching_entry() {
        let catalog = Catalog::builtin();
        let entry = catalog.get(ProjectId(1)).unwrap();
        assert_eq!(entry.title, "La Barberia Stilosa");
        assert_eq!(entry.image, "images/barber-at-work.jpg");
        assert_eq!(entry.link, "#");
    }

    #[test]
    fn unknown_id_returns_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.get(ProjectId(99)).is_none());
        assert!(catalog.get(ProjectId(0)).is_none());
    }

    #[test]
    fn entries_iterate_in_id_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<u32> = catalog.entries().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn duplicate_id_keeps_last_entry() {
        let mk = |title: &str| CatalogEntry {
            id: ProjectId(7),
            title: title.into(),
            image: "images/a.jpg".into(),
            description: "desc".into(),
            link: "#".into(),
        };
        let catalog = Catalog::new([mk("first"), mk("second")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ProjectId(7)).unwrap().title, "second");
    }

    #[test]
    fn entry_serializes_with_transparent_id() {
        let entry = Catalog::builtin().get(ProjectId(2)).unwrap().clone();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"id\":2"));
        let back: CatalogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
