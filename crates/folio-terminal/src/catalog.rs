//! Static project lookup map backing the `open` command.

use serde::Deserialize;

use folio_types::error::Result;

/// One project the `open` command can resolve.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    /// Display name.
    pub name: String,
    /// External link opened on a hit.
    pub link: String,
    /// Tech-stack description.
    pub tech: String,
    /// One-line description.
    pub blurb: String,
}

/// Raw catalog record as stored in a JSON data file.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    slug: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(flatten)]
    entry: ProjectEntry,
}

/// Read-only map from project slugs (and alias slugs) to entries.
///
/// Defined at startup; slug enumeration order is the declaration order,
/// which the `open`-miss hint listing relies on.
#[derive(Debug)]
pub struct ProjectCatalog {
    entries: Vec<(String, ProjectEntry)>,
    aliases: Vec<(String, String)>,
}

impl ProjectCatalog {
    /// Built-in catalog matching the `projects` command listing.
    pub fn builtin() -> Self {
        let entries = vec![
            (
                "smart-parking-finder".to_string(),
                ProjectEntry {
                    name: "Smart Parking Finder".to_string(),
                    link: "https://github.com/developer/parking-finder-app".to_string(),
                    tech: "Ionic, Angular, TypeScript, Google Maps API".to_string(),
                    blurb: "Map-centric parking app with simulated booking and profiles."
                        .to_string(),
                },
            ),
            (
                "hpcl-dealer-app".to_string(),
                ProjectEntry {
                    name: "HPCL Dealer App".to_string(),
                    link: "https://github.com/developer/hpcl-dealer-app".to_string(),
                    tech: "React Native, Firebase, Redux".to_string(),
                    blurb: "Official mobile app for HPCL dealers to track inventory.".to_string(),
                },
            ),
            (
                "bookstore-auth-system".to_string(),
                ProjectEntry {
                    name: "Bookstore Auth System".to_string(),
                    link: "https://github.com/developer/bookstore-auth".to_string(),
                    tech: "Node.js, Express, JWT, MongoDB".to_string(),
                    blurb: "Role-based auth system with JWT tokens and a CRUD REST API."
                        .to_string(),
                },
            ),
        ];
        let aliases = vec![
            ("parking".to_string(), "smart-parking-finder".to_string()),
            ("hpcl".to_string(), "hpcl-dealer-app".to_string()),
            ("bookstore".to_string(), "bookstore-auth-system".to_string()),
            ("auth".to_string(), "bookstore-auth-system".to_string()),
        ];
        Self { entries, aliases }
    }

    /// Load a catalog from JSON: an array of records with `slug`, the entry
    /// fields, and optional `aliases`.
    pub fn from_json(text: &str) -> Result<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(text)?;
        let mut entries = Vec::with_capacity(records.len());
        let mut aliases = Vec::new();
        for record in records {
            for alias in record.aliases {
                aliases.push((alias, record.slug.clone()));
            }
            entries.push((record.slug, record.entry));
        }
        Ok(Self { entries, aliases })
    }

    /// Normalize a user-supplied key: lowercase, spaces to hyphens.
    pub fn normalize_key(raw: &str) -> String {
        raw.trim().to_lowercase().replace(' ', "-")
    }

    /// Look up a normalized key, resolving alias slugs first.
    pub fn get(&self, key: &str) -> Option<&ProjectEntry> {
        let canonical = self
            .aliases
            .iter()
            .find(|(alias, _)| alias == key)
            .map_or(key, |(_, slug)| slug.as_str());
        self.entries
            .iter()
            .find(|(slug, _)| slug == canonical)
            .map(|(_, entry)| entry)
    }

    /// Canonical slugs in declaration order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(slug, _)| slug.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_projects() {
        let cat = ProjectCatalog::builtin();
        assert_eq!(cat.len(), 3);
        let slugs: Vec<&str> = cat.slugs().collect();
        assert_eq!(
            slugs,
            vec![
                "smart-parking-finder",
                "hpcl-dealer-app",
                "bookstore-auth-system"
            ]
        );
    }

    #[test]
    fn canonical_lookup() {
        let cat = ProjectCatalog::builtin();
        let entry = cat.get("smart-parking-finder").unwrap();
        assert_eq!(entry.name, "Smart Parking Finder");
    }

    #[test]
    fn alias_resolves_to_same_entry() {
        let cat = ProjectCatalog::builtin();
        let direct = cat.get("smart-parking-finder").unwrap();
        let aliased = cat.get("parking").unwrap();
        assert_eq!(direct.link, aliased.link);
    }

    #[test]
    fn miss_is_none() {
        let cat = ProjectCatalog::builtin();
        assert!(cat.get("nosuchproject").is_none());
    }

    #[test]
    fn normalize_lowercases_and_hyphenates() {
        assert_eq!(
            ProjectCatalog::normalize_key("Smart Parking Finder"),
            "smart-parking-finder"
        );
        assert_eq!(ProjectCatalog::normalize_key("  HPCL  "), "hpcl");
    }

    #[test]
    fn from_json_round() {
        let cat = ProjectCatalog::from_json(
            r#"[
  {
    "slug": "demo",
    "aliases": ["d"],
    "name": "Demo",
    "link": "https://example.com/demo",
    "tech": "Rust",
    "blurb": "A demo project."
  }
]"#,
        )
        .unwrap();
        assert_eq!(cat.len(), 1);
        assert_eq!(cat.get("d").unwrap().name, "Demo");
    }

    #[test]
    fn from_json_invalid_is_error() {
        assert!(ProjectCatalog::from_json("not json").is_err());
    }
}
