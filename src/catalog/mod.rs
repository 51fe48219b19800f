//! Font catalog: family name -> variant label -> resource URL

mod ordered;

use crate::error::Result;
use ordered::OrderedPairs;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Variant label / resource URL pairs of one family, in catalog order
pub type FontVariants = SmallVec<[(String, String); 4]>;

/// One font family and its loadable variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    pub name: String,
    pub variants: FontVariants,
}

impl FontFamily {
    /// Variant labels in catalog order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(label, _)| label.as_str())
    }

    /// Resource URL of a variant, if the family has it
    pub fn url(&self, label: &str) -> Option<&str> {
        self.variants
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, url)| url.as_str())
    }

    pub fn has_variant(&self, label: &str) -> bool {
        self.url(label).is_some()
    }

    pub fn first_variant(&self) -> Option<&str> {
        self.variants.first().map(|(label, _)| label.as_str())
    }
}

/// The set of previewable fonts.
///
/// Loaded once from a JSON document shaped
/// `{ "<family>": { "<variant>": "<url>" } }` and read-only afterwards.
/// Families and variants keep the order they have in the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontCatalog {
    families: Vec<FontFamily>,
    index: FxHashMap<String, usize>,
}

impl FontCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        let pairs: OrderedPairs<OrderedPairs<String>> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (name, variants) in pairs.0 {
            catalog.push_family(FontFamily {
                name,
                variants: variants.0.into_iter().collect(),
            });
        }
        log::debug!("parsed font catalog with {} families", catalog.len());
        Ok(catalog)
    }

    /// Add (or extend) a family with one variant
    pub fn with_variant(
        mut self,
        family: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let family = family.into();
        let label = label.into();
        let url = url.into();

        match self.index.get(&family) {
            Some(&idx) => {
                let variants = &mut self.families[idx].variants;
                match variants.iter_mut().find(|(l, _)| *l == label) {
                    Some(slot) => slot.1 = url,
                    None => variants.push((label, url)),
                }
            }
            None => {
                let mut variants = FontVariants::new();
                variants.push((label, url));
                self.push_family(FontFamily {
                    name: family,
                    variants,
                });
            }
        }
        self
    }

    fn push_family(&mut self, family: FontFamily) {
        self.index.insert(family.name.clone(), self.families.len());
        self.families.push(family);
    }

    /// Number of families
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn contains(&self, family: &str) -> bool {
        self.index.contains_key(family)
    }

    /// Look up a family by name
    pub fn family(&self, name: &str) -> Option<&FontFamily> {
        self.index.get(name).map(|&idx| &self.families[idx])
    }

    /// Family names in catalog order
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|f| f.name.as_str())
    }

    /// Variants of a family; empty when the family is unknown
    pub fn variants(&self, family: &str) -> &[(String, String)] {
        self.family(family)
            .map(|f| f.variants.as_slice())
            .unwrap_or(&[])
    }

    /// Resource URL for a family/variant pair, or `""` when either is missing
    pub fn resolve_url(&self, family: &str, weight: &str) -> &str {
        self.family(family)
            .and_then(|f| f.url(weight))
            .unwrap_or("")
    }
}
