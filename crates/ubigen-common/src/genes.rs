//! Gene identifiers and ordered gene sets.
//!
//! Identifiers are opaque accession strings (for example Ensembl stable IDs);
//! nothing here checks their format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Genes involved in glycolysis according to KEGG (hsa00010 + M00001).
pub const GLYCOLYSIS_GENES: &[&str] = &[
    "ENSG00000111640",
    "ENSG00000111669",
    "ENSG00000149925",
    "ENSG00000074800",
    "ENSG00000105220",
    "ENSG00000067225",
    "ENSG00000102144",
    "ENSG00000141959",
    "ENSG00000156515",
    "ENSG00000171314",
    "ENSG00000067057",
    "ENSG00000111674",
    "ENSG00000159322",
    "ENSG00000152556",
    "ENSG00000109107",
    "ENSG00000159399",
    "ENSG00000108515",
    "ENSG00000160883",
    "ENSG00000226784",
    "ENSG00000188316",
    "ENSG00000106633",
    "ENSG00000136872",
    "ENSG00000156510",
    "ENSG00000143627",
    "ENSG00000170950",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneId(String);

impl GeneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GeneId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GeneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An ordered list of genes. Duplicates are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneSet {
    genes: Vec<GeneId>,
}

impl GeneSet {
    pub fn new(genes: Vec<GeneId>) -> Self {
        Self { genes }
    }

    pub fn glycolysis() -> Self {
        GLYCOLYSIS_GENES.iter().copied().collect()
    }

    /// Split free text on whitespace, dropping empty tokens.
    pub fn parse(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneId> {
        self.genes.iter()
    }

    /// Request body understood by the Ubigen API: identifiers joined by single spaces.
    pub fn to_request_body(&self) -> String {
        self.genes
            .iter()
            .map(GeneId::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<T: Into<GeneId>> FromIterator<T> for GeneSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { genes: iter.into_iter().map(Into::into).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_is_single_space_joined() {
        let set: GeneSet = ["ENSG00000111640", "ENSG00000111669", "ENSG00000149925"]
            .into_iter()
            .collect();
        assert_eq!(
            set.to_request_body(),
            "ENSG00000111640 ENSG00000111669 ENSG00000149925"
        );
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let set: GeneSet = ["B", "A", "B"].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_request_body(), "B A B");
    }

    #[test]
    fn test_parse_drops_extra_whitespace() {
        let set = GeneSet::parse("  ENSG1\tENSG2\n\nENSG3  ");
        assert_eq!(set.to_request_body(), "ENSG1 ENSG2 ENSG3");
        assert!(GeneSet::parse("   ").is_empty());
    }

    #[test]
    fn test_glycolysis_default() {
        let set = GeneSet::glycolysis();
        assert_eq!(set.len(), 25);
        assert!(set.to_request_body().starts_with("ENSG00000111640 "));
        assert!(!set.to_request_body().ends_with(' '));
    }
}
