// src/record/types.rs

/// A character declaration from the vertex region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexRecord {
    pub line: usize,
    pub label: String,
    pub name: String,
}

/// One chapter line from the edge region.
///
/// Each group lists characters that meet each other; an empty group is a
/// chapter (or scene) with no encounters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRecord {
    pub line: usize,
    pub tag: String,
    pub groups: Vec<Vec<String>>,
}

impl ChapterRecord {
    /// Number of unordered pairs the chapter contributes.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.groups
            .iter()
            .map(|g| g.len() * g.len().saturating_sub(1) / 2)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Vertex(VertexRecord),
    Chapter(ChapterRecord),
}
