use uuid::Uuid;

/// A bounded slice of extracted text, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub document_id: DocumentId,
    pub ordinal: usize,
    pub text: String,
    /// Byte offset of the chunk's first character in the source text.
    pub offset: usize,
    pub boundary: ChunkBoundary,
}

/// How a chunk attaches to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkBoundary {
    Start,
    Whitespace,
    /// The previous chunk ended inside a word that was too large to fit.
    Continuation,
}

impl ChunkBoundary {
    pub fn separator(&self) -> &'static str {
        match self {
            ChunkBoundary::Whitespace => " ",
            ChunkBoundary::Start | ChunkBoundary::Continuation => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    pub fn new(
        text: String,
        document_id: DocumentId,
        ordinal: usize,
        offset: usize,
        boundary: ChunkBoundary,
    ) -> Self {
        Self {
            document_id,
            ordinal,
            text,
            offset,
            boundary,
        }
    }
}

/// Rebuilds the whitespace-normalized source from an ordered chunk sequence.
pub fn reassemble(chunks: &[Chunk]) -> String {
    let mut text = String::with_capacity(chunks.iter().map(|c| c.text.len() + 1).sum());
    for chunk in chunks {
        if !text.is_empty() {
            text.push_str(chunk.boundary.separator());
        }
        text.push_str(&chunk.text);
    }
    text
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
