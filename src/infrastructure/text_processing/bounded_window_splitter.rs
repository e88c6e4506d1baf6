use std::sync::Arc;

use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::{TextSplitter, TextSplitterError, TokenCounter};
use crate::domain::{Chunk, ChunkBoundary, DocumentId};

/// Greedily packs whitespace-separated words into chunks whose measured size
/// never exceeds `max_units`. Words longer than the limit are cut at grapheme
/// boundaries and the pieces marked as continuations.
///
/// Each word is measured once and the window size is kept as a running sum.
/// A closed window is measured whole before it is emitted, so counters whose
/// sizes are not additive still never produce an oversized chunk.
#[derive(Clone)]
pub struct BoundedWindowSplitter {
    counter: Arc<dyn TokenCounter>,
    max_units: usize,
}

struct ChunkBuilder {
    document_id: DocumentId,
    chunks: Vec<Chunk>,
}

impl ChunkBuilder {
    fn push(&mut self, text: String, offset: usize, boundary: ChunkBoundary) {
        let ordinal = self.chunks.len();
        self.chunks
            .push(Chunk::new(text, self.document_id, ordinal, offset, boundary));
    }
}

/// Words gathered for the chunk being built, each with its source offset.
struct Window {
    parts: Vec<(usize, String)>,
    boundary: ChunkBoundary,
    estimate: usize,
}

impl Window {
    fn starting(offset: usize, text: String, size: usize, boundary: ChunkBoundary) -> Self {
        Self {
            parts: vec![(offset, text)],
            boundary,
            estimate: size,
        }
    }
}

impl BoundedWindowSplitter {
    pub fn new(counter: Arc<dyn TokenCounter>, max_units: usize) -> Result<Self, TextSplitterError> {
        if max_units == 0 {
            return Err(TextSplitterError::InvalidLimit);
        }
        Ok(Self { counter, max_units })
    }

    pub fn max_units(&self) -> usize {
        self.max_units
    }

    pub fn unit(&self) -> &'static str {
        self.counter.unit()
    }

    fn measure(&self, text: &str) -> Result<usize, TextSplitterError> {
        self.counter
            .count(text)
            .map_err(|e| TextSplitterError::TokenizationFailed(e.to_string()))
    }

    fn fits(&self, text: &str) -> Result<bool, TextSplitterError> {
        Ok(self.measure(text)? <= self.max_units)
    }

    /// Cuts `word` into the longest grapheme prefixes that fit, returning
    /// each piece with its byte offset inside the word.
    fn split_oversized_word(&self, word: &str) -> Result<Vec<(usize, String)>, TextSplitterError> {
        let graphemes: Vec<(usize, &str)> = word.grapheme_indices(true).collect();
        let byte_end = |idx: usize| -> usize {
            graphemes
                .get(idx)
                .map(|(offset, _)| *offset)
                .unwrap_or(word.len())
        };

        let mut pieces = Vec::new();
        let mut start = 0;

        while start < graphemes.len() {
            let mut low = 1;
            let mut high = graphemes.len() - start;
            let mut best_len = 0;

            while low <= high {
                let mid = (low + high) / 2;
                let candidate = &word[byte_end(start)..byte_end(start + mid)];
                if self.fits(candidate)? {
                    best_len = mid;
                    low = mid + 1;
                } else {
                    high = mid - 1;
                }
            }

            if best_len == 0 {
                return Err(TextSplitterError::LimitTooSmall {
                    limit: self.max_units,
                    unit: self.counter.unit(),
                    fragment: graphemes[start].1.to_string(),
                });
            }

            let piece_start = byte_end(start);
            let piece_end = byte_end(start + best_len);
            pieces.push((piece_start, word[piece_start..piece_end].to_string()));
            start += best_len;
        }

        Ok(pieces)
    }

    /// Emits the window as one chunk, or as several when the whole measures
    /// larger than the running sum promised. A single part always fits.
    fn flush(&self, builder: &mut ChunkBuilder, window: Window) -> Result<(), TextSplitterError> {
        let Window {
            parts, mut boundary, ..
        } = window;
        let mut start = 0;

        while start < parts.len() {
            let mut end = parts.len();
            let text = loop {
                let text = join_parts(&parts[start..end]);
                if end - start == 1 || self.fits(&text)? {
                    break text;
                }
                end -= 1;
            };
            builder.push(text, parts[start].0, boundary);
            boundary = ChunkBoundary::Whitespace;
            start = end;
        }

        Ok(())
    }

    fn split_blocking(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        let mut builder = ChunkBuilder {
            document_id,
            chunks: Vec::new(),
        };
        let separator = self.measure(" ")?;
        let mut window: Option<Window> = None;

        for (offset, word) in words_with_offsets(text) {
            let size = self.measure(word)?;

            if size <= self.max_units {
                match window.as_mut() {
                    Some(open) if open.estimate + separator + size <= self.max_units => {
                        open.parts.push((offset, word.to_string()));
                        open.estimate += separator + size;
                    }
                    _ => {
                        let boundary = self.close(&mut builder, window.take())?;
                        window = Some(Window::starting(offset, word.to_string(), size, boundary));
                    }
                }
                continue;
            }

            let mut boundary = self.close(&mut builder, window.take())?;
            let mut pieces = self.split_oversized_word(word)?;
            let (last_offset, last_piece) = pieces.pop().ok_or_else(|| {
                TextSplitterError::TokenizationFailed(format!("no pieces produced for {:?}", word))
            })?;
            for (relative_offset, piece) in pieces {
                builder.push(piece, offset + relative_offset, boundary);
                boundary = ChunkBoundary::Continuation;
            }
            let last_size = self.measure(&last_piece)?;
            window = Some(Window::starting(
                offset + last_offset,
                last_piece,
                last_size,
                boundary,
            ));
        }

        self.close(&mut builder, window)?;

        tracing::debug!(chunk_count = builder.chunks.len(), "Text split complete");

        Ok(builder.chunks)
    }

    /// Flushes an open window and returns the boundary of whatever follows it.
    fn close(
        &self,
        builder: &mut ChunkBuilder,
        window: Option<Window>,
    ) -> Result<ChunkBoundary, TextSplitterError> {
        match window {
            Some(open) => {
                self.flush(builder, open)?;
                Ok(ChunkBoundary::Whitespace)
            }
            None if builder.chunks.is_empty() => Ok(ChunkBoundary::Start),
            None => Ok(ChunkBoundary::Whitespace),
        }
    }
}

fn join_parts(parts: &[(usize, String)]) -> String {
    parts
        .iter()
        .map(|(_, text)| text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn words_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let base = text.as_ptr() as usize;
    text.split_whitespace()
        .map(move |word| (word.as_ptr() as usize - base, word))
}

#[async_trait]
impl TextSplitter for BoundedWindowSplitter {
    #[tracing::instrument(
        skip(self, text),
        fields(
            document_id = %document_id.as_uuid(),
            unit = self.counter.unit(),
            max_units = self.max_units,
        )
    )]
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        let splitter = self.clone();
        let owned = text.to_owned();
        let span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            splitter.split_blocking(&owned, document_id)
        })
        .await
        .map_err(|e| TextSplitterError::TokenizationFailed(format!("splitting worker stopped: {}", e)))?
    }
}
