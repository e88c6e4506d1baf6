use crate::application::ports::SummaryParams;

/// Decides the (max_length, min_length) pair handed to the summarizer for one chunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryLengthPolicy {
    Fixed {
        max_length: usize,
        min_length: usize,
    },
    /// `max_length` scales with the chunk's word count, clamped to `[floor, ceiling]`.
    Proportional {
        ratio: f32,
        min_length: usize,
        floor: usize,
        ceiling: usize,
    },
}

impl Default for SummaryLengthPolicy {
    fn default() -> Self {
        SummaryLengthPolicy::Fixed {
            max_length: 130,
            min_length: 30,
        }
    }
}

impl SummaryLengthPolicy {
    pub fn params_for(&self, text: &str) -> SummaryParams {
        match *self {
            SummaryLengthPolicy::Fixed {
                max_length,
                min_length,
            } => SummaryParams {
                max_length,
                min_length: min_length.min(max_length),
            },
            SummaryLengthPolicy::Proportional {
                ratio,
                min_length,
                floor,
                ceiling,
            } => {
                let words = text.split_whitespace().count();
                let scaled = (words as f32 * ratio.max(0.0)).round() as usize;
                let max_length = scaled
                    .clamp(floor, ceiling.max(floor))
                    .max(min_length + 1);
                SummaryParams {
                    max_length,
                    min_length,
                }
            }
        }
    }
}
