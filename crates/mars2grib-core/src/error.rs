//! Error taxonomy shared by every mars2grib crate.
//!
//! Each pipeline stage raises its own error enum (`DictError` here,
//! `MatcherError`/`RegistryError` in `mars2grib-concepts`, `ResolutionError`/
//! `TableError` in `mars2grib-resolver`, `EncoderError`/`NotImplemented` in
//! `mars2grib-encoder`). All of them carry an optional [`Frame`] describing
//! where in the pipeline the failure happened, mirroring the original
//! backend's nested-exception-with-frame pattern.

use std::fmt;

use serde_json::Value as Json;
use thiserror::Error;

/// Context captured at the point an error is raised: which stage, section
/// and concept/variant was being processed, and where in the source it
/// happened.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub file: &'static str,
    pub line: u32,
    pub stage: Option<usize>,
    pub section: Option<usize>,
    pub concept: Option<&'static str>,
    pub variant: Option<&'static str>,
}

impl Frame {
    pub fn here(file: &'static str, line: u32) -> Self {
        Self {
            file,
            line,
            ..Default::default()
        }
    }

    pub fn with_stage(mut self, stage: usize) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn with_section(mut self, section: usize) -> Self {
        self.section = Some(section);
        self
    }

    pub fn with_concept(mut self, concept: &'static str) -> Self {
        self.concept = Some(concept);
        self
    }

    pub fn with_variant(mut self, variant: &'static str) -> Self {
        self.variant = Some(variant);
        self
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(stage) = self.stage {
            write!(f, " stage={stage}")?;
        }
        if let Some(section) = self.section {
            write!(f, " section={section}")?;
        }
        if let Some(concept) = self.concept {
            write!(f, " concept={concept}")?;
        }
        if let Some(variant) = self.variant {
            write!(f, " variant={variant}")?;
        }
        Ok(())
    }
}

/// Builds the `frame.here(...)` call at the current source location.
#[macro_export]
macro_rules! frame_here {
    () => {
        $crate::error::Frame::here(file!(), line!())
    };
}

/// Walks a chain of frames from outermost to innermost failure and renders
/// it the way the original backend's `printFrame`/`Mars2GribGenericException`
/// chain does: one line per frame, most specific last.
pub fn print_frame_chain(frames: &[Frame]) -> String {
    let mut out = String::new();
    for (i, frame) in frames.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&"  ".repeat(i));
        out.push_str("caused by: ");
        out.push_str(&frame.to_string());
    }
    out
}

/// Errors raised while reading or writing a [`crate::Dictionary`].
#[derive(Debug, Error)]
pub enum DictError {
    #[error("missing key `{key}`")]
    MissingKey { key: String },

    #[error("key `{key}` has wrong type: expected {expected}")]
    WrongType { key: String, expected: &'static str },

    #[error("cannot set `{key}`: dictionary is read-only")]
    ReadOnly { key: String },
}

/// A snapshot of the dictionaries in play when an encoder-level error occurred,
/// attached to `EncoderError` for post-mortem diagnostics.
#[derive(Debug, Clone, Default)]
pub struct DictionarySnapshot {
    pub mars: Json,
    pub aux: Json,
    pub options: Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_display_includes_all_set_fields() {
        let frame = Frame::here("level.rs", 42)
            .with_stage(1)
            .with_section(4)
            .with_concept("level")
            .with_variant("isobaricInhPa");
        let rendered = frame.to_string();
        assert!(rendered.contains("level.rs:42"));
        assert!(rendered.contains("stage=1"));
        assert!(rendered.contains("section=4"));
        assert!(rendered.contains("concept=level"));
        assert!(rendered.contains("variant=isobaricInhPa"));
    }

    #[test]
    fn frame_chain_orders_outermost_first() {
        let chain = vec![Frame::here("a.rs", 1), Frame::here("b.rs", 2)];
        let rendered = print_frame_chain(&chain);
        let a_pos = rendered.find("a.rs").unwrap();
        let b_pos = rendered.find("b.rs").unwrap();
        assert!(a_pos < b_pos);
    }
}
