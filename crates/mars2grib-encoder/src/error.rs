//! Errors raised while executing an `EncodingPlan` against a GRIB handle.
//!
//! Every variant carries a [`Frame`] (mirroring `mars2grib-core`'s shared
//! context type) so a failure can be traced back to the stage/section and,
//! where known, the concept/variant whose callback raised it.

use mars2grib_core::{DictionarySnapshot, Frame};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncoderError {
    /// A callback failed while executing some stage/section. Carries the
    /// frame it was raised at plus whatever more specific frame the
    /// originating callback already attached (concept/variant).
    #[error("encoding failed at {frame}")]
    Stage {
        frame: Frame,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A feature this crate deliberately does not implement (e.g. a
    /// non-unit values scale factor).
    #[error("not implemented: {what} ({frame})")]
    NotImplemented { what: &'static str, frame: Frame },

    /// Top-level failure, wrapping the full dictionary/layout context. Only
    /// the orchestrator (in the `mars2grib` facade crate) constructs this
    /// variant; everything below it is a `Stage`/`NotImplemented` error.
    #[error("encode failed at {frame}")]
    Failed {
        frame: Frame,
        snapshot: Box<DictionarySnapshot>,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EncoderError {
    pub fn stage(frame: Frame, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        EncoderError::Stage { frame, source: Box::new(source) }
    }

    pub fn not_implemented(what: &'static str, frame: Frame) -> Self {
        EncoderError::NotImplemented { what, frame }
    }

    pub fn failed(frame: Frame, snapshot: DictionarySnapshot, source: EncoderError) -> Self {
        EncoderError::Failed { frame, snapshot: Box::new(snapshot), source: Box::new(source) }
    }

    /// Fill in `stage`/`section` on this error's frame if the callback that
    /// raised it didn't already set them (it couldn't have, since it has no
    /// way to know its own position in the plan).
    pub fn augment(mut self, stage: usize, section: usize) -> Self {
        let frame = match &mut self {
            EncoderError::Stage { frame, .. } => frame,
            EncoderError::NotImplemented { frame, .. } => frame,
            EncoderError::Failed { frame, .. } => frame,
        };
        if frame.stage.is_none() {
            frame.stage = Some(stage);
        }
        if frame.section.is_none() {
            frame.section = Some(section);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::frame_here;

    #[test]
    fn augment_fills_in_unset_stage_and_section() {
        let err = EncoderError::not_implemented("values-scale-factor != 1.0", frame_here!().with_concept("value-injector"));
        let err = err.augment(2, 4);
        match err {
            EncoderError::NotImplemented { frame, .. } => {
                assert_eq!(frame.stage, Some(2));
                assert_eq!(frame.section, Some(4));
                assert_eq!(frame.concept, Some("value-injector"));
            }
            _ => panic!("expected NotImplemented"),
        }
    }

    #[test]
    fn augment_does_not_override_a_frame_that_already_has_stage_section() {
        let err = EncoderError::not_implemented(
            "x",
            frame_here!().with_stage(1).with_section(3),
        );
        let err = err.augment(9, 9);
        match err {
            EncoderError::NotImplemented { frame, .. } => {
                assert_eq!(frame.stage, Some(1));
                assert_eq!(frame.section, Some(3));
            }
            _ => panic!("expected NotImplemented"),
        }
    }
}
