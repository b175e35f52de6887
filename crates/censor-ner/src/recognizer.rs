//! Entity recognizer trait

use censor_core::Result;

use crate::Entity;

/// Labels spans of text with semantic types (person, date, place, ...)
///
/// Implementations are loaded once per run and handed to the
/// [`Detector`](crate::Detector); nothing here is process-global.
pub trait EntityRecognizer {
    /// Recognize entities in `text`, in document order
    fn recognize(&self, text: &str) -> Result<Vec<Entity>>;
}

impl<R: EntityRecognizer + ?Sized> EntityRecognizer for &R {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        (**self).recognize(text)
    }
}

impl<R: EntityRecognizer + ?Sized> EntityRecognizer for Box<R> {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        (**self).recognize(text)
    }
}
