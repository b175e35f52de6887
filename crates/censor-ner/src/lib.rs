pub mod detector;
pub mod entity;
pub mod lexicon;
pub mod recognizer;

pub use detector::Detector;
pub use entity::{Entity, EntityLabel};
pub use lexicon::{LexiconModel, LexiconRecognizer};
pub use recognizer::EntityRecognizer;
