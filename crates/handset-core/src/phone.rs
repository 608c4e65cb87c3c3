//! The phone specification record
//!
//! [`MobilePhone`] is plain data with value semantics. Cloning it is the
//! prototype operation: every field is an owned `String` or `i32`, so the
//! derived `Clone` already yields a copy that shares nothing with its source.

use std::fmt;

/// Specifications of a single mobile device
///
/// No field is validated. Empty text and zero or negative capacities are
/// all legal values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MobilePhone {
    /// Device name
    pub model: String,
    /// Chip identifier
    pub processor: String,
    /// Memory in gigabytes
    pub ram: i32,
    /// Storage in gigabytes
    pub storage: i32,
    /// Free-form camera description, e.g. "108 MP"
    pub camera: String,
}

impl MobilePhone {
    /// Display labels, in field order
    pub const LABELS: [&'static str; 5] = ["Model", "Processor", "RAM", "Storage", "Camera"];

    /// The five field values paired with their display labels
    ///
    /// Capacities carry their ` GB` unit.
    pub fn spec_lines(&self) -> [(&'static str, String); 5] {
        [
            (Self::LABELS[0], self.model.clone()),
            (Self::LABELS[1], self.processor.clone()),
            (Self::LABELS[2], format!("{} GB", self.ram)),
            (Self::LABELS[3], format!("{} GB", self.storage)),
            (Self::LABELS[4], self.camera.clone()),
        ]
    }
}

impl fmt::Display for MobilePhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.spec_lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}
