//! Fluent builder for [`MobilePhone`] records
//!
//! The builder keeps exactly one in-progress record. Setters write into it
//! and hand back the same builder so calls chain; [`PhoneBuilder::build`]
//! moves the record out and leaves a fresh default one behind, so the
//! builder is immediately reusable and never aliases a record it returned.

use crate::phone::MobilePhone;
use tracing::{debug, trace};

/// Capability set a [`Director`](crate::Director) drives
pub trait PhoneBuilder {
    /// Set the device name
    fn set_model(&mut self, model: impl Into<String>) -> &mut Self;

    /// Set the chip identifier
    fn set_processor(&mut self, processor: impl Into<String>) -> &mut Self;

    /// Set memory in gigabytes
    fn set_ram(&mut self, ram: i32) -> &mut Self;

    /// Set storage in gigabytes
    fn set_storage(&mut self, storage: i32) -> &mut Self;

    /// Set the camera description
    fn set_camera(&mut self, camera: impl Into<String>) -> &mut Self;

    /// Hand over the in-progress record and start a new one
    fn build(&mut self) -> MobilePhone;
}

/// The one concrete [`PhoneBuilder`]
///
/// ```
/// use handset_core::{MobilePhoneBuilder, PhoneBuilder};
///
/// let mut builder = MobilePhoneBuilder::new();
/// let phone = builder.set_model("Pixel 9").set_ram(16).build();
/// assert_eq!(phone.model, "Pixel 9");
/// assert_eq!(builder.build().model, "");
/// ```
#[derive(Debug, Default)]
pub struct MobilePhoneBuilder {
    phone: MobilePhone,
}

impl MobilePhoneBuilder {
    /// Create a builder holding a fresh default record
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the in-progress record and start over
    pub fn reset(&mut self) {
        trace!("Resetting phone builder");
        self.phone = MobilePhone::default();
    }

    /// The record under construction
    pub fn in_progress(&self) -> &MobilePhone {
        &self.phone
    }
}

impl PhoneBuilder for MobilePhoneBuilder {
    fn set_model(&mut self, model: impl Into<String>) -> &mut Self {
        self.phone.model = model.into();
        trace!(model = %self.phone.model, "Set model");
        self
    }

    fn set_processor(&mut self, processor: impl Into<String>) -> &mut Self {
        self.phone.processor = processor.into();
        trace!(processor = %self.phone.processor, "Set processor");
        self
    }

    fn set_ram(&mut self, ram: i32) -> &mut Self {
        self.phone.ram = ram;
        trace!(ram, "Set RAM");
        self
    }

    fn set_storage(&mut self, storage: i32) -> &mut Self {
        self.phone.storage = storage;
        trace!(storage, "Set storage");
        self
    }

    fn set_camera(&mut self, camera: impl Into<String>) -> &mut Self {
        self.phone.camera = camera.into();
        trace!(camera = %self.phone.camera, "Set camera");
        self
    }

    fn build(&mut self) -> MobilePhone {
        let phone = std::mem::take(&mut self.phone);
        debug!(model = %phone.model, "Built phone");
        phone
    }
}
