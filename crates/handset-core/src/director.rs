//! Director that builds the preset phone configuration

use crate::builder::PhoneBuilder;
use crate::phone::MobilePhone;
use tracing::debug;

/// Values of the pre-configured phone
pub mod preset {
    pub const PROCESSOR: &str = "Snapdragon 888";
    pub const RAM_GB: i32 = 12;
    pub const STORAGE_GB: i32 = 256;
    pub const CAMERA: &str = "108 MP";
}

/// Drives a borrowed builder through one fixed construction sequence
///
/// The director keeps no record of its own; each call returns whatever the
/// builder produced and leaves the builder reset.
pub struct Director<'b, B: PhoneBuilder> {
    builder: &'b mut B,
}

impl<'b, B: PhoneBuilder> Director<'b, B> {
    pub fn new(builder: &'b mut B) -> Self {
        Self { builder }
    }

    /// Build the preset phone under the given model name
    ///
    /// Every field is set, so anything already in the builder is overwritten.
    pub fn construct_phone(&mut self, model: impl Into<String>) -> MobilePhone {
        let model = model.into();
        debug!(model = %model, "Constructing preset phone");

        self.builder
            .set_model(model)
            .set_processor(preset::PROCESSOR)
            .set_ram(preset::RAM_GB)
            .set_storage(preset::STORAGE_GB)
            .set_camera(preset::CAMERA)
            .build()
    }
}
