//! Handset Core - builder and prototype patterns over a phone spec record
//!
//! This crate provides the pieces the `handset` CLI drives:
//!
//! # Main Components
//!
//! - **Record**: [`MobilePhone`], a flat value type holding five device specs
//! - **Builder**: [`PhoneBuilder`] capability set and its [`MobilePhoneBuilder`]
//!   implementation, which resets itself on every build
//! - **Director**: [`Director`], which drives a builder through the preset
//!   configuration
//!
//! None of these operations can fail, so the crate has no error type.
//!
//! # Example
//!
//! ```
//! use handset_core::{Director, MobilePhoneBuilder, PhoneBuilder};
//!
//! let mut builder = MobilePhoneBuilder::new();
//! let custom = builder.set_model("Pixel 9").set_ram(16).build();
//! assert_eq!(custom.ram, 16);
//!
//! let preset = Director::new(&mut builder).construct_phone("Galaxy S24");
//! let copy = preset.clone();
//! assert_eq!(copy, preset);
//! ```

pub mod builder;
pub mod director;
pub mod phone;

// Re-export main types for convenience
pub use builder::{MobilePhoneBuilder, PhoneBuilder};
pub use director::{preset, Director};
pub use phone::MobilePhone;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_work_together() {
        let mut builder = MobilePhoneBuilder::default();
        let phone = Director::new(&mut builder).construct_phone("Nord");
        assert_eq!(phone.processor, preset::PROCESSOR);
        assert_eq!(builder.in_progress(), &MobilePhone::default());
    }
}
