//! Property-based tests for the phone builder and clone
//!
//! These tests verify the construction and copy invariants for arbitrary
//! setter sequences and field values.

use handset_core::{preset, Director, MobilePhone, MobilePhoneBuilder, PhoneBuilder};
use proptest::prelude::*;

/// One setter call on the builder
#[derive(Debug, Clone)]
enum Setter {
    Model(String),
    Processor(String),
    Ram(i32),
    Storage(i32),
    Camera(String),
}

fn setter_strategy() -> impl Strategy<Value = Setter> {
    prop_oneof![
        ".{0,24}".prop_map(Setter::Model),
        ".{0,24}".prop_map(Setter::Processor),
        any::<i32>().prop_map(Setter::Ram),
        any::<i32>().prop_map(Setter::Storage),
        ".{0,24}".prop_map(Setter::Camera),
    ]
}

fn phone_strategy() -> impl Strategy<Value = MobilePhone> {
    (".{0,24}", ".{0,24}", any::<i32>(), any::<i32>(), ".{0,24}").prop_map(
        |(model, processor, ram, storage, camera)| MobilePhone {
            model,
            processor,
            ram,
            storage,
            camera,
        },
    )
}

fn apply(builder: &mut MobilePhoneBuilder, setter: &Setter) {
    match setter {
        Setter::Model(v) => builder.set_model(v.clone()),
        Setter::Processor(v) => builder.set_processor(v.clone()),
        Setter::Ram(v) => builder.set_ram(*v),
        Setter::Storage(v) => builder.set_storage(*v),
        Setter::Camera(v) => builder.set_camera(v.clone()),
    };
}

/// Fold the setters into the record they should produce
fn expected(setters: &[Setter]) -> MobilePhone {
    let mut phone = MobilePhone::default();
    for setter in setters {
        match setter {
            Setter::Model(v) => phone.model = v.clone(),
            Setter::Processor(v) => phone.processor = v.clone(),
            Setter::Ram(v) => phone.ram = *v,
            Setter::Storage(v) => phone.storage = *v,
            Setter::Camera(v) => phone.camera = v.clone(),
        }
    }
    phone
}

proptest! {
    #[test]
    fn build_yields_last_value_per_field(setters in prop::collection::vec(setter_strategy(), 0..20)) {
        let mut builder = MobilePhoneBuilder::new();
        for setter in &setters {
            apply(&mut builder, setter);
        }
        prop_assert_eq!(builder.build(), expected(&setters));
    }

    #[test]
    fn build_always_resets(setters in prop::collection::vec(setter_strategy(), 0..20)) {
        let mut builder = MobilePhoneBuilder::new();
        for setter in &setters {
            apply(&mut builder, setter);
        }
        let first = builder.build();
        let second = builder.build();
        prop_assert_eq!(second, MobilePhone::default());
        prop_assert_eq!(first, expected(&setters));
    }

    #[test]
    fn clone_matches_then_diverges(phone in phone_strategy(), suffix in "[a-z]{1,8}", delta in 1i32..1000) {
        let source = phone.clone();
        let mut copy = phone.clone();
        prop_assert_eq!(&copy, &source);

        copy.model.push_str(&suffix);
        copy.ram = copy.ram.wrapping_add(delta);
        prop_assert_eq!(&source, &phone);
        prop_assert_ne!(&copy, &source);
    }

    #[test]
    fn preset_ignores_prior_state(
        setters in prop::collection::vec(setter_strategy(), 0..20),
        model in ".{0,24}",
    ) {
        let mut builder = MobilePhoneBuilder::new();
        for setter in &setters {
            apply(&mut builder, setter);
        }
        let phone = Director::new(&mut builder).construct_phone(model.clone());
        prop_assert_eq!(phone, MobilePhone {
            model,
            processor: preset::PROCESSOR.to_string(),
            ram: preset::RAM_GB,
            storage: preset::STORAGE_GB,
            camera: preset::CAMERA.to_string(),
        });
    }
}
