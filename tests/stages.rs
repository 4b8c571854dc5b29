mod common;

use common::synthetic_image::gradient_rgb;
use impulse_denoise::{noise, restore, RestoreMethod, RestoreOptions, SaltPepperWeights};

#[test]
fn certain_salt_saturates_gradient() {
    let input = gradient_rgb(20, 10);
    let out = noise::inject_seeded(
        &input,
        SaltPepperWeights {
            salt: 1.0,
            pepper: 0.0,
        },
        Some(4),
    )
    .expect("injection should succeed");
    assert_eq!(out.width, 20);
    assert_eq!(out.height, 10);
    assert!(out.pixels.iter().all(|p| *p == [255.0, 255.0, 255.0]));
}

#[test]
fn zero_weight_injection_is_identity() {
    let input = gradient_rgb(20, 10);
    let out = noise::inject_seeded(
        &input,
        SaltPepperWeights {
            salt: 0.0,
            pepper: 0.0,
        },
        None,
    )
    .expect("injection should succeed");
    assert_eq!(out, input);
}

#[test]
fn restore_is_identity_without_impulse_pixels() {
    // The gradient holds no exact 0/255 values, so every method must return
    // the buffer unchanged.
    let input = gradient_rgb(15, 21);
    for method in [
        RestoreMethod::Arithmetic,
        RestoreMethod::Harmonic,
        RestoreMethod::Geometric,
        RestoreMethod::Contraharmonic,
    ] {
        let out = restore::restore(&input, method, RestoreOptions::default())
            .expect("restore should succeed");
        assert_eq!(out, input, "{method:?} altered a clean buffer");
    }
}
