mod common;

use common::synthetic_image::gradient_rgb;
use impulse_denoise::{
    is_impulse, DenoisePipeline, GrayscaleMethod, PipelineParams, RestoreMethod, SaltPepperWeights,
};

#[test]
fn full_pipeline_on_gradient_image() {
    let _ = env_logger::builder().is_test(true).try_init();
    let width = 64usize;
    let height = 48usize;
    let input = gradient_rgb(width, height);

    let pipeline = DenoisePipeline::new(PipelineParams {
        seed: Some(1234),
        ..Default::default()
    });
    let report = pipeline.run(&input).expect("pipeline should succeed");

    // Dimension invariant at every stage boundary.
    for stage in [&report.grayscale, &report.noisy, &report.restored] {
        assert_eq!(stage.width, width);
        assert_eq!(stage.height, height);
        assert_eq!(stage.pixels.len(), width * height);
    }

    // Grayscale output has equal channels everywhere.
    for px in &report.grayscale.pixels {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }

    // The gradient avoids exact extremes, so injection is the only source of
    // impulse pixels, and restoration must remove essentially all of them.
    // With default 6%/6% weights on 64x48 some corruption is certain.
    assert!(report.noisy_pixels > 0, "expected injected noise");
    assert!(
        report.residual_noisy_pixels * 10 < report.noisy_pixels,
        "restoration left {} of {} impulse pixels",
        report.residual_noisy_pixels,
        report.noisy_pixels
    );
}

#[test]
fn restoration_touches_only_impulse_pixels() {
    let _ = env_logger::builder().is_test(true).try_init();
    let input = gradient_rgb(32, 32);

    let pipeline = DenoisePipeline::new(PipelineParams {
        grayscale: GrayscaleMethod::Average,
        weights: SaltPepperWeights {
            salt: 0.1,
            pepper: 0.1,
        },
        restore: RestoreMethod::Arithmetic,
        seed: Some(77),
        ..Default::default()
    });
    let report = pipeline.run(&input).expect("pipeline should succeed");

    for (i, noisy) in report.noisy.pixels.iter().enumerate() {
        if !is_impulse(noisy) {
            assert_eq!(
                report.restored.pixels[i], *noisy,
                "non-impulse pixel {i} was rewritten"
            );
        }
    }
}

#[test]
fn each_grayscale_method_feeds_the_pipeline() {
    let input = gradient_rgb(16, 24);
    for method in [
        GrayscaleMethod::Average,
        GrayscaleMethod::Weighted,
        GrayscaleMethod::Yuv,
    ] {
        let pipeline = DenoisePipeline::new(PipelineParams {
            grayscale: method,
            seed: Some(9),
            ..Default::default()
        });
        let report = pipeline.run(&input).expect("pipeline should succeed");
        assert_eq!(report.restored.pixels.len(), 16 * 24);
    }
}
