use impulse_denoise::io::{load_rgb_image, save_rgb_image, write_json_file};
use impulse_denoise::{DenoisePipeline, PipelineParams};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DenoiseToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub pipeline: PipelineParams,
    pub output: DenoiseOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DenoiseOutputConfig {
    #[serde(rename = "grayscale_image")]
    pub grayscale_image: PathBuf,
    #[serde(rename = "noisy_image")]
    pub noisy_image: PathBuf,
    #[serde(rename = "restored_image")]
    pub restored_image: PathBuf,
    #[serde(rename = "summary_json")]
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DenoiseToolConfig, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let input = load_rgb_image(&config.input)?;
    let pipeline = DenoisePipeline::new(config.pipeline);
    let report = pipeline
        .run(&input)
        .map_err(|e| format!("Pipeline failed on {}: {e}", config.input.display()))?;

    let summary = DenoiseSummary {
        width: input.width,
        height: input.height,
        params: config.pipeline,
        noisy_pixels: report.noisy_pixels,
        residual_noisy_pixels: report.residual_noisy_pixels,
        latency_ms: report.latency_ms,
    };

    save_rgb_image(&report.grayscale, &config.output.grayscale_image)?;
    save_rgb_image(&report.noisy, &config.output.noisy_image)?;
    save_rgb_image(&report.restored, &config.output.restored_image)?;
    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Injected {} impulse pixels, {} remain after restoration ({:.3} ms)",
        summary.noisy_pixels, summary.residual_noisy_pixels, summary.latency_ms
    );
    println!(
        "Saved stages to {}, {}, {}",
        config.output.grayscale_image.display(),
        config.output.noisy_image.display(),
        config.output.restored_image.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: denoise_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DenoiseSummary {
    width: usize,
    height: usize,
    params: PipelineParams,
    noisy_pixels: usize,
    residual_noisy_pixels: usize,
    latency_ms: f64,
}
