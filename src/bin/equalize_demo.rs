use local_histeq::config::{self, RuntimeConfig};
use local_histeq::image::io::{
    load_grayscale_image, save_grayscale_u8, save_side_by_side_u8, write_json_file,
};
use local_histeq::{EqualizeOutcome, LocalEqualizer};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let equalizer = LocalEqualizer::new(config.equalize.resolve());
    let outcome = equalizer.equalize_with_diagnostics(gray.as_view())?;

    print_text_summary(&outcome);
    save_outputs(&config, &gray, &outcome)?;
    Ok(())
}

fn save_outputs(
    config: &RuntimeConfig,
    original: &local_histeq::GrayImageU8,
    outcome: &EqualizeOutcome,
) -> Result<(), String> {
    save_grayscale_u8(&outcome.enhanced, &config.output.enhanced_image)?;
    println!(
        "Enhanced image written to {}",
        config.output.enhanced_image.display()
    );

    if let Some(path) = &config.output.side_by_side_image {
        save_side_by_side_u8(original, &outcome.enhanced, path)?;
        println!("Side-by-side comparison written to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &outcome.report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn print_text_summary(outcome: &EqualizeOutcome) {
    let r = &outcome.report;
    println!("Equalization summary");
    println!("  image: {}x{}", r.width, r.height);
    println!("  neighborhood: {}x{}", r.neighborhood_size, r.neighborhood_size);
    println!("  levels: {}", r.levels);
    println!("  pad: {}", r.pad);
    println!(
        "  elapsed_ms: {:.3} (pad {:.3})",
        r.elapsed_ms, r.elapsed_pad_ms
    );
}

fn usage() -> String {
    "Usage: equalize_demo <config.json>".to_string()
}
