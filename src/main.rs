use local_histeq::image::ImageU8;
use local_histeq::{EqualizeParams, LocalEqualizer};

fn main() {
    // Demo stub: equalizes a synthetic horizontal ramp
    let w = 640usize;
    let h = 480usize;
    let stride = w; // tightly packed
    let mut gray = vec![0u8; w * h];
    for (i, px) in gray.iter_mut().enumerate() {
        *px = ((i % w) * 255 / (w - 1)) as u8;
    }
    let img = ImageU8 {
        w,
        h,
        stride,
        data: &gray,
    };

    let eq = LocalEqualizer::new(EqualizeParams::default());
    match eq.equalize_with_diagnostics(img) {
        Ok(outcome) => println!(
            "equalized {}x{} in {:.3} ms",
            outcome.report.width, outcome.report.height, outcome.report.elapsed_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
