//! Recognise a synthetic I-V-vi-IV progression and print the chord segments
//!
//! Run with `RUST_LOG=debug cargo run --example recognise_progression` to see
//! the engine's log output.

use stratum_chords::{
    recognise_chromagrams, ChordQuality, ChordRecogniser, ChordTemplate, Chromagram,
    RecognitionConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let progression = [
        (0, ChordQuality::Major),
        (7, ChordQuality::Major),
        (9, ChordQuality::Minor),
        (5, ChordQuality::Major),
    ];
    let frame_period = 0.1;

    // 2 seconds per chord with a little bleed into neighbouring bins
    let mut frames = Vec::new();
    for (root, quality) in progression {
        let template = ChordTemplate::new(root, quality);
        for i in 0..20 {
            let mut bins = template.vector;
            bins[(root as usize + 2) % 12] += 0.05 * (i % 3) as f32;
            frames.push(Chromagram::new(bins));
        }
    }

    let result = recognise_chromagrams(&frames, frame_period, &RecognitionConfig::default())?;

    println!(
        "{} frames, {} recognised, {:.2} ms",
        result.frames_processed, result.frames_recognised, result.processing_time_ms
    );
    for segment in &result.segments {
        println!(
            "{:>6.2}s - {:>6.2}s  {:<6} {:<20} confidence {:.2}",
            segment.start_seconds,
            segment.end_seconds,
            segment.label,
            segment.quality.to_string(),
            segment.confidence
        );
    }

    let recogniser = ChordRecogniser::new();
    let ambiguous = Chromagram::from_slice(&[1.0, 0.0, 0.0, 0.0, 0.8, 0.0, 0.0, 0.6, 0.0, 0.0, 0.5, 0.0])?;
    println!("\nTop candidates for C + Bb:");
    for candidate in recogniser.top_candidates(&ambiguous, 5) {
        println!("  {:<6} r={:.3}", candidate.template.name(), candidate.score);
    }

    let analysis = recogniser.analyze_chromagram(&ambiguous);
    println!("\n{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
