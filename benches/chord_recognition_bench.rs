//! Performance benchmarks for chord recognition

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stratum_chords::{recognise_chromagrams, ChordRecogniser, Chromagram, RecognitionConfig};

/// Synthetic frame: a dominant 7th shape drifting around the circle, plus a noise floor
fn synthetic_frame(i: usize) -> Chromagram {
    let root = (i / 10 * 7) % 12;
    let mut bins = [0.05f32; 12];
    for (offset, weight) in [(0usize, 1.0f32), (4, 0.8), (7, 0.6), (10, 0.4)] {
        bins[(root + offset) % 12] += weight;
    }
    Chromagram::new(bins)
}

fn bench_recognise(c: &mut Criterion) {
    let frames: Vec<Chromagram> = (0..600).map(synthetic_frame).collect();

    c.bench_function("recognise_600_frames", |b| {
        b.iter(|| {
            let mut recogniser = ChordRecogniser::new();
            for frame in &frames {
                black_box(recogniser.recognise(black_box(frame)));
            }
        });
    });

    let recogniser = ChordRecogniser::new();
    c.bench_function("top_candidates_5", |b| {
        b.iter(|| recogniser.top_candidates(black_box(&frames[3]), black_box(5)));
    });

    let config = RecognitionConfig::default();
    c.bench_function("recognise_chromagrams_60s", |b| {
        b.iter(|| {
            let _ = recognise_chromagrams(black_box(&frames), black_box(0.1), black_box(&config));
        });
    });
}

criterion_group!(benches, bench_recognise);
criterion_main!(benches);
