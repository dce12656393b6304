use criterion::{Criterion, black_box, criterion_group, criterion_main};

use sample_renamer::{FilenameResolver, NoteTable, build_full_manifest};

const FILENAMES: [&str; 6] = [
    "60_C4_anything.wav",
    "61_C4_Bass.wav",
    "Piano_A#3_soft.wav",
    "x_C-1_y.wav",
    "completely_random_name.wav",
    "take-E2-loud.mp3",
];

fn bench_resolve(c: &mut Criterion) {
    let resolver = FilenameResolver::new(NoteTable::standard());
    c.bench_function("resolve mixed filenames", |b| {
        b.iter(|| {
            for name in FILENAMES {
                black_box(resolver.resolve(black_box(name)));
            }
        })
    });
}

fn bench_full_manifest(c: &mut Criterion) {
    let table = NoteTable::standard();
    c.bench_function("build full manifest", |b| {
        b.iter(|| black_box(build_full_manifest(table, black_box("Bass"), ".wav")))
    });
}

fn bench_table_construction(c: &mut Criterion) {
    c.bench_function("construct note table", |b| b.iter(|| black_box(NoteTable::new())));
}

criterion_group!(benches, bench_resolve, bench_full_manifest, bench_table_construction);
criterion_main!(benches);
