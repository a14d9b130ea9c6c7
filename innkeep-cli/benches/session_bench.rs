use std::fmt::Write as _;
use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use innkeep::config::{Config, OutputFormat};
use innkeep::Hotel;
use innkeep_cli::commands::session::Session;
use innkeep_cli::console::{parse_cost, parse_int_in_range, Console};

const SCRIPT_SIZES: &[usize] = &[10, 100, 500];

/// Adds `rooms` rooms, registers a client for each and books it, then lists
/// everything once.
fn booking_script(rooms: usize) -> String {
    let mut script = String::new();
    for index in 0..rooms {
        let _ = write!(script, "1\n{}\n{}.50\n", 100 + index, 40 + index % 60);
    }
    for index in 0..rooms {
        let _ = write!(script, "3\nGuest{index}\n{}\n", index + 1);
    }
    script.push_str("2\n6\n0\n");
    script
}

fn run_session(script: &str, config: &Config) -> usize {
    let console = Console::new(Cursor::new(script.as_bytes()), Vec::new());
    let mut session = Session::new(Hotel::new(), config, console);
    session.run().expect("scripted session should finish");
    session.into_output().len()
}

fn bench_scripted_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("scripted_session");

    for &size in SCRIPT_SIZES {
        let script = booking_script(size);
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv] {
            let config = Config {
                output_format: Some(format),
                ..Config::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format.to_string(), size),
                &script,
                |b, script| {
                    b.iter_batched(
                        || script.clone(),
                        |script| run_session(black_box(&script), &config),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_input_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_parsing");

    group.bench_function("cost", |b| {
        b.iter(|| parse_cost(black_box("  1234.56 "), black_box(1_000_000.0)));
    });

    group.bench_function("int_in_range", |b| {
        b.iter(|| parse_int_in_range(black_box("  42 "), black_box(0), black_box(1_000_000)));
    });

    group.bench_function("int_rejected", |b| {
        b.iter(|| parse_int_in_range(black_box("4x2"), black_box(0), black_box(8)));
    });

    group.finish();
}

criterion_group!(benches, bench_scripted_session, bench_input_parsing);
criterion_main!(benches);
