use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

use codon_usage_core::codon::CodonFrequencyTable;
use codon_usage_core::genome::{aggregate, aggregate_parallel};
use codon_usage_core::sequence::GeneRecord;
use codon_usage_core::usage::CodonStatistics;

use criterion_config::configure_criterion;

/// Deterministic pseudo-random coding sequence of `codons` codons.
fn synthetic_gene(seed: u64, codons: usize) -> Vec<u8> {
    const BASES: [u8; 4] = *b"ACGT";
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut sequence = Vec::with_capacity(codons * 3);
    sequence.extend_from_slice(b"ATG");
    for _ in 0..codons.saturating_sub(2) * 3 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        sequence.push(BASES[(state >> 62) as usize]);
    }
    sequence.extend_from_slice(b"TAA");
    sequence
}

fn synthetic_corpus(genes: usize, codons: usize) -> Vec<GeneRecord> {
    (0..genes)
        .map(|i| GeneRecord::new(format!("gene{}", i), synthetic_gene(i as u64, codons)))
        .collect()
}

fn bench_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("codon_counting");

    for codons in [100, 1_000, 10_000] {
        let gene = synthetic_gene(42, codons);
        group.throughput(Throughput::Bytes(gene.len() as u64));
        group.bench_with_input(BenchmarkId::new("count", codons), &gene, |b, gene| {
            b.iter(|| CodonFrequencyTable::from_sequence(black_box(gene)))
        });
        group.bench_with_input(BenchmarkId::new("statistics", codons), &gene, |b, gene| {
            b.iter(|| CodonStatistics::from_sequence(black_box(gene)))
        });
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("genome_aggregation");

    for genes in [100, 1_000, 4_000] {
        let corpus = synthetic_corpus(genes, 300);
        group.throughput(Throughput::Elements(genes as u64));
        group.bench_with_input(BenchmarkId::new("sequential", genes), &corpus, |b, corpus| {
            b.iter(|| aggregate(black_box(corpus)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", genes), &corpus, |b, corpus| {
            b.iter(|| aggregate_parallel(black_box(corpus)))
        });
    }

    group.finish();
}

fn bench_cli(c: &mut Criterion) {
    let mut input = NamedTempFile::new().expect("Failed to create input file");
    for gene in synthetic_corpus(2_000, 300) {
        writeln!(input, ">{}", gene.id).expect("Failed to write header");
        input.write_all(&gene.sequence).expect("Failed to write sequence");
        writeln!(input).expect("Failed to write newline");
    }
    input.flush().expect("Failed to flush input file");
    let input_path = input.path().to_str().expect("Non UTF-8 temp path").to_string();

    let mut group = c.benchmark_group("cli");
    for (mode, extra) in [("gene", None), ("genome", Some("-b"))] {
        group.bench_function(BenchmarkId::new("text", mode), |b| {
            b.iter(|| {
                let output = NamedTempFile::new().expect("Failed to create output file");
                let mut cmd = Command::new(env!("CARGO_BIN_EXE_codon-usage"));
                cmd.args(["-q", "-i", &input_path, "-p", mode, "-o"])
                    .arg(output.path());
                if let Some(flag) = extra {
                    cmd.arg(flag);
                }
                let status = cmd.status().expect("Failed to run codon-usage");
                assert!(status.success());
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = bench_counting, bench_aggregation, bench_cli
}
criterion_main!(benches);
