use criterion::{black_box, criterion_group, criterion_main, Criterion};
use full_name::{parse_name, Lexicon, ParseOptions, ParsedName};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

fn parsing_first_last(c: &mut Criterion) {
    c.bench_function("first last", |b| {
        b.iter(|| black_box(ParsedName::parse(black_box("Juan Garcia"))))
    });
}

fn parsing_sort_order(c: &mut Criterion) {
    c.bench_function("last, first", |b| {
        b.iter(|| black_box(ParsedName::parse(black_box("Garcia, J.Q."))))
    });
}

fn parsing_needs_namecase(c: &mut Criterion) {
    c.bench_function("all-caps", |b| {
        b.iter(|| black_box(ParsedName::parse(black_box("JAIME GARCIA"))))
    });
}

fn parsing_complex(c: &mut Criterion) {
    let name = "Velasquez y Garcia, Dr. Juan Q. 'Don Juan' Xavier III";
    c.bench_function("complex", |b| {
        b.iter(|| black_box(ParsedName::parse(black_box(name))))
    });
}

fn parsing_extended_lexicon(c: &mut Criterion) {
    let options = ParseOptions::new().with_lexicon(Lexicon::Extended);
    let name = "Rev. John P. Doe-Ray, Jr., CLU, CFP, LUTC";
    c.bench_function("extended lexicon", |b| {
        b.iter(|| black_box(parse_name(Some(black_box(name)), &options)))
    });
}

criterion_group!(
    e2e_parsing,
    parsing_first_last,
    parsing_sort_order,
    parsing_needs_namecase,
    parsing_complex,
    parsing_extended_lexicon
);

fn parsing_many(c: &mut Criterion) {
    let f = File::open("tests/parseable-names.txt").unwrap();
    let reader = BufReader::new(f);
    let names: Vec<String> = reader
        .lines()
        .map(|l| l.unwrap())
        .filter_map(|l| l.split('|').next().map(str::to_string))
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();

    c.bench_function(&format!("parse {} names", names.len()), |b| {
        b.iter(|| {
            let mut warnings = 0;
            for name in names.iter() {
                if ParsedName::parse(name).has_warnings() {
                    warnings += 1;
                }
            }
            black_box(warnings)
        })
    });
}

criterion_group!(realistic, parsing_many);

criterion_main!(realistic, e2e_parsing);
