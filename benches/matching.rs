//! Benchmarks for the matching pipeline.
//!
//! Benchmark targets:
//! - Knowledge-base lookup over 1,000 records: <10ms
//! - Similarity of two short sentences: <20us
//! - Intent classification: <5us

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use quranqa::matching::{KnowledgeMatcher, classify_intent};
use quranqa::models::{Category, KnowledgeData, QuestionRecord, VerseRecord};
use quranqa::text::similarity_urdu;
use quranqa::{InMemoryCorpus, KnowledgeBase};

const EXACT_QUERY: &str = "قرآن میں سوال نمبر 7";
const KEYWORD_QUERY: &str = "کلیدی42";
const MISS_QUERY: &str = "آج موسم کیسا رہے گا";

fn knowledge_base(records: usize) -> KnowledgeBase {
    let questions = (0..records)
        .map(|i| {
            QuestionRecord::new(
                format!("q{i}"),
                format!("قرآن میں سوال نمبر {i}"),
                format!("جواب {i}"),
            )
            .with_category(Category::all()[i % Category::all().len()])
            .with_keywords([format!("کلیدی{i}"), "سورتیں".to_string()])
            .with_phrasings([format!("سوال {i} کیا ہے")])
        })
        .collect();
    KnowledgeBase::new(KnowledgeData {
        questions,
        ..KnowledgeData::default()
    })
}

fn corpus(verses: u16) -> InMemoryCorpus {
    InMemoryCorpus::new(
        (1..=verses)
            .map(|ayah| VerseRecord {
                surah: 2,
                ayah,
                verse: format!("اللہ کے نام سے جو بڑا مہربان نہایت رحم والا ہے {ayah}"),
                reference: quranqa::corpus::reference(2, ayah),
            })
            .collect(),
    )
}

fn bench_knowledge_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("knowledge_lookup");
    group.measurement_time(Duration::from_secs(5));
    let matcher = KnowledgeMatcher::default();

    for size in [10, 100, 1_000] {
        let kb = knowledge_base(size);
        for (label, query) in [
            ("exact", EXACT_QUERY),
            ("keyword", KEYWORD_QUERY),
            ("miss", MISS_QUERY),
        ] {
            group.bench_with_input(BenchmarkId::new(label, size), &kb, |b, kb| {
                b.iter(|| matcher.find(black_box(query), kb));
            });
        }
    }

    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    group.bench_function("short", |b| {
        b.iter(|| similarity_urdu(black_box("قرآن میں کتنی سورتیں ہیں"), black_box("قرآن کتنے پاروں پر مشتمل ہے")));
    });

    let long = "اللہ کے نام سے جو بڑا مہربان نہایت رحم والا ہے ".repeat(10);
    group.bench_function("long", |b| {
        b.iter(|| similarity_urdu(black_box(&long), black_box("قرآن میں کتنی سورتیں ہیں")));
    });

    group.finish();
}

fn bench_intent(c: &mut Criterion) {
    let mut group = c.benchmark_group("intent");

    for (label, text) in [
        ("greeting", "السلام علیکم"),
        ("question", "قرآن میں کتنی سورتیں ہیں"),
        ("english", "what is the longest surah in the quran"),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| classify_intent(black_box(text)));
        });
    }

    group.finish();
}

fn bench_corpus_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_rank");
    group.measurement_time(Duration::from_secs(5));

    for size in [100_u16, 1_000] {
        let corpus = corpus(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| corpus.rank(black_box("رحم والا")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_knowledge_lookup,
    bench_similarity,
    bench_intent,
    bench_corpus_rank
);
criterion_main!(benches);
