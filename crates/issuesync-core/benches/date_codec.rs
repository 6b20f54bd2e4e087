// SPDX-License-Identifier: Apache-2.0

//! Benchmark for date-aware response decoding.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use issuesync_core::{GraphQlResponse, decode};

/// Generate an `issueList` response with `count` issues.
fn generate_issue_list(count: usize) -> String {
    let issues: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id":{i},"title":"Issue number {i}","owner":"owner{o}","status":"Open","created":"2023-01-{d:02}","effort":{e},"due":{due}}}"#,
                o = i % 17,
                d = i % 28 + 1,
                e = i % 8,
                due = if i % 3 == 0 {
                    "null".to_string()
                } else {
                    format!(r#""2023-02-{:02}T12:00:00Z""#, i % 28 + 1)
                }
            )
        })
        .collect();
    format!(r#"{{"data":{{"issueList":[{}]}}}}"#, issues.join(","))
}

fn bench_decode(c: &mut Criterion) {
    let body = generate_issue_list(1000);

    c.bench_function("decode_1000_issues", |b| {
        b.iter(|| decode(black_box(&body)));
    });

    c.bench_function("classify_1000_issues", |b| {
        b.iter(|| GraphQlResponse::from_body(black_box(&body)));
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
