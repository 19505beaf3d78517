use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quoteforge::{evaluate, price, validate_contract, ContractDocument};
use serde_json::{json, Value};

fn sample_payload(items: usize) -> Value {
    let line_items: Vec<Value> = (0..items)
        .map(|i| {
            json!({
                "description": format!("Line item {i}"),
                "costType": if i % 3 == 0 { "one-off" } else if i % 3 == 1 { "monthly" } else { "yearly" },
                "unitCost": 100.0 + i as f64,
                "quantity": 1 + (i % 5)
            })
        })
        .collect();

    json!({
        "schemaVersion": "1.0.0",
        "contractMetadata": {
            "contractName": "Benchmark Contract",
            "clientName": "Acme Corp",
            "effectiveDate": "2026-01-01"
        },
        "lineItems": line_items,
        "discounts": [
            { "description": "Volume", "type": "percentage", "value": 10 },
            { "description": "Credit", "type": "fixed", "value": 250 }
        ]
    })
}

fn pricing_bench(c: &mut Criterion) {
    let doc: ContractDocument =
        serde_json::from_value(sample_payload(100)).expect("document deserializes");

    c.bench_function("price_100_line_items", |b| {
        b.iter(|| {
            let totals = price(black_box(&doc));
            black_box(totals);
        });
    });
}

fn validation_bench(c: &mut Criterion) {
    let payload = sample_payload(100);

    c.bench_function("validate_100_line_items", |b| {
        b.iter(|| {
            let report = validate_contract(black_box(&payload));
            black_box(report);
        });
    });
}

fn evaluate_bench(c: &mut Criterion) {
    let payload = sample_payload(20);

    c.bench_function("evaluate_typical_contract", |b| {
        b.iter(|| {
            let outcome = evaluate(black_box(&payload)).expect("bench payload deserializes");
            black_box(outcome);
        });
    });
}

criterion_group!(benches, pricing_bench, validation_bench, evaluate_bench);
criterion_main!(benches);
