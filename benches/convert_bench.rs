use criterion::{black_box, criterion_group, criterion_main, Criterion};
use json_resilient_rs::{
    list_to_json_string, parse_array, parse_object, to_json_string, BoolFalse, DoubleZero, IntZero,
    Resilient, StringEmpty,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Account {
    username: String,
    #[serde(default)]
    id: Resilient<IntZero>,
    #[serde(default)]
    email: Resilient<StringEmpty>,
    #[serde(default)]
    balance: Resilient<DoubleZero>,
    #[serde(default)]
    suspended: Resilient<BoolFalse>,
    roles: Vec<String>,
}

fn get_account_json() -> String {
    r#"{
        "username": "alice",
        "id": 101,
        "email": "alice@example.com",
        "balance": 1250.75,
        "suspended": false,
        "roles": ["admin", "editor"]
    }"#
    .to_string()
}

fn get_degraded_account_json() -> String {
    r#"{
        "username": "bob",
        "id": "not-a-number",
        "email": null,
        "balance": {"unexpected": true},
        "roles": ["viewer"]
    }"#
    .to_string()
}

fn bench_parse_clean(c: &mut Criterion) {
    let text = get_account_json();
    c.bench_function("parse_object clean", |b| {
        b.iter(|| parse_object::<Account>(black_box(&text)).unwrap())
    });
}

fn bench_parse_degraded(c: &mut Criterion) {
    let text = get_degraded_account_json();
    c.bench_function("parse_object degraded", |b| {
        b.iter(|| parse_object::<Account>(black_box(&text)).unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let account: Account = parse_object(&get_account_json()).unwrap();
    c.bench_function("to_json_string", |b| {
        b.iter(|| to_json_string(black_box(&account)).unwrap())
    });
}

fn bench_list_round_trip(c: &mut Criterion) {
    let account: Account = parse_object(&get_account_json()).unwrap();
    let accounts = vec![account; 100];
    c.bench_function("list round-trip x100", |b| {
        b.iter(|| {
            let text = list_to_json_string(black_box(&accounts)).unwrap();
            parse_array::<Account>(&text).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_parse_clean,
    bench_parse_degraded,
    bench_encode,
    bench_list_round_trip
);
criterion_main!(benches);
