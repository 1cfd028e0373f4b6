use json_resilient_rs::{
    parse_object, to_json_string, BoolTrue, DoubleZero, IntZero, Resilient, StringEmpty,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct User {
    name: String,
    #[serde(default)]
    age: Resilient<IntZero>,
    #[serde(default)]
    rating: Resilient<DoubleZero>,
    #[serde(default)]
    nickname: Resilient<StringEmpty>,
    #[serde(default)]
    notify: Resilient<BoolTrue>,
}

fn main() {
    println!("=== Resilient Decoding Examples ===\n");

    // Example 1: Clean payload, every field decodes normally
    println!("1. Clean payload:");
    let user: User = parse_object(
        r#"{
            "name": "Alice",
            "age": 30,
            "rating": 4.5,
            "nickname": "ally",
            "notify": false
        }"#,
    )
    .unwrap();
    println!("{:?}\n", user);

    // Example 2: Missing keys fall back to their kind's default
    println!("2. Missing keys:");
    let user: User = parse_object(r#"{"name": "Bob"}"#).unwrap();
    println!("{:?}\n", user);

    // Example 3: Null values behave exactly like missing keys
    println!("3. Null values:");
    let user: User = parse_object(
        r#"{
            "name": "Carol",
            "age": null,
            "nickname": null
        }"#,
    )
    .unwrap();
    println!("{:?}\n", user);

    // Example 4: Wrong shapes fall back without coercion
    println!("4. Wrong shapes:");
    let user: User = parse_object(
        r#"{
            "name": "Dave",
            "age": "thirty",
            "rating": [1, 2, 3],
            "notify": "yes"
        }"#,
    )
    .unwrap();
    println!("{:?}\n", user);

    // Example 5: Misspelled key (the field falls back, decode still succeeds)
    println!("5. Misspelled key:");
    let user: User = parse_object(r#"{"name": "Eve", "nickmane": "evie"}"#).unwrap();
    println!("{:?}\n", user);

    // Example 6: Plain fields keep strict semantics
    println!("6. Missing plain field:");
    match parse_object::<User>(r#"{"age": 30}"#) {
        Ok(user) => println!("{:?}\n", user),
        Err(err) => println!("error (code {}): {}\n", err.code(), err),
    }

    // Example 7: Encoding always writes every key
    println!("7. Encoded form of a degraded payload:");
    let user: User = parse_object(r#"{"name": "Frank", "age": "oops"}"#).unwrap();
    println!("{}", to_json_string(&user).unwrap());
}
