use json_resilient_rs::{
    list_to_json_string, parse_array, parse_object, to_json_string, BoolFalse, IntZero, Resilient,
    StringEmpty,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Product {
    name: String,
    #[serde(default)]
    stock: Resilient<IntZero>,
    #[serde(default)]
    sku: Resilient<StringEmpty>,
    #[serde(default)]
    discontinued: Resilient<BoolFalse>,
}

fn main() {
    println!("=== Record <-> JSON Round-Trip Examples ===\n");

    example_1();
    example_2();
    example_3();
}

fn example_1() {
    println!("Example 1: Programmatic Record");
    println!("==============================");

    let product = Product {
        name: "Widget".to_string(),
        stock: Resilient::new(50),
        sku: Resilient::new("W-001".to_string()),
        discontinued: Resilient::new(false),
    };

    let text = to_json_string(&product).unwrap();
    println!("Encoded JSON:");
    println!("{}\n", text);

    let decoded: Product = parse_object(&text).unwrap();
    assert_eq!(product, decoded, "Round-trip failed!");
    println!("Round-trip successful!\n");
}

fn example_2() {
    println!("Example 2: Degraded Payload Stabilizes After One Decode");
    println!("=======================================================");

    let degraded = r#"{"name": "Gadget", "stock": "lots", "sku": null}"#;
    println!("Degraded input:");
    println!("{}\n", degraded);

    let first: Product = parse_object(degraded).unwrap();
    println!("First decode:");
    println!("{:?}\n", first);

    let reencoded = to_json_string(&first).unwrap();
    println!("Re-encoded JSON:");
    println!("{}\n", reencoded);

    let second: Product = parse_object(&reencoded).unwrap();
    assert_eq!(first, second, "Idempotence failed!");
    println!("Second decode equals the first!\n");
}

fn example_3() {
    println!("Example 3: Arrays of Records");
    println!("============================");

    let products = vec![
        Product {
            name: "Widget".to_string(),
            stock: Resilient::new(50),
            sku: Resilient::new("W-001".to_string()),
            discontinued: Resilient::new(false),
        },
        Product {
            name: "Doohickey".to_string(),
            stock: Resilient::new(0),
            sku: Resilient::new("D-100".to_string()),
            discontinued: Resilient::new(true),
        },
    ];

    let text = list_to_json_string(&products).unwrap();
    println!("Encoded JSON array:");
    println!("{}\n", text);

    let decoded: Vec<Product> = parse_array(&text).unwrap();
    assert_eq!(products, decoded, "Round-trip failed!");
    println!("Round-trip successful!");
    println!("\nAll examples completed successfully!");
}
