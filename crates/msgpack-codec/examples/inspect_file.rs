//! Simple inspector for files holding one or more concatenated MessagePack values.

use std::collections::BTreeMap;
use std::fs;

use msgpack_codec::codec::{decode_value, Reader};
use msgpack_codec::{DecodeOptions, Value};

fn count_kinds(
    value: &Value,
    counts: &mut BTreeMap<&'static str, usize>,
    depth: usize,
    max_depth: &mut usize,
) {
    *counts.entry(value.kind()).or_default() += 1;
    *max_depth = (*max_depth).max(depth);
    match value {
        Value::Array(items) => {
            for item in items {
                count_kinds(item, counts, depth + 1, max_depth);
            }
        }
        Value::Map(entries) => {
            for (_, v) in entries {
                *counts.entry("str").or_default() += 1;
                count_kinds(v, counts, depth + 1, max_depth);
            }
        }
        _ => {}
    }
}

fn preview(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() > 80 {
        let head: String = text.chars().take(80).collect();
        format!("{}...", head)
    } else {
        text
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data.msgpack".to_string());

    println!("Reading: {}", path);

    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());

    let options = DecodeOptions::default();
    let mut reader = Reader::new(&data);
    let mut counts = BTreeMap::new();
    let mut max_depth = 0;
    let mut index = 0;

    println!("\n=== Values ===");
    while !reader.is_empty() {
        let start = reader.position();
        let value = match decode_value(&mut reader, 0, &options) {
            Ok(value) => value,
            Err(err) => {
                println!("[{}] error at offset {}: {}", index, start, err);
                break;
            }
        };
        println!(
            "[{}] offset {} ({} bytes) {}",
            index,
            start,
            reader.position() - start,
            preview(&value)
        );
        count_kinds(&value, &mut counts, 0, &mut max_depth);
        index += 1;
    }

    println!("\n=== Kinds ===");
    for (kind, count) in &counts {
        println!("  {}: {}", kind, count);
    }
    println!("  max nesting: {}", max_depth);
}
