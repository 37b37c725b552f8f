//! Decoding a submitted form that mixes tagged text and files.
//!
//! Run with: cargo run --example inspect_submission

use serde_formdata::{decoded, parse_value, File, FormData, FormEntry, FormSink, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut form = FormData::new();
    form.append("title", FormEntry::from("string;Quarterly report"));
    form.append("published", FormEntry::from("date;2024-01-15T10:30:00.000Z"));
    form.append("draft", FormEntry::from("boolean;false"));
    form.append("revision", FormEntry::from("number;3"));
    form.append("match", FormEntry::from("regex;/q[1-4]/i"));
    form.append("reviewers[0]", FormEntry::from("string;kim"));
    form.append("reviewers[1]", FormEntry::from("string;lee"));
    form.append("notes", FormEntry::from("array;empty"));
    form.append("legacy", FormEntry::from("plain text, left alone"));
    for name in ["q1.pdf", "q2.pdf"] {
        let file = File::new(b"%PDF-1.7".to_vec(), name, "application/pdf");
        form.append("attachments", FormEntry::from(file));
    }

    println!("Entries one by one:");
    for (key, entry) in &form {
        match entry.as_text() {
            Some(text) => println!("  {:<14} {:?}", key, parse_value(text)),
            None => println!("  {:<14} {}", key, entry),
        }
    }

    let tree = decoded(form.to_tree());
    println!("\nDecoded tree:");
    if let Value::Object(fields) = &tree {
        for (key, value) in fields {
            println!("  {:<14} {} ({})", key, value, value.type_name());
        }
    }

    let pattern = match tree.get("match") {
        Some(Value::Regex(re)) => re.to_regex()?,
        _ => return Err("missing pattern".into()),
    };
    println!("\n'Q3 summary' matches: {}", pattern.is_match("Q3 summary"));

    Ok(())
}
