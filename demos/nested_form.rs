//! Encoding a nested struct into form fields and reading it back.
//!
//! Run with: cargo run --example nested_form

use serde::{Deserialize, Serialize};
use serde_formdata::{from_form_data, to_form_data, to_plain_form_data, MultipartOptions};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Contact {
    email: String,
    phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Application {
    name: String,
    years_experience: u32,
    relocate: bool,
    contact: Contact,
    languages: Vec<String>,
    references: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let application = Application {
        name: "Ann Berg".to_string(),
        years_experience: 7,
        relocate: false,
        contact: Contact {
            email: "ann@example.com".to_string(),
            phone: None,
        },
        languages: vec!["Rust".to_string(), "SQL".to_string()],
        references: vec![],
    };

    println!("Tagged fields:");
    let form = to_form_data(&application, MultipartOptions::default())?;
    for (key, entry) in &form {
        println!("  {} = {}", key, entry);
    }

    println!("\nTagged fields without indices:");
    let unindexed = to_form_data(&application, MultipartOptions::new().with_indices(false))?;
    for (key, entry) in &unindexed {
        println!("  {} = {}", key, entry);
    }

    println!("\nPlain fields:");
    for (key, entry) in &to_plain_form_data(&application)? {
        println!("  {} = {}", key, entry);
    }

    let back: Application = from_form_data(&form)?;
    assert_eq!(back, application);
    println!("\nRound trip: {:?}", back);

    Ok(())
}
