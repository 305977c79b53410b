//! Example matching the README: a sample API response turned into Java classes.
//!
//! Contains only the input JSON and the conversion call; generated Java is
//! written to stdout.

use std::io;

const SAMPLE_JSON: &str = r#"{
  "id": 42,
  "first_name": "Ada",
  "score": 97.5,
  "active": true,
  "tags": ["admin", "ops"],
  "address": { "city": "London", "zip": "N1" },
  "orders": [{ "sku": "A-1", "qty": 2 }],
  "history": []
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout: io::Stdout = io::stdout();
    let settings = json2obj::GenerateSettings {
        output_name: Some("Customer.java".to_string()),
        ..json2obj::GenerateSettings::for_language(json2obj::TargetLanguage::Java)
    };
    json2obj::generate_to_writer(SAMPLE_JSON, &mut stdout, &settings)?;
    Ok(())
}
