//! Example: Generating and Checking EasyPay Numbers
//!
//! Walks through the codec surface: generation, display, validation,
//! parsing and a deployment loaded from TOML.
//!
//! Run with: `cargo run --example usage`

#![allow(clippy::uninlined_format_args)]

use easypay_reference::{EasyPayConfig, ReferenceCodec, ReferenceError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== EasyPay Reference Codec Demo ===\n");

    let codec = ReferenceCodec::default();
    println!("Receiver ID:   {}", codec.receiver_id());
    println!("Total length:  {}", codec.total_length());
    println!("Account width: {}\n", codec.account_width());

    // 1. Generate
    println!("1. GENERATE");
    let number = codec.encode("12345")?;
    println!("   - Customer ID: 12345");
    println!("   - EasyPay:     {}", number);
    println!("   - Formatted:   {}", number.formatted());
    println!();

    // 2. Validate
    println!("2. VALIDATE");
    for candidate in [number.as_str(), "928130000000050729", "915001234567890"] {
        println!(
            "   - {}: {}",
            candidate,
            if codec.validate(candidate) {
                "✓ valid"
            } else {
                "✗ invalid"
            }
        );
    }
    println!();

    // 3. Parse
    println!("3. PARSE");
    if let Some(parsed) = codec.decode(number.as_str()) {
        println!("   - Components: {}", serde_json::to_string(&parsed)?);
        println!("   - Customer ID: {}", parsed.account_reference());
    }
    println!();

    // 4. Different customer IDs
    println!("4. CUSTOMER IDS");
    for id in ["1", "123", "123456789", "987654321", "123456789012345"] {
        match codec.encode(id) {
            Ok(n) => println!("   - {:>15} -> {} ({} digits)", id, n, n.as_str().len()),
            Err(e @ ReferenceError::LengthExceeded { .. }) => {
                println!("   - {:>15} -> Error: {}", id, e.user_message())
            }
            Err(e) => return Err(e.into()),
        }
    }
    println!();

    // 5. Another deployment
    println!("5. CUSTOM DEPLOYMENT");
    let config = EasyPayConfig::from_toml(
        r#"
        [codec]
        prefix = "9"
        receiver_id = "6789"
        total_length = 20
        "#,
    )?;
    let custom = ReferenceCodec::new(config.codec)?;
    let number = custom.encode("25433678212333")?;
    println!("   - Receiver 6789: {}", number.formatted());

    Ok(())
}
