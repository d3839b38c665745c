// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_numeral::prelude::*;

#[cfg(feature = "logging")]
fn setup_logging() {
    if let Err(err) = roman_numeral::utils::init_logging(2) {
        eprintln!("logging not initialised: {}", err);
    }
}

#[cfg(not(feature = "logging"))]
fn setup_logging() {}

fn main() -> Result<(), NumeralError> {
    setup_logging();

    println!("=== Roman Numeral Example ===\n");

    // Numbers to numerals
    let mut value = RomanNumeralValue::new();
    for n in [1, 4, 9, 14, 40, 90, 400, 2023, 3999] {
        value.set_value(n)?;
        println!("  {:>6} = {}", n, value.value_as_roman()?);
    }

    // Numerals to numbers
    println!("\nReading numerals...");
    for numeral in ["MMXXIII", "MCMXCIV", "IS", "VS•••", "N"] {
        value.set_value(numeral)?;
        println!("  {:>8} = {}", numeral, value.value_as_arabic());
    }

    // Accumulation across representations
    println!("\n=== Accumulation ===");
    let mut total = RomanNumeralValue::new();
    total.add("IV")?;
    total.add("VI")?;
    total.add(2.25)?;
    println!("  IV + VI + 2.25 = {} ({})", total.value_as_roman()?, total.value_as_arabic());

    // Large numbers with each renderer
    println!("\n=== Overlined Letters ===");
    let builders = [
        RomanNumeralBuilder::new().combining_rendering(),
        RomanNumeralBuilder::new().macron_rendering(),
        RomanNumeralBuilder::new().html_rendering(),
    ];
    for builder in builders {
        let mut large = builder.build()?;
        large.set_value(987_654)?;
        println!("  [{}] {}", large.renderer_name(), large.value_as_roman()?);
    }

    // Rejected input
    println!("\n=== Errors ===");
    if let Err(err) = value.set_value("hello") {
        println!("  set_value(\"hello\"): {}", err);
    }
    value.set_value(1_000_000)?;
    if let Err(err) = value.value_as_roman() {
        println!("  1000000: {}", err);
    }

    Ok(())
}
