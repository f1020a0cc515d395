// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_rational::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() -> RationalResult<()> {
    // RUST_LOG=debug shows truncated decimal conversions and capped expansions
    tracing_subscriber::fmt::init();

    println!("=== Exact Rational Example ===\n");

    // Construction always reduces
    let half = Rational::new(4, 8)?;
    let third = Rational::new(1, 3)?;
    println!("4/8 reduces to {}", half.format(FormatTag::Fraction));

    // Arithmetic
    println!("\nArithmetic:");
    println!("  {} + {} = {}", half, third, half.checked_add(third)?);
    println!("  {} - {} = {}", half, third, half.checked_sub(third)?);
    println!("  {} * {} = {}", half, third, half.checked_mul(third)?);
    println!("  {} / {} = {}", half, third, half.checked_div(third)?);
    println!("  ({})^-3 = {}", third, third.pow(-3)?);

    match Rational::MAX.checked_add(Rational::ONE) {
        Ok(value) => println!("  MAX + 1 = {}", value),
        Err(err) => println!("  MAX + 1 failed: {}", err),
    }

    // Every format tag
    println!("\nFormats of -22/7:");
    let value = Rational::new(-22, 7)?;
    for tag in FormatTag::ALL {
        println!("  {}: {}", tag, value.format(tag));
    }

    // Parsing, pinned and by precedence
    println!("\nParsing:");
    for (text, tag) in [
        ("3 1/2", Some(FormatTag::Mixed)),
        ("-6/8", Some(FormatTag::Fraction)),
        ("0.1(6)", None),
        ("2.75", None),
        ("1/0", None),
        ("three", None),
    ] {
        match Rational::parse(text, tag) {
            Ok(parsed) => println!("  {:>8} -> {}", text, parsed),
            Err(err) => println!("  {:>8} -> error: {}", text, err),
        }
    }

    // Ordering
    let mut values = vec![
        Rational::new(2, 3)?,
        Rational::new(-1, 2)?,
        Rational::new(5, 8)?,
        Rational::ZERO,
    ];
    values.sort();
    let sorted: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("\nSorted: {}", sorted.join(" < "));

    // Long cycles are capped
    let config = FormatConfig::decimal_expansion().with_max_expansion_digits(20);
    println!("\n1/97 (capped): {}", Rational::new(1, 97)?.format_with(None, &config));

    // Decimal interop
    let price = Decimal::from_str("19.9999999999").map_err(|_| RationalError::ParseError)?;
    println!("\nDecimal {} truncates to {}", price, Rational::from_decimal(price)?);
    println!("Decimal {} converts exactly to {}", price, Rational::from_decimal_exact(price)?);
    println!("{} as decimal: {}", third, third.to_decimal());

    Ok(())
}
