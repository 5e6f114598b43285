//! Conversion vectors for the formats the standard library cannot
//! parse back. Every expected value was checked against exact rational
//! arithmetic: it round-trips under round-to-nearest-even and no
//! one-digit-shorter decimal does.

use anyhow::{bail, Context, Result};
use shortdec::Decimal;

/// A single `bits -> shortest decimal` expectation.
#[derive(Debug)]
struct Case {
    bits: u128,
    sign: bool,
    digits: u128,
    exponent: i32,
}

/// Parses lines of the form `3c01 +1001e-3`, skipping `--` comments.
fn parse(s: &str) -> Result<Vec<Case>> {
    let mut cases = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("--") {
            continue;
        }
        let (bits, dec) = line
            .split_once(' ')
            .with_context(|| format!("#{i}: missing separator: `{line}`"))?;
        let bits = u128::from_str_radix(bits, 16)
            .with_context(|| format!("#{i}: unable to parse bits: `{bits}`"))?;
        let (sign, dec) = match dec.split_at(1) {
            ("+", rest) => (false, rest),
            ("-", rest) => (true, rest),
            _ => bail!("#{i}: missing sign: `{dec}`"),
        };
        let (digits, exponent) = dec
            .split_once('e')
            .with_context(|| format!("#{i}: missing exponent: `{dec}`"))?;
        cases.push(Case {
            bits,
            sign,
            digits: digits
                .parse()
                .with_context(|| format!("#{i}: unable to parse digits: `{digits}`"))?,
            exponent: exponent
                .parse()
                .with_context(|| format!("#{i}: unable to parse exponent: `{exponent}`"))?,
        });
    }
    Ok(cases)
}

fn run(data: &str, convert: impl Fn(u128) -> Decimal) -> Result<()> {
    for case in parse(data)? {
        let got = convert(case.bits);
        let want = Decimal {
            sign: case.sign,
            digits: case.digits,
            exponent: case.exponent,
        };
        if got != want {
            bail!("{:#x}: got {got:?}, want {want:?}", case.bits);
        }
    }
    Ok(())
}

#[test]
fn binary16() -> Result<()> {
    run(include_str!("testdata/binary16.tsv"), |bits| {
        Decimal::from_f16_bits(bits as u16)
    })
}

#[test]
fn binary128() -> Result<()> {
    run(include_str!("testdata/binary128.tsv"), Decimal::from_f128_bits)
}

#[test]
fn extended80() -> Result<()> {
    run(include_str!("testdata/extended80.tsv"), |bits| {
        Decimal::from_extended_bits(bits, 64, 15)
    })
}
