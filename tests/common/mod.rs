#![allow(dead_code)]

use rand::Rng;
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub const ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

pub fn valid_transfer() -> Value {
    json!({
        "amount": 100,
        "on_behalf_of": "3f9c2c1e-8a7b-4d2e-9f10-2b3c4d5e6f70",
        "source": {
            "payment_rail": "wire",
            "currency": "USD",
            "prefunded_account_id": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d"
        },
        "destination": {
            "payment_rail": "crypto",
            "currency": "USDC",
            "to_address": ADDRESS
        }
    })
}

/// `len` hex digits with randomly mixed case.
pub fn random_hex<R: Rng>(rng: &mut R, len: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefABCDEF";
    (0..len)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
        .collect()
}

pub fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp fixture");
    file.write_all(contents.as_bytes()).expect("write temp fixture");
    file.flush().expect("flush temp fixture");
    file
}
