#![cfg(feature = "cli")]

use std::process::{Command, Output};

const ENCODE: &str = env!("CARGO_BIN_EXE_hexframe-encode");
const DECODE: &str = env!("CARGO_BIN_EXE_hexframe-decode");

fn encode(plaintext: &str, key: &str) -> Output {
    Command::new(ENCODE)
        .args([plaintext, key])
        .output()
        .expect("failed to run hexframe-encode")
}

fn decode(frame: &str, key: &str) -> Output {
    Command::new(DECODE)
        .args([frame, key])
        .output()
        .expect("failed to run hexframe-decode")
}

#[test]
fn hello_round_trip() {
    let out = encode("HELLO!", "shared-key");
    assert!(out.status.success());
    assert!(out.stderr.is_empty());

    // exactly the 34 frame characters, no trailing newline
    assert_eq!(out.stdout.len(), 34);
    assert!(out.stdout.iter().all(u8::is_ascii_hexdigit));

    let frame = String::from_utf8(out.stdout).unwrap();
    let out = decode(&frame, "shared-key");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"HELLO!\0\0\0\0\0\0\0\0\0\0");
}

#[test]
fn short_frame_is_a_parameter_error() {
    let out = decode(&"A".repeat(33), "shared-key");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(out.stderr, b"parameter error\n");
}

#[test]
fn overlong_frame_is_a_parameter_error() {
    let out = decode(&"A".repeat(35), "shared-key");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stderr, b"parameter error\n");
}

#[test]
fn corrupted_checksum_is_a_checksum_error() {
    let out = encode("HELLO!", "shared-key");
    let frame = String::from_utf8(out.stdout).unwrap();

    // bump the decoded checksum byte by one and re-encode the field
    let carried = u8::from_str_radix(&frame[32..], 16).unwrap();
    let tampered = format!("{}{:02X}", &frame[..32], carried.wrapping_add(1));

    let out = decode(&tampered, "shared-key");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(out.stderr, b"checksum error\n");
}

#[test]
fn long_plaintext_truncates_silently() {
    let long = "sixteen byte key plus trailing garbage";

    let out_long = encode(long, "shared-key");
    let out_head = encode(&long[..16], "shared-key");

    assert!(out_long.status.success());
    assert!(out_long.stderr.is_empty());
    assert_eq!(out_long.stdout, out_head.stdout);
}

#[test]
fn missing_arguments_are_a_parameter_error() {
    for args in [&[][..], &["only-one-argument"][..]] {
        for tool in [ENCODE, DECODE] {
            let out = Command::new(tool)
                .args(args)
                .output()
                .expect("failed to run tool");
            assert_eq!(out.status.code(), Some(1));
            assert_eq!(out.stderr, b"parameter error\n");
        }
    }
}

#[test]
fn wrong_key_garbles_but_does_not_error() {
    let out = encode("HELLO!", "shared-key");
    let frame = String::from_utf8(out.stdout).unwrap();

    // the checksum protects the frame, not the key choice; a wrong key
    // decodes cleanly to the wrong plaintext
    let out = decode(&frame, "other-key");
    assert!(out.status.success());
    assert_eq!(out.stdout.len(), 16);
    assert_ne!(out.stdout, b"HELLO!\0\0\0\0\0\0\0\0\0\0");
}
