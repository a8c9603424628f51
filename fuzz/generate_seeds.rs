#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn adler32(data: &[u8]) -> u32 {
    let (mut a, mut b) = (1u32, 0u32);
    for &byte in data {
        a = (a + u32::from(byte)) % 65521;
        b = (b + a) % 65521;
    }
    (b << 16) | a
}

/// zlib stream holding `data` in a single stored (uncompressed) block.
fn zlib_stored(data: &[u8]) -> Vec<u8> {
    let len = data.len() as u16;
    let mut out = vec![0x78, 0x01, 0x01];
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&(!len).to_le_bytes());
    out.extend_from_slice(data);
    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

fn nim(width: u32, height: u32, profile: Option<&[u8]>, pixels: &[u8]) -> Vec<u8> {
    let mut out = b"NIM\0\x01".to_vec();
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.push(4);
    match profile {
        None => out.push(0),
        Some(p) => {
            out.push(1);
            out.extend_from_slice(&(p.len() as u32).to_be_bytes());
            out.extend_from_slice(p);
        }
    }
    out.extend_from_slice(&zlib_stored(pixels));
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    let red = [0xFFu8, 0x00, 0x00, 0xFF].repeat(4);
    fs::write(format!("{dir}/red_2x2.nim"), nim(2, 2, None, &red)).unwrap();
    fs::write(
        format!("{dir}/red_2x2_profile.nim"),
        nim(2, 2, Some(&[0xDE, 0xAD, 0xBE, 0xEF]), &red),
    )
    .unwrap();
    fs::write(format!("{dir}/one_pixel.nim"), nim(1, 1, None, &[1, 2, 3, 4])).unwrap();

    // Truncated/malformed seeds for edge coverage
    let full = nim(2, 2, None, &red);
    fs::write(format!("{dir}/truncated.nim"), &full[..full.len() - 1]).unwrap();
    fs::write(format!("{dir}/header_only.nim"), &full[..15]).unwrap();
    fs::write(format!("{dir}/size_mismatch.nim"), nim(3, 3, None, &red)).unwrap();
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"NIM\0").unwrap();

    println!("Generated seed corpus in {dir}/");
}
