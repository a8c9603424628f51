#![no_main]
use libfuzzer_sys::fuzz_target;
use zennim::*;

fuzz_target!(|data: &[u8]| {
    // First byte picks the width, second the profile length; the rest is pixels.
    let [w, p, rest @ ..] = data else {
        return;
    };
    let width = u32::from(*w).max(1);
    let profile_len = usize::from(*p).min(rest.len());
    let (profile, pixels) = rest.split_at(profile_len);
    let row = width as usize * 4;
    let height = pixels.len() / row;
    if height == 0 {
        return;
    }
    let pixels = &pixels[..height * row];

    let encoded = encode_nim(pixels, width, height as u32, Some(profile), enough::Unstoppable)
        .expect("valid buffer must encode");
    let decoded = decode_nim(&encoded, enough::Unstoppable).expect("encoded data must decode");

    assert_eq!(decoded.pixels(), pixels, "roundtrip pixel mismatch");
    assert_eq!(decoded.width, width);
    assert_eq!(decoded.height, height as u32);
    let expected_profile = if profile.is_empty() { None } else { Some(profile) };
    assert_eq!(decoded.color_profile(), expected_profile);
});
