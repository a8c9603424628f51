#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic; forged huge headers are capped.
    let limits = zennim::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    let _ = zennim::ImageInfo::from_bytes(data);
    let _ = zennim::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
