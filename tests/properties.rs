use enough::Unstoppable;
use proptest::collection::vec;
use proptest::prelude::*;
use zennim::*;

/// Dimensions plus a matching RGBA buffer. Kept small so each case is fast;
/// one side is allowed to reach the 4096 edge.
fn image() -> impl Strategy<Value = (u32, u32, Vec<u8>)> {
    prop_oneof![
        (1u32..=64, 1u32..=64),
        (1u32..=4096, 1u32..=2),
        (1u32..=2, 1u32..=4096),
    ]
    .prop_flat_map(|(w, h)| {
        let len = (w * h * 4) as usize;
        (Just(w), Just(h), vec(any::<u8>(), len))
    })
}

fn profile() -> impl Strategy<Value = Option<Vec<u8>>> {
    prop_oneof![Just(None), vec(any::<u8>(), 1..=4096).prop_map(Some)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn decode_inverts_encode((w, h, pixels) in image(), profile in profile()) {
        let encoded = encode_nim(&pixels, w, h, profile.as_deref(), Unstoppable).unwrap();
        let decoded = decode_nim(&encoded, Unstoppable).unwrap();
        prop_assert_eq!(decoded.width, w);
        prop_assert_eq!(decoded.height, h);
        prop_assert_eq!(decoded.pixels(), &pixels[..]);
        prop_assert_eq!(decoded.color_profile(), profile.as_deref());
    }

    #[test]
    fn header_fields_match_input((w, h, pixels) in image(), profile in profile()) {
        let encoded = encode_nim(&pixels, w, h, profile.as_deref(), Unstoppable).unwrap();
        prop_assert_eq!(&encoded[..4], b"NIM\0");
        prop_assert_eq!(encoded[4], 1);
        prop_assert_eq!(&encoded[5..9], &w.to_be_bytes());
        prop_assert_eq!(&encoded[9..13], &h.to_be_bytes());
        prop_assert_eq!(encoded[13], 4);
        let info = ImageInfo::from_bytes(&encoded).unwrap();
        prop_assert_eq!(info.profile_len, profile.as_ref().map(|p| p.len() as u32));
        match &profile {
            None => prop_assert_eq!(info.data_offset, 15),
            Some(p) => prop_assert_eq!(info.data_offset, 19 + p.len()),
        }
    }

    #[test]
    fn truncated_input_never_decodes((w, h, pixels) in image(), cut in 1usize..32) {
        let encoded = encode_nim(&pixels, w, h, None, Unstoppable).unwrap();
        let keep = encoded.len().saturating_sub(cut);
        prop_assert!(decode_nim(&encoded[..keep], Unstoppable).is_err());
    }
}
