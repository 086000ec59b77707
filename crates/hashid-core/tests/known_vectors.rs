use hashid_core::{Hashid, Hashids, HashidsSettings, SingleDecodeError};

fn with_salt(salt: &str) -> Hashids {
    Hashids::new(HashidsSettings::builder().salt(salt).build()).expect("valid settings")
}

fn with_min_length(salt: &str, min_hash_length: usize) -> Hashids {
    Hashids::new(
        HashidsSettings::builder()
            .salt(salt)
            .min_hash_length(min_hash_length)
            .build(),
    )
    .expect("valid settings")
}

#[test]
fn round_trips_across_a_value_sweep() {
    let hashids = with_salt("this is my salt");

    for number in (0u64..2000).chain([9_007_199_254_740_991, u64::MAX]) {
        let hash = hashids.encode(&[number]);
        assert_eq!(hashids.decode(hash.as_str()), vec![number], "number {number}");
    }
}

#[test]
fn round_trips_multi_number_sequences() {
    let hashids = with_salt("this is my salt");

    let sequences: &[&[u64]] = &[
        &[1, 2, 3],
        &[0, 0, 0],
        &[0, 1, 2],
        &[1, 2, 0],
        &[35887507618889472, 30720, i64::MAX as u64],
        &[4140, 21147, 115975, 678570, 4213597, 27644437],
    ];

    for numbers in sequences {
        let hash = hashids.encode(numbers);
        assert_eq!(&hashids.decode(hash.as_str()), numbers);
    }
}

#[test]
fn order_is_significant() {
    let hashids = with_salt("this is my salt");

    let forward = hashids.encode(&[1, 2, 3]);
    let backward = hashids.encode(&[3, 2, 1]);
    assert_ne!(forward, backward);

    assert_eq!(hashids.decode(forward.as_str()), vec![1, 2, 3]);
    assert_eq!(hashids.decode(backward.as_str()), vec![3, 2, 1]);
}

#[test]
fn hashes_from_one_salt_do_not_decode_under_another() {
    let first = with_salt("this is my salt");
    let second = with_salt("this is my pepper");

    for numbers in [&[1u64][..], &[45, 434, 1313, 99][..]] {
        let hash = first.encode(numbers);
        assert_eq!(second.decode(hash.as_str()), Vec::<u64>::new());
    }
}

#[test]
fn hashes_from_one_min_length_do_not_decode_under_another() {
    let plain = with_salt("this is my salt");
    let padded = with_min_length("this is my salt", 30);

    let hash = plain.encode(&[1, 2, 3]);
    assert_eq!(padded.decode(hash.as_str()), Vec::<u64>::new());
}

#[test]
fn minimum_length_holds_for_all_inputs() {
    for min_hash_length in [0, 1, 8, 13, 1000] {
        let hashids = with_min_length("this is my salt", min_hash_length);

        for numbers in [&[0u64][..], &[1, 2, 3][..], &[u64::MAX][..]] {
            let hash = hashids.encode(numbers);
            assert!(
                hash.len() >= min_hash_length,
                "len {} < min {min_hash_length}",
                hash.len()
            );
            assert_eq!(&hashids.decode(hash.as_str()), numbers);
        }
    }
}

#[test]
fn padded_hashes_keep_known_shape() {
    let hashids = with_min_length("this is my salt", 8);
    assert_eq!(hashids.decode("gB0NV05e"), vec![1]);

    let hash = hashids.encode(&[1]);
    assert_eq!(hash, "gB0NV05e");
}

#[test]
fn truncated_hashes_never_yield_the_original_numbers() {
    let hashids = with_salt("this is my salt");
    let hash = hashids.encode(&[683, 94108, 123, 5]);
    let text = hash.as_str();

    // A truncated hash may happen to be a valid hashid of something
    // else, but the round-trip check rules out the original sequence.
    for end in 1..text.len() {
        assert_ne!(hashids.decode(&text[..end]), vec![683, 94108, 123, 5]);
    }
}

#[test]
fn single_decode_distinguishes_failure_kinds() {
    let hashids = with_salt("this is my salt");

    let one = hashids.encode(&[42]);
    let two = hashids.encode(&[42, 43]);

    assert_eq!(hashids.decode_single(one.as_str()), Ok(42));
    assert_eq!(
        hashids.decode_single(two.as_str()),
        Err(SingleDecodeError::MultipleResults)
    );
    assert_eq!(hashids.decode_single(""), Err(SingleDecodeError::NoResult));
}

#[test]
fn concurrent_use_of_a_shared_instance() {
    let hashids = std::sync::Arc::new(with_salt("this is my salt"));
    let mut handles = Vec::new();

    for offset in 0..4u64 {
        let hashids = hashids.clone();
        handles.push(std::thread::spawn(move || {
            for n in (offset * 250)..(offset * 250 + 250) {
                let hash = hashids.encode(&[n]);
                assert_eq!(hashids.decode(hash.as_str()), vec![n]);
            }
        }));
    }

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}

#[test]
fn hashid_serializes_as_a_plain_string() {
    let hashids = with_salt("this is my salt");
    let hash = hashids.encode(&[683, 94108, 123, 5]);

    let json = serde_json::to_string(&hash).expect("serialize");
    assert_eq!(json, "\"aBMswoO2UB3Sj\"");

    let back: Hashid = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, hash);
}
