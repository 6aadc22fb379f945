use bolero::check;
use rxaes::{fill_1r, hash, hash_and_fill};

#[test]
fn fuzz_fused_equivalence() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(data, seed_bytes)| {
            let mut seed = [0u8; 64];
            for (dst, src) in seed.iter_mut().zip(seed_bytes) {
                *dst = *src;
            }
            let aligned = &data[..data.len() - data.len() % 64];

            // =============================================================================
            // REFERENCE (SEPARATE PASSES)
            // =============================================================================
            let expected_digest = hash(aligned).unwrap();
            let mut expected_state = seed;
            let mut expected_buf = vec![0u8; aligned.len()];
            fill_1r(&mut expected_state, &mut expected_buf).unwrap();

            // =============================================================================
            // FUSED SWEEP
            // =============================================================================
            let mut buf = aligned.to_vec();
            let mut state = seed;
            let digest = hash_and_fill(&mut buf, &mut state).unwrap();

            assert_eq!(digest, expected_digest, "Fused digest mismatch");
            assert_eq!(buf, expected_buf, "Fused buffer mismatch");
            assert_eq!(state, expected_state, "Fused state mismatch");
        });
}
