#![no_main]

use libfuzzer_sys::fuzz_target;
use rxaes::{available_backends, Backend, State};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First 64 bytes seed the fill state, the rest is the scratchpad
    let mut seed: State = [0u8; 64];
    let split = data.len().min(64);
    seed[..split].copy_from_slice(&data[..split]);
    let rest = &data[split..];
    let (blocks, _) = rest.as_chunks::<64>();

    // =============================================================================
    // REFERENCE (PORTABLE, SEPARATE PASSES)
    // =============================================================================

    let portable = Backend::portable();
    let expected_digest = portable.hash(blocks);
    let mut expected_state = seed;
    let mut expected_buf = vec![[0u8; 64]; blocks.len()];
    portable.fill_1r(&mut expected_state, &mut expected_buf);

    // =============================================================================
    // FUSED SWEEP ON EVERY BACKEND
    // =============================================================================

    for backend in available_backends() {
        let mut buf = blocks.to_vec();
        let mut state = seed;
        let digest = backend.hash_and_fill(&mut buf, &mut state);

        assert_eq!(digest, expected_digest, "{} digest mismatch", backend.name());
        assert_eq!(buf, expected_buf, "{} buffer mismatch", backend.name());
        assert_eq!(state, expected_state, "{} state mismatch", backend.name());
    }
});
