use bolero::check;
use rxaes::{expand_1r, expand_4r, KeySchedule, State};

fn split(seed: &[u8]) -> (State, usize, usize) {
    let mut state = [0u8; 64];
    let n = seed.len().min(64);
    state[..n].copy_from_slice(&seed[..n]);
    let total = seed.len() % 24;
    let cut = seed.first().map_or(0, |&b| usize::from(b) % (total + 1));
    (state, total * 64, cut * 64)
}

#[test]
fn fuzz_fill_1r_resumable() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let (seed, total, cut) = split(data);

        let mut whole_state = seed;
        let whole = expand_1r(&mut whole_state, total).unwrap();

        let mut state = seed;
        let mut parts = expand_1r(&mut state, cut).unwrap();
        parts.extend(expand_1r(&mut state, total - cut).unwrap());

        assert_eq!(parts, whole, "1R stream diverged at cut {cut}");
        assert_eq!(state, whole_state);
    });
}

#[test]
fn fuzz_fill_4r_resumable() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(data, key_seed)| {
            let (seed, total, cut) = split(data);
            let mut key_bytes = [0u8; 128];
            for (dst, src) in key_bytes.iter_mut().zip(key_seed) {
                *dst = *src;
            }
            let keys = KeySchedule::from_bytes(&key_bytes);

            let mut whole_state = seed;
            let whole = expand_4r(&mut whole_state, total, &keys).unwrap();

            let mut state = seed;
            let mut parts = expand_4r(&mut state, cut, &keys).unwrap();
            parts.extend(expand_4r(&mut state, total - cut, &keys).unwrap());

            assert_eq!(parts, whole, "4R stream diverged at cut {cut}");
            assert_eq!(state, whole_state);
        });
}
