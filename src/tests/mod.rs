use super::*;

// Deterministic pseudo-random stream for fuzz-style tests (constants from
// Numerical Recipes). Keeps the suite reproducible without a fuzz crate.
fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(1664525).wrapping_add(1013904223);
    *state
}

fn lcg_string(state: &mut u64, alphabet: &[char], max_len: usize) -> String {
    let len = (lcg_next(state) as usize) % max_len;
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = (lcg_next(state) >> 16) as usize % alphabet.len();
        out.push(alphabet[idx]);
    }
    out
}

mod strings_escapes;
mod strings_quotes;
