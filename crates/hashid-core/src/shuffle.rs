/// Permutes `buffer` in place, driven by `salt`. An empty salt leaves
/// the buffer untouched.
///
/// Identical `(buffer, salt)` pairs always produce the identical
/// permutation; the encoder and decoder both lean on this to rebuild
/// the same alphabet states independently. The arithmetic is
/// integer-only, so the result is stable across platforms.
///
/// This is an index-swap walk, not a textbook Fisher-Yates: `v` cycles
/// through the salt while `p` accumulates the character values seen so
/// far, and both feed the swap target.
pub fn consistent_shuffle(buffer: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut v = 0usize;
    let mut p = 0usize;
    for i in (1..buffer.len()).rev() {
        v %= salt.len();
        let n = salt[v] as usize;
        p += n;
        let j = (n + v + p) % i;
        buffer.swap(i, j);
        v += 1;
    }
}
