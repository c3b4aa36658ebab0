// https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance
// (optimal string alignment: a transposition counts as a single edit)
fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() {
        return b.len();
    }

    if b.is_empty() {
        return a.len();
    }

    let a = if a.len() > 32 { &a[..32] } else { a };
    let b = if b.len() > 32 { &b[..32] } else { b };

    // table[i][j]: distance between `a[..i]` and `b[..j]`
    let mut table = vec![vec![0; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        table[i][0] = i;
    }

    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let indicator = (a[i - 1] != b[j - 1]) as usize;
            let mut result = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + indicator);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                result = result.min(table[i - 2][j - 2] + 1);
            }

            table[i][j] = result;
        }
    }

    table[a.len()][b.len()]
}

// lowercase
// remove `_`s and `-`s
fn preprocess(s: &[u8]) -> Vec<u8> {
    s.iter().map(
        |c| c.to_ascii_lowercase()
    ).filter(
        |c| *c != b'_' && *c != b'-'
    ).collect()
}

/// How far `sub` is from `s` or any substring of `s`. It's used to
/// find the flag or the function name that the user meant to type.
///
/// It's quadratic in the length of `s`. Don't call it in a hot loop.
pub fn substr_edit_distance(sub: &[u8], s: &[u8]) -> usize {
    let sub = &preprocess(sub);
    let s = &preprocess(s);

    if sub == s {
        0
    }

    else if sub.len() > s.len() || s.len() < 4 {
        edit_distance(sub, s)
    }

    // `verb` is close to `verbose`
    else if sub.len() * 2 > s.len() {
        let mut result = edit_distance(sub, s);

        for start in 0..s.len() {
            for end in (start + 1)..=s.len() {
                result = result.min(
                    edit_distance(sub, &s[start..end])
                );
            }
        }

        result
    }

    else {
        edit_distance(sub, s)
    }
}
