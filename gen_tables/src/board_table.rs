//! Combinations of community cards still to come.

/// most community cards that can still be dealt
pub const MAX_CARDS_TO_COME: usize = 5;

const CARD_COUNT: u8 = 52;

/// All `k` card combinations of the codes 1..=52 in lexicographic order.
///
/// The result is stored row-major with `k` rows, row `r` holds the r-th
/// card of every combination.
///
/// Panics if k is not 1 <= k <= 5.
pub fn board_combinations(k: usize) -> Vec<u8> {
    assert!(
        (1..=MAX_CARDS_TO_COME).contains(&k),
        "1 <= k <= {}",
        MAX_CARDS_TO_COME
    );

    let mut rows: Vec<Vec<u8>> = vec![Vec::new(); k];
    let mut combo: Vec<u8> = (1..=k as u8).collect();
    loop {
        for (row, code) in rows.iter_mut().zip(&combo) {
            row.push(*code);
        }

        // rightmost position that can still be advanced
        let mut i = k;
        loop {
            if i == 0 {
                return rows.concat();
            }
            i -= 1;
            if combo[i] < CARD_COUNT - (k - 1 - i) as u8 {
                break;
            }
        }
        combo[i] += 1;
        for j in i + 1..k {
            combo[j] = combo[j - 1] + 1;
        }
    }
}
