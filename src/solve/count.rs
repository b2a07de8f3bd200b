use rustc_hash::FxHashMap;

use crate::solve::split::split_size;

/// Length of the sequence [`generate`](crate::solve::generate) produces for `discs` discs on
/// `towers` towers, or `None` if it does not fit in a `u64`.
///
/// Uses the generator's own recurrence, `M(n, t) = 2 M(k, t) + M(n - k, t - 1)`, so it agrees
/// with the generated list by construction while running in `O(n * t)` instead of
/// `O(moves)`.
pub fn predicted_move_count(discs: u32, towers: u32) -> Option<u64> {
    if discs == 0 {
        return Some(0);
    }
    if towers < 3 {
        // Only a single disc can move without a buffer.
        return (discs == 1).then_some(1);
    }
    let mut memo: FxHashMap<(u32, u32), u64> = FxHashMap::default();
    count(discs, towers, &mut memo)
}

fn count(discs: u32, towers: u32, memo: &mut FxHashMap<(u32, u32), u64>) -> Option<u64> {
    if discs <= 1 {
        return Some(u64::from(discs));
    }
    if discs < towers {
        // k = 1 at every level: 2 (n - 1) + 1
        return Some(2 * u64::from(discs) - 1);
    }
    if towers == 3 {
        // k = n - 1 unrolls to 2^n - 1.
        return match discs {
            0..=63 => Some((1u64 << discs) - 1),
            64 => Some(u64::MAX),
            _ => None,
        };
    }
    if let Some(&c) = memo.get(&(discs, towers)) {
        return Some(c);
    }

    // The parked part keeps `towers`, so walk that chain in a loop:
    // M(n0) = R0 + 2 R1 + 4 R2 + ... + 2^m M(nm, t), with Ri = M(ni - ki, t - 1).
    let mut n = discs;
    let mut weight = 1u64;
    let mut total = 0u64;
    while n >= towers {
        let k = split_size(n, towers);
        let rest = count(n - k, towers - 1, memo)?;
        total = total.checked_add(weight.checked_mul(rest)?)?;
        weight = weight.checked_mul(2)?;
        n = k;
    }
    let tail = count(n, towers, memo)?;
    let total = total.checked_add(weight.checked_mul(tail)?)?;

    memo.insert((discs, towers), total);
    Some(total)
}
