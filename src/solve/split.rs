/// Number of discs moved to a single buffer tower before the remaining ones go straight to
/// the destination, for `discs >= 2` on `towers >= 3`.
///
/// - 3 towers: the classical `n - 1`
/// - 4 towers: `n - round(sqrt(2n + 1)) + 1`
/// - 5+ towers: `n / 3`
/// - fewer discs than towers: always 1
///
/// Every branch yields `1 <= k < n` for the inputs it is reached with.
pub fn split_size(discs: u32, towers: u32) -> u32 {
    debug_assert!(discs >= 2 && towers >= 3);
    if discs < towers {
        return 1;
    }
    match towers {
        3 => discs - 1,
        4 => {
            // sqrt of an integer is never exactly x.5, so rounding direction is moot.
            let root = (2.0 * f64::from(discs) + 1.0).sqrt().round() as u32;
            discs - root + 1
        }
        _ => discs / 3,
    }
}
