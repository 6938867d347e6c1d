/// Period-over-period change. Negative when the current period is lower.
pub fn delta(current: f64, previous: f64) -> f64 {
    current - previous
}
