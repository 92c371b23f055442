use rand::Rng;

/// Fallback source for restaurants whose records carry no review count.
///
/// The production catalog predates review analytics, so a placeholder count
/// is sampled instead. Kept behind a port so tests can pin a fixed value and
/// mapping stays deterministic under test.
pub trait ReviewCountSampler: Send + Sync {
    fn sample(&self) -> i64;
}

/// Samples uniformly in `[10, 110)`.
pub struct UniformReviewCounts;

impl ReviewCountSampler for UniformReviewCounts {
    fn sample(&self) -> i64 {
        rand::rng().random_range(10..110)
    }
}
