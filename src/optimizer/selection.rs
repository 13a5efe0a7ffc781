use crate::scorer::Score;
use fastrand::Rng;

/// Selection probabilities for a population sorted best-first. Equal
/// neighbours share a rank; weight is `max_rank / rank`, then normalized.
pub fn rank_weights(sorted_scores: &[Score]) -> Vec<f64> {
    if sorted_scores.is_empty() {
        return Vec::new();
    }

    let mut ranks = Vec::with_capacity(sorted_scores.len());
    let mut rank = 1usize;
    ranks.push(rank);
    for pair in sorted_scores.windows(2) {
        if pair[1] != pair[0] {
            rank += 1;
        }
        ranks.push(rank);
    }

    let max_rank = rank as f64;
    let raw: Vec<f64> = ranks.iter().map(|&r| max_rank / r as f64).collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

/// Rank-based roulette over a sorted population.
#[derive(Debug, Clone)]
pub struct RankSelector {
    cumulative: Vec<f64>,
}

impl RankSelector {
    pub fn new(sorted_scores: &[Score]) -> Self {
        let mut acc = 0.0;
        let cumulative = rank_weights(sorted_scores)
            .into_iter()
            .map(|w| {
                acc += w;
                acc
            })
            .collect();
        Self { cumulative }
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Draws a parent index. Falls back to the best individual if rounding
    /// leaves the draw past the last bucket.
    pub fn sample(&self, rng: &mut Rng) -> usize {
        let x = rng.f64();
        let idx = self.cumulative.partition_point(|&c| c <= x);
        if idx < self.cumulative.len() {
            idx
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_shared_ranks() {
        // ranks 1,1,2,3 -> raw 3,3,1.5,1 -> total 8.5
        let w = rank_weights(&[0, 0, -2, -5]);
        assert!(close(w[0], 3.0 / 8.5));
        assert!(close(w[1], w[0]));
        assert!(close(w[2], 1.5 / 8.5));
        assert!(close(w[3], 1.0 / 8.5));
        assert!(close(w.iter().sum::<f64>(), 1.0));
    }

    #[test]
    fn test_uniform_population() {
        let w = rank_weights(&[-3, -3, -3, -3]);
        assert!(w.iter().all(|&p| close(p, 0.25)));
    }

    #[test]
    fn test_sampling_prefers_best() {
        let selector = RankSelector::new(&[5, 4, 3, 2, 1, 0, -1, -2]);
        let mut rng = Rng::with_seed(42);
        let mut counts = [0usize; 8];
        for _ in 0..20_000 {
            counts[selector.sample(&mut rng)] += 1;
        }
        assert!(counts[0] > counts[1]);
        assert!(counts[1] > counts[7]);
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn test_single_individual() {
        let selector = RankSelector::new(&[-10]);
        let mut rng = Rng::with_seed(1);
        assert_eq!(selector.sample(&mut rng), 0);
    }
}
