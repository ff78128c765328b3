use crate::config::settings::RatingSettings;

/// Result of rating one finished game across the whole field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub new_ratings: Vec<i64>,
    pub scores: Vec<i64>,
    pub expected: Vec<f64>,
}

/// Logistic pairwise update generalized to an n-way field.
///
/// Expected scores are normalized over all participants at once, so they sum
/// to 1 across the field; for n = 2 this collapses to the classic two-player
/// formula. Ratings round half-to-even.
///
/// Callers validate `winner < ratings.len()` and `ratings.len() >= 2` before
/// calling.
pub fn rate_field(ratings: &[i64], winner: usize, settings: &RatingSettings) -> FieldUpdate {
    let strengths = compute_strengths(ratings, settings.scale);
    let total: f64 = strengths.iter().sum();
    let scores = outcome_vector(ratings.len(), winner);

    let mut expected = Vec::with_capacity(ratings.len());
    let mut new_ratings = Vec::with_capacity(ratings.len());

    for (idx, &rating) in ratings.iter().enumerate() {
        let share = strengths[idx] / total;
        let updated = rating as f64 + settings.k_factor * (scores[idx] as f64 - share);
        expected.push(share);
        new_ratings.push(updated.round_ties_even() as i64);
    }

    FieldUpdate {
        new_ratings,
        scores,
        expected,
    }
}

fn compute_strengths(ratings: &[i64], scale: f64) -> Vec<f64> {
    ratings
        .iter()
        .map(|&rating| 10f64.powf(rating as f64 / scale))
        .collect()
}

fn outcome_vector(field_size: usize, winner: usize) -> Vec<i64> {
    let mut scores = vec![0; field_size];
    scores[winner] = 1;
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> RatingSettings {
        RatingSettings::default()
    }

    #[test]
    fn test_two_player_equal_ratings() {
        let update = rate_field(&[1000, 1000], 0, &settings());

        assert_eq!(update.new_ratings, vec![1016, 984]);
        assert_eq!(update.scores, vec![1, 0]);
        assert_eq!(update.expected, vec![0.5, 0.5]);
    }

    #[test]
    fn test_output_length_and_expected_sum() {
        let ratings = vec![1340, 1000, 870, 1105, 990];
        let update = rate_field(&ratings, 2, &settings());

        assert_eq!(update.new_ratings.len(), ratings.len());
        assert_eq!(update.scores.len(), ratings.len());
        let total: f64 = update.expected.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_field_symmetry() {
        // All equal: winner gains k*(1 - 1/n), every loser drops k/n.
        let update = rate_field(&[1000, 1000, 1000, 1000], 1, &settings());

        assert_eq!(update.new_ratings, vec![992, 1024, 992, 992]);
        let delta: i64 = update
            .new_ratings
            .iter()
            .map(|&rating| rating - 1000)
            .sum();
        assert_eq!(delta, 0);
    }

    #[test]
    fn test_three_way_favorite_wins() {
        let update = rate_field(&[1200, 1000, 800], 0, &settings());

        assert!(update.expected[0] > update.expected[1]);
        assert!(update.expected[1] > update.expected[2]);
        // The favorite gains less than a full k * (1 - e_0) swing allows.
        assert_eq!(update.new_ratings, vec![1209, 993, 798]);
        assert!(update.new_ratings[0] - 1200 < 32);
    }

    #[test]
    fn test_input_not_mutated() {
        let ratings = vec![1100, 900];
        let _ = rate_field(&ratings, 1, &settings());
        assert_eq!(ratings, vec![1100, 900]);
    }

    #[test]
    fn test_underdog_win_swings_harder() {
        let underdog = rate_field(&[800, 1200], 0, &settings());
        let favorite = rate_field(&[800, 1200], 1, &settings());

        let underdog_gain = underdog.new_ratings[0] - 800;
        let favorite_gain = favorite.new_ratings[1] - 1200;
        assert!(underdog_gain > favorite_gain);
    }
}
