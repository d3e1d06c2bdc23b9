//! Log-likelihood statistics
//!
//! Every function returns `0.0` instead of evaluating `ln(0)` or dividing by
//! zero when a marginal count is empty.

/// `k * ln(p) + (n - k) * ln(1 - p)`, or zero when `p` is not in (0, 1)
fn binomial_log(k: f64, n_minus_k: f64, p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 || !p.is_finite() {
        return 0.0;
    }
    k * p.ln() + n_minus_k * (1.0 - p).ln()
}

/// Modified Dunning log-likelihood used for abbreviation detection
///
/// Compares the observed rate `count_b / n` of the event against an
/// alternative hypothesis fixed at 0.99: `count_a` occurrences of the type,
/// `count_ab` of them with the event.
pub fn dunning_log_likelihood(count_a: u64, count_b: u64, count_ab: u64, n: u64) -> f64 {
    if n == 0 || count_a == 0 || count_b == 0 {
        return 0.0;
    }
    let (a, b, ab, n) = (count_a as f64, count_b as f64, count_ab as f64, n as f64);

    let p1 = b / n;
    if p1 >= 1.0 {
        return 0.0;
    }
    let p2 = 0.99;

    let null_hypo = binomial_log(ab, a - ab, p1);
    let alt_hypo = binomial_log(ab, a - ab, p2);
    -2.0 * (null_hypo - alt_hypo)
}

/// Unmodified Dunning log-likelihood for collocations and sentence starters
///
/// `count_a` and `count_b` are the marginal counts of both events,
/// `count_ab` their joint count and `n` the sample size.
pub fn col_log_likelihood(count_a: u64, count_b: u64, count_ab: u64, n: u64) -> f64 {
    if n == 0 || count_a == 0 {
        return 0.0;
    }
    let (a, b, ab, n) = (count_a as f64, count_b as f64, count_ab as f64, n as f64);

    let p = b / n;
    let p1 = ab / a;
    let p2 = if n > a { (b - ab) / (n - a) } else { 1.0 };

    let summand1 = binomial_log(ab, a - ab, p);
    let summand2 = binomial_log(b - ab, n - a - b + ab, p);
    let summand3 = if count_a == count_ab {
        0.0
    } else {
        binomial_log(ab, a - ab, p1)
    };
    let summand4 = if count_b == count_ab {
        0.0
    } else {
        binomial_log(b - ab, n - a - b + ab, p2)
    };

    -2.0 * (summand1 + summand2 - summand3 - summand4)
}

/// Abbreviation score of a candidate type (given without its final period)
///
/// The log-likelihood that the type goes with a period is scaled by the
/// type's length (long words are rarely abbreviations), by its number of
/// internal periods, and by a penalty for each occurrence without a period.
pub fn abbreviation_score(
    typ: &str,
    count_with_period: u64,
    count_without_period: u64,
    period_tokens: u64,
    total_tokens: u64,
    ignore_penalty: bool,
) -> f64 {
    let num_periods = typ.matches('.').count() + 1;
    let num_nonperiods = typ.chars().count() + 1 - num_periods;

    let ll = dunning_log_likelihood(
        count_with_period + count_without_period,
        period_tokens,
        count_with_period,
        total_tokens,
    );

    let f_length = (-(num_nonperiods as f64)).exp();
    let f_periods = num_periods as f64;
    let f_penalty = if ignore_penalty {
        1.0
    } else {
        (num_nonperiods as f64).powf(-(count_without_period as f64))
    };

    ll * f_length * f_periods * f_penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_marginals_score_zero() {
        assert_eq!(dunning_log_likelihood(0, 5, 0, 100), 0.0);
        assert_eq!(dunning_log_likelihood(5, 0, 0, 100), 0.0);
        assert_eq!(dunning_log_likelihood(5, 5, 5, 0), 0.0);
        assert_eq!(col_log_likelihood(0, 5, 0, 100), 0.0);
        assert_eq!(col_log_likelihood(5, 5, 5, 0), 0.0);
    }

    #[test]
    fn test_degenerate_probabilities_are_finite() {
        // Every token is period-final
        assert_eq!(dunning_log_likelihood(4, 10, 4, 10), 0.0);
        // Joint count equals both marginals and the sample size
        assert!(col_log_likelihood(3, 3, 3, 3).is_finite());
        assert!(col_log_likelihood(2, 9, 2, 10).is_finite());
    }

    #[test]
    fn test_dunning_known_value() {
        // 2 of 2 occurrences with a period, 6 period tokens in 22
        let ll = dunning_log_likelihood(2, 6, 2, 22);
        let expected = -2.0 * (2.0 * (6.0f64 / 22.0).ln() - 2.0 * 0.99f64.ln());
        assert!((ll - expected).abs() < 1e-12);
        assert!(ll > 0.0);
    }

    #[test]
    fn test_col_log_likelihood_prefers_association() {
        let associated = col_log_likelihood(10, 10, 9, 1000);
        let independent = col_log_likelihood(10, 100, 1, 1000);
        assert!(associated > independent);
        assert!(associated > 7.88);
    }

    #[test]
    fn test_abbreviation_score_penalizes_bare_occurrences() {
        let clean = abbreviation_score("dr", 8, 0, 10, 50, false);
        let penalized = abbreviation_score("dr", 8, 1, 10, 50, false);
        let ignored = abbreviation_score("dr", 8, 1, 10, 50, true);
        assert!(penalized > 0.0);
        assert!(clean > penalized);
        assert!(ignored > penalized);
    }

    #[test]
    fn test_abbreviation_score_prefers_short_types() {
        let short = abbreviation_score("dr", 3, 0, 10, 50, false);
        let long = abbreviation_score("doctor", 3, 0, 10, 50, false);
        assert!(short > long);
    }

    #[test]
    fn test_internal_periods_count() {
        // "e.g" has two periods once the final one is restored, and two letters
        let dotted = abbreviation_score("e.g", 2, 0, 10, 50, false);
        let plain = abbreviation_score("eg", 2, 0, 10, 50, false);
        assert!((dotted - 2.0 * plain).abs() < 1e-9);
    }
}
