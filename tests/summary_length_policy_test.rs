use doctasks::application::ports::SummaryParams;
use doctasks::application::services::SummaryLengthPolicy;

#[test]
fn given_default_policy_when_computing_params_then_uses_fixed_bounds() {
    let params = SummaryLengthPolicy::default().params_for("any text at all");

    assert_eq!(
        params,
        SummaryParams {
            max_length: 130,
            min_length: 30,
        }
    );
}

#[test]
fn given_fixed_policy_with_inverted_bounds_when_computing_params_then_caps_min_at_max() {
    let policy = SummaryLengthPolicy::Fixed {
        max_length: 20,
        min_length: 50,
    };

    assert_eq!(policy.params_for("text").min_length, 20);
}

#[test]
fn given_proportional_policy_when_chunk_is_long_then_scales_with_word_count() {
    let policy = SummaryLengthPolicy::Proportional {
        ratio: 0.5,
        min_length: 10,
        floor: 20,
        ceiling: 200,
    };
    let text = "word ".repeat(100);

    assert_eq!(policy.params_for(&text).max_length, 50);
}

#[test]
fn given_proportional_policy_when_chunk_is_short_or_huge_then_clamps_to_range() {
    let policy = SummaryLengthPolicy::Proportional {
        ratio: 0.5,
        min_length: 10,
        floor: 20,
        ceiling: 200,
    };

    assert_eq!(policy.params_for("tiny").max_length, 20);
    assert_eq!(policy.params_for(&"word ".repeat(2000)).max_length, 200);
}

#[test]
fn given_proportional_policy_when_floor_below_min_then_max_stays_above_min() {
    let policy = SummaryLengthPolicy::Proportional {
        ratio: 0.1,
        min_length: 30,
        floor: 5,
        ceiling: 100,
    };

    let params = policy.params_for("a few words");

    assert_eq!(params.max_length, 31);
    assert_eq!(params.min_length, 30);
}
