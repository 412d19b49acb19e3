use super::*;

fn flag<'a>(name: &'a str, value: &'a str) -> Option<RankSetting<'a>> {
    Some(RankSetting::new(value, name))
}

#[test]
fn unset_policy_never_violates() {
    let policy = ThresholdPolicy::default();
    assert!(policy.is_empty());
    for rank in Rank::ALL {
        assert!(!policy.violates_absolute(rank));
        assert!(!policy.violates_module(rank));
        assert!(!policy.violates_average(rank));
    }
}

#[test]
fn violation_requires_strictly_worse_rank() {
    let policy = ThresholdPolicy::new(Some(Rank::B), None, None);

    assert!(!policy.violates_absolute(Rank::A));
    assert!(!policy.violates_absolute(Rank::B));
    assert!(policy.violates_absolute(Rank::C));
    assert!(policy.violates_absolute(Rank::F));
}

#[test]
fn levels_are_independent() {
    let policy = ThresholdPolicy::new(None, Some(Rank::C), None);

    assert!(policy.violates_module(Rank::D));
    assert!(!policy.violates_absolute(Rank::F));
    assert!(!policy.violates_average(Rank::F));
}

#[test]
fn threshold_f_is_never_exceeded() {
    let policy = ThresholdPolicy::new(Some(Rank::F), Some(Rank::F), Some(Rank::F));
    for rank in Rank::ALL {
        assert!(!policy.violates_absolute(rank));
        assert!(!policy.violates_module(rank));
        assert!(!policy.violates_average(rank));
    }
}

#[test]
fn parse_reads_each_level() {
    let policy = ThresholdPolicy::parse(
        flag("--max-absolute", "b"),
        flag("--max-modules", "C"),
        flag("--max-average", "a"),
    )
    .unwrap();
    assert_eq!(policy, ThresholdPolicy::new(Some(Rank::B), Some(Rank::C), Some(Rank::A)));
    assert!(!policy.is_empty());
}

#[test]
fn parse_leaves_missing_levels_unset() {
    let policy = ThresholdPolicy::parse(None, flag("--max-modules", "D"), None).unwrap();
    assert_eq!(policy.absolute, None);
    assert_eq!(policy.modules, Some(Rank::D));
    assert_eq!(policy.average, None);
}

#[test]
fn parse_rejects_malformed_rank_and_names_option() {
    let err = ThresholdPolicy::parse(None, None, flag("--max-average", "Z")).unwrap_err();
    match err {
        XenonError::InvalidRank { option, value } => {
            assert_eq!(option, "--max-average");
            assert_eq!(value, "Z");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_rejects_multi_letter_rank() {
    assert!(ThresholdPolicy::parse(flag("--max-absolute", "AB"), None, None).is_err());
}

#[test]
fn parse_error_names_config_key_origin() {
    let err = ThresholdPolicy::parse(
        Some(RankSetting::new("X", "max_absolute in .xenon.toml")),
        None,
        None,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid rank \"X\" for max_absolute in .xenon.toml: expected a single letter between A and F"
    );
}
