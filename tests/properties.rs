use covbadge::badge::{color_and_label, ColorTier};
use covbadge::model::{parse_percentage, ratio};
use covbadge::paths::resolve;
use proptest::prelude::*;

proptest! {
    #[test]
    fn nothing_missed_is_full_coverage(covered in 0u64..1_000_000) {
        prop_assert_eq!(ratio(covered, 0), 1.0);
    }

    #[test]
    fn ratio_is_monotonic(covered in 1u64..100_000, missed in 1u64..100_000) {
        let r = ratio(covered, missed);
        prop_assert!(r > 0.0 && r < 1.0);
        prop_assert!(ratio(covered, missed + 1) < r);
        prop_assert!(ratio(covered + 1, missed) > r);
    }

    #[test]
    fn percentage_forms_agree(tenths in 11u32..1000) {
        let percent = format!("{}.{}", tenths / 10, tenths % 10);
        let with_sign = parse_percentage(&format!("{percent}%"));
        prop_assert_eq!(with_sign, parse_percentage(&percent));
    }

    #[test]
    fn garbage_parses_to_zero(s in "[a-zA-Z]*") {
        // "inf" and "nan" are numbers to the float parser
        let lower = s.to_lowercase();
        prop_assume!(!["inf", "infinity", "nan"].contains(&lower.as_str()));
        prop_assert_eq!(parse_percentage(&s), 0.0);
    }

    #[test]
    fn every_ratio_has_a_tier(r in -10.0f64..10.0) {
        let (label, tier) = color_and_label(r);
        prop_assert!(tier.index() < ColorTier::ALL.len());
        prop_assert!(label.ends_with('%'));
    }

    #[test]
    fn label_never_rounds_up(r in 0.0f64..=1.0) {
        let (label, _) = color_and_label(r);
        let shown: f64 = label.trim_end_matches('%').parse().unwrap();
        prop_assert!(shown <= r * 100.0 + 1e-9);
    }

    #[test]
    fn resolved_paths_are_relative(
        dir in "(\\./)?/?[a-z]{0,3}(/[a-z]{1,3}){0,2}/?",
        file in "(\\./)?/?[a-z]{1,5}\\.svg",
    ) {
        let path = resolve(&dir, &file);
        prop_assert!(!path.starts_with('/'));
        prop_assert!(!path.starts_with("./"));
        prop_assert!(!path.contains("//"));
        prop_assert!(path.ends_with(".svg"));
    }
}

#[test]
fn equivalent_percentage_forms() {
    assert_eq!(parse_percentage("60.2%"), parse_percentage("60.2"));
    assert_eq!(parse_percentage("60.2"), parse_percentage("0.602"));
}
