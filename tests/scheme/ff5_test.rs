#[cfg(test)]
mod tests {
    use crate::utils::code_of;
    use ff_industry::scheme::rules::{RuleOverlap, SIC_MAX, SIC_MIN, SicSpan};
    use ff_industry::{Classification, Scheme, classify, name_of};

    #[test]
    fn test_documented_scenarios() {
        let other = Classification::of(Some(1500), Scheme::Ff5);
        assert_eq!(other.code.map(|c| c.get()), Some(5));
        assert_eq!(other.label, Some("Other"));

        let hlth = Classification::of(Some(8001), Scheme::Ff5);
        assert_eq!(hlth.code.map(|c| c.get()), Some(4));
        assert_eq!(hlth.label, Some("Hlth"));
    }

    #[test]
    fn test_independent_of_ff12() {
        // Energy and utilities fold into Manuf; Telcm folds into HiTec
        assert_eq!(code_of(1311, Scheme::Ff5), 2);
        assert_eq!(code_of(4911, Scheme::Ff5), 2);
        assert_eq!(code_of(4813, Scheme::Ff5), 3);
        // Finance is Other here, not its own group
        assert_eq!(code_of(6021, Scheme::Ff5), 5);
        // HiTec extras with no FF12 BusEq counterpart
        assert_eq!(code_of(7391, Scheme::Ff5), 3);
        assert_eq!(code_of(8731, Scheme::Ff5), 3);
        assert_eq!(code_of(7380, Scheme::Ff5), 5);
    }

    #[test]
    fn test_earlier_rule_wins_on_overlap() {
        // 3622 and 3830-3839 are listed under both Manuf and HiTec
        assert_eq!(code_of(3622, Scheme::Ff5), 2);
        for sic in 3830..=3839 {
            assert_eq!(code_of(sic, Scheme::Ff5), 2, "SIC {sic}");
        }
        assert_eq!(code_of(3829, Scheme::Ff5), 3);
        assert_eq!(code_of(3810, Scheme::Ff5), 3);
    }

    #[test]
    fn test_overlaps_are_exactly_the_published_ones() {
        let overlaps = Scheme::Ff5.rules().overlaps();
        let mut expected = vec![RuleOverlap {
            sic: 3622,
            winner: 2,
            shadowed: 3,
        }];
        expected.extend((3830..=3839).map(|sic| RuleOverlap {
            sic,
            winner: 2,
            shadowed: 3,
        }));
        assert_eq!(overlaps, expected);
    }

    #[test]
    fn test_shadowed_singleton_is_reported() {
        assert_eq!(
            Scheme::Ff5.rules().shadowed_spans(),
            vec![(3, SicSpan::Exact(3622))]
        );
    }

    #[test]
    fn test_consumer_singletons() {
        for sic in [3714, 3716, 3792] {
            assert_eq!(code_of(sic, Scheme::Ff5), 1, "SIC {sic}");
        }
        assert_eq!(code_of(3715, Scheme::Ff5), 2);
    }

    #[test]
    fn test_totality_and_labels() {
        for sic in SIC_MIN..=SIC_MAX {
            let code = classify(Some(sic), Scheme::Ff5).unwrap().get();
            assert!((1..=5).contains(&code), "SIC {sic} -> {code}");
        }
        let labels: Vec<&str> = (1..=5).map(|c| name_of(c, Scheme::Ff5).unwrap()).collect();
        assert_eq!(labels, vec!["Cnsmr", "Manuf", "HiTec", "Hlth", "Other"]);
    }
}
