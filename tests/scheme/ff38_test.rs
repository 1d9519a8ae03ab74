#[cfg(test)]
mod tests {
    use crate::utils::code_of;
    use ff_industry::scheme::rules::{SIC_MAX, SIC_MIN};
    use ff_industry::{Classification, Scheme, classify, description_of, name_of};

    #[test]
    fn test_documented_scenarios() {
        let cases = [(900, 1, "Agric"), (6797, 35, "Money"), (9100, 37, "Govt")];
        for (sic, code, label) in cases {
            let result = Classification::of(Some(sic), Scheme::Ff38);
            assert_eq!(result.code.map(|c| c.get()), Some(code), "SIC {sic}");
            assert_eq!(result.label, Some(label), "SIC {sic}");
        }
    }

    #[test]
    fn test_two_digit_groups() {
        assert_eq!(code_of(1311, Scheme::Ff38), 3);
        assert_eq!(code_of(2050, Scheme::Ff38), 6);
        assert_eq!(code_of(2834, Scheme::Ff38), 14);
        assert_eq!(code_of(3571, Scheme::Ff38), 21);
        assert_eq!(code_of(3990, Scheme::Ff38), 25);
        assert_eq!(code_of(4820, Scheme::Ff38), 27);
        assert_eq!(code_of(4830, Scheme::Ff38), 28);
        assert_eq!(code_of(5001, Scheme::Ff38), 33);
        assert_eq!(code_of(7372, Scheme::Ff38), 36);
        assert_eq!(code_of(8999, Scheme::Ff38), 36);
    }

    #[test]
    fn test_gaps_fall_to_other() {
        for sic in [0, 99, 1800, 1999, 2662, 2699, 3880, 3899, 4980, 4999] {
            assert_eq!(code_of(sic, Scheme::Ff38), 38, "SIC {sic}");
        }
        assert_eq!(name_of(38, Scheme::Ff38).unwrap(), "Other");
        assert_eq!(description_of(38, Scheme::Ff38).unwrap(), "Almost Nothing");
    }

    #[test]
    fn test_rules_are_disjoint() {
        assert!(Scheme::Ff38.rules().overlaps().is_empty());
        assert!(Scheme::Ff38.rules().shadowed_spans().is_empty());
    }

    #[test]
    fn test_totality() {
        let mut seen = [false; 38];
        for sic in SIC_MIN..=SIC_MAX {
            let code = classify(Some(sic), Scheme::Ff38).unwrap();
            seen[code.index()] = true;
        }
        // Every group, including the catch-all, is reachable from the domain
        assert!(seen.iter().all(|&s| s));
    }
}
