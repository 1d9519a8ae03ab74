//! Fama-French 5 industry portfolios
//!
//! Boundaries follow the definitions on Ken French's data library page,
//! rechecked against current classifications on 2021-03-24.
//!
//! The HiTec rule lists `3622` and `3830-3839`, both of which Manuf claims
//! first. They stay in the table as published; first-match assigns them to
//! Manuf.

use super::names::{IndustryName, NameTable};
use super::rules::SicSpan::{Exact, Range};
use super::rules::{IndustryRule, RuleTable, SicSpan};
use super::Scheme;

const CNSMR: &[SicSpan] = &[
    Range(100, 999),
    Range(2000, 2399),
    Range(2700, 2749),
    Range(2770, 2799),
    Range(3100, 3199),
    Range(3940, 3989),
    Range(2500, 2519),
    Range(2590, 2599),
    Range(3630, 3659),
    Range(3710, 3711),
    Exact(3714),
    Exact(3716),
    Range(3750, 3751),
    Exact(3792),
    Range(3900, 3939),
    Range(3990, 3999),
    Range(5000, 5999),
    Range(7200, 7299),
    Range(7600, 7699),
];

const MANUF: &[SicSpan] = &[
    Range(2520, 2589),
    Range(2600, 2699),
    Range(2750, 2769),
    Range(2800, 2829),
    Range(2840, 2899),
    Range(3000, 3099),
    Range(3200, 3569),
    Range(3580, 3629),
    Range(3700, 3709),
    Range(3712, 3713),
    Exact(3715),
    Range(3717, 3749),
    Range(3752, 3791),
    Range(3793, 3799),
    Range(3830, 3839),
    Range(3860, 3899),
    Range(1200, 1399),
    Range(2900, 2999),
    Range(4900, 4949),
];

const HITEC: &[SicSpan] = &[
    Range(3570, 3579),
    Exact(3622),
    Range(3660, 3692),
    Range(3694, 3699),
    Range(3810, 3839),
    Range(7370, 7372),
    Exact(7373),
    Exact(7374),
    Exact(7375),
    Exact(7376),
    Exact(7377),
    Exact(7378),
    Exact(7379),
    Exact(7391),
    Range(8730, 8734),
    Range(4800, 4899),
];

const HLTH: &[SicSpan] = &[
    Range(2830, 2839),
    Exact(3693),
    Range(3840, 3859),
    Range(8000, 8099),
];

const RULES: &[IndustryRule] = &[
    IndustryRule::spans(1, CNSMR),
    IndustryRule::spans(2, MANUF),
    IndustryRule::spans(3, HITEC),
    IndustryRule::spans(4, HLTH),
    IndustryRule::catch_all(5),
];

const NAMES: &[IndustryName] = &[
    IndustryName::new(1, "Cnsmr", "Consumer Durables, NonDurables, Wholesale, Retail, and Some Services (Laundries, Repair Shops)"),
    IndustryName::new(2, "Manuf", "Manufacturing, Energy, and Utilities"),
    IndustryName::new(3, "HiTec", "Business Equipment, Telephone and Television Transmission"),
    IndustryName::new(4, "Hlth", "Healthcare, Medical Equipment, and Drugs"),
    IndustryName::new(5, "Other", "Other -- Mines, Constr, BldMt, Trans, Hotels, Bus Serv, Entertainment, Finance"),
];

pub(crate) const TABLE: RuleTable = RuleTable::new(Scheme::Ff5, RULES);
pub(crate) const NAME_TABLE: NameTable = NameTable::new(NAMES);
