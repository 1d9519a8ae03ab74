//! Fama-French 12 industry portfolios
//!
//! Boundaries follow the definitions on Ken French's data library page,
//! rechecked against current classifications on 2021-03-24. The span sets
//! of rules 1 through 11 are pairwise disjoint.

use super::names::{IndustryName, NameTable};
use super::rules::SicSpan::{Exact, Range};
use super::rules::{IndustryRule, RuleTable, SicSpan};
use super::Scheme;

const NODUR: &[SicSpan] = &[
    Range(100, 999),
    Range(2000, 2399),
    Range(2700, 2749),
    Range(2770, 2799),
    Range(3100, 3199),
    Range(3940, 3989),
];

const DURBL: &[SicSpan] = &[
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
];

const MANUF: &[SicSpan] = &[
    Range(2520, 2589),
    Range(2600, 2699),
    Range(2750, 2769),
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
];

const ENRGY: &[SicSpan] = &[Range(1200, 1399), Range(2900, 2999)];

const CHEMS: &[SicSpan] = &[Range(2800, 2829), Range(2840, 2899)];

const BUSEQ: &[SicSpan] = &[
    Range(3570, 3579),
    Range(3660, 3692),
    Range(3694, 3699),
    Range(3810, 3829),
    Range(7370, 7379),
];

const TELCM: &[SicSpan] = &[Range(4800, 4899)];

const UTILS: &[SicSpan] = &[Range(4900, 4949)];

const SHOPS: &[SicSpan] = &[Range(5000, 5999), Range(7200, 7299), Range(7600, 7699)];

const HLTH: &[SicSpan] = &[
    Range(2830, 2839),
    Exact(3693),
    Range(3840, 3859),
    Range(8000, 8099),
];

const MONEY: &[SicSpan] = &[Range(6000, 6999)];

const RULES: &[IndustryRule] = &[
    IndustryRule::spans(1, NODUR),
    IndustryRule::spans(2, DURBL),
    IndustryRule::spans(3, MANUF),
    IndustryRule::spans(4, ENRGY),
    IndustryRule::spans(5, CHEMS),
    IndustryRule::spans(6, BUSEQ),
    IndustryRule::spans(7, TELCM),
    IndustryRule::spans(8, UTILS),
    IndustryRule::spans(9, SHOPS),
    IndustryRule::spans(10, HLTH),
    IndustryRule::spans(11, MONEY),
    IndustryRule::catch_all(12),
];

const NAMES: &[IndustryName] = &[
    IndustryName::new(1, "NoDur", "Consumer NonDurables -- Food, Tobacco, Textiles, Apparel, Leather, Toys"),
    IndustryName::new(2, "Durbl", "Consumer Durables -- Cars, TVs, Furniture, Household Appliances"),
    IndustryName::new(3, "Manuf", "Manufacturing -- Machinery, Trucks, Planes, Off Furn, Paper, Com Printing"),
    IndustryName::new(4, "Enrgy", "Oil, Gas, and Coal Extraction and Products"),
    IndustryName::new(5, "Chems", "Chemicals and Allied Products"),
    IndustryName::new(6, "BusEq", "Business Equipment -- Computers, Software, and Electronic Equipment"),
    IndustryName::new(7, "Telcm", "Telephone and Television Transmission"),
    IndustryName::new(8, "Utils", "Utilities"),
    IndustryName::new(9, "Shops", "Wholesale, Retail, and Some Services (Laundries, Repair Shops)"),
    IndustryName::new(10, "Hlth", "Healthcare, Medical Equipment, and Drugs"),
    IndustryName::new(11, "Money", "Finance"),
    IndustryName::new(12, "Other", "Other -- Mines, Constr, BldMt, Trans, Hotels, Bus Serv, Entertainment"),
];

pub(crate) const TABLE: RuleTable = RuleTable::new(Scheme::Ff12, RULES);
pub(crate) const NAME_TABLE: NameTable = NameTable::new(NAMES);
