//! Fama-French 38 industry portfolios
//!
//! Two-digit SIC groupings. Version 1.1 of the published table (2021-03-24)
//! added SIC 900, 3990 and 6797, which the ranges below cover.

use super::names::{IndustryName, NameTable};
use super::rules::SicSpan::Range;
use super::rules::{IndustryRule, RuleTable};
use super::Scheme;

const RULES: &[IndustryRule] = &[
    IndustryRule::spans(1, &[Range(100, 999)]),
    IndustryRule::spans(2, &[Range(1000, 1299)]),
    IndustryRule::spans(3, &[Range(1300, 1399)]),
    IndustryRule::spans(4, &[Range(1400, 1499)]),
    IndustryRule::spans(5, &[Range(1500, 1799)]),
    IndustryRule::spans(6, &[Range(2000, 2099)]),
    IndustryRule::spans(7, &[Range(2100, 2199)]),
    IndustryRule::spans(8, &[Range(2200, 2299)]),
    IndustryRule::spans(9, &[Range(2300, 2399)]),
    IndustryRule::spans(10, &[Range(2400, 2499)]),
    IndustryRule::spans(11, &[Range(2500, 2599)]),
    IndustryRule::spans(12, &[Range(2600, 2661)]),
    IndustryRule::spans(13, &[Range(2700, 2799)]),
    IndustryRule::spans(14, &[Range(2800, 2899)]),
    IndustryRule::spans(15, &[Range(2900, 2999)]),
    IndustryRule::spans(16, &[Range(3000, 3099)]),
    IndustryRule::spans(17, &[Range(3100, 3199)]),
    IndustryRule::spans(18, &[Range(3200, 3299)]),
    IndustryRule::spans(19, &[Range(3300, 3399)]),
    IndustryRule::spans(20, &[Range(3400, 3499)]),
    IndustryRule::spans(21, &[Range(3500, 3599)]),
    IndustryRule::spans(22, &[Range(3600, 3699)]),
    IndustryRule::spans(23, &[Range(3700, 3799)]),
    IndustryRule::spans(24, &[Range(3800, 3879)]),
    IndustryRule::spans(25, &[Range(3900, 3999)]),
    IndustryRule::spans(26, &[Range(4000, 4799)]),
    IndustryRule::spans(27, &[Range(4800, 4829)]),
    IndustryRule::spans(28, &[Range(4830, 4899)]),
    IndustryRule::spans(29, &[Range(4900, 4949)]),
    IndustryRule::spans(30, &[Range(4950, 4959)]),
    IndustryRule::spans(31, &[Range(4960, 4969)]),
    IndustryRule::spans(32, &[Range(4970, 4979)]),
    IndustryRule::spans(33, &[Range(5000, 5199)]),
    IndustryRule::spans(34, &[Range(5200, 5999)]),
    IndustryRule::spans(35, &[Range(6000, 6999)]),
    IndustryRule::spans(36, &[Range(7000, 8999)]),
    IndustryRule::spans(37, &[Range(9000, 9999)]),
    IndustryRule::catch_all(38),
];

const NAMES: &[IndustryName] = &[
    IndustryName::new(1, "Agric", "Agriculture, forestry, and fishing"),
    IndustryName::new(2, "Mines", "Mining"),
    IndustryName::new(3, "Oil", "Oil and Gas Extraction"),
    IndustryName::new(4, "Stone", "Nonmetalic Minerals Except Fuels"),
    IndustryName::new(5, "Cnstr", "Construction"),
    IndustryName::new(6, "Food", "Food and Kindred Products"),
    IndustryName::new(7, "Smoke", "Tobacco Products"),
    IndustryName::new(8, "Txtls", "Textile Mill Products"),
    IndustryName::new(9, "Apprl", "Apparel and other Textile Products"),
    IndustryName::new(10, "Wood", "Lumber and Wood Products"),
    IndustryName::new(11, "Chair", "Furniture and Fixtures"),
    IndustryName::new(12, "Paper", "Paper and Allied Products"),
    IndustryName::new(13, "Print", "Printing and Publishing"),
    IndustryName::new(14, "Chems", "Chemicals and Allied Products"),
    IndustryName::new(15, "Ptrlm", "Petroleum and Coal Products"),
    IndustryName::new(16, "Rubbr", "Rubber and Miscellaneous Plastics Products"),
    IndustryName::new(17, "Lethr", "Leather and Leather Products"),
    IndustryName::new(18, "Glass", "Stone, Clay and Glass Products"),
    IndustryName::new(19, "Metal", "Primary Metal Industries"),
    IndustryName::new(20, "MtlPr", "Fabricated Metal Products"),
    IndustryName::new(21, "Machn", "Machinery, Except Electrical"),
    IndustryName::new(22, "Elctr", "Electrical and Electronic Equipment"),
    IndustryName::new(23, "Cars", "Transportation Equipment"),
    IndustryName::new(24, "Instr", "Instruments and Related Products"),
    IndustryName::new(25, "Manuf", "Miscellaneous Manufacturing Industries"),
    IndustryName::new(26, "Trans", "Transportation"),
    IndustryName::new(27, "Phone", "Telephone and Telegraph Communication"),
    IndustryName::new(28, "TV", "Radio and Television Broadcasting"),
    IndustryName::new(29, "Utils", "Electric, Gas, and Water Supply"),
    IndustryName::new(30, "Garbg", "Sanitary Services"),
    IndustryName::new(31, "Steam", "Steam Supply"),
    IndustryName::new(32, "Water", "Irrigation Systems"),
    IndustryName::new(33, "Whlsl", "Wholesale"),
    IndustryName::new(34, "Rtail", "Retail Stores"),
    IndustryName::new(35, "Money", "Finance, Insurance, and Real Estate"),
    IndustryName::new(36, "Srvc", "Services"),
    IndustryName::new(37, "Govt", "Public Administration"),
    IndustryName::new(38, "Other", "Almost Nothing"),
];

pub(crate) const TABLE: RuleTable = RuleTable::new(Scheme::Ff38, RULES);
pub(crate) const NAME_TABLE: NameTable = NameTable::new(NAMES);
