//! Headline KPI cards.
//!
//! The values are fixed placeholders. They are not derived from the dataset or from the
//! [Selections](crate::config::Selections), and are always reported with `placeholder` set.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub placeholder: bool,
}

pub const PLACEHOLDER_KPIS: [Kpi; 3] = [
    Kpi {
        label: "Win Probability",
        value: "5.6%",
        placeholder: true,
    },
    Kpi {
        label: "Profit (Earnings)",
        value: "$80",
        placeholder: true,
    },
    Kpi {
        label: "Expected Return",
        value: "$100",
        placeholder: true,
    },
];

pub fn kpis() -> &'static [Kpi] {
    &PLACEHOLDER_KPIS
}
