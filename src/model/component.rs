use serde::{Deserialize, Serialize};

/// One of the named series that make up, or derive from, the GDP identity.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Household consumption, C.
    Consumption,
    /// Investment, I.
    Investment,
    /// Government spending, G.
    GovernmentSpending,
    /// Exports, X.
    Exports,
    /// Imports, M.
    Imports,
    /// Exports minus imports, X - M.
    NetExports,
    /// C + I + G + (X - M).
    Gdp,
}

serde_plain::derive_display_from_serialize!(Component);
serde_plain::derive_fromstr_from_deserialize!(Component);

impl Component {
    /// The five inputs of the GDP identity, in the order they appear in it.
    pub const INPUTS: [Component; 5] = [
        Component::Consumption,
        Component::Investment,
        Component::GovernmentSpending,
        Component::Exports,
        Component::Imports,
    ];

    /// The column header used for this series in tabular output.
    pub fn column(&self) -> &'static str {
        match self {
            Component::Consumption => "Consumption",
            Component::Investment => "Investment",
            Component::GovernmentSpending => "Government_Spending",
            Component::Exports => "Exports",
            Component::Imports => "Imports",
            Component::NetExports => "Net_Exports",
            Component::Gdp => "GDP",
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            Component::Consumption => "Consumption",
            Component::Investment => "Investment",
            Component::GovernmentSpending => "Government Spending",
            Component::Exports => "Exports",
            Component::Imports => "Imports",
            Component::NetExports => "Net Exports",
            Component::Gdp => "GDP",
        }
    }

    pub fn thai(&self) -> &'static str {
        match self {
            Component::Consumption => "การบริโภค",
            Component::Investment => "การลงทุน",
            Component::GovernmentSpending => "การใช้จ่ายรัฐ",
            Component::Exports => "การส่งออก",
            Component::Imports => "การนำเข้า",
            Component::NetExports => "การส่งออกสุทธิ",
            Component::Gdp => "GDP",
        }
    }

    /// The bilingual label, e.g. `Consumption / การบริโภค`.
    pub fn label(&self) -> String {
        format!("{} / {}", self.english(), self.thai())
    }

    /// The chart colour of this series as RGB.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Component::Consumption => (0xA2, 0x3B, 0x72),
            Component::Investment => (0xF1, 0x8F, 0x01),
            Component::GovernmentSpending => (0xC7, 0x3E, 0x1D),
            Component::Exports => (0x2E, 0x86, 0xAB),
            Component::Imports => (0xE6, 0x39, 0x46),
            Component::NetExports => (0x6A, 0x99, 0x4E),
            Component::Gdp => (0x06, 0xA7, 0x7D),
        }
    }
}
