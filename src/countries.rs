use crate::models::Space;

/// Where the currency symbol goes relative to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Per-country display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryConfig {
    pub code: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    /// Short form used in sheet labels, e.g. "UK" in "영국 (UK)"
    pub tag: &'static str,
    pub currency: &'static str,
    pub currency_symbol: &'static str,
    pub symbol_position: SymbolPosition,
}

pub const COUNTRIES: &[CountryConfig] = &[
    CountryConfig {
        code: "korea",
        name: "한국",
        name_en: "Korea",
        tag: "KOR",
        currency: "KRW",
        currency_symbol: "원",
        symbol_position: SymbolPosition::Suffix,
    },
    CountryConfig {
        code: "uk",
        name: "영국",
        name_en: "UK",
        tag: "UK",
        currency: "GBP",
        currency_symbol: "£",
        symbol_position: SymbolPosition::Prefix,
    },
    CountryConfig {
        code: "usa",
        name: "미국",
        name_en: "USA",
        tag: "USA",
        currency: "USD",
        currency_symbol: "$",
        symbol_position: SymbolPosition::Prefix,
    },
    CountryConfig {
        code: "japan",
        name: "일본",
        name_en: "Japan",
        tag: "JPN",
        currency: "JPY",
        currency_symbol: "¥",
        symbol_position: SymbolPosition::Prefix,
    },
    CountryConfig {
        code: "canada",
        name: "캐나다",
        name_en: "Canada",
        tag: "CAN",
        currency: "CAD",
        currency_symbol: "$",
        symbol_position: SymbolPosition::Prefix,
    },
];

impl CountryConfig {
    /// Resolve a sheet label like "영국 (UK)", a bare name, or a code
    pub fn for_label(label: &str) -> Option<&'static CountryConfig> {
        let label = label.trim();
        let tag = label
            .rsplit_once('(')
            .and_then(|(_, rest)| rest.strip_suffix(')'))
            .map(str::trim);

        COUNTRIES.iter().find(|country| {
            tag.is_some_and(|tag| tag.eq_ignore_ascii_case(country.tag))
                || label.eq_ignore_ascii_case(country.code)
                || label.eq_ignore_ascii_case(country.name_en)
                || label == country.name
        })
    }

    pub fn format_amount(&self, amount: u64) -> String {
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{}{}", self.currency_symbol, amount),
            SymbolPosition::Suffix => format!("{}{}", amount, self.currency_symbol),
        }
    }
}

/// Price of a space for display, in its country's convention when known
pub fn format_price(space: &Space) -> String {
    match CountryConfig::for_label(&space.country) {
        Some(country) => country.format_amount(space.price_value),
        None if space.currency.is_empty() => space.price_value.to_string(),
        None => format!("{} {}", space.price_value, space.currency),
    }
}
