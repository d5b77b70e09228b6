use serde::{Deserialize, Serialize};

/// A rentable venue as published in the spaces sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: usize,
    pub host_email: String,
    pub name: String,
    pub min_capacity: u32,
    pub capacity: u32,
    /// Price exactly as written in the sheet, e.g. "300 GBP"
    pub price: String,
    pub price_value: u64,
    pub currency: String,
    pub country: String,
    pub region: String,
    pub sub_region: String,
    #[serde(rename = "type")]
    pub space_type: String,
    pub style: String,
    pub area: String,
}

/// Structured criteria extracted from a free-text query
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    /// Canonical region name, e.g. "Gangnam"
    pub region: Option<String>,
    /// Minimum number of people the space must hold
    pub capacity: Option<u32>,
    /// Maximum acceptable `price_value`
    pub budget: Option<u64>,
    /// Canonical space type label, e.g. "파티룸"
    pub space_type: Option<String>,
    /// Style keyword exactly as matched in the query
    pub style: Option<String>,
}

impl SearchFilter {
    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.capacity.is_none()
            && self.budget.is_none()
            && self.space_type.is_none()
            && self.style.is_none()
    }

    /// An all-empty filter means "no filter"
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_collapses_to_none() {
        assert!(SearchFilter::default().is_empty());
        assert_eq!(SearchFilter::default().into_option(), None);

        let filter = SearchFilter {
            budget: Some(100),
            ..Default::default()
        };
        assert_eq!(filter.clone().into_option(), Some(filter));
    }

    #[test]
    fn space_serializes_with_sheet_field_names() {
        let space = Space {
            sub_region: "Soho".to_string(),
            space_type: "파티룸".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&space).unwrap();
        assert_eq!(json["subRegion"], "Soho");
        assert_eq!(json["type"], "파티룸");
        assert!(json.get("priceValue").is_some());
    }
}
