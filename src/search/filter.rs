use crate::models::{SearchFilter, Space};
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::{debug, trace};

lazy_static! {
    /// Region aliases (native or English) to the lower-cased form used in the sheet
    static ref REGION_ALIASES: HashMap<&'static str, &'static str> = HashMap::from([
        // Korea
        ("서울", "seoul"),
        ("seoul", "seoul"),
        ("강남", "gangnam"),
        ("gangnam", "gangnam"),
        ("종로", "jongno"),
        ("jongno", "jongno"),
        ("여의도", "yeouido"),
        ("yeouido", "yeouido"),
        ("성남", "seongnam"),
        ("seongnam", "seongnam"),
        ("경기", "gyeonggi"),
        ("gyeonggi", "gyeonggi"),
        ("홍대", "hongdae"),
        ("이태원", "itaewon"),
        ("신촌", "sinchon"),
        // UK
        ("런던", "london"),
        ("london", "london"),
        ("쇼디치", "shoreditch"),
        ("shoreditch", "shoreditch"),
        ("맨체스터", "manchester"),
        ("manchester", "manchester"),
        ("스코틀랜드", "scotland"),
        ("scotland", "scotland"),
        ("에든버러", "edinburgh"),
        ("edinburgh", "edinburgh"),
        ("코벤트가든", "covent garden"),
        ("해크니", "hackney"),
        ("소호", "soho"),
        // USA
        ("뉴욕", "new york"),
        ("new york", "new york"),
        ("브루클린", "brooklyn"),
        ("brooklyn", "brooklyn"),
        ("캘리포니아", "california"),
        ("california", "california"),
        ("버클리", "berkeley"),
        ("berkeley", "berkeley"),
        ("로스앤젤레스", "los angeles"),
        // Japan
        ("도쿄", "tokyo"),
        ("tokyo", "tokyo"),
        ("시부야", "shibuya"),
        ("shibuya", "shibuya"),
        ("신주쿠", "shinjuku"),
        ("롯폰기", "roppongi"),
        // Canada
        ("토론토", "toronto"),
        ("toronto", "toronto"),
        ("밴쿠버", "vancouver"),
    ]);
}

/// Native style terms and their English equivalents
const STYLE_EQUIVALENTS: &[(&str, &str)] = &[
    ("빈티지", "vintage"),
    ("화이트", "white"),
    ("자연광", "natural light"),
    ("인더스트리얼", "industrial"),
    ("모던", "modern"),
    ("미니멀", "minimal"),
    ("젠", "zen"),
    ("북유럽", "nordic"),
    ("아늑", "cozy"),
    ("루프탑", "rooftop"),
];

/// Lower-case and trim a region, then map known aliases to their canonical form.
/// Unknown regions pass through lower-cased.
pub fn normalize_region(region: &str) -> String {
    let lowered = region.trim().to_lowercase();
    match REGION_ALIASES.get(lowered.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => lowered,
    }
}

/// Keep the spaces that satisfy every criterion set in `filter`.
///
/// `None` keeps everything. Input order is preserved.
pub fn filter_spaces<'a>(spaces: &'a [Space], filter: Option<&SearchFilter>) -> Vec<&'a Space> {
    let Some(filter) = filter else {
        return spaces.iter().collect();
    };

    debug!(?filter, "Applying filter to {} spaces", spaces.len());
    spaces.iter().filter(|space| matches(space, filter)).collect()
}

/// Conjunction of all predicates present in `filter`
pub fn matches(space: &Space, filter: &SearchFilter) -> bool {
    if let Some(region) = &filter.region {
        if !region_matches(space, region) {
            trace!(
                "Excluding {}: region {}/{} vs {}",
                space.name,
                space.region,
                space.sub_region,
                region
            );
            return false;
        }
    }

    if let Some(capacity) = filter.capacity {
        if !capacity_matches(space, capacity) {
            trace!("Excluding {}: capacity {} < {}", space.name, space.capacity, capacity);
            return false;
        }
    }

    if let Some(budget) = filter.budget {
        if !budget_matches(space, budget) {
            trace!("Excluding {}: price {} > {}", space.name, space.price_value, budget);
            return false;
        }
    }

    if let Some(space_type) = &filter.space_type {
        if !space_type_matches(space, space_type) {
            trace!("Excluding {}: type {:?}", space.name, space.space_type);
            return false;
        }
    }

    if let Some(style) = &filter.style {
        if !style_matches(space, style) {
            trace!("Excluding {}: style {:?}", space.name, space.style);
            return false;
        }
    }

    true
}

/// Region or sub-region equals, contains, or is contained in the search region.
/// Compared both after alias normalization and as plain lower-cased text.
/// A blank search region places no constraint.
pub fn region_matches(space: &Space, search_region: &str) -> bool {
    if search_region.trim().is_empty() {
        return true;
    }

    let search_raw = search_region.trim().to_lowercase();
    let search_norm = normalize_region(search_region);

    [&space.region, &space.sub_region].into_iter().any(|field| {
        let field_raw = field.trim().to_lowercase();
        let field_norm = normalize_region(field);
        overlaps(&search_norm, &field_norm) || overlaps(&search_raw, &field_raw)
    })
}

/// Either string contains the other. Empty strings never overlap.
fn overlaps(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(b) || b.contains(a)
}

/// Only the upper capacity is consulted; `min_capacity` is not a constraint here.
pub fn capacity_matches(space: &Space, required: u32) -> bool {
    space.capacity >= required
}

pub fn budget_matches(space: &Space, budget: u64) -> bool {
    space.price_value <= budget
}

pub fn space_type_matches(space: &Space, space_type: &str) -> bool {
    let wanted = space_type.to_lowercase();
    space.space_type.to_lowercase().contains(&wanted)
        || space.name.to_lowercase().contains(&wanted)
}

pub fn style_matches(space: &Space, style: &str) -> bool {
    let wanted = style.to_lowercase();
    let space_style = space.style.to_lowercase();

    if space_style.contains(&wanted) || space.name.to_lowercase().contains(&wanted) {
        return true;
    }

    STYLE_EQUIVALENTS.iter().any(|(native, english)| {
        (wanted.contains(native) && space_style.contains(english))
            || (wanted.contains(english) && space_style.contains(native))
    })
}
