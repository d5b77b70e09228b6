use crate::models::SearchFilter;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

/// Region keywords, districts ahead of the cities that contain them.
/// First substring hit wins, so order matters.
pub const REGION_KEYWORDS: &[(&str, &str)] = &[
    // Korea
    ("강남", "Gangnam"),
    ("종로", "Jongno"),
    ("여의도", "Yeouido"),
    ("홍대", "Hongdae"),
    ("이태원", "Itaewon"),
    ("신촌", "Sinchon"),
    ("성남", "Seongnam"),
    ("서울", "Seoul"),
    // UK
    ("쇼디치", "Shoreditch"),
    ("shoreditch", "Shoreditch"),
    ("해크니", "Hackney"),
    ("hackney", "Hackney"),
    ("소호", "Soho"),
    ("soho", "Soho"),
    ("코벤트가든", "Covent Garden"),
    ("런던", "London"),
    ("london", "London"),
    ("맨체스터", "Manchester"),
    ("manchester", "Manchester"),
    // USA
    ("브루클린", "Brooklyn"),
    ("brooklyn", "Brooklyn"),
    ("버클리", "Berkeley"),
    ("berkeley", "Berkeley"),
    ("뉴욕", "New York"),
    ("new york", "New York"),
    ("캘리포니아", "California"),
    ("california", "California"),
    ("로스앤젤레스", "Los Angeles"),
    // Japan
    ("시부야", "Shibuya"),
    ("shibuya", "Shibuya"),
    ("신주쿠", "Shinjuku"),
    ("롯폰기", "Roppongi"),
    ("도쿄", "Tokyo"),
    ("tokyo", "Tokyo"),
    // Canada
    ("토론토", "Toronto"),
    ("toronto", "Toronto"),
    ("밴쿠버", "Vancouver"),
    ("vancouver", "Vancouver"),
    // Two letters, matches inside plenty of words
    ("la", "Los Angeles"),
];

/// Space type keywords mapped to the labels used in the sheet's type column
pub const SPACE_TYPE_KEYWORDS: &[(&str, &str)] = &[
    ("파티", "파티룸"),
    ("파티룸", "파티룸"),
    ("party", "파티룸"),
    ("스터디", "스터디룸"),
    ("스터디룸", "스터디룸"),
    ("study", "스터디룸"),
    ("워크숍", "워크숍 공간"),
    ("workshop", "워크숍 공간"),
    ("스튜디오", "스튜디오"),
    ("studio", "스튜디오"),
    ("댄스", "스튜디오"),
    ("이벤트", "이벤트 홀"),
    ("event", "이벤트 홀"),
    ("대형", "대형 홀"),
    ("홀", "대형 홀"),
    ("쿠킹", "쿠킹 스튜디오"),
    ("요리", "쿠킹 스튜디오"),
    ("cooking", "쿠킹 스튜디오"),
    ("명상", "명상실"),
    ("meditation", "명상실"),
    ("모임", "소규모 모임실"),
    ("회의", "소규모 모임실"),
    ("meeting", "소규모 모임실"),
    ("세미나", "워크숍 공간"),
    ("seminar", "워크숍 공간"),
];

pub const STYLE_KEYWORDS: &[&str] = &[
    "빈티지",
    "vintage",
    "화이트",
    "white",
    "화이트 톤",
    "자연광",
    "natural light",
    "인더스트리얼",
    "industrial",
    "모던",
    "modern",
    "미니멀",
    "minimal",
    "젠",
    "zen",
    "북유럽",
    "nordic",
    "scandinavian",
    "아늑",
    "cozy",
    "루프탑",
    "rooftop",
    "힙한",
    "hipster",
    "감각적",
    "조용한",
];

/// Budget unit tokens that scale the captured number
const BUDGET_MULTIPLIERS: &[(&str, u64)] = &[("만원", 10_000)];

lazy_static! {
    static ref CAPACITY_REGEX: Regex = Regex::new(r"([0-9]+)\s*명").unwrap();
    static ref CAPACITY_ALT_REGEX: Regex =
        Regex::new(r"(?i)([0-9]+)\s*(인|people|person|사람)").unwrap();
    static ref BUDGET_REGEX: Regex = Regex::new(
        r"(?i)([0-9]+)\s*(원|만원|won|usd|gbp|달러|파운드)?\s*(이하|까지|미만)?"
    )
    .unwrap();
}

/// Turn a free-text query into a [`SearchFilter`].
///
/// Returns `None` for blank input and for input where nothing was recognized.
/// Each field is extracted independently; matching is plain substring
/// matching against the lower-cased query, first table entry wins.
pub fn parse_search_query(query: &str) -> Option<SearchFilter> {
    if query.trim().is_empty() {
        return None;
    }

    let lower = query.to_lowercase();
    let filter = SearchFilter {
        region: first_keyword(&lower, REGION_KEYWORDS),
        capacity: extract_capacity(query),
        budget: extract_budget(query),
        space_type: first_keyword(&lower, SPACE_TYPE_KEYWORDS),
        style: extract_style(&lower),
    };

    debug!(?filter, "Parsed search query {:?}", query);
    filter.into_option()
}

fn first_keyword(lower_query: &str, table: &[(&str, &str)]) -> Option<String> {
    table
        .iter()
        .find(|(keyword, _)| lower_query.contains(&keyword.to_lowercase()))
        .map(|(_, value)| value.to_string())
}

fn extract_style(lower_query: &str) -> Option<String> {
    STYLE_KEYWORDS
        .iter()
        .find(|keyword| lower_query.contains(&keyword.to_lowercase()))
        .map(|keyword| keyword.to_string())
}

fn extract_capacity(query: &str) -> Option<u32> {
    CAPACITY_REGEX
        .captures(query)
        .or_else(|| CAPACITY_ALT_REGEX.captures(query))
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|&people| people > 0)
}

fn extract_budget(query: &str) -> Option<u64> {
    // Only the first number is considered; a bare one is not a budget.
    BUDGET_REGEX
        .captures(query)
        .filter(|caps| caps.get(2).is_some() || caps.get(3).is_some())
        .and_then(|caps| budget_amount(&caps))
        .filter(|&amount| amount > 0)
}

fn budget_amount(caps: &Captures<'_>) -> Option<u64> {
    let amount = caps[1].parse::<u64>().ok()?;
    let multiplier = caps
        .get(2)
        .map(|unit| unit.as_str().to_lowercase())
        .and_then(|unit| {
            BUDGET_MULTIPLIERS
                .iter()
                .find(|(token, _)| *token == unit)
                .map(|(_, factor)| *factor)
        })
        .unwrap_or(1);
    amount.checked_mul(multiplier)
}
