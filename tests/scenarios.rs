//! End-to-end query scenarios: parse a query, then filter a space list with it

use space_scout::{filter_spaces, parse_search_query, SearchFilter, Space};

fn gangnam_party_room() -> Space {
    Space {
        id: 1,
        name: "A".to_string(),
        region: "Gangnam".to_string(),
        sub_region: String::new(),
        capacity: 25,
        min_capacity: 1,
        price_value: 100_000,
        space_type: "파티룸".to_string(),
        style: "vintage".to_string(),
        ..Default::default()
    }
}

#[test]
fn seminar_query() {
    let filter = parse_search_query("20명이 세미나할 수 있는 공간 찾아줘.").unwrap();
    assert_eq!(
        filter,
        SearchFilter {
            capacity: Some(20),
            space_type: Some("워크숍 공간".to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn gangnam_party_query() {
    let filter = parse_search_query("서울 강남에서 20명 파티할 수 있는 곳 찾아줘.").unwrap();
    assert_eq!(filter.region.as_deref(), Some("Gangnam"));
    assert_eq!(filter.capacity, Some(20));
    assert_eq!(filter.space_type.as_deref(), Some("파티룸"));
    assert_eq!(filter.budget, None);
    assert_eq!(filter.style, None);

    let spaces = vec![gangnam_party_room()];
    assert_eq!(filter_spaces(&spaces, Some(&filter)).len(), 1);
}

#[test]
fn brooklyn_vintage_query() {
    let filter = parse_search_query("Find a vintage bar in Brooklyn, New York.").unwrap();
    assert_eq!(filter.style.as_deref(), Some("vintage"));
    assert_eq!(filter.region.as_deref(), Some("Brooklyn"));
}

#[test]
fn native_region_filter_matches_english_row() {
    let spaces = vec![gangnam_party_room()];
    let filter = SearchFilter {
        region: Some("강남".to_string()),
        capacity: Some(20),
        ..Default::default()
    };
    let kept = filter_spaces(&spaces, Some(&filter));
    assert_eq!(kept, vec![&spaces[0]]);
}

#[test]
fn too_small_space_is_excluded() {
    let spaces = vec![gangnam_party_room()];
    let filter = SearchFilter {
        capacity: Some(30),
        ..Default::default()
    };
    assert!(filter_spaces(&spaces, Some(&filter)).is_empty());
}

#[test]
fn empty_inputs() {
    assert_eq!(parse_search_query(""), None);
    assert!(filter_spaces(&[], None).is_empty());
}

#[test]
fn budget_in_man_won_filters_by_price() {
    let mut cheap = gangnam_party_room();
    cheap.name = "Cheap".to_string();
    cheap.price_value = 50_000;
    let spaces = vec![gangnam_party_room(), cheap];

    let filter = parse_search_query("강남 파티룸 5만원 이하").unwrap();
    assert_eq!(filter.budget, Some(50_000));

    let kept = filter_spaces(&spaces, Some(&filter));
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "Cheap");
}
