use oralcare_core::error::CoreError;
use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::{Category, TOTAL_MAX};
use oralcare_core::teeth::{self, ProbingSite};

#[test]
fn new_assessment_is_empty() {
    let a = Assessment::new();
    assert_eq!(a.plaque.scores, [0; 6]);
    assert!(a.perio.depths.iter().all(String::is_empty));
    assert_eq!(a.interdental.scores, [0; 4]);
    assert_eq!(a.sensitivity.score, 0);
    assert_eq!(a.arch.score, 0);
    assert_eq!(a.motor.score, 0);
    assert!(a.patient.name.is_empty());
}

#[test]
fn category_maxima_sum_to_total() {
    let sum: i64 = Category::ALL.iter().map(|c| c.max_score()).sum();
    assert_eq!(sum, TOTAL_MAX);
    assert_eq!(TOTAL_MAX, 84);
}

#[test]
fn category_order_is_fixed() {
    let ids: Vec<_> = Category::ALL.iter().map(|c| c.id()).collect();
    assert_eq!(
        ids,
        ["plaque", "perio", "interdental", "sensitivity", "arch", "motor"]
    );
    assert_eq!(Category::from_id("arch"), Some(Category::Arch));
    assert_eq!(Category::from_id("gums"), None);
}

#[test]
fn setters_accept_out_of_range_values() {
    let mut a = Assessment::new();
    a.set_plaque(0, 9).unwrap();
    a.set_interdental(3, -2).unwrap();
    a.set_sensitivity(7);
    assert_eq!(a.plaque.scores[0], 9);
    assert_eq!(a.interdental.scores[3], -2);
    assert_eq!(a.sensitivity.score, 7);
}

#[test]
fn indexed_setter_rejects_bad_index() {
    let mut a = Assessment::new();
    let err = a.set_plaque(6, 1).unwrap_err();
    assert!(matches!(
        err,
        CoreError::IndexOutOfBounds {
            field: "plaque",
            index: 6,
            len: 6
        }
    ));
    assert!(a.set_perio(24, "3").is_err());
    assert!(a.set_interdental(4, 1).is_err());
}

#[test]
fn perio_text_is_stored_verbatim() {
    let mut a = Assessment::new();
    a.set_perio(5, "abc").unwrap();
    a.set_perio(6, " 4").unwrap();
    assert_eq!(a.perio.depths[5], "abc");
    assert_eq!(a.perio.depths[6], " 4");
}

#[test]
fn tooth_map_lookups() {
    assert_eq!(teeth::plaque_index(12).unwrap(), 0);
    assert_eq!(teeth::plaque_index(44).unwrap(), 5);
    assert!(teeth::plaque_index(11).is_err());

    assert_eq!(teeth::perio_index(16, ProbingSite::Mesial).unwrap(), 0);
    assert_eq!(teeth::perio_index(17, ProbingSite::Mid).unwrap(), 4);
    assert_eq!(teeth::perio_index(47, ProbingSite::Distal).unwrap(), 23);
    assert!(teeth::perio_index(12, ProbingSite::Mid).is_err());

    assert_eq!(teeth::interdental_index("#36-37").unwrap(), 2);
    assert!(matches!(
        teeth::interdental_index("11-12"),
        Err(CoreError::UnknownSite(_))
    ));
    assert_eq!(ProbingSite::parse("Distal"), Some(ProbingSite::Distal));
}

#[test]
fn assessment_serializes_to_json() {
    let mut a = Assessment::new();
    a.set_name("Kim");
    a.set_perio(0, "6").unwrap();
    let json = a.to_json().unwrap();
    let back: Assessment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
}
