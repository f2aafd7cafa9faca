use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;
use oralcare_instruments::engine::evaluate;
use oralcare_instruments::{Instrument, OralHygiene, range_advisories};

#[test]
fn one_domain_per_category_in_order() {
    let ids: Vec<_> = OralHygiene.domains().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        ["plaque", "perio", "interdental", "sensitivity", "arch", "motor"]
    );
}

#[test]
fn domain_site_counts() {
    assert_eq!(OralHygiene.domain(Category::Plaque).subscales.len(), 6);
    assert_eq!(OralHygiene.domain(Category::Perio).subscales.len(), 24);
    assert_eq!(OralHygiene.domain(Category::Interdental).subscales.len(), 4);
    assert_eq!(OralHygiene.domain(Category::Motor).subscales.len(), 1);
}

#[test]
fn composite_ranges_match_category_maxima() {
    for category in Category::ALL {
        let domain = OralHygiene.domain(category);
        assert_eq!(domain.composite_range.max, category.max_score() as f64);
    }
}

#[test]
fn unknown_domain_is_an_error() {
    assert!(OralHygiene.domain_by_id("perio").is_ok());
    assert!(OralHygiene.domain_by_id("gums").is_err());
}

#[test]
fn in_range_assessment_has_no_advisories() {
    let mut a = Assessment::new();
    a.set_plaque(0, 3).unwrap();
    a.set_perio(0, "8").unwrap();
    a.set_perio(1, "n/a").unwrap();
    a.set_arch(2);
    assert!(range_advisories(&a).is_empty());
}

#[test]
fn advisories_flag_without_changing_scores() {
    let mut a = Assessment::new();
    a.set_plaque(1, 9).unwrap();
    a.set_motor(-1);
    let before = evaluate(&a);

    let advisories = range_advisories(&a);

    let ids: Vec<_> = advisories.iter().map(|e| e.subscale_id.as_str()).collect();
    assert_eq!(ids, ["plaque_16", "motor"]);
    assert!(advisories[0].message.contains("outside range [0, 3]"));
    assert_eq!(evaluate(&a), before);
    assert_eq!(before.category(Category::Plaque).actual, 9);
}
