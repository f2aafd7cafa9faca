use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;
use oralcare_instruments::engine::evaluate;

fn with_perio(depths: &[(usize, &str)], fill: &str) -> Assessment {
    let mut a = Assessment::new();
    for i in 0..24 {
        a.set_perio(i, fill).unwrap();
    }
    for &(i, d) in depths {
        a.set_perio(i, d).unwrap();
    }
    a
}

fn maxed_out() -> Assessment {
    let mut a = with_perio(&[], "6");
    for i in 0..6 {
        a.set_plaque(i, 3).unwrap();
    }
    for i in 0..4 {
        a.set_interdental(i, 3).unwrap();
    }
    a.set_sensitivity(3);
    a.set_arch(2);
    a.set_motor(1);
    a
}

#[test]
fn empty_assessment_scores_zero() {
    let report = evaluate(&Assessment::new());
    assert_eq!(report.total_score, 0);
    assert_eq!(report.total_max, 84);
    assert_eq!(report.total_percent_text(), "0.0");
    assert!(report.warning_labels.is_empty());
    assert!(!report.has_warnings());
    assert_eq!(report.normalized_values(), [0.0; 6]);
}

#[test]
fn full_maximum_case() {
    let report = evaluate(&maxed_out());
    assert_eq!(report.category(Category::Plaque).actual, 18);
    assert_eq!(report.category(Category::Perio).actual, 48);
    assert_eq!(report.category(Category::Interdental).actual, 12);
    assert_eq!(report.total_score, 84);
    assert_eq!(report.total_percent_text(), "100.0");
    assert_eq!(report.warnings(), [true; 6]);
    assert_eq!(report.normalized_values(), [100.0; 6]);
}

#[test]
fn plaque_warning_is_strictly_above_six() {
    let mut a = Assessment::new();
    a.set_plaque(0, 3).unwrap();
    a.set_plaque(1, 3).unwrap();
    let report = evaluate(&a);
    assert_eq!(report.category(Category::Plaque).actual, 6);
    assert!(!report.category(Category::Plaque).warning);

    a.set_plaque(5, 1).unwrap();
    let report = evaluate(&a);
    assert_eq!(report.category(Category::Plaque).actual, 7);
    assert!(report.category(Category::Plaque).warning);
}

#[test]
fn perio_all_three_millimetres_scores_zero() {
    let report = evaluate(&with_perio(&[], "3"));
    let perio = report.category(Category::Perio);
    assert_eq!(perio.actual, 0);
    assert!(!perio.warning);
}

#[test]
fn single_six_millimetre_site_warns() {
    let report = evaluate(&with_perio(&[(10, "6")], "3"));
    let perio = report.category(Category::Perio);
    assert_eq!(perio.actual, 2);
    assert!(perio.warning);
}

#[test]
fn five_millimetres_scores_without_warning() {
    let report = evaluate(&with_perio(&[(0, "4"), (1, "5")], ""));
    let perio = report.category(Category::Perio);
    assert_eq!(perio.actual, 2);
    assert!(!perio.warning);
}

#[test]
fn unparseable_perio_entries_count_as_zero() {
    let report = evaluate(&with_perio(&[(0, "abc"), (1, "6mm")], ""));
    let perio = report.category(Category::Perio);
    assert_eq!(perio.actual, 2);
    assert!(perio.warning);
}

#[test]
fn interdental_warns_on_any_site_at_two() {
    let mut a = Assessment::new();
    a.set_interdental(0, 1).unwrap();
    a.set_interdental(1, 1).unwrap();
    a.set_interdental(2, 1).unwrap();
    assert!(!evaluate(&a).category(Category::Interdental).warning);

    a.set_interdental(3, 2).unwrap();
    let report = evaluate(&a);
    assert_eq!(report.category(Category::Interdental).actual, 5);
    assert!(report.category(Category::Interdental).warning);
}

#[test]
fn single_value_thresholds() {
    let mut a = Assessment::new();
    a.set_sensitivity(1);
    a.set_arch(1);
    a.set_motor(0);
    assert_eq!(evaluate(&a).warnings(), [false; 6]);

    a.set_sensitivity(2);
    a.set_arch(2);
    a.set_motor(1);
    let report = evaluate(&a);
    assert!(report.category(Category::Sensitivity).warning);
    assert!(report.category(Category::Arch).warning);
    assert!(report.category(Category::Motor).warning);
}

#[test]
fn arch_and_motor_warn_only_on_exact_value() {
    let mut a = Assessment::new();
    a.set_arch(3);
    a.set_motor(2);
    let report = evaluate(&a);
    assert!(!report.category(Category::Arch).warning);
    assert!(!report.category(Category::Motor).warning);
}

#[test]
fn warning_labels_follow_report_order() {
    let mut a = Assessment::new();
    // Mutate in reverse of report order.
    a.set_motor(1);
    a.set_sensitivity(3);
    a.set_perio(0, "7").unwrap();

    let report = evaluate(&a);
    assert_eq!(
        report.warning_labels,
        vec![
            Category::Perio.label().to_string(),
            Category::Sensitivity.label().to_string(),
            Category::Motor.label().to_string(),
        ]
    );
}

#[test]
fn evaluation_is_idempotent() {
    let a = maxed_out();
    assert_eq!(evaluate(&a), evaluate(&a));
}

#[test]
fn total_percent_rounds_to_one_decimal() {
    let mut a = Assessment::new();
    a.set_motor(1);
    let report = evaluate(&a);
    assert_eq!(report.total_score, 1);
    // 1 / 84 * 100 = 1.190...
    assert_eq!(report.total_percent_text(), "1.2");
    assert!((report.category(Category::Motor).normalized - 100.0).abs() < f64::EPSILON);
}

#[test]
fn out_of_range_values_propagate_arithmetically() {
    let mut a = Assessment::new();
    a.set_plaque(0, 9).unwrap();
    a.set_sensitivity(-3);
    let report = evaluate(&a);
    assert_eq!(report.category(Category::Plaque).actual, 9);
    assert!(report.category(Category::Plaque).warning);
    assert_eq!(report.category(Category::Sensitivity).actual, -3);
    assert!(report.category(Category::Sensitivity).normalized < 0.0);
    assert_eq!(report.total_score, 6);
}
