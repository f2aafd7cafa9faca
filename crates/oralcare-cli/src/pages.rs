//! Plain-text views of each wizard page.

use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;
use oralcare_core::teeth::{INTERDENTAL_SITES, PERIO_TEETH, PLAQUE_MAXILLARY, PLAQUE_TEETH, ProbingSite};
use oralcare_core::wizard::{Page, Wizard};
use oralcare_export::chart::RadarChart;
use oralcare_export::render::render_summary;
use oralcare_export::styles::ChartStyles;
use oralcare_instruments::engine::evaluate;
use oralcare_instruments::scoring::Domain;
use oralcare_instruments::{OralHygiene, range_advisories};

pub fn render(wizard: &Wizard) -> String {
    let page = wizard.page();
    let a = wizard.assessment();

    let mut out = format!("== {} ==\n", page.title());
    let body = match page {
        Page::Intro => intro(),
        Page::PatientInfo => patient_info(a),
        Page::Plaque => plaque(a),
        Page::Perio => perio(a),
        Page::Interdental => interdental(a),
        Page::Sensitivity => single(Category::Sensitivity, a.sensitivity.score),
        Page::ArchAndMotor => {
            let mut text = single(Category::Arch, a.arch.score);
            text.push('\n');
            text.push_str(&single(Category::Motor, a.motor.score));
            text
        }
        Page::Summary => summary(a),
    };
    out.push_str(&body);
    out.push_str(&format!(
        "\n[page {}/{}]  prev | next | help\n",
        page.index(),
        Page::LAST.index()
    ));
    out
}

fn intro() -> String {
    "Oral hygiene product assessment with your dental hygienist.\n\
     Type `next` to begin.\n"
        .to_string()
}

fn patient_info(a: &Assessment) -> String {
    format!(
        "Patient name:   {}\nChart number:   {}\nExam date:      {}\n\n\
         Set with: name <text> | chart <text> | date <text>\n",
        a.patient.name, a.patient.chart_number, a.patient.date
    )
}

fn criteria(domain: &Domain) -> String {
    let mut out = String::new();
    if let Some(description) = &domain.description {
        out.push_str(&format!("{description}\n"));
    }
    for level in &domain.levels {
        out.push_str(&format!("  {}: {}\n", level.value, level.description));
    }
    out
}

fn plaque(a: &Assessment) -> String {
    let mut out = criteria(OralHygiene.domain(Category::Plaque));
    let (upper, lower) = PLAQUE_TEETH.split_at(PLAQUE_MAXILLARY);
    let (upper_scores, lower_scores) = a.plaque.scores.split_at(PLAQUE_MAXILLARY);
    for (arch, teeth, scores) in [("Maxillary", upper, upper_scores), ("Mandibular", lower, lower_scores)] {
        out.push_str(&format!("{arch}:"));
        for (tooth, score) in teeth.iter().zip(scores) {
            out.push_str(&format!("  #{tooth}={score}"));
        }
        out.push('\n');
    }
    out.push_str("\nSet with: plaque <tooth> <level>\n");
    out
}

fn perio(a: &Assessment) -> String {
    let mut out = criteria(OralHygiene.domain(Category::Perio));
    out.push_str("Tooth   mesial  mid     distal\n");
    for (tooth, depths) in PERIO_TEETH.iter().zip(a.perio.depths.chunks(ProbingSite::ALL.len())) {
        out.push_str(&format!("#{tooth:<6}"));
        for depth in depths {
            let shown = if depth.is_empty() { "-" } else { depth.as_str() };
            out.push_str(&format!(" {shown:<7}"));
        }
        out.push('\n');
    }
    out.push_str("\nSet with: perio <tooth> <mesial|mid|distal> <depth>\n");
    out
}

fn interdental(a: &Assessment) -> String {
    let mut out = criteria(OralHygiene.domain(Category::Interdental));
    for (site, score) in INTERDENTAL_SITES.iter().zip(a.interdental.scores) {
        out.push_str(&format!("  #{site}: {score}\n"));
    }
    out.push_str("\nSet with: interdental <site> <score>\n");
    out
}

fn single(category: Category, value: i32) -> String {
    let mut out = format!("{}:\n", category.label());
    out.push_str(&criteria(OralHygiene.domain(category)));
    out.push_str(&format!("Current: {value}   (set with: {} <score>)\n", category.id()));
    out
}

fn summary(a: &Assessment) -> String {
    let report = evaluate(a);
    let mut out = match render_summary(a, &report) {
        Ok(text) => text,
        Err(e) => format!("(summary unavailable: {e})\n"),
    };

    let chart = RadarChart::from_report(&report, &ChartStyles::default());
    out.push_str("\nChart (scaled to 100):\n");
    for axis in &chart.axes {
        out.push_str(&format!("  {:<28} {:>5.1}\n", axis.label, axis.value));
    }

    let advisories = range_advisories(a);
    if !advisories.is_empty() {
        out.push_str("\nValues outside their usual range (scored as entered):\n");
        for advisory in &advisories {
            tracing::warn!(subscale = %advisory.subscale_id, value = advisory.value, "out-of-range score");
            out.push_str(&format!("  {}\n", advisory.message));
        }
    }

    out.push_str("\nType `export` to save the report image.\n");
    out
}
