use serde::Serialize;
use tera::{Context, Tera};

use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::patient::PatientInfo;
use oralcare_instruments::engine::{CategoryScore, ScoreReport};

use crate::error::ExportError;

pub const SUMMARY_TEMPLATE_NAME: &str = "summary.txt";

/// Text of the summary page. Rendered with Tera.
pub const DEFAULT_SUMMARY_TEMPLATE: &str = "\
Final Summary
Patient: {{ patient.name }}
Chart number: {{ patient.chart_number }}
Examination date: {{ patient.date }}

Total: {{ total_score }} / {{ total_max }} ({{ total_percent }}%)
{%- for c in categories %}
- {{ c.label }}: {{ c.actual }} / {{ c.max }}{% if c.warning %} (!){% endif %}
{%- endfor %}
{%- if warning_labels | length > 0 %}

Attention: {{ warning_labels | join(sep=\", \") }} need attention.
{%- endif %}
";

/// Values exposed to the summary template.
#[derive(Debug, Serialize)]
pub struct SummaryContext<'a> {
    pub patient: &'a PatientInfo,
    pub total_score: i64,
    pub total_max: i64,
    /// Pre-formatted with one decimal.
    pub total_percent: String,
    pub categories: &'a [CategoryScore],
    pub warning_labels: &'a [String],
}

impl<'a> SummaryContext<'a> {
    pub fn new(assessment: &'a Assessment, report: &'a ScoreReport) -> Self {
        Self {
            patient: &assessment.patient,
            total_score: report.total_score,
            total_max: report.total_max,
            total_percent: report.total_percent_text(),
            categories: &report.categories,
            warning_labels: &report.warning_labels,
        }
    }
}

/// Render a Tera template against a summary context.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    summary: &SummaryContext<'_>,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(summary)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the built-in summary.
pub fn render_summary(assessment: &Assessment, report: &ScoreReport) -> Result<String, ExportError> {
    render_template(
        SUMMARY_TEMPLATE_NAME,
        DEFAULT_SUMMARY_TEMPLATE,
        &SummaryContext::new(assessment, report),
    )
}
