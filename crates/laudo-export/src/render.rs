use laudo_core::models::report::ReportHeader;
use laudo_engine::assemble::AssembledReport;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Template reproducing the plain-text report layout.
///
/// Custom letterheads are Tera templates over the same context:
/// `header.*` (placeholders already applied), `exam_type`, `technique`
/// (may be null), `findings`, `conclusions`, `guidance`.
pub const DEFAULT_TEMPLATE: &str = "\
LAUDO DE ULTRASSOM

MÉDICO RESPONSÁVEL:
Nome: {{ header.doctor_name }}
CRM: {{ header.doctor_crm }}

DADOS DO PACIENTE:
Nome: {{ header.patient_name }}
Data de Nascimento: {{ header.patient_birth_date }}
Gênero: {{ header.patient_gender }}

EXAME:
Tipo de Exame: {{ exam_type }}
{% if technique %}Técnica: {{ technique }}
{% endif %}
ACHADOS:
{% for line in findings %}{{ line }}
{% endfor %}
CONCLUSÃO:
{% for line in conclusions %}- {{ line }}
{% endfor %}{% if guidance %}
ORIENTAÇÕES:
{% for line in guidance %}- {{ line }}
{% endfor %}{% endif %}";

pub const DEFAULT_TEMPLATE_NAME: &str = "laudo.txt";

#[derive(Serialize)]
struct TemplateView<'a> {
    header: ReportHeader,
    exam_type: &'a str,
    technique: Option<&'a str>,
    findings: &'a [String],
    conclusions: &'a [String],
    guidance: &'a [String],
}

/// Render an assembled report with a Tera template.
///
/// Template names ending in `.html` or `.xml` are autoescaped.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &AssembledReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let view = TemplateView {
        header: report.display_header(),
        exam_type: report.exam_type_label(),
        technique: report.technique.as_deref(),
        findings: &report.findings,
        conclusions: &report.conclusions,
        guidance: &report.guidance,
    };
    let value = serde_json::to_value(&view)?;
    let context = Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "report template rendered");
    Ok(rendered)
}

pub fn render_default(report: &AssembledReport) -> Result<String, ExportError> {
    render_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, report)
}
