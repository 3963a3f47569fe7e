use std::collections::HashSet;
use std::fmt;

use laudo_core::models::finding::{Category, FindingDefinition};
use laudo_core::models::narrative::NarrativeRequest;
use laudo_core::models::report::ReportHeader;
use laudo_core::models::selection::Laterality;
use laudo_knowledge::KnowledgeBase;
use laudo_knowledge::guidance::NO_ALTERATIONS_CONCLUSION;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::EngineError;
use crate::store::FindingStateStore;

/// Findings line used when nothing at all was selected.
pub const NO_FINDINGS_LINE: &str = "Não foram descritos achados específicos.";

pub const DOCTOR_NAME_PLACEHOLDER: &str = "[Nome do Médico]";
pub const DOCTOR_CRM_PLACEHOLDER: &str = "[CRM do Médico]";
pub const PATIENT_NAME_PLACEHOLDER: &str = "[Nome do Paciente]";
pub const BIRTH_DATE_PLACEHOLDER: &str = "[DD/MM/AAAA]";
pub const GENDER_PLACEHOLDER: &str = "[Gênero]";
pub const EXAM_TYPE_PLACEHOLDER: &str = "[Tipo de Exame]";

/// The structured result of report assembly.
///
/// `findings`, `conclusions` and `guidance` are never empty for an assembled
/// report; conclusions and guidance hold no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledReport {
    pub header: ReportHeader,
    pub exam_type: Option<String>,
    pub technique: Option<String>,
    pub findings: Vec<String>,
    pub conclusions: Vec<String>,
    pub guidance: Vec<String>,
}

/// Turns a selection into report text. Read-only over both the knowledge
/// base and the store, so assembling twice yields identical output.
pub struct ReportAssembler<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> ReportAssembler<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn assemble(
        &self,
        exam_type: Option<&str>,
        header: &ReportHeader,
        store: &FindingStateStore,
    ) -> Result<AssembledReport, EngineError> {
        let mut findings = Vec::new();
        let mut conclusions = OrderedSet::default();

        let (exam_name, technique) = match exam_type {
            Some(name) => {
                let exam = self.kb.exam(name)?;
                for category in exam.categories() {
                    assemble_category(category, store, &mut findings, &mut conclusions);
                }
                (Some(exam.name().to_string()), Some(exam.technique().to_string()))
            }
            None => (None, None),
        };

        if findings.is_empty() {
            findings.push(NO_FINDINGS_LINE.to_string());
            conclusions.insert(NO_ALTERATIONS_CONCLUSION);
        }
        if conclusions.is_empty() {
            conclusions.insert(NO_ALTERATIONS_CONCLUSION);
        }

        let mut guidance = OrderedSet::default();
        for conclusion in conclusions.iter() {
            if let Some(text) = self.kb.guidance_for(conclusion) {
                guidance.insert(text);
            }
        }
        if guidance.is_empty()
            && let Some(text) = self.kb.guidance_for(NO_ALTERATIONS_CONCLUSION)
        {
            guidance.insert(text);
        }

        info!(
            exam_type = exam_name.as_deref().unwrap_or("-"),
            findings = findings.len(),
            conclusions = conclusions.len(),
            guidance = guidance.len(),
            "report assembled"
        );

        Ok(AssembledReport {
            header: header.clone(),
            exam_type: exam_name,
            technique,
            findings,
            conclusions: conclusions.into_vec(),
            guidance: guidance.into_vec(),
        })
    }
}

fn assemble_category(
    category: &Category,
    store: &FindingStateStore,
    findings: &mut Vec<String>,
    conclusions: &mut OrderedSet,
) {
    let mut altered = false;

    for definition in category.findings.iter().filter(|f| !f.is_normal_variant) {
        let state = store.get(&definition.id);
        if !state.is_checked {
            continue;
        }
        if definition.has_quantity {
            // Zero instances (quantity blank or invalid): nothing to report yet.
            if state.instances.is_empty() {
                debug!(finding = %definition.id, "multi-occurrence finding has no instances, skipped");
                continue;
            }
            for instance in &state.instances {
                findings.push(finding_line(definition, &instance.size, instance.laterality));
            }
        } else {
            findings.push(finding_line(definition, &state.size, state.laterality));
        }
        altered = true;

        if let Some(conclusion) = &definition.conclusion_text {
            conclusions.insert(conclusion);
        }
    }

    if altered {
        return;
    }

    if let Some(normal) = category.normal_variant()
        && store.is_checked(&normal.id)
    {
        findings.push(category.default_normal_text.clone());
        conclusions.insert(normal.conclusion_text.as_deref().unwrap_or(NO_ALTERATIONS_CONCLUSION));
    }
}

/// `altered_text`, optionally followed by `(Direito, Tamanho: 8 mm)`.
fn finding_line(definition: &FindingDefinition, size: &str, laterality: Option<Laterality>) -> String {
    let mut qualifiers = Vec::new();
    if let Some(side) = laterality {
        qualifiers.push(side.label().to_string());
    }
    let size = size.trim();
    if definition.requires_size && !size.is_empty() {
        qualifiers.push(format!("Tamanho: {size} mm"));
    }

    if qualifiers.is_empty() {
        definition.altered_text.clone()
    } else {
        format!("{} ({})", definition.altered_text, qualifiers.join(", "))
    }
}

/// Insertion-ordered set of strings; first occurrence wins.
#[derive(Default)]
struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    fn insert(&mut self, value: &str) {
        if self.seen.insert(value.to_string()) {
            self.items.push(value.to_string());
        }
    }

    fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() { placeholder } else { value }
}

impl AssembledReport {
    /// Plain-text report in the fixed section layout.
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    /// Exam type as printed, falling back to its placeholder.
    pub fn exam_type_label(&self) -> &str {
        self.exam_type.as_deref().unwrap_or(EXAM_TYPE_PLACEHOLDER)
    }

    /// Header with blank fields replaced by their placeholders.
    pub fn display_header(&self) -> ReportHeader {
        let h = &self.header;
        ReportHeader {
            doctor_name: or_placeholder(&h.doctor_name, DOCTOR_NAME_PLACEHOLDER).to_string(),
            doctor_crm: or_placeholder(&h.doctor_crm, DOCTOR_CRM_PLACEHOLDER).to_string(),
            patient_name: or_placeholder(&h.patient_name, PATIENT_NAME_PLACEHOLDER).to_string(),
            patient_birth_date: or_placeholder(&h.patient_birth_date, BIRTH_DATE_PLACEHOLDER)
                .to_string(),
            patient_gender: or_placeholder(&h.patient_gender, GENDER_PLACEHOLDER).to_string(),
        }
    }

    /// Build the input for a narrative generator from this report.
    pub fn narrative_request(&self, age: Option<u32>, clinical_indication: Option<String>) -> NarrativeRequest {
        let gender = self.header.patient_gender.trim();
        NarrativeRequest {
            exam_type: self.exam_type_label().to_string(),
            patient_name: or_placeholder(&self.header.patient_name, PATIENT_NAME_PLACEHOLDER).to_string(),
            age,
            gender: (!gender.is_empty()).then(|| gender.to_string()),
            clinical_indication,
            findings: self.findings.clone(),
        }
    }

    pub(crate) fn write_header(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let h = self.display_header();
        writeln!(f, "LAUDO DE ULTRASSOM")?;
        writeln!(f)?;
        writeln!(f, "MÉDICO RESPONSÁVEL:")?;
        writeln!(f, "Nome: {}", h.doctor_name)?;
        writeln!(f, "CRM: {}", h.doctor_crm)?;
        writeln!(f)?;
        writeln!(f, "DADOS DO PACIENTE:")?;
        writeln!(f, "Nome: {}", h.patient_name)?;
        writeln!(f, "Data de Nascimento: {}", h.patient_birth_date)?;
        writeln!(f, "Gênero: {}", h.patient_gender)?;
        writeln!(f)?;
        writeln!(f, "EXAME:")?;
        writeln!(f, "Tipo de Exame: {}", self.exam_type_label())?;
        if let Some(technique) = &self.technique {
            writeln!(f, "Técnica: {technique}")?;
        }
        Ok(())
    }

    pub(crate) fn write_guidance(&self, f: &mut impl fmt::Write) -> fmt::Result {
        if self.guidance.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "ORIENTAÇÕES:")?;
        for line in &self.guidance {
            writeln!(f, "- {line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AssembledReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        writeln!(f)?;
        writeln!(f, "ACHADOS:")?;
        for line in &self.findings {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        writeln!(f, "CONCLUSÃO:")?;
        for line in &self.conclusions {
            writeln!(f, "- {line}")?;
        }
        self.write_guidance(f)
    }
}
