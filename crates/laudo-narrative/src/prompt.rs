//! Prompt for the radiologist persona.

use laudo_core::models::narrative::NarrativeRequest;

const INSTRUCTIONS: &str = "\
Sua tarefa é gerar um laudo técnico, profissional e detalhado em português.

Instruções importantes:
- Utilize terminologia médica apropriada e precisa
- Estruture o laudo em TÉCNICA, RELATÓRIO e CONCLUSÃO
- Na TÉCNICA: descreva brevemente o método e equipamento utilizado
- No RELATÓRIO: descreva os achados de forma organizada, usando linguagem técnica
- Na CONCLUSÃO: resuma os achados principais com opinião clínica
- Use termos ultrassonográficos como: anecóico, hipoecoico, hiperecoico, isoecóico, tópico, ectópico, etc.
- Mantenha tom profissional e impessoal
- Se houver achados anormais, descreva com precisão
- Se tudo estiver normal, afirme explicitamente a normalidade";

pub const DEFAULT_INDICATION: &str = "Avaliação de rotina";

/// Build the generation prompt. The prompt ends with the `TÉCNICA:`
/// header so the model starts writing that section.
pub fn build_prompt(request: &NarrativeRequest) -> String {
    let age = match request.age {
        Some(age) => format!("{age} anos"),
        None => "idade não informada".to_string(),
    };
    let gender = request
        .gender
        .as_deref()
        .filter(|g| !g.trim().is_empty())
        .map(|g| format!(", {g}"))
        .unwrap_or_default();
    let indication = request
        .clinical_indication
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or(DEFAULT_INDICATION);

    format!(
        "Você é um radiologista experiente e especializado em ultrassonografia {exam_lower}.\n\
         {INSTRUCTIONS}\n\
         \n\
         DADOS DO PACIENTE E EXAME:\n\
         - Tipo de exame: {exam}\n\
         - Paciente: {name}{gender}\n\
         - Idade: {age}\n\
         - Indicação clínica: {indication}\n\
         - Achados principais: {findings}\n\
         \n\
         GERE AGORA UM LAUDO COMPLETO E PROFISSIONAL:\n\
         \n\
         TÉCNICA:\n",
        exam_lower = request.exam_type.to_lowercase(),
        exam = request.exam_type,
        name = request.patient_name,
        findings = request.findings.join(", "),
    )
}
