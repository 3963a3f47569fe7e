use laudo_knowledge::error::KnowledgeError;
use laudo_knowledge::guidance::{
    NO_ALTERATIONS_CONCLUSION, NO_ALTERATIONS_GUIDANCE, guided_finding_ids,
};
use laudo_knowledge::KnowledgeBase;

#[test]
fn lists_exam_types_in_menu_order() {
    let kb = KnowledgeBase::global();
    assert_eq!(
        kb.list_exam_types(),
        vec![
            "US Cervical - Tireoide",
            "US Abdome - Total",
            "US Pelve Feminina",
            "US Obstétrico - 1º Trimestre",
            "US Obstétrico - 2º/3º Trimestre",
        ]
    );
}

#[test]
fn shipped_catalogue_validates_clean() {
    let issues = KnowledgeBase::global().validate();
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn categories_keep_narrative_order() {
    let kb = KnowledgeBase::global();
    let names: Vec<_> = kb
        .categories("US Abdome - Total")
        .unwrap()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Fígado", "Vesícula Biliar", "Pâncreas", "Baço", "Rins", "Bexiga"]
    );
}

#[test]
fn exam_can_be_addressed_by_slug() {
    let kb = KnowledgeBase::global();
    let exam = kb.exam("abdome-total").unwrap();
    assert_eq!(exam.name(), "US Abdome - Total");
    assert!(kb.technique("abdome-total").unwrap().contains("convexo"));
}

#[test]
fn unknown_exam_type_is_not_found() {
    let kb = KnowledgeBase::global();
    assert!(matches!(
        kb.categories("US Joelho"),
        Err(KnowledgeError::UnknownExamType(name)) if name == "US Joelho"
    ));
}

#[test]
fn definitions_are_found_across_all_exam_types() {
    let kb = KnowledgeBase::global();
    let colo_curto = kb.find_definition("colo-curto").unwrap();
    assert_eq!(colo_curto.label, "Colo Curto (< 25mm)");
    assert!(colo_curto.requires_size);

    let nodule = kb.find_definition("nodulo-tireoidiano").unwrap();
    assert!(nodule.has_quantity && nodule.has_laterality && nodule.requires_size);
    assert!(!nodule.characteristics.is_empty());
}

#[test]
fn unknown_finding_is_not_found() {
    let kb = KnowledgeBase::global();
    assert!(matches!(
        kb.find_definition("nodulo-inexistente"),
        Err(KnowledgeError::UnknownFinding(_))
    ));
}

#[test]
fn finding_from_another_exam_is_rejected() {
    let kb = KnowledgeBase::global();
    let err = kb
        .category_of("US Cervical - Tireoide", "cisto-renal")
        .unwrap_err();
    assert!(matches!(err, KnowledgeError::FindingNotInExam { .. }));

    let category = kb.category_of("US Abdome - Total", "cisto-renal").unwrap();
    assert_eq!(category.name, "Rins");
}

#[test]
fn normal_variant_is_tagged_not_positional() {
    let kb = KnowledgeBase::global();
    let gestation = &kb.categories("US Obstétrico - 1º Trimestre").unwrap()[0];
    assert_eq!(gestation.findings[0].id, "gestacao-inicial");
    assert_eq!(gestation.normal_variant().unwrap().id, "gestacao-viavel");

    let liver = &kb.categories("US Abdome - Total").unwrap()[0];
    assert_eq!(liver.normal_variant().unwrap().id, "figado-normal");
}

#[test]
fn clubfoot_text_covers_both_sides_without_laterality() {
    let kb = KnowledgeBase::global();
    let clubfoot = kb.find_definition("pe-torto").unwrap();
    assert!(!clubfoot.has_laterality);
    assert!(clubfoot.altered_text.contains("pé(s)"));
}

#[test]
fn absent_iud_carries_its_own_conclusion() {
    let kb = KnowledgeBase::global();
    let absent = kb.find_definition("diu-ausente").unwrap();
    assert!(absent.is_normal_variant);
    assert_eq!(absent.conclusion_text.as_deref(), Some("Ausência de DIU na cavidade uterina."));
}

#[test]
fn every_guided_finding_has_a_conclusion() {
    let kb = KnowledgeBase::global();
    for id in guided_finding_ids() {
        let definition = kb.find_definition(id).unwrap();
        let conclusion = definition
            .conclusion_text
            .as_deref()
            .unwrap_or_else(|| panic!("{id} has guidance but no conclusion"));
        assert!(kb.guidance_for(conclusion).is_some(), "{id} guidance not indexed");
    }
}

#[test]
fn guidance_lookup_is_total_over_known_and_unknown_input() {
    let kb = KnowledgeBase::global();
    assert_eq!(
        kb.guidance_for(NO_ALTERATIONS_CONCLUSION),
        Some(NO_ALTERATIONS_GUIDANCE)
    );
    assert_eq!(kb.guidance_for("Fígado sem alterações."), None);
    assert_eq!(kb.guidance_for(""), None);
}

#[test]
fn unknown_exam_type_gets_default_technique() {
    let kb = KnowledgeBase::global();
    assert_eq!(kb.technique_or_default("US Joelho"), laudo_knowledge::DEFAULT_TECHNIQUE);
    assert_eq!(
        kb.technique_or_default("US Abdome - Total"),
        kb.technique("abdome-total").unwrap()
    );
}
