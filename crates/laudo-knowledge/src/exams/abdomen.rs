use laudo_core::models::finding::{Category, FindingDefinition};

use crate::Exam;

/// Total abdominal ultrasound: upper abdominal organs, kidneys and bladder.
pub struct TotalAbdomen;

impl Exam for TotalAbdomen {
    fn id(&self) -> &str {
        "abdome-total"
    }

    fn name(&self) -> &str {
        "US Abdome - Total"
    }

    fn technique(&self) -> &str {
        "Exame realizado com transdutor convexo multifrequencial na modalidade bidimensional, com análise da região abdominal superior e inferior."
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                Category::new(
                    "Fígado",
                    "Fígado com dimensões normais, contornos regulares e ecotextura dentro dos padrões habituais. Veias hepáticas e ramos portais preservados. Veia porta de calibre normal (até 1,2 cm).",
                    vec![
                        FindingDefinition::new(
                            "figado-normal",
                            "Normal",
                            "Fígado com dimensões normais, contornos regulares e ecotextura dentro dos padrões habituais. Veias hepáticas e ramos portais preservados. Veia porta de calibre normal (até 1,2 cm).",
                        )
                        .normal()
                        .concluding("Fígado sem alterações."),
                        FindingDefinition::new(
                            "esteatose-hepatica",
                            "Esteatose Hepática",
                            "Fígado de dimensões normais, contornos regulares, apresentando aumento difuso da ecogenicidade do parênquima, com atenuação do feixe acústico posterior, sem a caracterização de lesões focais bem definidas.",
                        )
                        .concluding("Esteatose hepática (infiltração gordurosa). Recomenda-se acompanhamento clínico e controle de fatores de risco.")
                        .observations("Grau: Leve/Moderado/Acentuado"),
                        FindingDefinition::new(
                            "hepatopatia-parenquimatosa",
                            "Hepatopatia Parenquimatosa",
                            "Fígado de dimensões normais, contornos serrilhados, bordas rombas e ecotextura discretamente heterogênea. Não são caracterizadas lesões focais bem definidas.",
                        )
                        .concluding("Hepatopatia parenquimatosa. Correlacionar com dados clínicos e laboratoriais."),
                        FindingDefinition::new(
                            "cirrose-hepatica",
                            "Cirrose Hepática",
                            "Fígado de dimensões reduzidas, com sinais de hipertrofia compensatória dos lobos caudado e esquerdo. Apresenta contornos serrilhados e ecotextura difusamente heterogênea.",
                        )
                        .concluding("Sinais morfológicos de cirrose hepática. Correlacionar com dados clínicos."),
                        FindingDefinition::new(
                            "cisto-hepatico",
                            "Cisto Hepático",
                            "Cisto de paredes finas e conteúdo anecóico localizado no fígado.",
                        )
                        .sized()
                        .multiple()
                        .concluding("Cisto hepático simples. Geralmente benigno, sem necessidade de acompanhamento."),
                        FindingDefinition::new(
                            "hemangioma-hepatico",
                            "Hemangioma",
                            "Nódulo hiperecogênico, circunscrito, localizado no fígado, considerar a possibilidade de hemangioma.",
                        )
                        .sized()
                        .multiple()
                        .concluding("Nódulo hepático de aspecto sugestivo de hemangioma. Correlacionar com exames complementares se necessário."),
                        FindingDefinition::new(
                            "calcificacao-hepatica",
                            "Calcificação Hepática",
                            "Foco de calcificação de aspecto residual localizado no fígado.",
                        )
                        .sized()
                        .concluding("Calcificação hepática de aspecto residual, provavelmente benigna."),
                        FindingDefinition::new(
                            "hipertensao-portal",
                            "Hipertensão Portal",
                            "Veia porta de calibre aumentado. Recanalização da veia paraumbilical. Circulação colateral perigástrica e no hilo esplênico.",
                        )
                        .concluding("Sinais ultrassonográficos de hipertensão portal."),
                    ],
                ),
                Category::new(
                    "Vesícula Biliar",
                    "Vesícula biliar normodistendida, de paredes finas, anecóica, sem cálculos ou dilatação de vias biliares.",
                    vec![
                        FindingDefinition::new(
                            "vesicula-normal",
                            "Normal",
                            "Vesícula biliar normodistendida, de paredes finas, anecóica, sem cálculos ou dilatação de vias biliares.",
                        )
                        .normal()
                        .concluding("Vesícula biliar sem alterações."),
                        FindingDefinition::new(
                            "colelitiase",
                            "Colelitíase (Cálculos)",
                            "Vesícula biliar normodistendida, de paredes finas, apresentando cálculo móvel em seu interior.",
                        )
                        .sized()
                        .multiple()
                        .concluding("Colelitíase. Recomenda-se avaliação cirúrgica para colecistectomia, se sintomático.")
                        .observations("Cálculos móveis à mudança de decúbito"),
                        FindingDefinition::new(
                            "bile-tumefacta",
                            "Bile Tumefacta (Barro Biliar)",
                            "Vesícula biliar normodistendida, de paredes finas, contendo sedimento ecogênico amorfo depositado em seu interior, sem imagens calculosas.",
                        )
                        .concluding("Bile tumefacta (barro biliar). Acompanhamento clínico."),
                        FindingDefinition::new(
                            "polipo-vesicular",
                            "Pólipo/Colesterolose",
                            "Observa-se imagem nodular hiperecogênica fixa à parede vesicular, devendo corresponder a colesterolose ou a pequeno pólipo.",
                        )
                        .sized()
                        .concluding("Pólipo vesicular ou colesterolose. Acompanhamento conforme critério clínico."),
                        FindingDefinition::new(
                            "colecistite",
                            "Colecistite",
                            "Vesícula biliar distendida, apresentando paredes espessadas (espessura > 3mm), forma e contornos preservados. Presença de imagens compatíveis com cálculos em seu interior.",
                        )
                        .concluding("Sinais ultrassonográficos de colecistite aguda. Correlacionar com dados clínicos.")
                        .observations("Sinal de Murphy ultrassonográfico pode estar presente"),
                        FindingDefinition::new(
                            "colecistectomia",
                            "Pós-Colecistectomia",
                            "Vesícula biliar não caracterizada (status pós-operatório). Há pequena dilatação das vias biliares intra e extra-hepáticas, habitualmente observada no pós-operatório.",
                        )
                        .concluding("Status pós-colecistectomia."),
                    ],
                ),
                Category::new(
                    "Pâncreas",
                    "Pâncreas com dimensões normais, contornos definidos e ecotextura homogênea.",
                    vec![
                        FindingDefinition::new(
                            "pancreas-normal",
                            "Normal",
                            "Pâncreas com dimensões normais, contornos definidos e ecotextura homogênea.",
                        )
                        .normal()
                        .concluding("Pâncreas sem alterações."),
                        FindingDefinition::new(
                            "pancreas-obscurecido",
                            "Avaliação Prejudicada (Gás)",
                            "Avaliação do pâncreas prejudicada devido à interposição gasosa intestinal.",
                        )
                        .concluding("Pâncreas com avaliação parcial devido a gás intestinal."),
                    ],
                ),
                Category::new(
                    "Baço",
                    "Baço com dimensões normais (até 11-12 cm), morfologia habitual e ecotextura homogênea.",
                    vec![
                        FindingDefinition::new(
                            "baco-normal",
                            "Normal",
                            "Baço com dimensões normais, morfologia habitual e ecotextura homogênea.",
                        )
                        .normal()
                        .concluding("Baço sem alterações."),
                        FindingDefinition::new(
                            "esplenomegalia",
                            "Esplenomegalia",
                            "Baço com dimensões aumentadas, morfologia habitual e ecotextura homogênea.",
                        )
                        .sized()
                        .concluding("Esplenomegalia. Correlacionar com dados clínicos."),
                        FindingDefinition::new(
                            "baco-acessorio",
                            "Baço Acessório",
                            "Baço acessório localizado próximo ao hilo esplênico.",
                        )
                        .sized()
                        .concluding("Baço acessório, achado benigno."),
                        FindingDefinition::new(
                            "cisto-esplenico",
                            "Cisto Esplênico",
                            "Baço com dimensões conservadas, morfologia habitual e ecotextura homogênea exceto por cisto de paredes finas e conteúdo anecóico.",
                        )
                        .sized()
                        .concluding("Cisto esplênico simples."),
                        FindingDefinition::new(
                            "calcificacao-esplenica",
                            "Calcificação Esplênica",
                            "Baço com dimensões conservadas, morfologia habitual e ecotextura homogênea exceto por foco de calcificação de aspecto residual.",
                        )
                        .concluding("Calcificação esplênica residual, provavelmente benigna."),
                    ],
                ),
                Category::new(
                    "Rins",
                    "Rins com dimensões normais, contornos regulares, ecotextura preservada, relação cortico-medular mantida, sem dilatação do sistema coletor ou cálculos.",
                    vec![
                        FindingDefinition::new(
                            "rins-normal",
                            "Normal",
                            "Rins com dimensões normais, contornos regulares, ecotextura preservada, relação cortico-medular mantida, sem dilatação do sistema coletor ou cálculos.",
                        )
                        .normal()
                        .concluding("Rins sem alterações."),
                        FindingDefinition::new(
                            "cisto-renal",
                            "Cisto Renal Simples",
                            "Nota-se formação cística de paredes finas e conteúdo anecóico, cortical. Cisto renal simples.",
                        )
                        .sized()
                        .lateral()
                        .multiple()
                        .concluding("Cisto renal simples. Geralmente benigno, sem necessidade de acompanhamento."),
                        FindingDefinition::new(
                            "calculo-renal",
                            "Cálculo Renal (Nefrolitíase)",
                            "Cálculo não obstrutivo localizado em grupamento calicinal. Nefrolitíase.",
                        )
                        .sized()
                        .lateral()
                        .multiple()
                        .concluding("Nefrolitíase. Sugere-se avaliação urológica para conduta adequada."),
                        FindingDefinition::new(
                            "ectasia-pielocalicial",
                            "Ectasia Pielocalicial",
                            "Pequena dilatação pielocalicinal, sem a caracterização de fator obstrutivo. Ureter distal de calibre preservado.",
                        )
                        .lateral()
                        .concluding("Ectasia pielocalicial. Correlacionar com dados clínicos."),
                        FindingDefinition::new(
                            "nefropatia-cronica",
                            "Nefropatia Parenquimatosa Crônica",
                            "Rins apresentam dimensões reduzidas, contornos levemente irregulares e topografia normal. Nota-se adelgaçamento e hiperecogenicidade de suas corticais.",
                        )
                        .lateral()
                        .concluding("Sinais ultrassonográficos de nefropatia parenquimatosa crônica."),
                        FindingDefinition::new(
                            "pielonefrite",
                            "Pielonefrite",
                            "Presença de hipoecogenicidade focal da cortical, parcialmente delimitada, podendo corresponder a processo inflamatório focal.",
                        )
                        .sized()
                        .lateral()
                        .concluding("Sinais sugestivos de pielonefrite focal. Correlacionar com dados clínicos."),
                        FindingDefinition::new(
                            "rim-pelvico",
                            "Rim Pélvico",
                            "Rim com dimensões, forma, contornos normais, de topografia pélvica.",
                        )
                        .lateral()
                        .concluding("Rim ectópico em topografia pélvica, variação anatômica."),
                    ],
                ),
                Category::new(
                    "Bexiga",
                    "Bexiga com paredes finas e conteúdo anecóico, sem alterações.",
                    vec![
                        FindingDefinition::new(
                            "bexiga-normal",
                            "Normal",
                            "Bexiga com paredes finas e conteúdo anecóico, sem alterações.",
                        )
                        .normal()
                        .concluding("Bexiga sem alterações."),
                        FindingDefinition::new(
                            "calculo-bexiga",
                            "Cálculo na Bexiga",
                            "Presença de cálculo na bexiga.",
                        )
                        .sized()
                        .multiple()
                        .concluding("Cálculo vesical."),
                        FindingDefinition::new(
                            "espessamento-bexiga",
                            "Espessamento Parietal",
                            "Espessamento parietal da bexiga.",
                        )
                        .concluding("Espessamento vesical. Correlacionar com dados clínicos."),
                    ],
                ),
            ]
        });
        &CATEGORIES
    }
}
