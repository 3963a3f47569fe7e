use laudo_core::models::finding::{Category, FindingDefinition};

use crate::Exam;

/// Female pelvic ultrasound (transabdominal or endovaginal).
pub struct FemalePelvis;

impl Exam for FemalePelvis {
    fn id(&self) -> &str {
        "pelve-feminina"
    }

    fn name(&self) -> &str {
        "US Pelve Feminina"
    }

    fn technique(&self) -> &str {
        "Exame realizado com transdutor convexo e endocavitário multifrequencial nas modalidades bidimensional e Doppler colorido."
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                Category::new(
                    "Útero",
                    "Útero em anteversoflexão/retroversoflexão, com dimensões, contornos e ecotextura miometrial normais.",
                    vec![
                        FindingDefinition::new(
                            "utero-normal",
                            "Normal",
                            "Útero em anteversoflexão, com dimensões, contornos e ecotextura miometrial normais.",
                        )
                        .normal()
                        .concluding("Útero sem alterações."),
                        FindingDefinition::new(
                            "mioma-uterino",
                            "Mioma Uterino",
                            "A ecotextura miometrial é heterogênea à custa de nódulo hipoecogênico, bem definido.",
                        )
                        .sized()
                        .multiple()
                        .characteristics(&["Intramural", "Subseroso", "Submucoso", "Pediculado"])
                        .concluding("Mioma(s) uterino(s). Acompanhamento ginecológico. Conduta dependerá do tamanho, sintomas e desejo gestacional.")
                        .observations("Localização: parede anterior/posterior/lateral/fúndica"),
                        FindingDefinition::new(
                            "adenomiose",
                            "Adenomiose",
                            "Útero globoso com espessamento miometrial difuso, apresentando áreas hipoecogênicas e estrias ecogênicas de permeio, caracterizando adenomiose.",
                        )
                        .concluding("Sinais ultrassonográficos de adenomiose."),
                    ],
                ),
                Category::new(
                    "Endométrio",
                    "Endométrio centrado, com espessura adequada para a fase do ciclo menstrual.",
                    vec![
                        FindingDefinition::new(
                            "endometrio-normal",
                            "Normal",
                            "Endométrio centrado, com espessura adequada para a fase do ciclo menstrual.",
                        )
                        .normal()
                        .sized()
                        .concluding("Endométrio sem alterações.")
                        .observations("Fase proliferativa: 4-8mm, Fase secretora: 7-14mm, Pós-menopausa: <5mm"),
                        FindingDefinition::new(
                            "polipo-endometrial",
                            "Pólipo Endometrial",
                            "Endométrio apresentando nódulo hiperecogênico, circunscrito, com pedículo vascular ao Doppler, sugestivo de pólipo endometrial.",
                        )
                        .sized()
                        .concluding("Pólipo endometrial. Recomenda-se avaliação ginecológica."),
                        FindingDefinition::new(
                            "hiperplasia-endometrial",
                            "Hiperplasia Endometrial",
                            "Endométrio com espessura aumentada para a fase do ciclo ou estado hormonal.",
                        )
                        .sized()
                        .concluding("Espessamento endometrial. Recomenda-se avaliação ginecológica para investigação complementar."),
                    ],
                ),
                Category::new(
                    "Ovários",
                    "Ovários tópicos com dimensões e ecotextura normais, apresentando folículos compatíveis com a fase do ciclo.",
                    vec![
                        FindingDefinition::new(
                            "ovarios-normal",
                            "Normal",
                            "Ovários tópicos com dimensões e ecotextura normais, apresentando folículos compatíveis com a fase do ciclo.",
                        )
                        .normal()
                        .concluding("Ovários sem alterações."),
                        FindingDefinition::new(
                            "cisto-ovariano-simples",
                            "Cisto Ovariano Simples/Funcional",
                            "Cisto de paredes finas e conteúdo homogêneo, de aspecto funcional (folicular).",
                        )
                        .sized()
                        .lateral()
                        .concluding("Cisto ovariano de aspecto funcional. Acompanhamento ginecológico. A maioria é funcional e regride espontaneamente."),
                        FindingDefinition::new(
                            "cisto-hemorragico",
                            "Cisto Hemorrágico",
                            "Cisto de paredes regulares, conteúdo espesso com debris e traves ecogênicas de permeio, sugestivo de cisto de conteúdo hemorrágico.",
                        )
                        .sized()
                        .lateral()
                        .concluding("Cisto ovariano de aspecto hemorrágico. Acompanhamento ginecológico."),
                        FindingDefinition::new(
                            "cisto-corpo-luteo",
                            "Cisto de Corpo Lúteo",
                            "Cisto de paredes espessas e anfractuosas, apresentando conteúdo hipoecogênico, sugestivo de cisto de corpo lúteo.",
                        )
                        .sized()
                        .lateral()
                        .concluding("Cisto de corpo lúteo. Achado fisiológico."),
                        FindingDefinition::new(
                            "endometrioma",
                            "Endometrioma",
                            "Cisto com conteúdo ecogênico homogêneo (vidro fosco), sugestivo de endometrioma.",
                        )
                        .sized()
                        .lateral()
                        .concluding("Achado sugestivo de endometrioma. Correlacionar com dados clínicos."),
                    ],
                ),
                Category::new(
                    "Colo Uterino",
                    "Colo uterino de aspecto habitual, com orifício interno fechado.",
                    vec![
                        FindingDefinition::new(
                            "colo-normal",
                            "Normal",
                            "Colo uterino de aspecto habitual, com orifício interno fechado.",
                        )
                        .normal()
                        .concluding("Colo uterino sem alterações."),
                        FindingDefinition::new(
                            "cistos-naboth",
                            "Cistos de Naboth",
                            "O colo uterino e o canal cervical de aspecto habitual, apresentando cistos de retenção subcentimétricos.",
                        )
                        .concluding("Cistos de Naboth (retenção). Achado benigno."),
                    ],
                ),
                Category::new(
                    "DIU",
                    "Não há DIU no interior da cavidade uterina.",
                    vec![
                        FindingDefinition::new(
                            "diu-ausente",
                            "Ausente",
                            "Não há DIU no interior da cavidade uterina.",
                        )
                        .normal()
                        .concluding("Ausência de DIU na cavidade uterina."),
                        FindingDefinition::new(
                            "diu-topico",
                            "DIU Tópico",
                            "Adequado posicionamento de dispositivo endoceptivo na cavidade uterina com extremidade superior distando adequadamente da serosa fúndica e extremidade inferior acima do orifício interno do colo uterino.",
                        )
                        .concluding("DIU tópico e bem posicionado."),
                        FindingDefinition::new(
                            "diu-mal-posicionado",
                            "DIU Mal Posicionado",
                            "Dispositivo intrauterino com extremidade superior muito próxima ao fundo uterino ou extremidade inferior baixa.",
                        )
                        .concluding("DIU com posicionamento inadequado. Recomenda-se avaliação ginecológica."),
                    ],
                ),
            ]
        });
        &CATEGORIES
    }
}
