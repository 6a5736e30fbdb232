//! Builds the fixed ten-question battery for a job title.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Difficulty, JobTitle, Question, QuestionCategory, QuestionId};

/// Number of questions in every generated battery.
pub const QUESTION_COUNT: usize = 10;

/// Placeholder replaced with the job title, verbatim.
const TITLE_SLOT: &str = "{title}";

//
// ─── TEMPLATES ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy)]
struct Template {
    text: &'static str,
    difficulty: Difficulty,
}

const fn template(text: &'static str, difficulty: Difficulty) -> Template {
    Template { text, difficulty }
}

static GENERAL: [Template; 3] = [
    template(
        "O que mais te motiva a trabalhar como {title}?",
        Difficulty::Basic,
    ),
    template(
        "Como você se mantém atualizado sobre as tendências da área de {title}?",
        Difficulty::Intermediate,
    ),
    template(
        "Onde você se vê em 5 anos na sua carreira?",
        Difficulty::Basic,
    ),
];

static SITUATIONAL: [Template; 3] = [
    template(
        "Conte sobre uma situação em que precisou lidar com prazos apertados.",
        Difficulty::Intermediate,
    ),
    template(
        "Como você lidaria com um cliente ou colega insatisfeito?",
        Difficulty::Advanced,
    ),
    template(
        "Descreva uma vez que você precisou aprender algo novo rapidamente.",
        Difficulty::Basic,
    ),
];

//
// ─── ROLE TRACKS ───────────────────────────────────────────────────────────────
//

/// Which technical question set a job title selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTrack {
    Marketing,
    Development,
    Generic,
}

struct TrackRule {
    track: RoleTrack,
    keywords: &'static [&'static str],
    questions: [Template; 4],
}

impl TrackRule {
    fn matches(&self, title_lower: &str) -> bool {
        self.keywords.iter().any(|kw| title_lower.contains(kw))
    }
}

/// Evaluated in order; the first match wins.
static TRACK_RULES: [TrackRule; 2] = [
    TrackRule {
        track: RoleTrack::Marketing,
        keywords: &["marketing"],
        questions: [
            template(
                "Quais ferramentas de automação de marketing você já utilizou?",
                Difficulty::Intermediate,
            ),
            template(
                "Como você mede o sucesso de uma campanha digital?",
                Difficulty::Advanced,
            ),
            template(
                "Explique como funciona o funil de conversão.",
                Difficulty::Basic,
            ),
            template(
                "Como você utilizaria dados para otimizar uma campanha de Facebook Ads?",
                Difficulty::Advanced,
            ),
        ],
    },
    TrackRule {
        track: RoleTrack::Development,
        keywords: &["desenvolvedor", "programador"],
        questions: [
            template(
                "Quais linguagens de programação você domina?",
                Difficulty::Basic,
            ),
            template(
                "Como você garante a qualidade do código que escreve?",
                Difficulty::Intermediate,
            ),
            template(
                "Explique o conceito de Clean Code.",
                Difficulty::Intermediate,
            ),
            template(
                "Como você lidaria com um problema de performance em uma aplicação?",
                Difficulty::Advanced,
            ),
        ],
    },
];

static GENERIC_TECHNICAL: [Template; 4] = [
    template(
        "Quais são as principais competências técnicas necessárias para {title}?",
        Difficulty::Basic,
    ),
    template(
        "Descreva um projeto desafiador que você executou na área de {title}.",
        Difficulty::Intermediate,
    ),
    template(
        "Como você mede resultados e KPIs no seu trabalho como {title}?",
        Difficulty::Advanced,
    ),
    template(
        "Quais ferramentas ou metodologias você considera essenciais para {title}?",
        Difficulty::Intermediate,
    ),
];

fn technical_for(title: &str) -> (RoleTrack, &'static [Template; 4]) {
    let lower = title.to_lowercase();
    TRACK_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map_or((RoleTrack::Generic, &GENERIC_TECHNICAL), |rule| {
            (rule.track, &rule.questions)
        })
}

/// Returns the technical track a job title maps to.
#[must_use]
pub fn role_track(title: &JobTitle) -> RoleTrack {
    technical_for(title.as_str()).0
}

//
// ─── GENERATION ────────────────────────────────────────────────────────────────
//

/// Generates the ten-question battery for `title`.
///
/// Layout is always three general, four technical and three situational
/// questions with ids `1..=10`. Output depends only on `title`.
#[must_use]
pub fn generate(title: &JobTitle) -> Vec<Question> {
    let raw = title.as_str();
    let (track, technical) = technical_for(raw);

    let blocks: [(QuestionCategory, &[Template]); 3] = [
        (QuestionCategory::General, &GENERAL),
        (QuestionCategory::Technical, technical),
        (QuestionCategory::Situational, &SITUATIONAL),
    ];

    let questions: Vec<Question> = blocks
        .iter()
        .flat_map(|(category, templates)| templates.iter().map(move |t| (*category, t)))
        .zip(1_u32..)
        .map(|((category, t), id)| {
            Question::new(
                QuestionId::new(id),
                t.text.replace(TITLE_SLOT, raw),
                category,
                t.difficulty,
            )
        })
        .collect();

    debug!(?track, count = questions.len(), "generated question battery");
    questions
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn title(s: &str) -> JobTitle {
        JobTitle::parse(s).unwrap()
    }

    fn technical_texts(questions: &[Question]) -> Vec<&str> {
        questions[3..7].iter().map(|q| q.text.as_str()).collect()
    }

    #[test]
    fn battery_layout_is_fixed() {
        for raw in ["Desenvolvedor Backend", "Analista de Marketing", "Gerente de Vendas", "x"] {
            let questions = generate(&title(raw));
            assert_eq!(questions.len(), QUESTION_COUNT);

            let ids: Vec<u32> = questions.iter().map(|q| q.id.value()).collect();
            assert_eq!(ids, (1..=10).collect::<Vec<_>>());

            let categories: Vec<QuestionCategory> = questions.iter().map(|q| q.category).collect();
            let mut expected = vec![QuestionCategory::General; 3];
            expected.extend([QuestionCategory::Technical; 4]);
            expected.extend([QuestionCategory::Situational; 3]);
            assert_eq!(categories, expected);
        }
    }

    #[test]
    fn general_questions_interpolate_title() {
        let questions = generate(&title("Gerente de Vendas"));
        assert!(questions[0].text.contains("Gerente de Vendas"));
        assert!(questions[1].text.contains("Gerente de Vendas"));
        assert_eq!(questions[2].text, "Onde você se vê em 5 anos na sua carreira?");
    }

    #[test]
    fn developer_title_selects_development_set() {
        let questions = generate(&title("Desenvolvedor Backend"));
        assert_eq!(
            technical_texts(&questions),
            vec![
                "Quais linguagens de programação você domina?",
                "Como você garante a qualidade do código que escreve?",
                "Explique o conceito de Clean Code.",
                "Como você lidaria com um problema de performance em uma aplicação?",
            ]
        );
        assert_eq!(role_track(&title("programador júnior")), RoleTrack::Development);
    }

    #[test]
    fn marketing_title_selects_marketing_set() {
        let questions = generate(&title("Analista de Marketing"));
        assert_eq!(
            technical_texts(&questions)[0],
            "Quais ferramentas de automação de marketing você já utilizou?"
        );
        assert_eq!(questions[4].difficulty, Difficulty::Advanced);
    }

    #[test]
    fn marketing_wins_over_developer_keywords() {
        let t = title("Desenvolvedor de MARKETING");
        assert_eq!(role_track(&t), RoleTrack::Marketing);
    }

    #[test]
    fn other_titles_use_generic_interpolated_set() {
        let questions = generate(&title("Gerente de Vendas"));
        assert_eq!(role_track(&title("Gerente de Vendas")), RoleTrack::Generic);
        for q in &questions[3..7] {
            assert!(q.text.contains("Gerente de Vendas"), "{}", q.text);
        }
    }

    #[test]
    fn situational_questions_ignore_title() {
        let a = generate(&title("Analista de Marketing"));
        let b = generate(&title("Gerente de Vendas"));
        assert_eq!(a[7..], b[7..]);
        assert_eq!(a[7].text, "Conte sobre uma situação em que precisou lidar com prazos apertados.");
    }

    #[test]
    fn generation_is_deterministic() {
        let t = title("Engenheiro de Dados");
        assert_eq!(generate(&t), generate(&t));
    }
}
