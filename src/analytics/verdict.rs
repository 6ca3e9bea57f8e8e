use crate::models::Verdict;

const FIT_THRESHOLD: i32 = 75;
const PAUSE_THRESHOLD: i32 = 40;

pub fn classify(score: i32) -> Verdict {
    if score >= FIT_THRESHOLD {
        Verdict::Apto
    } else if score <= PAUSE_THRESHOLD {
        Verdict::NaoRecomendado
    } else {
        Verdict::Cautela
    }
}
