use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading-fitness recommendation derived from the behavioral score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Apto,
    Cautela,
    NaoRecomendado,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Apto => "APTO",
            Verdict::Cautela => "CAUTELA",
            Verdict::NaoRecomendado => "NAO_RECOMENDADO",
        }
    }

    /// Short headline shown next to the score.
    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Apto => "Fit to trade",
            Verdict::Cautela => "Trade with caution",
            Verdict::NaoRecomendado => "Pause recommended",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_display() {
        for v in [Verdict::Apto, Verdict::Cautela, Verdict::NaoRecomendado] {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v));
        }
    }
}
