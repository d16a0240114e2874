// src/noyau/jetons.rs

use super::erreur::EvaluationError;
use super::expr::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Appel canonique (SIN/COS/TAN/SQRT) ; la parenthèse ouvrante est un LPar séparé.
    Fonction(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    StarStar, // **

    // Moins unaire : produit par to_rpn, jamais par tokenize.
    Neg,

    LPar,
    RPar,
}

/// Tokenize un texte CANONIQUE (sortie de normalise).
/// Supporte:
/// - nombres décimaux : 12, 3.5, 5., .25
/// - opérateurs + - * / **
/// - parenthèses ( )
/// - appels SIN COS TAN SQRT
///
/// Tout autre caractère => MalformedExpression.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvaluationError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::StarStar);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Appels canoniques : majuscules ASCII uniquement
        if c.is_ascii_uppercase() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_uppercase() {
                i += 1;
            }
            let nom: String = chars[start..i].iter().collect();
            let f = Fonction::depuis_nom(&nom)
                .ok_or_else(|| EvaluationError::mal_formee(format!("fonction inconnue: {nom}")))?;
            out.push(Tok::Fonction(f));
            continue;
        }

        // Nombre décimal
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let txt: String = chars[start..i].iter().collect();
            if txt == "." {
                return Err(EvaluationError::mal_formee("point décimal isolé"));
            }
            let x = txt
                .parse::<f64>()
                .map_err(|_| EvaluationError::mal_formee(format!("nombre invalide: {txt}")))?;
            out.push(Tok::Num(x));
            continue;
        }

        return Err(EvaluationError::mal_formee(format!(
            "caractère inattendu: '{c}'"
        )));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(x) => format!("{x}"),
            Tok::Fonction(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::StarStar => "**".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
