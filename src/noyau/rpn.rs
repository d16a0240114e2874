// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en refusant toute suite invalide
// - Puis reconstruire Expr (arbre à plat, sans récursion)
//
// Règles:
// - Fonction: doit être suivie de '(' ; sortie après la parenthèse fermante
// - '+'/'-' quand on attend une valeur => signe unaire ('+' ignoré, '-' => Neg)
// - Pas de multiplication implicite : valeur suivie de valeur/'('/fonction => erreur
// - Précédences : + - (1) < * / (2) < Neg (3) < ** (4, à droite)
//   => -2**2 = -(2**2), 2**-1 = 2**(-1)

use super::erreur::EvaluationError;
use super::expr::{Expr, Id, Noeud};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::StarStar => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::StarStar | Tok::Neg)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Num(90), RPar, Star, Num(2)]
///   rpn:    [Num(90), Fonction(Sin), Num(2), Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvaluationError> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // true : début, après un opérateur, après '(' ; false : après une valeur ou ')'
    let mut attend_valeur = true;
    let mut apres_fonction = false;

    for tok in tokens.iter().cloned() {
        if apres_fonction && tok != Tok::LPar {
            return Err(EvaluationError::mal_formee("fonction sans parenthèse"));
        }
        apres_fonction = false;

        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(EvaluationError::mal_formee("opérateur manquant"));
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::Fonction(_) => {
                if !attend_valeur {
                    return Err(EvaluationError::mal_formee("opérateur manquant"));
                }
                // reste sur la pile jusqu’à sa parenthèse fermante
                ops.push(tok);
                apres_fonction = true;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(EvaluationError::mal_formee("opérateur manquant"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(EvaluationError::mal_formee("opérande vide"));
                }

                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if top == Tok::LPar {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(EvaluationError::mal_formee(
                        "parenthèse fermante sans ouvrante",
                    ));
                }

                // si une fonction est au sommet, elle sort avec son argument
                if let Some(Tok::Fonction(_)) = ops.last() {
                    out.extend(ops.pop());
                }
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                if tok == Tok::Minus {
                    // préfixe : ne dépile rien
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::StarStar => {
                if attend_valeur {
                    return Err(EvaluationError::mal_formee("opérande manquant"));
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' ni par une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::Fonction(_)) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    out.extend(ops.pop());
                }

                ops.push(tok);
                attend_valeur = true;
            }

            Tok::Neg => return Err(EvaluationError::mal_formee("jeton Neg en entrée")),
        }
    }

    if attend_valeur {
        return Err(EvaluationError::mal_formee("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Tok::LPar {
            return Err(EvaluationError::mal_formee("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// La RPN est déjà en ordre postfixe : chaque jeton devient un noeud, la pile
/// ne contient que des indices.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, EvaluationError> {
    let mut arbre = Expr::default();
    let mut st: Vec<Id> = Vec::new();

    let manque = || EvaluationError::mal_formee("expression invalide");

    for tok in rpn.iter().cloned() {
        let noeud = match tok {
            Tok::Num(x) => Noeud::Num(x),

            Tok::Neg => Noeud::Neg(st.pop().ok_or_else(manque)?),

            Tok::Fonction(f) => {
                let x = st
                    .pop()
                    .ok_or_else(|| EvaluationError::mal_formee("fonction sans argument"))?;
                Noeud::Appel(f, x)
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::StarStar => {
                let b = st.pop().ok_or_else(manque)?;
                let a = st.pop().ok_or_else(manque)?;

                match tok {
                    Tok::Plus => Noeud::Add(a, b),
                    Tok::Minus => Noeud::Sub(a, b),
                    Tok::Star => Noeud::Mul(a, b),
                    Tok::Slash => Noeud::Div(a, b),
                    _ => Noeud::Pow(a, b),
                }
            }

            Tok::LPar | Tok::RPar => {
                return Err(EvaluationError::mal_formee("parenthèse inattendue en RPN"))
            }
        };
        st.push(arbre.ajoute(noeud));
    }

    // un seul résultat, et c’est le dernier noeud : la racine
    match (st.pop(), st.is_empty()) {
        (Some(_), true) => Ok(arbre),
        _ => Err(manque()),
    }
}
