// src/noyau/expr.rs
//
// Arbre d’expression (f64)
// ------------------------
// Ensemble fermé : nombres, + - * / **, moins unaire, SIN/COS/TAN/SQRT.
// Aucune variable, aucun accès hors arithmétique.
//
// Stockage à plat, en ordre postfixe : un noeud ne désigne que des noeuds
// d’indice inférieur, la racine est le dernier. Construction, évaluation,
// réécriture et libération sont donc des boucles : la longueur d’une chaîne
// `1+1+…+1` ne consomme pas de pile d’appels.

/// Fonctions unaires de la liste blanche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Sqrt,
}

impl Fonction {
    /// Nom canonique (sans la parenthèse).
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "SIN",
            Fonction::Cos => "COS",
            Fonction::Tan => "TAN",
            Fonction::Sqrt => "SQRT",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "SIN" => Some(Fonction::Sin),
            "COS" => Some(Fonction::Cos),
            "TAN" => Some(Fonction::Tan),
            "SQRT" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    /// Argument interprété comme un angle (en degrés côté utilisateur).
    pub fn est_angulaire(self) -> bool {
        !matches!(self, Fonction::Sqrt)
    }

    fn applique(self, x: f64) -> f64 {
        match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Sqrt => x.sqrt(),
        }
    }
}

/// Indice d’un noeud dans son arbre.
pub type Id = usize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Noeud {
    Num(f64),
    Neg(Id),

    Add(Id, Id),
    Sub(Id, Id),
    Mul(Id, Id),
    Div(Id, Id),
    Pow(Id, Id),

    Appel(Fonction, Id),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expr {
    noeuds: Vec<Noeud>,
}

impl Expr {
    /// Ajoute un noeud dont les enfants sont déjà présents ; rend son indice.
    pub fn ajoute(&mut self, noeud: Noeud) -> Id {
        debug_assert!(enfants(&noeud).iter().flatten().all(|&e| e < self.noeuds.len()));
        self.noeuds.push(noeud);
        self.noeuds.len() - 1
    }

    pub fn noeuds(&self) -> &[Noeud] {
        &self.noeuds
    }

    /// Valeur IEEE-754 brute : peut être infinie ou NaN (vérifié par l’appelant).
    /// Arbre vide => NaN.
    pub fn valeur(&self) -> f64 {
        use Noeud::*;

        let mut v: Vec<f64> = Vec::with_capacity(self.noeuds.len());
        for n in &self.noeuds {
            let x = match *n {
                Num(x) => x,
                Neg(a) => -v[a],
                Add(a, b) => v[a] + v[b],
                Sub(a, b) => v[a] - v[b],
                Mul(a, b) => v[a] * v[b],
                Div(a, b) => v[a] / v[b],
                Pow(a, b) => v[a].powf(v[b]),
                Appel(f, a) => f.applique(v[a]),
            };
            v.push(x);
        }
        v.last().copied().unwrap_or(f64::NAN)
    }
}

fn enfants(n: &Noeud) -> [Option<Id>; 2] {
    use Noeud::*;

    match *n {
        Num(_) => [None, None],
        Neg(a) | Appel(_, a) => [Some(a), None],
        Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) | Pow(a, b) => [Some(a), Some(b)],
    }
}
