//! Tests scientifiques (campagne) : identités en degrés + taxonomie d’erreurs.
//!
//! But : vérifier le noyau contre les valeurs de référence de la trigonométrie
//! en degrés, sans faire chauffer la machine.
//! - budget temps global
//! - tolérance relative 1e-9 (les formes f64 de π/180 ne sont pas exactes)

use std::time::{Duration, Instant};

use super::{applique_pourcentage, evaluate, formate_resultat, EvaluationError};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-9 * (1.0 + attendu.abs()),
        "expr={expr:?} valeur={v} attendu={attendu}"
    );
}

fn assert_affiche(expr: &str, attendu: &str) {
    assert_eq!(formate_resultat(eval_ok(expr)), attendu, "expr={expr:?}");
}

fn assert_non_fini(expr: &str) {
    assert!(
        matches!(evaluate(expr), Err(EvaluationError::NonFiniteResult(_))),
        "NonFiniteResult attendu pour {expr:?}"
    );
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Angles remarquables ------------------------ */

#[test]
fn sci_angles_remarquables_affiches() {
    assert_affiche("sin(30)", "0.5");
    assert_affiche("cos(60)", "0.5");
    assert_affiche("tan(45)", "1");
    assert_affiche("sin(90)", "1");
    assert_affiche("cos(90)", "0");
    assert_affiche("sin(180)", "0");
    assert_affiche("cos(180)", "-1");
    assert_affiche("sin(270)", "-1");
    assert_affiche("tan(135)", "-1");
}

#[test]
fn sci_identites_symetrie() {
    // sin(-x) = -sin(x) ; cos(-x) = cos(x)
    for x in [10.0_f64, 33.3, 72.0, 123.0] {
        let s = eval_ok(&format!("sin(−{x})")) + eval_ok(&format!("sin({x})"));
        assert!(s.abs() < 1e-12, "sin symétrie x={x}");
        let c = eval_ok(&format!("cos(−{x})")) - eval_ok(&format!("cos({x})"));
        assert!(c.abs() < 1e-12, "cos parité x={x}");
    }
}

#[test]
fn sci_identite_pythagore() {
    for x in [0, 17, 45, 89, 200, 359] {
        assert_proche(&format!("sin({x})^2+cos({x})^2"), 1.0);
    }
}

#[test]
fn sci_periodicite() {
    assert_proche("sin(30+360)", 0.5);
    assert_proche("cos(720)", 1.0);
    assert_proche("tan(45+180)", 1.0);
}

#[test]
fn sci_tan_egale_sin_sur_cos() {
    for x in [5, 30, 60, 100] {
        let t = eval_ok(&format!("tan({x})"));
        let r = eval_ok(&format!("sin({x})÷cos({x})"));
        assert!((t - r).abs() < 1e-9 * (1.0 + t.abs()), "x={x}");
    }
}

/* ------------------------ Imbrications ------------------------ */

#[test]
fn sci_imbrication_freres_et_parents() {
    // (sin(30)) et (cos(60)) frères : aucun ne mange la parenthèse de l’autre
    assert_proche("(sin(30))+(cos(60))", 1.0);
    assert_proche("sqrt(sin(90)+cos(0)+2)", 2.0);
    assert_proche("sin((45+45))×cos((0))", 1.0);
}

#[test]
fn sci_profondeur_raisonnable() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 200 niveaux de parenthèses : bien en dessous de la limite de pile
    let mut s = String::from("1");
    for _ in 0..200 {
        s = format!("({s}+1)");
    }
    assert_eq!(eval_ok(&s), 201.0);

    let mut t = String::from("0");
    for _ in 0..50 {
        t = format!("cos({t})");
    }
    let v = eval_ok(&t);
    assert!(v > 0.99 && v <= 1.0, "v={v}");

    budget(t0, max);
}

/* ------------------------ Taxonomie d’erreurs ------------------------ */

#[test]
fn sci_non_finis() {
    assert_non_fini("5/0");
    assert_non_fini("−5÷0");
    assert_non_fini("0/0");
    assert_non_fini("sqrt(−4)");
    assert_non_fini("10^400");
    assert_non_fini("(−8)^(1÷3)");
}

#[test]
fn sci_mal_formees() {
    for s in ["(2+3", "2+3)", "sin()", "()", "3×", "÷3", "1..2", "sin(30", "cos 0"] {
        assert!(
            matches!(evaluate(s), Err(EvaluationError::MalformedExpression(_))),
            "MalformedExpression attendu pour {s:?}"
        );
    }
}

/* ------------------------ Raccourcis de saisie ------------------------ */

#[test]
fn sci_pourcentage_puis_evaluation() {
    let s = applique_pourcentage("100+50").unwrap_or_default();
    assert_eq!(s, "100+(50/100)");
    assert_eq!(eval_ok(&s), 100.5);

    // question ouverte conservée : seul le dernier nombre est touché
    let s = applique_pourcentage("10+20").unwrap_or_default();
    assert_eq!(eval_ok(&s), 10.2);
}

#[test]
fn sci_format_sans_exponentielle() {
    assert_affiche("10^20", "100000000000000000000");
    assert_affiche("1÷3", "0.3333333333");
    assert_affiche("0.1+0.2", "0.3");
    assert_affiche("1÷10^12", "0");
}
