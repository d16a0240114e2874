//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée porte sa valeur de référence (calculée en
//!   parallèle avec les mêmes opérations f64) : le pipeline doit la retrouver
//! - texte arbitraire : jamais de panique, seulement Ok fini ou une erreur typée

use std::f64::consts::PI;
use std::mem::discriminant;
use std::time::{Duration, Instant};

use super::{evaluate, EvaluationError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const K: f64 = PI / 180.0;

/// (texte saisi, valeur de référence)
type Gen = (String, f64);

fn gen_atom(rng: &mut Rng) -> Gen {
    match rng.pick(6) {
        0 => ("π".to_string(), PI),
        1 => ("0".to_string(), 0.0),
        2 => {
            let a = rng.pick(400) as f64 / 4.0; // 0, 0.25, … 99.75
            (format!("{a}"), a)
        }
        _ => {
            let n = rng.pick(360);
            (format!("{n}"), n as f64)
        }
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Gen {
    if depth == 0 {
        return gen_atom(rng);
    }

    let sous = |rng: &mut Rng| gen_expr(rng, depth - 1);

    match rng.pick(11) {
        0 => gen_atom(rng),
        1 => {
            let (a, x) = sous(rng);
            let (b, y) = sous(rng);
            (format!("({a}+{b})"), x + y)
        }
        2 => {
            let (a, x) = sous(rng);
            let (b, y) = sous(rng);
            (format!("({a}−{b})"), x - y)
        }
        3 => {
            let (a, x) = sous(rng);
            let (b, y) = sous(rng);
            (format!("({a}×{b})"), x * y)
        }
        4 => {
            let (a, x) = sous(rng);
            let (b, y) = sous(rng);
            (format!("({a}÷{b})"), x / y)
        }
        5 => {
            let (a, x) = sous(rng);
            (format!("sin({a})"), (x * K).sin())
        }
        6 => {
            let (a, x) = sous(rng);
            (format!("cos({a})"), (x * K).cos())
        }
        7 => {
            let (a, x) = sous(rng);
            (format!("tan({a})"), (x * K).tan())
        }
        8 => {
            let (a, x) = sous(rng);
            (format!("sqrt({a})"), x.sqrt())
        }
        9 => {
            let (a, x) = sous(rng);
            (format!("(−{a})"), -x)
        }
        _ => {
            let (a, x) = sous(rng);
            let e = rng.pick(4);
            (format!("({a})^{e}"), x.powf(e as f64))
        }
    }
}

fn meme_valeur(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= 1e-12 * (1.0 + a.abs().max(b.abs()))
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeur_de_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 4);

        match evaluate(&expr) {
            Ok(v) => {
                assert!(attendu.is_finite(), "expr={expr:?} fini mais référence={attendu}");
                assert!(meme_valeur(v, attendu), "expr={expr:?} v={v} référence={attendu}");
                seen_ok += 1;
            }
            Err(EvaluationError::NonFiniteResult(_)) => {
                assert!(!attendu.is_finite(), "expr={expr:?} non fini mais référence={attendu}");
                seen_err += 1;
            }
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 60, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucun non-fini vu: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..50 {
        let (ea, _) = gen_expr(&mut a, 3);
        let (eb, _) = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);

        // NaN != NaN : on compare les bits et la variante d’erreur
        let ra = evaluate(&ea).map(f64::to_bits).map_err(|e| discriminant(&e));
        let rb = evaluate(&eb).map(f64::to_bits).map_err(|e| discriminant(&e));
        assert_eq!(ra, rb, "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_texte_arbitraire_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    const ALPHABET: [&str; 20] = [
        "1", "9", "0", ".", "(", ")", "+", "−", "×", "÷", "^", "π", "sin(", "cos(", "tan(",
        "sqrt(", "-", "*", "/", " ",
    ];

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let n = 1 + rng.pick(12) as usize;
        let s: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        match evaluate(&s) {
            Ok(v) => assert!(v.is_finite(), "expr={s:?} v={v}"),
            Err(EvaluationError::MalformedExpression(_)) | Err(EvaluationError::NonFiniteResult(_)) => {}
        }
    }
}
