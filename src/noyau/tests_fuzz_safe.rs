//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées : toujours Ok (NaN et inf admis comme valeurs)
//! - soupe de jetons : Ok ou Err, jamais de panique, jamais de gel

use std::time::{Duration, Instant};

use super::eval_expression;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits nombres, décimales comprises ; 0 inclus (division par zéro
    // voulue : elle doit donner inf/NaN, pas une erreur)
    let entier = rng.pick(10);
    if rng.coin() {
        format!("{entier}.5")
    } else {
        format!("{entier}")
    }
}

fn gen_appel(rng: &mut Rng) -> String {
    // fonctions sur des atomes contrôlés seulement : les arguments restent
    // petits, les séries terminent vite
    match rng.pick(8) {
        0 => format!("sin({})", gen_nombre(rng)),
        1 => format!("cos({})", gen_nombre(rng)),
        2 => format!("tan({})", gen_nombre(rng)),
        3 => format!("asin(0.{})", rng.pick(10)),
        4 => format!("acos(0.{})", rng.pick(10)),
        5 => format!("atan({})", gen_nombre(rng)),
        6 => format!("sqrt({})", gen_nombre(rng)),
        _ => format!("pow({}, {})", gen_nombre(rng), rng.pick(6)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => gen_appel(rng),
        2 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        _ => format!("({}%{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Soupe de jetons (entrées hostiles) ------------------------ */

const SOUPE: &[&str] = &[
    "+", "-", "*", "/", "%", "^", "(", ")", ",", "1", "2.5", "0", "3", "42", "7",
    "sin", "cos", "pow", "sqrt", "foo", "#", "1.2.3",
];

fn gen_soupe(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(12) as usize;
    let mut morceaux = Vec::with_capacity(n);
    for _ in 0..n {
        morceaux.push(SOUPE[rng.pick(SOUPE.len() as u32) as usize]);
    }
    morceaux.join(" ")
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_toujours_ok_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        let premier = eval_expression(&expr)
            .unwrap_or_else(|e| panic!("expr bien formée refusée: {expr:?} err={e}"));
        let second = eval_expression(&expr)
            .unwrap_or_else(|e| panic!("expr bien formée refusée: {expr:?} err={e}"));

        // bit à bit : même NaN y compris
        assert_eq!(
            premier.to_bits(),
            second.to_bits(),
            "évaluation non déterministe: expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_soupe_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let entree = gen_soupe(&mut rng);

        // Ok ou Err, mais jamais de panique, et toujours le même verdict
        let premier = eval_expression(&entree);
        let second = eval_expression(&entree);
        assert_eq!(
            premier.is_ok(),
            second.is_ok(),
            "verdict non déterministe: entrée={entree:?}"
        );

        match premier {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(seen_err > 50, "trop peu de refus: {seen_err}");
    assert!(seen_ok > 0, "aucun succès vu: fuzz trop hostile");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("1", 400);
    budget(t0, max);

    let valeur = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(valeur, 400.0);
}
