// src/noyau/fonctions.rs
//
// Bibliothèque numérique "maison".
// - Aucun appel aux fonctions transcendantes de std : tout est recalculé
//   par itération (Newton) ou par sommation de séries.
// - Tolérances par fonction : 1e-4 partout, SAUF asin et atan (1e-15).
//   Cette asymétrie est voulue et conservée telle quelle.
// - Chaque boucle porte un garde-fou ITERATIONS_MAX : pour les entrées
//   usuelles la convergence arrive bien avant, le garde-fou ne change rien.

use std::fmt;

use super::erreurs::ErreurCalc;

pub const PI: f64 = 3.141592653589793;

/// Tolérance de convergence par défaut des séries et de Newton.
pub const PRECISION_DEFAUT: f64 = 1e-4;

/// Tolérance fine (asin, atan).
pub const PRECISION_FINE: f64 = 1e-15;

/// Garde-fou anti-boucle (séries à décroissance lente, Newton bloqué au ULP).
const ITERATIONS_MAX: u32 = 10_000;

/* ------------------------ Ensemble des fonctions reconnues ------------------------ */

/// Les huit fonctions du langage d'expressions.
///
/// Ensemble UNIQUE consulté par la tokenisation (mot → jeton), l'analyse
/// (arité) et l'évaluation (dispatch) : pas de listes dupliquées.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Cos,
    Acos,
    Sin,
    Asin,
    Tan,
    Atan,
    Sqrt,
    Pow,
}

impl Fonction {
    /// Reconnaissance d'un mot entier, sensible à la casse.
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        match nom {
            "cos" => Some(Fonction::Cos),
            "acos" => Some(Fonction::Acos),
            "sin" => Some(Fonction::Sin),
            "asin" => Some(Fonction::Asin),
            "tan" => Some(Fonction::Tan),
            "atan" => Some(Fonction::Atan),
            "sqrt" => Some(Fonction::Sqrt),
            "pow" => Some(Fonction::Pow),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Cos => "cos",
            Fonction::Acos => "acos",
            Fonction::Sin => "sin",
            Fonction::Asin => "asin",
            Fonction::Tan => "tan",
            Fonction::Atan => "atan",
            Fonction::Sqrt => "sqrt",
            Fonction::Pow => "pow",
        }
    }

    /// Nombre d'arguments exigé par l'analyse : 2 pour pow, 1 sinon.
    pub fn arite(self) -> usize {
        match self {
            Fonction::Pow => 2,
            _ => 1,
        }
    }

    /// Dispatch unaire pour l'évaluateur.
    /// Garde-fou : pow n'est pas unaire, on refuse au lieu de deviner.
    pub fn applique_unaire(self, x: f64) -> Result<f64, ErreurCalc> {
        match self {
            Fonction::Cos => Ok(cos(x)),
            Fonction::Acos => Ok(acos(x)),
            Fonction::Sin => Ok(sin(x)),
            Fonction::Asin => Ok(asin(x)),
            Fonction::Tan => Ok(tan(x)),
            Fonction::Atan => Ok(atan(x)),
            Fonction::Sqrt => Ok(sqrt(x)),
            Fonction::Pow => Err(ErreurCalc::FonctionNonPriseEnCharge(self.nom())),
        }
    }
}

impl fmt::Display for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nom())
    }
}

/* ------------------------ Briques de base ------------------------ */

pub fn abs(x: f64) -> f64 {
    if x >= 0.0 {
        x
    } else {
        -x
    }
}

/// Produit itératif. 0! = 1! = 1.
/// Au-delà de 170, le produit f64 sature naturellement vers l'infini.
pub fn factorielle(n: u64) -> f64 {
    if n <= 1 {
        return 1.0;
    }
    let mut resultat = 1.0;
    for i in 2..=n {
        resultat *= i as f64;
    }
    resultat
}

/// Exponentiation par multiplications (exposant > 0) ou divisions (exposant < 0)
/// répétées ; 1 pour exposant 0.
///
/// Limitation connue : seul un exposant ENTIER a un sens ici. Un exposant
/// fractionnaire fait un tour de boucle de trop, et un exposant
/// > ITERATIONS_MAX est tronqué par le garde-fou.
pub fn pow(base: f64, exposant: f64) -> f64 {
    if exposant == 0.0 {
        return 1.0;
    }

    let mut resultat = 1.0;
    let mut i = 0.0;

    if exposant > 0.0 {
        while i < exposant && i < ITERATIONS_MAX as f64 {
            resultat *= base;
            i += 1.0;
        }
    } else {
        while i > exposant && -i < ITERATIONS_MAX as f64 {
            resultat /= base;
            i -= 1.0;
        }
    }
    resultat
}

/* ------------------------ Racine carrée (Newton) ------------------------ */

/// Newton-Raphson depuis x/2, arrêt quand |g² − x| ≤ 1e-4.
///
/// QUIRK assumé : le résultat est ARRONDI à l'entier le plus proche
/// (sqrt(2) vaut 1). x ∈ {0, 1} est retourné tel quel.
/// x < 0 donne NaN (politique de domaine : pas d'erreur, NaN se propage).
pub fn sqrt(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x == 1.0 {
        return x;
    }

    let mut guess = x / 2.0;

    for _ in 0..ITERATIONS_MAX {
        if abs(guess * guess - x) <= PRECISION_DEFAUT {
            break;
        }
        let suivant = (guess + x / guess) / 2.0;
        // point fixe atteint (limite du ULP pour les très grands x)
        if suivant == guess {
            break;
        }
        guess = suivant;
    }

    guess.round()
}

/* ------------------------ Trigonométrie directe ------------------------ */

/// Série alternée de sin, terme suivant bâti sur le précédent :
/// delta *= −x² / (2i(2i+1)). Réduction préalable de x dans [0, 2π).
pub fn sin(x: f64) -> f64 {
    let mut x = x % (2.0 * PI);
    if x < 0.0 {
        x += 2.0 * PI;
    }

    let mut resultat = 0.0;
    let mut delta = x;
    let mut i: u64 = 1;

    for _ in 0..ITERATIONS_MAX {
        if abs(delta) <= PRECISION_DEFAUT {
            break;
        }
        resultat += delta;
        delta *= -(x * x) / ((2 * i * (2 * i + 1)) as f64);
        i += 1;
    }

    resultat
}

/// Série de cos : termes xⁱ/i! (i pair), signe alterné, réduction x modulo 2π.
pub fn cos(x: f64) -> f64 {
    let x = x % (2.0 * PI);

    let mut resultat = 1.0;
    let mut delta = 1.0;
    let mut signe = -1.0;
    let mut i: u64 = 2;

    for _ in 0..ITERATIONS_MAX {
        if abs(delta) <= PRECISION_DEFAUT {
            break;
        }
        delta = pow(x, i as f64) / factorielle(i);
        resultat += signe * delta;
        signe = -signe;
        i += 2;
    }

    resultat
}

/// Coefficients de Taylor de tan en 0 : x + x³/3 + 2x⁵/15 + 17x⁷/315 + …
const TAN_COEFFS: [f64; 7] = [
    1.0,
    1.0 / 3.0,
    2.0 / 15.0,
    17.0 / 315.0,
    62.0 / 2835.0,
    1382.0 / 155_925.0,
    21_844.0 / 6_081_075.0,
];

/// Sommation des premiers termes de la série de tan, puissance impaire
/// courante entretenue d'un terme à l'autre. Réduction dans [−π/2, π/2).
///
/// L'erreur reste bornée mais grossit près de ±π/2 (là où tan explose).
pub fn tan(x: f64) -> f64 {
    let mut x = x % PI;
    if x >= PI / 2.0 {
        x -= PI;
    }
    if x < -PI / 2.0 {
        x += PI;
    }

    let mut resultat = 0.0;
    let mut puissance = x;

    for c in TAN_COEFFS {
        let delta = c * puissance;
        if abs(delta) <= PRECISION_DEFAUT {
            break;
        }
        resultat += delta;
        puissance *= x * x;
    }

    resultat
}

/* ------------------------ Trigonométrie inverse ------------------------ */

/// Série binomiale de asin, terme suivant bâti sur le précédent :
/// delta *= x² (2i−1)² / (2i(2i+1)). Domaine [−1, 1], NaN en dehors.
pub fn asin(x: f64) -> f64 {
    if !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }

    let mut resultat = x;
    let mut delta = x;
    let mut i: u64 = 1;

    for _ in 0..ITERATIONS_MAX {
        if abs(delta) <= PRECISION_FINE {
            break;
        }
        let impair = (2 * i - 1) as f64;
        delta *= x * x * (impair * impair) / ((2 * i) as f64 * (2 * i + 1) as f64);
        resultat += delta;
        i += 1;
    }

    resultat
}

/// Développement autour de π/2 : π/2 moins la série de asin,
/// tolérance 1e-4 (volontairement plus lâche que asin).
pub fn acos(x: f64) -> f64 {
    if !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }

    let mut resultat = PI / 2.0 - x;
    let mut delta = x;
    let mut i: u64 = 1;

    for _ in 0..ITERATIONS_MAX {
        if abs(delta) <= PRECISION_DEFAUT {
            break;
        }
        let impair = (2 * i - 1) as f64;
        delta *= x * x * (impair * impair) / ((2 * i) as f64 * (2 * i + 1) as f64);
        resultat -= delta;
        i += 1;
    }

    resultat
}

/// Série alternée de Leibniz : x − x³/3 + x⁵/5 − …, terme suivant bâti
/// sur le précédent (delta *= x²(2i−1)/(2i+1)), tolérance 1e-15.
///
/// La série ne converge que pour |x| ≤ 1 : au-delà on réduit par
/// atan(x) = ±π/2 − atan(1/x), et |x| = 1 vaut ±π/4 (limite de la série).
pub fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if abs(x) > 1.0 {
        let demi_tour = if x > 0.0 { PI / 2.0 } else { -PI / 2.0 };
        return demi_tour - atan(1.0 / x);
    }
    if abs(x) == 1.0 {
        return x * (PI / 4.0);
    }

    let mut resultat = 0.0;
    let mut delta = x;
    let mut signe = 1.0;
    let mut i: u64 = 1;

    for _ in 0..ITERATIONS_MAX {
        if abs(delta) <= PRECISION_FINE {
            break;
        }
        resultat += signe * delta;
        delta *= x * x * (2 * i - 1) as f64 / (2 * i + 1) as f64;
        signe = -signe;
        i += 1;
    }

    resultat
}

/* ------------------------ Tests unitaires ------------------------ */
