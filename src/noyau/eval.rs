// src/noyau/eval.rs
//
// Évaluation post-ordre de l'arbre + pipeline complet texte -> valeur.
// - Les deux enfants d'un nœud sont évalués avant le nœud lui-même.
// - Aucune erreur de domaine ici : acos(2), sqrt(-4), 1/0 produisent
//   NaN ou inf, qui se propagent arithmétiquement jusqu'au résultat.
// - L'évaluation est pure : même arbre, même valeur, à l'identique bit à bit.

use super::analyse::analyse;
use super::arbre::Expr;
use super::erreurs::ErreurCalc;
use super::fonctions;
use super::jetons::{decoupe, format_jetons, Jeton, Op};

/// Évalue un arbre d'expression en parcours post-ordre.
pub fn evalue(expr: &Expr) -> Result<f64, ErreurCalc> {
    match expr {
        Expr::Nombre(v) => Ok(*v),

        Expr::Unaire(fonction, x) => {
            let v = evalue(x)?;
            fonction.applique_unaire(v)
        }

        Expr::Binaire(op, gauche, droit) => {
            let a = evalue(gauche)?;
            let b = evalue(droit)?;
            Ok(match op {
                Op::Plus => a + b,
                Op::Moins => a - b,
                Op::Fois => a * b,
                Op::Divise => a / b,
                Op::Modulo => a % b,
            })
        }

        Expr::Puissance(base, exposant) => {
            let b = evalue(base)?;
            let e = evalue(exposant)?;
            Ok(fonctions::pow(b, e))
        }
    }
}

/* ------------------------ démarche de calcul ------------------------ */

/// Trace des étapes intermédiaires du pipeline, pour affichage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemarcheCalc {
    /// Jetons produits par la tokenisation, rejoints par des espaces.
    pub jetons: String,
    /// Arbre d'analyse en notation infixe parenthésée.
    pub arbre: String,
}

/// Pipeline complet avec trace : texte -> jetons -> arbre -> valeur.
pub fn eval_expression_detaillee(s: &str) -> Result<(f64, DemarcheCalc), ErreurCalc> {
    let propre = s.trim();
    if propre.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    let jetons: Vec<Jeton> = decoupe(propre);
    let arbre = analyse(&jetons)?;
    let valeur = evalue(&arbre)?;

    let demarche = DemarcheCalc {
        jetons: format_jetons(&jetons),
        arbre: arbre.to_string(),
    };
    Ok((valeur, demarche))
}

/// Point d'entrée principal : texte -> valeur.
pub fn eval_expression(s: &str) -> Result<f64, ErreurCalc> {
    eval_expression_detaillee(s).map(|(valeur, _)| valeur)
}
