// src/noyau/arbre.rs
//
// Arbre d'expression binaire.
// - Arités EXPLICITES dans le type : un appel à deux arguments d'une
//   fonction unaire est irreprésentable (décision prise à l'analyse,
//   pas un rejet silencieux à l'évaluation).
// - Construit de bas en haut par l'analyse, lu seul ensuite : aucune
//   mutation après construction.

use std::fmt;

use super::fonctions::Fonction;
use super::jetons::Op;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Feuille : littéral numérique, aucun enfant.
    Nombre(f64),
    /// Fonction à un argument (cos, acos, sin, asin, tan, atan, sqrt).
    Unaire(Fonction, Box<Expr>),
    /// Opérateur binaire + - * / %.
    Binaire(Op, Box<Expr>, Box<Expr>),
    /// pow(base, exposant) : la seule fonction à deux arguments.
    Puissance(Box<Expr>, Box<Expr>),
}

/* ------------------------ Affichage (démarche / debug) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Nombre(v) => write!(f, "{v}"),
            Expr::Unaire(fonction, x) => write!(f, "{fonction}({x})"),
            Expr::Binaire(op, a, b) => write!(f, "({a} {op} {b})"),
            Expr::Puissance(base, exposant) => write!(f, "pow({base}, {exposant})"),
        }
    }
}
