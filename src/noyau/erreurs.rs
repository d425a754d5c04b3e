// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau.
// - Toutes les erreurs sont terminales : pas de reprise, pas de résultat partiel.
// - Les erreurs de domaine des fonctions numériques (ex: acos(2)) ne passent
//   PAS par ici : elles produisent NaN, qui se propage arithmétiquement.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error("Entrée vide")]
    EntreeVide,

    /// Un jeton qui n'est ni '(', ni un nombre, ni une fonction connue
    /// en position de facteur.
    #[error("jeton inattendu: '{0}'")]
    JetonInattendu(String),

    /// Fin d'entrée alors qu'un facteur était attendu.
    #[error("expression incomplète")]
    ExpressionIncomplete,

    #[error("parenthèse fermante ')' manquante")]
    ParentheseFermanteManquante,

    #[error("parenthèse ouvrante '(' attendue après la fonction '{0}'")]
    ParentheseOuvranteManquante(&'static str),

    /// L'analyse a produit un arbre complet mais des jetons restent.
    #[error("jetons en trop après l'expression: '{0}'")]
    JetonsEnTrop(String),

    #[error("la fonction '{0}' attend exactement {1} argument(s)")]
    MauvaiseArite(&'static str, usize),

    /// '^' : reconnu par la tokenisation, refusé par la grammaire.
    #[error("opérateur non pris en charge: '{0}'")]
    OperateurNonPrisEnCharge(String),

    /// Garde-fou de l'évaluateur (appel unaire d'une fonction binaire).
    #[error("fonction non prise en charge: '{0}'")]
    FonctionNonPriseEnCharge(&'static str),
}
