//! Noyau d'évaluation par séries
//!
//! Organisation interne :
//! - erreurs.rs   : taxonomie d'erreurs (thiserror)
//! - fonctions.rs : bibliothèque numérique maison (séries, Newton, pow)
//! - jetons.rs    : tokenisation
//! - arbre.rs     : arbre d'expression binaire
//! - analyse.rs   : descente récursive -> arbre
//! - eval.rs      : évaluation post-ordre + pipeline complet

pub mod analyse;
pub mod arbre;
pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod jetons;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::{eval_expression, eval_expression_detaillee, DemarcheCalc};
