// src/noyau/analyse.rs
//
// Analyse descendante récursive (curseur unique, zéro retour arrière).
//
// Grammaire (du plus liant au moins liant) :
//   expression := terme (('+' | '-') terme)*
//   terme      := facteur (('*' | '/' | '%') facteur)*
//   facteur    := '(' expression ')'
//               | nombre
//               | fonction '(' expression (',' expression)? ')'
//
// L'associativité gauche de + - * / % vient des boucles itératives
// de expression/terme (pas de récursion à droite).
//
// Durcissements volontaires (rationnel dans DESIGN.md) :
// - des jetons restants après un arbre complet sont une erreur ;
// - l'arité des fonctions est vérifiée ici (pow: 2, les autres: 1) ;
// - '^' est refusé avec un message dédié.

use super::arbre::Expr;
use super::erreurs::ErreurCalc;
use super::fonctions::Fonction;
use super::jetons::{Jeton, Op};

/// Analyse une suite de jetons et retourne la racine de l'arbre,
/// ou l'erreur de syntaxe rencontrée.
pub fn analyse(jetons: &[Jeton]) -> Result<Expr, ErreurCalc> {
    let mut analyseur = Analyseur { jetons, pos: 0 };
    let racine = analyseur.expression()?;

    // arbre complet mais entrée non épuisée => erreur (pas d'abandon muet)
    if let Some(jeton) = analyseur.courant() {
        return Err(match jeton {
            Jeton::Chapeau => ErreurCalc::OperateurNonPrisEnCharge("^".into()),
            autre => ErreurCalc::JetonsEnTrop(autre.to_string()),
        });
    }

    Ok(racine)
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    pos: usize,
}

impl Analyseur<'_> {
    fn courant(&self) -> Option<&Jeton> {
        self.jetons.get(self.pos)
    }

    fn avance(&mut self) {
        self.pos += 1;
    }

    /// Consomme l'opérateur courant s'il fait partie de `admis`.
    fn op_admis(&mut self, admis: &[Op]) -> Option<Op> {
        match self.courant() {
            Some(Jeton::Op(op)) if admis.contains(op) => {
                let op = *op;
                self.avance();
                Some(op)
            }
            _ => None,
        }
    }

    fn expression(&mut self) -> Result<Expr, ErreurCalc> {
        let mut noeud = self.terme()?;

        while let Some(op) = self.op_admis(&[Op::Plus, Op::Moins]) {
            let droit = self.terme()?;
            noeud = Expr::Binaire(op, Box::new(noeud), Box::new(droit));
        }

        Ok(noeud)
    }

    fn terme(&mut self) -> Result<Expr, ErreurCalc> {
        let mut noeud = self.facteur()?;

        while let Some(op) = self.op_admis(&[Op::Fois, Op::Divise, Op::Modulo]) {
            let droit = self.facteur()?;
            noeud = Expr::Binaire(op, Box::new(noeud), Box::new(droit));
        }

        Ok(noeud)
    }

    fn facteur(&mut self) -> Result<Expr, ErreurCalc> {
        let jeton = match self.courant() {
            Some(j) => j.clone(),
            None => return Err(ErreurCalc::ExpressionIncomplete),
        };

        match jeton {
            Jeton::ParOuvre => {
                self.avance();
                let interieur = self.expression()?;
                self.attend_par_fermante()?;
                Ok(interieur)
            }

            Jeton::Nombre(v) => {
                self.avance();
                Ok(Expr::Nombre(v))
            }

            Jeton::Fonction(fonction) => {
                self.avance();
                self.appel_fonction(fonction)
            }

            Jeton::Chapeau => Err(ErreurCalc::OperateurNonPrisEnCharge("^".into())),

            autre => Err(ErreurCalc::JetonInattendu(autre.to_string())),
        }
    }

    /// Appel de fonction : '(' déjà exigée juste après le nom,
    /// 1 ou 2 arguments séparés par une virgule, arité vérifiée.
    fn appel_fonction(&mut self, fonction: Fonction) -> Result<Expr, ErreurCalc> {
        match self.courant() {
            Some(Jeton::ParOuvre) => self.avance(),
            _ => return Err(ErreurCalc::ParentheseOuvranteManquante(fonction.nom())),
        }

        let premier = self.expression()?;

        let second = if matches!(self.courant(), Some(Jeton::Virgule)) {
            self.avance();
            Some(self.expression()?)
        } else {
            None
        };

        self.attend_par_fermante()?;

        match (fonction, second) {
            (Fonction::Pow, Some(exposant)) => Ok(Expr::Puissance(
                Box::new(premier),
                Box::new(exposant),
            )),
            (f, None) if f.arite() == 1 => Ok(Expr::Unaire(f, Box::new(premier))),
            (f, _) => Err(ErreurCalc::MauvaiseArite(f.nom(), f.arite())),
        }
    }

    fn attend_par_fermante(&mut self) -> Result<(), ErreurCalc> {
        match self.courant() {
            Some(Jeton::ParFerme) => {
                self.avance();
                Ok(())
            }
            _ => Err(ErreurCalc::ParentheseFermanteManquante),
        }
    }
}
