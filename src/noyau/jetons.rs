// src/noyau/jetons.rs
//
// Tokenisation : chaîne brute -> suite de jetons typés.
// - Coupure autour de ( ) * / % ^ + - ,  et des mots entiers.
// - Les blancs sont jetés ; la suite de jetons, rejointe par des espaces,
//   re-segmente l'entrée à l'identique (modulo blancs).
// - La tokenisation ne peut PAS échouer : tout fragment inconnu devient
//   Jeton::Mot et sera refusé par l'analyse ("jeton inattendu").
// - Le '-' devant un nombre reste un jeton opérateur, jamais un signe.

use std::fmt;

use super::fonctions::Fonction;

/// Les cinq opérateurs binaires du langage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Divise => '/',
            Op::Modulo => '%',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Jeton typé, classé UNE fois ici (pas de re-lecture du texte à l'analyse).
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Op),
    Virgule,
    ParOuvre,
    ParFerme,
    Fonction(Fonction),
    /// '^' : coupé comme un opérateur, mais aucune règle de grammaire
    /// ne le consomme — l'analyse le refuse explicitement.
    Chapeau,
    /// Mot ou fragment non reconnu (identifiant inconnu, nombre mal formé,
    /// caractère isolé). Refusé à l'analyse.
    Mot(String),
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(v) => write!(f, "{v}"),
            Jeton::Op(op) => write!(f, "{op}"),
            Jeton::Virgule => write!(f, ","),
            Jeton::ParOuvre => write!(f, "("),
            Jeton::ParFerme => write!(f, ")"),
            Jeton::Fonction(fonction) => write!(f, "{fonction}"),
            Jeton::Chapeau => write!(f, "^"),
            Jeton::Mot(m) => write!(f, "{m}"),
        }
    }
}

/// Découpe une chaîne en jetons.
/// Supporte :
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - opérateurs + - * / % (et ^, refusé plus loin)
/// - parenthèses ( ) et virgule
/// - les huit fonctions cos acos sin asin tan atan sqrt pow,
///   en mots entiers, sensibles à la casse
pub fn decoupe(s: &str) -> Vec<Jeton> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Ponctuation et opérateurs (un caractère)
        let simple = match c {
            '(' => Some(Jeton::ParOuvre),
            ')' => Some(Jeton::ParFerme),
            ',' => Some(Jeton::Virgule),
            '^' => Some(Jeton::Chapeau),
            '+' => Some(Jeton::Op(Op::Plus)),
            '-' => Some(Jeton::Op(Op::Moins)),
            '*' => Some(Jeton::Op(Op::Fois)),
            '/' => Some(Jeton::Op(Op::Divise)),
            '%' => Some(Jeton::Op(Op::Modulo)),
            _ => None,
        };
        if let Some(jeton) = simple {
            out.push(jeton);
            i += 1;
            continue;
        }

        // Nombre décimal : chiffres et points, classé par parsabilité
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[debut..i].iter().collect();
            match texte.parse::<f64>() {
                Ok(v) => out.push(Jeton::Nombre(v)),
                Err(_) => out.push(Jeton::Mot(texte)),
            }
            continue;
        }

        // Mot : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let debut = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect();
            match Fonction::depuis_nom(&mot) {
                Some(fonction) => out.push(Jeton::Fonction(fonction)),
                None => out.push(Jeton::Mot(mot)),
            }
            continue;
        }

        // Caractère isolé inconnu : porté tel quel jusqu'à l'analyse
        out.push(Jeton::Mot(c.to_string()));
        i += 1;
    }

    out
}

/// Format utilitaire (démarche / tests) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
