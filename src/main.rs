// src/main.rs
//
// Calculette à séries — point d'entrée CLI
// ----------------------------------------
// Deux modes :
// - argument positionnel : `calculette_series "2 + 3 * 4"` évalue et sort ;
// - sans argument : invite sur stdin, lit UNE ligne, évalue, sort.
// `--demarche` affiche les étapes intermédiaires (jetons, arbre) avant
// le résultat.
//
// Codes de sortie : 0 si l'évaluation aboutit (NaN compris), 1 sinon.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

mod noyau;

use noyau::eval_expression_detaillee;

#[derive(Parser)]
#[command(about = "Évalue une expression arithmétique (sans bibliothèque mathématique)")]
struct Args {
    /// Expression à évaluer ; absente, lue sur l'entrée standard.
    expression: Option<String>,

    /// Affiche la démarche (jetons puis arbre) avant le résultat.
    #[arg(long)]
    demarche: bool,
}

fn lire_ligne() -> anyhow::Result<String> {
    print!("Entrez votre expression : ");
    io::stdout()
        .flush()
        .context("impossible de vider la sortie standard")?;

    let mut ligne = String::new();
    io::stdin()
        .read_line(&mut ligne)
        .context("impossible de lire l'entrée standard")?;
    Ok(ligne)
}

fn executer(args: &Args) -> anyhow::Result<()> {
    let expression = match &args.expression {
        Some(e) => e.clone(),
        None => lire_ligne()?,
    };

    let (valeur, demarche) = eval_expression_detaillee(&expression)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    if args.demarche {
        println!("jetons : {}", demarche.jetons);
        println!("arbre  : {}", demarche.arbre);
    }
    println!("{valeur}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match executer(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Erreur : {e}");
            ExitCode::FAILURE
        }
    }
}
