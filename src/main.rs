// src/main.rs
//
// Calculatrice sûre — front-end console
// -------------------------------------
// Consommateur de référence de la bibliothèque : une boucle de lecture qui
// exerce l'API de session (évaluation, mémoire M+/M-/MR/MC, historique).
// Tout le contenu intéressant vit dans la bibliothèque ; ici, rien que du
// câblage entrée/sortie.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculatrice_sure::{formater_resultat, Limites, Session};

/// Calculatrice sûre : évalue des expressions sans évaluateur de code générique.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Évalue une seule expression puis quitte (sinon : boucle interactive).
    #[arg(short = 'e', long)]
    expression: Option<String>,

    /// Plus grand n accepté par la factorielle (rabattu à 170 au maximum).
    #[arg(long, default_value_t = Limites::FACTORIELLE_MAX_DEFAUT)]
    factorielle_max: f64,

    /// Profondeur d'imbrication maximale de l'analyseur.
    #[arg(long, default_value_t = Limites::PROFONDEUR_MAX_DEFAUT)]
    profondeur_max: usize,
}

const AIDE: &str = "\
commandes :
  <expression>   évalue (ex: 2+3*4, 5!, 50%+1, sin(pi/2))
  m+ <expr>      évalue puis ajoute au registre mémoire
  m- <expr>      évalue puis retranche du registre mémoire
  mr             rappel mémoire
  mc             remise à zéro mémoire
  hist           historique (8 dernières, la plus récente d'abord)
  aide           cette aide
  quitter        sortir";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let limites = Limites::bornees(args.factorielle_max, args.profondeur_max);
    let mut session = Session::avec_limites(limites);

    // Mode une-expression : sortie sur stdout, code retour 1 en cas de faute.
    if let Some(expr) = args.expression {
        match session.evaluer(&expr) {
            Ok(v) => println!("{}", formater_resultat(v)),
            Err(e) => {
                eprintln!("erreur: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    println!("calculatrice sûre — tapez `aide` pour les commandes");
    let stdin = io::stdin();
    let mut sortie = io::stdout();

    loop {
        write!(sortie, "> ")?;
        sortie.flush()?;

        let mut ligne = String::new();
        if stdin.lock().read_line(&mut ligne)? == 0 {
            break; // fin d'entrée (Ctrl-D)
        }
        let ligne = ligne.trim();

        match ligne {
            "" => {}
            "quitter" | "q" => break,
            "aide" => println!("{AIDE}"),
            "mr" => println!("{}", formater_resultat(session.memoire_rappel())),
            "mc" => session.memoire_raz(),
            "hist" => {
                for entree in session.historique() {
                    println!("{} = {}", entree.expression, entree.resultat);
                }
            }
            _ => {
                let resultat = if let Some(expr) = ligne.strip_prefix("m+") {
                    session.memoire_plus(expr)
                } else if let Some(expr) = ligne.strip_prefix("m-") {
                    session.memoire_moins(expr)
                } else {
                    session.evaluer(ligne)
                };

                match resultat {
                    Ok(v) => println!("{}", formater_resultat(v)),
                    Err(e) => println!("erreur: {e}"),
                }
            }
        }
    }

    Ok(())
}
