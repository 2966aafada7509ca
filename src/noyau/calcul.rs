// src/noyau/calcul.rs
//
// Évaluation de l'arbre, arithmétique f64 (IEEE).
//
// Contrat : après CHAQUE nœud arithmétique et chaque application de fonction,
// la valeur intermédiaire est vérifiée. Un infini ne peut donc jamais être
// réabsorbé en valeur finie : atan(1/0) échoue au nœud Div, pas en π/2.

use super::erreurs::ErreurCalc;
use super::eval::Limites;
use super::expr::Expr;
use super::fonctions::{appliquer, factorielle};

pub fn calculer(e: &Expr, limites: &Limites) -> Result<f64, ErreurCalc> {
    use Expr::*;

    match e {
        Nombre(v) => fini(*v, limites),

        // pi/e sont normalement résolus dès la normalisation ; la grammaire
        // les connaît quand même (entrée déjà canonique, tests directs).
        Constante(nom) => match nom.as_str() {
            "pi" => Ok(std::f64::consts::PI),
            "e" => Ok(std::f64::consts::E),
            autre => Err(ErreurCalc::IdentifiantInconnu(autre.to_string())),
        },

        Neg(x) => Ok(-calculer(x, limites)?),

        Add(a, b) => fini(calculer(a, limites)? + calculer(b, limites)?, limites),
        Sub(a, b) => fini(calculer(a, limites)? - calculer(b, limites)?, limites),
        Mul(a, b) => fini(calculer(a, limites)? * calculer(b, limites)?, limites),
        Div(a, b) => fini(calculer(a, limites)? / calculer(b, limites)?, limites),
        Puiss(a, b) => {
            let base = calculer(a, limites)?;
            let exposant = calculer(b, limites)?;
            fini(base.powf(exposant), limites)
        }

        Pourcent(x) => fini(calculer(x, limites)? / 100.0, limites),

        Factorielle(x) => {
            let v = calculer(x, limites)?;
            fini(factorielle(v, limites)?, limites)
        }

        Appel(nom, arg) => {
            let v = calculer(arg, limites)?;
            fini(appliquer(nom, v, limites)?, limites)
        }
    }
}

/// Vérification par nœud : non fini => NonFini ; fini mais au-delà de la
/// borne configurée => Depassement.
fn fini(v: f64, limites: &Limites) -> Result<f64, ErreurCalc> {
    if !v.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    if v.abs() > limites.borne_resultat {
        return Err(ErreurCalc::Depassement(format!(
            "|{v}| au-delà de la borne résultat"
        )));
    }
    Ok(v)
}
