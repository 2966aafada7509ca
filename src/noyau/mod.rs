//! Noyau d'évaluation sûre
//!
//! Organisation interne :
//! - erreurs.rs   : taxonomie d'erreurs typée
//! - canon.rs     : normalisation textuelle (glyphes, %, constantes, factorielle)
//! - jetons.rs    : tokenisation
//! - expr.rs      : AST (grammaire fermée)
//! - analyse.rs   : descente récursive, profondeur bornée
//! - fonctions.rs : liste blanche + factorielle bornée
//! - calcul.rs    : évaluation de l'arbre (f64 fini par nœud)
//! - format.rs    : affichage du résultat
//! - eval.rs      : pipeline complet + Limites

pub mod analyse;
pub mod calcul;
pub mod canon;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::{evaluer, evaluer_avec, normaliser, Limites};
pub use format::formater_resultat;
