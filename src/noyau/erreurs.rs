// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau.
//
// Contrat : TOUTE faute (entrée invalide, grammaire, domaine, débordement)
// remonte par cette enum. Le noyau ne panique jamais sur une entrée utilisateur.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    /// Caractère hors de l'alphabet autorisé (après normalisation).
    #[error("caractère inattendu: '{0}'")]
    CaractereInvalide(char),

    /// Grammaire malformée : parenthèses, opérateur pendant, appel multi-arguments…
    #[error("erreur de syntaxe: {0}")]
    ErreurSyntaxe(String),

    /// Nom qui n'est ni `pi`, ni `e`, ni une fonction de la liste blanche.
    #[error("identifiant inconnu: {0}")]
    IdentifiantInconnu(String),

    /// Appel d'une fonction hors liste blanche.
    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    /// Argument hors domaine (ex: factorielle d'un négatif ou d'un non-entier).
    #[error("hors domaine: {0}")]
    DomaineInvalide(String),

    /// Valeur intermédiaire ou finale infinie / NaN (ex: 1/0, ln(-1)).
    #[error("résultat non fini")]
    NonFini,

    /// Garde-fou dépassé (factorielle trop grande, imbrication trop profonde, borne résultat).
    #[error("dépassement: {0}")]
    Depassement(String),
}
