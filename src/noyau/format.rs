// src/noyau/format.rs
//
// Affichage d'un résultat fini pour l'historique et la console.
// Rust affiche déjà le plus court décimal qui retombe sur la même valeur
// (Display de f64) ; on ne corrige que le zéro signé.

/// Formate un résultat d'évaluation (supposé fini).
pub fn formater_resultat(v: f64) -> String {
    if v == 0.0 {
        // -0.0 == 0.0 : une calculatrice n'affiche pas "-0"
        return "0".to_string();
    }
    v.to_string()
}
