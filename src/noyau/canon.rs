// src/noyau/canon.rs
//
// Normalisation (canonicalisation textuelle), dans CET ordre :
// 1. glyphes visuels -> ASCII (× ÷ − π √)
// 2. constantes pi / e (frontière de mot) -> littéraux décimaux
// 3. littéral numérique suivi de % -> (littéral/100)
//    (constantes AVANT pourcent : `pi%` doit être un littéral quand la
//    règle du `%` passe, sinon la sortie n'est pas idempotente)
// 4. puissance : `^` est déjà la graphie canonique (étape identité)
// 5. les ouvertures d'appel `nom(` gardent leur graphie ; la liste blanche
//    est imposée en aval (FonctionInconnue à l'évaluation)
// 6. factorielle postfixe -> factorial(...), du plus interne vers l'externe
// 7. garde d'alphabet : tout caractère hors alphabet => CaractereInvalide
//
// L'ordre compte : chaque réécriture suppose les précédentes déjà faites.
// Idempotence : appliquer `normaliser` à sa propre sortie est l'identité.

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use super::erreurs::ErreurCalc;

/// Normalise une expression de surface en forme canonique.
/// Totale : ne panique jamais ; seule faute possible ici = CaractereInvalide.
pub fn normaliser(brut: &str) -> Result<String, ErreurCalc> {
    let s = remplacer_glyphes(brut);
    let s = remplacer_constantes(&s);
    let s = reecrire_pourcent(&s);
    // (étape 4 : `^` reste `^`, rien à faire)
    let s = reecrire_factorielles(&s);
    verifier_alphabet(&s)?;
    Ok(s)
}

/* ------------------------ 1. glyphes visuels ------------------------ */

fn remplacer_glyphes(brut: &str) -> String {
    let mut s = String::with_capacity(brut.len());
    for c in brut.chars() {
        match c {
            '×' => s.push('*'),
            '÷' => s.push('/'),
            '−' => s.push('-'), // U+2212, pas le tiret ASCII
            'π' => s.push_str("pi"),
            '√' => s.push_str("sqrt"),
            autre => s.push(autre),
        }
    }
    s
}

/* ------------------------ 2. pourcent sur littéral ------------------------ */

fn re_pourcent() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // littéral maximal : entier, décimal (`.5`, `2.`), exposant (`1e5`, `2.5E-3`)
        Regex::new(r"((?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)%")
            .expect("regex pourcent")
    })
}

/// `50%` -> `(50/100)`. Un `%` qui ne suit pas un littéral (ex: `(50+50)%`)
/// est laissé tel quel : la règle postfixe de l'analyseur le prendra.
fn reecrire_pourcent(s: &str) -> String {
    re_pourcent().replace_all(s, "(${1}/100)").into_owned()
}

/* ------------------------ 3. constantes pi / e ------------------------ */

fn re_pi() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // sensible à la casse + frontière de mot : `pin` n'est pas touché
    RE.get_or_init(|| Regex::new(r"\bpi\b").expect("regex pi"))
}

fn re_e() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `2e3` n'a pas de frontière entre `2` et `e` : l'exposant est préservé
    RE.get_or_init(|| Regex::new(r"\be\b").expect("regex e"))
}

fn remplacer_constantes(s: &str) -> String {
    // plus court décimal qui retombe exactement sur la valeur f64
    let pi_txt = std::f64::consts::PI.to_string();
    let e_txt = std::f64::consts::E.to_string();

    let s = re_pi().replace_all(s, NoExpand(&pi_txt));
    re_e().replace_all(&s, NoExpand(&e_txt)).into_owned()
}

/* ------------------------ 6. factorielle postfixe ------------------------ */

/// Réécrit `(groupe)!` et `<entier>!` en `factorial(...)`, du plus interne
/// vers l'externe, tant qu'un `!` réécrivable subsiste.
///
/// Terminaison structurelle : chaque réécriture consomme exactement un `!`
/// et n'en réintroduit aucun, donc la passe est bornée par le nombre de `!`.
fn reecrire_factorielles(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();

    while let Some((debut, bang)) = prochaine_reecriture(&chars) {
        let operande: String = chars[debut..bang].iter().collect();
        let remplacement: Vec<char> = format!("factorial({operande})").chars().collect();
        chars.splice(debut..=bang, remplacement);
    }

    chars.into_iter().collect()
}

/// Cherche le premier `!` réécrivable (balayage gauche->droite : pour un
/// postfixe, le plus à gauche est toujours le plus interne).
/// Renvoie (début de l'opérande, index du `!`).
fn prochaine_reecriture(chars: &[char]) -> Option<(usize, usize)> {
    for (i, &c) in chars.iter().enumerate() {
        if c != '!' || i == 0 {
            continue;
        }

        let avant = chars[i - 1];

        // `(groupe)!` : seulement si la `(` appariée n'est pas une liste
        // d'arguments (précédée d'un caractère d'identifiant).
        if avant == ')' {
            if let Some(ouvrante) = ouvrante_appariee(chars, i - 1) {
                if ouvrante > 0 && est_char_ident(chars[ouvrante - 1]) {
                    continue; // ex: sqrt(16)! -> règle postfixe de l'analyseur
                }
                return Some((ouvrante, i));
            }
            continue; // parenthèses déséquilibrées : l'analyseur signalera
        }

        // `<entier>!` : chiffres contigus, sans `.` ni identifiant accolé.
        if avant.is_ascii_digit() {
            let mut j = i - 1;
            while j > 0 && chars[j - 1].is_ascii_digit() {
                j -= 1;
            }
            if j > 0 && (chars[j - 1] == '.' || est_char_ident(chars[j - 1])) {
                continue; // `2.5!`, `x1!` : laissés à l'analyseur
            }
            // moins UNAIRE seulement : `-1!` -> factorial(-1), mais `3-1!` -> 3-factorial(1)
            if j > 0 && chars[j - 1] == '-' && moins_unaire(chars, j - 1) {
                j -= 1;
            }
            return Some((j, i));
        }

        // autre contexte (`2.5!`, espace, identifiant…) : règle postfixe de l'analyseur
    }
    None
}

/// Index de la `(` appariée à la `)` en `fermante`, par comptage de profondeur.
fn ouvrante_appariee(chars: &[char], fermante: usize) -> Option<usize> {
    let mut profondeur = 1usize;
    let mut k = fermante;
    while k > 0 {
        k -= 1;
        match chars[k] {
            ')' => profondeur += 1,
            '(' => {
                profondeur -= 1;
                if profondeur == 0 {
                    return Some(k);
                }
            }
            _ => {}
        }
    }
    None
}

fn est_char_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Un `-` est unaire s'il ouvre l'entrée ou suit `(`, `,` ou un opérateur.
/// `%` n'en fait pas partie : en forme canonique il est POSTFIXE (le `%` sur
/// littéral a déjà été réécrit), donc un `-` qui le suit est binaire.
fn moins_unaire(chars: &[char], pos: usize) -> bool {
    let mut k = pos;
    while k > 0 {
        k -= 1;
        let c = chars[k];
        if c.is_whitespace() {
            continue;
        }
        return matches!(c, '(' | ',' | '+' | '-' | '*' | '/' | '^');
    }
    true // début d'entrée
}

/* ------------------------ 7. garde d'alphabet ------------------------ */

fn verifier_alphabet(s: &str) -> Result<(), ErreurCalc> {
    for c in s.chars() {
        let ok = c.is_ascii_alphanumeric()
            || c.is_whitespace()
            || matches!(
                c,
                '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')' | '.' | ',' | '_' | '!'
            );
        if !ok {
            return Err(ErreurCalc::CaractereInvalide(c));
        }
    }
    Ok(())
}

/* ------------------------ tests ------------------------ */
