// src/noyau/jetons.rs

use super::erreurs::ErreurCalc;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Tout ce qui n'est pas nombre / opérateur / parenthèse.
    // NOTE: l'analyseur décidera si c'est une fonction (liste blanche) ou une constante.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Bang,    // ! (factorielle postfixe)
    Percent, // % (postfixe, x/100)

    LPar,
    RPar,
    Comma,
}

/// Tokenize une chaîne canonique en jetons.
/// Supporte:
/// - entiers (12), décimaux (.5, 2., 12.34), exposants (1e5, 2.5E-3)
/// - opérateurs + - * / ^ ! %
/// - parenthèses ( ) et virgule (refusée plus tard par l'analyseur)
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* — casse PRÉSERVÉE (constantes
///   et liste blanche sont en minuscules, `Sin` ne doit pas passer)
///
/// Défense en profondeur : un caractère hors alphabet est une faute ici
/// aussi, même si la garde de normalisation a déjà filtré.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs et ponctuation (un caractère)
        let simple = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            '!' => Some(Tok::Bang),
            '%' => Some(Tok::Percent),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Comma),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(mot));
            continue;
        }

        // Nombre : chiffres, point décimal (tête ou queue), exposant optionnel
        if c.is_ascii_digit() || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit())
        {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }

            // exposant : e/E [+-]? chiffres — seulement si des chiffres suivent,
            // sinon le `e` est un identifiant à part (ex: `2e` => 2, ident e)
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    i = j;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }

            let txt: String = chars[start..i].iter().collect();
            let v: f64 = txt
                .parse()
                .map_err(|_| ErreurCalc::ErreurSyntaxe(format!("nombre invalide: {txt}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalc::CaractereInvalide(c));
    }

    Ok(out)
}

/// Format utilitaire (debug/traces) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in jetons {
        let s = match t {
            Tok::Num(v) => v.to_string(),
            Tok::Ident(nom) => nom.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Bang => "!".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Comma => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
