use crate::element::{element_by_symbol, in_organic_subset};
use crate::error::ParseError;
use crate::molecule::BondOrder;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Atom(AtomSpec),
    Bond { order: BondOrder, pos: usize },
    Ring { digit: u16, pos: usize },
    Open(usize),
    Close(usize),
    Dot(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtomSpec {
    pub atomic_number: u8,
    pub aromatic: bool,
    pub isotope: u16,
    /// `Some(n)` for bracket atoms (explicit hydrogen count, 0 when absent),
    /// `None` for organic-subset atoms that get implicit hydrogens assigned.
    pub explicit_h: Option<u8>,
    pub charge: i8,
    pub pos: usize,
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let pos = i;
        match chars[i] {
            ' ' | '\t' | '\r' | '\n' => i += 1,
            '[' => {
                let (spec, next) = parse_bracket_atom(&chars, i)?;
                tokens.push(Token::Atom(spec));
                i = next;
            }
            'A'..='Z' => {
                // Greedy two-letter symbol first (Cl, Br), then one-letter.
                let two: String = chars[i..chars.len().min(i + 2)].iter().collect();
                let spec = if two.len() == 2 && matches!(two.as_str(), "Cl" | "Br") {
                    i += 2;
                    bare_atom(&two, false, pos)?
                } else {
                    let one = chars[i].to_string();
                    i += 1;
                    bare_atom(&one, false, pos)?
                };
                tokens.push(Token::Atom(spec));
            }
            'b' | 'c' | 'n' | 'o' | 'p' | 's' => {
                let symbol = chars[i].to_ascii_uppercase().to_string();
                tokens.push(Token::Atom(bare_atom(&symbol, true, pos)?));
                i += 1;
            }
            '-' => {
                tokens.push(Token::Bond { order: BondOrder::Single, pos });
                i += 1;
            }
            '=' => {
                tokens.push(Token::Bond { order: BondOrder::Double, pos });
                i += 1;
            }
            '#' => {
                tokens.push(Token::Bond { order: BondOrder::Triple, pos });
                i += 1;
            }
            ':' => {
                tokens.push(Token::Bond { order: BondOrder::Aromatic, pos });
                i += 1;
            }
            // Directional bonds carry cis/trans information we do not model;
            // they still bond their endpoints with a single bond.
            '/' | '\\' => {
                tokens.push(Token::Bond { order: BondOrder::Single, pos });
                i += 1;
            }
            '(' => {
                tokens.push(Token::Open(pos));
                i += 1;
            }
            ')' => {
                tokens.push(Token::Close(pos));
                i += 1;
            }
            '.' => {
                tokens.push(Token::Dot(pos));
                i += 1;
            }
            '0'..='9' => {
                let digit = chars[i].to_digit(10).unwrap() as u16;
                tokens.push(Token::Ring { digit, pos });
                i += 1;
            }
            '%' => {
                if i + 2 >= chars.len()
                    || !chars[i + 1].is_ascii_digit()
                    || !chars[i + 2].is_ascii_digit()
                {
                    return Err(ParseError::UnexpectedChar { pos, ch: '%' });
                }
                let digit = (chars[i + 1].to_digit(10).unwrap() * 10
                    + chars[i + 2].to_digit(10).unwrap()) as u16;
                tokens.push(Token::Ring { digit, pos });
                i += 3;
            }
            ch => return Err(ParseError::UnexpectedChar { pos, ch }),
        }
    }
    Ok(tokens)
}

fn bare_atom(symbol: &str, aromatic: bool, pos: usize) -> Result<AtomSpec, ParseError> {
    let element = element_by_symbol(symbol)
        .filter(|e| in_organic_subset(e.atomic_number))
        .ok_or_else(|| ParseError::UnknownElement { pos, text: symbol.to_string() })?;
    Ok(AtomSpec {
        atomic_number: element.atomic_number,
        aromatic,
        isotope: 0,
        explicit_h: None,
        charge: 0,
        pos,
    })
}

fn parse_bracket_atom(chars: &[char], start: usize) -> Result<(AtomSpec, usize), ParseError> {
    let mut i = start + 1;

    let mut isotope: u16 = 0;
    while i < chars.len() && chars[i].is_ascii_digit() {
        isotope = isotope * 10 + chars[i].to_digit(10).unwrap() as u16;
        i += 1;
    }

    if i >= chars.len() {
        return Err(ParseError::UnclosedBracket { pos: start });
    }

    // Element symbol: one uppercase (optionally followed by a lowercase that
    // completes a known symbol), or a lowercase aromatic symbol.
    let (symbol, aromatic) = if chars[i].is_ascii_uppercase() {
        let mut sym = chars[i].to_string();
        if i + 1 < chars.len()
            && chars[i + 1].is_ascii_lowercase()
            && element_by_symbol(&format!("{}{}", chars[i], chars[i + 1])).is_some()
        {
            sym.push(chars[i + 1]);
            i += 2;
        } else {
            i += 1;
        }
        (sym, false)
    } else if matches!(chars[i], 'b' | 'c' | 'n' | 'o' | 'p' | 's') {
        // Two-letter aromatic symbols (se, as) before the one-letter ones.
        if chars[i] == 's' && i + 1 < chars.len() && chars[i + 1] == 'e' {
            i += 2;
            ("Se".to_string(), true)
        } else {
            let sym = chars[i].to_ascii_uppercase().to_string();
            i += 1;
            (sym, true)
        }
    } else if chars[i] == 'a' && i + 1 < chars.len() && chars[i + 1] == 's' {
        i += 2;
        ("As".to_string(), true)
    } else {
        return Err(ParseError::UnexpectedChar { pos: i, ch: chars[i] });
    };

    let element = element_by_symbol(&symbol)
        .ok_or_else(|| ParseError::UnknownElement { pos: start, text: symbol.clone() })?;

    // Chirality marks are accepted and ignored.
    while i < chars.len() && chars[i] == '@' {
        i += 1;
    }

    let mut explicit_h: u8 = 0;
    if i < chars.len() && chars[i] == 'H' {
        i += 1;
        let mut count = 0u8;
        let mut saw_digit = false;
        while i < chars.len() && chars[i].is_ascii_digit() {
            count = count * 10 + chars[i].to_digit(10).unwrap() as u8;
            saw_digit = true;
            i += 1;
        }
        explicit_h = if saw_digit { count } else { 1 };
    }

    let mut charge: i8 = 0;
    if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
        let sign: i8 = if chars[i] == '+' { 1 } else { -1 };
        let symbol_ch = chars[i];
        i += 1;
        if i < chars.len() && chars[i].is_ascii_digit() {
            let mut magnitude = 0i8;
            while i < chars.len() && chars[i].is_ascii_digit() {
                magnitude = magnitude
                    .checked_mul(10)
                    .and_then(|m| m.checked_add(chars[i].to_digit(10).unwrap() as i8))
                    .ok_or(ParseError::InvalidCharge { pos: i })?;
                i += 1;
            }
            charge = sign * magnitude;
        } else {
            charge = sign;
            while i < chars.len() && chars[i] == symbol_ch {
                charge = charge
                    .checked_add(sign)
                    .ok_or(ParseError::InvalidCharge { pos: i })?;
                i += 1;
            }
        }
    }

    // Atom class, accepted and ignored.
    if i < chars.len() && chars[i] == ':' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i >= chars.len() || chars[i] != ']' {
        return Err(ParseError::UnclosedBracket { pos: start });
    }

    Ok((
        AtomSpec {
            atomic_number: element.atomic_number,
            aromatic,
            isotope,
            explicit_h: Some(explicit_h),
            charge,
            pos: start,
        },
        i + 1,
    ))
}
