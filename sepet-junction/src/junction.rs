use std::fmt;
use std::hash::BuildHasher;

use sepet_deque::CircularDeque;
use sepet_map::{HashMap, HashSet, OrderedSet};

use crate::error::JunctionError;

/// One token of a junction expression.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Atom(String),
    Not,
    And,
    Or,
    LParen,
    RParen,
}

/// A parsed boolean expression over named terms.
///
/// Stored as a reverse-Polish program, so matching is a single linear pass
/// with a boolean stack and never re-parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junction {
    rpn: CircularDeque<Token>,
}

impl Junction {
    /// Parses an expression over atoms, `!`, `&`, `|` and parentheses.
    ///
    /// Atoms are runs of alphanumeric characters, `_` or `-`. `!` binds
    /// tighter than `&`, which binds tighter than `|`; the binary operators
    /// are left-associative.
    pub fn parse(input: &str) -> Result<Junction, JunctionError> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(JunctionError::EmptyExpression);
        }
        shunt(tokens)
    }

    /// Evaluates the expression, asking `pred` whether each atom is
    /// present.
    pub fn matches_with<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        let mut stack: CircularDeque<bool> = CircularDeque::with_capacity(8);
        for token in self.rpn.iter() {
            match token {
                Token::Atom(name) => stack.push_back(pred(name)),
                Token::Not => {
                    let a = pop_operand(&mut stack);
                    stack.push_back(!a);
                }
                Token::And => {
                    let b = pop_operand(&mut stack);
                    let a = pop_operand(&mut stack);
                    stack.push_back(a && b);
                }
                Token::Or => {
                    let b = pop_operand(&mut stack);
                    let a = pop_operand(&mut stack);
                    stack.push_back(a || b);
                }
                Token::LParen | Token::RParen => {
                    unreachable!("parentheses never reach the rpn program")
                }
            }
        }
        pop_operand(&mut stack)
    }

    /// Matches the expression against a set of present terms.
    pub fn matches<S: BuildHasher>(&self, present: &HashSet<String, S>) -> bool {
        self.matches_with(|atom| present.contains(atom))
    }

    /// Returns the distinct atoms of the expression in first-appearance
    /// order.
    pub fn atoms(&self) -> OrderedSet<String> {
        let mut out = OrderedSet::new();
        for token in self.rpn.iter() {
            if let Token::Atom(name) = token {
                out.insert(name.clone());
            }
        }
        out
    }
}

impl fmt::Display for Junction {
    /// Renders the stored program in RPN, for debugging only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in self.rpn.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match token {
                Token::Atom(name) => write!(f, "{}", name)?,
                Token::Not => write!(f, "!")?,
                Token::And => write!(f, "&")?,
                Token::Or => write!(f, "|")?,
                Token::LParen | Token::RParen => {}
            }
        }
        Ok(())
    }
}

fn pop_operand(stack: &mut CircularDeque<bool>) -> bool {
    match stack.pop_back() {
        Some(value) => value,
        None => unreachable!("rpn program is validated at parse time"),
    }
}

fn is_atom_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Splits the input into a token queue, rejecting characters outside the
/// grammar.
fn tokenize(input: &str) -> Result<CircularDeque<(Token, usize)>, JunctionError> {
    let mut tokens = CircularDeque::with_capacity(16);
    let mut chars = input.char_indices().peekable();

    while let Some(&(at, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if is_atom_char(c) {
            let mut name = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if !is_atom_char(c) {
                    break;
                }
                name.push(c);
                chars.next();
            }
            tokens.push_back((Token::Atom(name), at));
            continue;
        }
        let token = match c {
            '!' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Err(JunctionError::UnexpectedToken { found: c, at }),
        };
        tokens.push_back((token, at));
        chars.next();
    }

    Ok(tokens)
}

fn precedence_table() -> HashMap<char, u8> {
    let mut table = HashMap::with_capacity(4);
    table.insert('!', 3);
    table.insert('&', 2);
    table.insert('|', 1);
    table
}

fn op_char(token: &Token) -> char {
    match token {
        Token::Not => '!',
        Token::And => '&',
        Token::Or => '|',
        _ => unreachable!("only operators are kept on the operator stack"),
    }
}

/// Shunting-yard pass: turns the token queue into an RPN program,
/// validating operand/operator alternation along the way.
fn shunt(mut tokens: CircularDeque<(Token, usize)>) -> Result<Junction, JunctionError> {
    let precedence = precedence_table();
    let mut output: CircularDeque<Token> = CircularDeque::with_capacity(tokens.len());
    let mut ops: CircularDeque<(Token, usize)> = CircularDeque::with_capacity(8);
    let mut expect_operand = true;
    let mut last_at = 0;

    while let Some((token, at)) = tokens.pop_front() {
        last_at = at;
        match token {
            Token::Atom(_) => {
                if !expect_operand {
                    return Err(JunctionError::MalformedExpression { at });
                }
                output.push_back(token);
                expect_operand = false;
            }
            Token::Not => {
                if !expect_operand {
                    return Err(JunctionError::MalformedExpression { at });
                }
                ops.push_back((token, at));
            }
            Token::And | Token::Or => {
                if expect_operand {
                    return Err(JunctionError::MalformedExpression { at });
                }
                let prec = precedence[&op_char(&token)];
                // Left-associative: pop everything that binds at least as
                // tightly.
                while let Some((top, _)) = ops.back() {
                    if *top == Token::LParen || precedence[&op_char(top)] < prec {
                        break;
                    }
                    if let Some((op, _)) = ops.pop_back() {
                        output.push_back(op);
                    }
                }
                ops.push_back((token, at));
                expect_operand = true;
            }
            Token::LParen => {
                if !expect_operand {
                    return Err(JunctionError::MalformedExpression { at });
                }
                ops.push_back((token, at));
            }
            Token::RParen => {
                if expect_operand {
                    return Err(JunctionError::MalformedExpression { at });
                }
                loop {
                    match ops.pop_back() {
                        Some((Token::LParen, _)) => break,
                        Some((op, _)) => output.push_back(op),
                        None => return Err(JunctionError::UnbalancedParens),
                    }
                }
            }
        }
    }

    if expect_operand {
        return Err(JunctionError::MalformedExpression { at: last_at });
    }
    while let Some((op, _)) = ops.pop_back() {
        if op == Token::LParen {
            return Err(JunctionError::UnbalancedParens);
        }
        output.push_back(op);
    }

    Ok(Junction { rpn: output })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpn_of(input: &str) -> String {
        Junction::parse(input).unwrap().to_string()
    }

    #[test]
    fn precedence_orders_the_program() {
        assert_eq!(rpn_of("a & b | c"), "a b & c |");
        assert_eq!(rpn_of("a | b & c"), "a b c & |");
        assert_eq!(rpn_of("!a & b"), "a ! b &");
        assert_eq!(rpn_of("a & (b | c)"), "a b c | &");
    }

    #[test]
    fn not_binds_tightest() {
        let j = Junction::parse("!a | b").unwrap();
        assert!(j.matches_with(|atom| atom == "b"));
        assert!(j.matches_with(|_| false));
        assert!(!j.matches_with(|atom| atom == "a"));
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        assert_eq!(
            Junction::parse(""),
            Err(JunctionError::EmptyExpression)
        );
        assert!(matches!(
            Junction::parse("a b"),
            Err(JunctionError::MalformedExpression { .. })
        ));
        assert!(matches!(
            Junction::parse("& a"),
            Err(JunctionError::MalformedExpression { .. })
        ));
        assert!(matches!(
            Junction::parse("a &"),
            Err(JunctionError::MalformedExpression { .. })
        ));
        assert_eq!(
            Junction::parse("(a & b"),
            Err(JunctionError::UnbalancedParens)
        );
        assert_eq!(
            Junction::parse("a & b)"),
            Err(JunctionError::UnbalancedParens)
        );
        assert!(matches!(
            Junction::parse("a @ b"),
            Err(JunctionError::UnexpectedToken { found: '@', .. })
        ));
    }

    #[test]
    fn atoms_in_first_appearance_order() {
        let j = Junction::parse("b & (a | b) & !c").unwrap();
        let atoms = j.atoms();
        let names: Vec<&str> = atoms.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
