//! Restricted expression language for `f(x)` graphing.
//!
//! Parsing and evaluation are done by `meval`. Before the text reaches it,
//! every identifier is checked against a fixed allowlist: the variable `x`,
//! the constants `pi`/`e`, and a small set of math functions. Identifiers may
//! carry a `Math.` prefix (`Math.sin(x)`), which is ignored, and `**` is
//! accepted as a synonym for `^`.

use std::fmt;
use thiserror::Error;

/// Failure to parse an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("{0}")]
    Invalid(String),
}

impl From<meval::Error> for ParseError {
    fn from(e: meval::Error) -> Self {
        Self::Invalid(e.to_string())
    }
}

const FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "log10", "log2", "exp", "pow", "sqrt", "abs",
    "ceil", "floor", "round", "min", "max",
];

/// Rewrites `source` into `meval` syntax, rejecting identifiers outside the
/// allowlist.
fn normalize(source: &str) -> Result<String, ParseError> {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            if i < chars.len() && matches!(chars[i], 'e' | 'E') && exponent_follows(&chars, i + 1) {
                i += 2;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            out.extend(&chars[start..i]);
        } else if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len()
                && (chars[i].is_ascii_alphanumeric() || chars[i] == '_' || chars[i] == '.')
            {
                i += 1;
            }
            let raw: String = chars[start..i].iter().collect();
            let name = raw.strip_prefix("Math.").unwrap_or(&raw);
            let name = match name {
                "PI" => "pi",
                "E" => "e",
                other => other,
            };
            if !matches!(name, "x" | "pi" | "e") && !FUNCTIONS.contains(&name) {
                return Err(ParseError::UnknownIdentifier(raw));
            }
            out.push_str(name);
        } else if c == '*' && chars.get(i + 1) == Some(&'*') {
            out.push('^');
            i += 2;
        } else {
            out.push(c);
            i += 1;
        }
    }

    Ok(out)
}

fn exponent_follows(chars: &[char], at: usize) -> bool {
    match chars.get(at) {
        Some(c) if c.is_ascii_digit() => true,
        Some('+' | '-') => chars.get(at + 1).is_some_and(char::is_ascii_digit),
        _ => false,
    }
}

fn nan_fold(args: &[f64], pick: fn(f64, f64) -> f64) -> f64 {
    args.iter()
        .copied()
        .reduce(|acc, v| if acc.is_nan() || v.is_nan() { f64::NAN } else { pick(acc, v) })
        .unwrap_or(f64::NAN)
}

fn context() -> meval::Context<'static> {
    let mut ctx = meval::Context::new();
    ctx.var("pi", std::f64::consts::PI)
        .var("e", std::f64::consts::E)
        .func("log", f64::ln)
        .func("log10", f64::log10)
        .func("log2", f64::log2)
        // Halves round toward positive infinity.
        .func("round", |v| (v + 0.5).floor())
        .func2("pow", f64::powf)
        .funcn("min", |args| nan_fold(args, f64::min), 1..)
        .funcn("max", |args| nan_fold(args, f64::max), 1..);
    ctx
}

/// A compiled expression in the single variable `x`.
pub struct Expr {
    source: String,
    function: Box<dyn Fn(f64) -> f64>,
}

impl Expr {
    /// Parses an expression.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnknownIdentifier`] for names off the allowlist,
    /// [`ParseError::Invalid`] for malformed input or a function called with
    /// the wrong number of arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use fraccalc::math::Expr;
    ///
    /// let f = Expr::parse("2 * Math.sin(x) + x^2")?;
    /// assert_eq!(f.eval(0.0), 0.0);
    /// assert!(Expr::parse("alert(1)").is_err());
    /// # Ok::<(), fraccalc::math::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let normalized = normalize(input)?;
        let parsed: meval::Expr = normalized.parse()?;
        let function = parsed.bind_with_context(context(), "x")?;
        Ok(Self {
            source: input.to_string(),
            function: Box::new(function),
        })
    }

    /// Evaluates the expression at `x`. Domain errors surface as NaN or
    /// infinities rather than failures.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expr").field(&self.source).finish()
    }
}
