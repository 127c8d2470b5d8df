//! Route templates built from property selectors
//!
//! `add_templated::<T>("GET", "users/{0}/orders/{1}", &[a, b])` turns each
//! selector into a `{PropertyName}` token and substitutes the tokens
//! positionally, giving `users/{UserId}/orders/{Id}`.
//!
//! A selector is either a field token ([`field!`](crate::field)) or the source
//! of a one-argument closure ([`selector!`](crate::selector)). Closure bodies
//! must be a member access on the closure parameter, optionally in parentheses
//! or behind a single `as` conversion.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

use syn::ext::IdentExt;
use syn::{Expr, Member, Pat};

use crate::error::{RouteError, RouteResult};
use crate::service::RequestDto;

#[derive(Clone)]
enum SelectorKind {
    Field(Cow<'static, str>),
    Expr(String),
}

/// Picks one property of the request type `T`
pub struct Selector<T> {
    kind: SelectorKind,
    _request: PhantomData<fn() -> T>,
}

impl<T> Selector<T> {
    /// Select a field by name; a raw identifier prefix (`r#type`) is dropped
    pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
        Self { kind: SelectorKind::Field(name.into()), _request: PhantomData }
    }

    /// Select through closure source such as `"|x| x.user_id"`
    pub fn expr(source: impl Into<String>) -> Self {
        Self { kind: SelectorKind::Expr(source.into()), _request: PhantomData }
    }
}

impl<T: RequestDto> Selector<T> {
    /// Resolve to a property name declared by `T`
    pub fn property_name(&self) -> RouteResult<String> {
        let name = match &self.kind {
            SelectorKind::Field(name) => name.strip_prefix("r#").unwrap_or(&**name).to_string(),
            SelectorKind::Expr(source) => member_name(source)?,
        };

        if !T::field_names().contains(&name.as_str()) {
            return Err(RouteError::UnknownProperty {
                request_type: T::type_name().to_string(),
                property: name,
            });
        }
        Ok(name)
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        Self { kind: self.kind.clone(), _request: PhantomData }
    }
}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SelectorKind::Field(name) => write!(f, "Selector::field({})", name),
            SelectorKind::Expr(source) => write!(f, "Selector::expr({})", source),
        }
    }
}

fn strip_parens(mut expr: &Expr) -> &Expr {
    loop {
        match expr {
            Expr::Paren(inner) => expr = &inner.expr,
            Expr::Group(inner) => expr = &inner.expr,
            _ => return expr,
        }
    }
}

/// Property name accessed by closure source `|x| x.name`
fn member_name(source: &str) -> RouteResult<String> {
    let invalid = |reason: String| RouteError::InvalidSelector {
        expression: source.to_string(),
        reason,
    };
    let unsupported = || RouteError::UnsupportedExpression { expression: source.to_string() };

    let closure: syn::ExprClosure = syn::parse_str(source).map_err(|e| invalid(e.to_string()))?;
    if closure.inputs.len() != 1 {
        return Err(invalid("expected exactly one closure parameter".to_string()));
    }

    let param = match &closure.inputs[0] {
        Pat::Ident(pat) => &pat.ident,
        Pat::Type(typed) => match &*typed.pat {
            Pat::Ident(pat) => &pat.ident,
            _ => return Err(invalid("closure parameter must be a plain name".to_string())),
        },
        _ => return Err(invalid("closure parameter must be a plain name".to_string())),
    };

    let mut body = strip_parens(&closure.body);
    if let Expr::Cast(cast) = body {
        body = strip_parens(&cast.expr);
    }

    let Expr::Field(access) = body else {
        return Err(unsupported());
    };
    let on_param = matches!(strip_parens(&access.base), Expr::Path(p) if p.path.is_ident(param));

    match &access.member {
        Member::Named(ident) if on_param => Ok(ident.unraw().to_string()),
        _ => Err(unsupported()),
    }
}

enum Piece<'a> {
    Literal(&'a str),
    Arg(usize),
}

fn parse_template(template: &str) -> RouteResult<Vec<Piece<'_>>> {
    let malformed = |reason: String| RouteError::MalformedTemplate {
        template: template.to_string(),
        reason,
    };

    let mut pieces = Vec::new();
    let mut literal_start = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '{' | '}' if chars.peek().map(|(_, n)| *n) == Some(c) => {
                // doubled brace: keep one
                pieces.push(Piece::Literal(&template[literal_start..=i]));
                chars.next();
                literal_start = i + 2;
            }
            '{' => {
                pieces.push(Piece::Literal(&template[literal_start..i]));
                let close = template[i..]
                    .find('}')
                    .map(|offset| i + offset)
                    .ok_or_else(|| malformed(format!("unclosed `{{` at byte {}", i)))?;
                let index = &template[i + 1..close];
                let plain_digits = !index.is_empty()
                    && index.bytes().all(|b| b.is_ascii_digit())
                    && (index == "0" || !index.starts_with('0'));
                let index = Some(index)
                    .filter(|_| plain_digits)
                    .and_then(|digits| digits.parse::<usize>().ok())
                    .ok_or_else(|| {
                        malformed(format!("placeholder `{{{}}}` is not a positional index", index))
                    })?;
                pieces.push(Piece::Arg(index));
                while chars.peek().is_some_and(|(j, _)| *j <= close) {
                    chars.next();
                }
                literal_start = close + 1;
            }
            '}' => return Err(malformed(format!("unmatched `}}` at byte {}", i))),
            _ => {}
        }
    }
    pieces.push(Piece::Literal(&template[literal_start..]));

    Ok(pieces)
}

/// Substitute `{0}`, `{1}`, ... with `args`; `{{` and `}}` are literal braces
///
/// The placeholders must use exactly the indices `0..args.len()`.
pub fn format_positional<S: AsRef<str>>(template: &str, args: &[S]) -> RouteResult<String> {
    let pieces = parse_template(template)?;

    let used: BTreeSet<usize> = pieces
        .iter()
        .filter_map(|p| match p {
            Piece::Arg(i) => Some(*i),
            Piece::Literal(_) => None,
        })
        .collect();
    let expected = used.iter().next_back().map_or(0, |max| max + 1);

    if expected != args.len() {
        return Err(RouteError::FormatMismatch {
            template: template.to_string(),
            expected,
            supplied: args.len(),
        });
    }
    if let Some(gap) = (0..expected).find(|i| !used.contains(i)) {
        return Err(RouteError::MalformedTemplate {
            template: template.to_string(),
            reason: format!("placeholder {{{}}} is never used", gap),
        });
    }

    let mut out = String::with_capacity(template.len());
    for piece in &pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Arg(i) => out.push_str(args[*i].as_ref()),
        }
    }
    Ok(out)
}

/// Format `template` with one `{PropertyName}` token per selector
pub fn format_route<T: RequestDto>(
    template: &str,
    selectors: &[Selector<T>],
) -> RouteResult<String> {
    let tokens = selectors
        .iter()
        .map(|s| s.property_name().map(|name| format!("{{{}}}", name)))
        .collect::<RouteResult<Vec<_>>>()?;

    format_positional(template, &tokens)
}
