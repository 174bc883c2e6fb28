use nom::character::complete::{char, digit1, multispace0, satisfy};
use nom::combinator::opt;
use nom::error::Error;
use nom::multi::many0;
use nom::sequence::preceded;
use nom::{IResult, Parser};

use crate::{Multiplier, Node, NodeList, ParseError, ParseErrorKind};

/// Move as it appears in the input, before the repeat count is validated.
struct RawNode<'a> {
    family: char,
    count: Option<&'a str>,
    prime: bool,
}

/// Parses a string containing move notation into a [`NodeList`].
///
/// Whitespace between moves is optional, so `RUR'U'` and `R U R' U'` parse
/// the same.
pub fn parse_notation(s: &str) -> Result<NodeList, ParseError> {
    let offset_of = |rest: &str| s.len() - rest.len();

    let (rest, raw_nodes) = many0(preceded(multispace0, raw_node))
        .parse(s)
        .map_err(|e| match e {
            nom::Err::Error(Error { input, .. }) | nom::Err::Failure(Error { input, .. }) => {
                unexpected(offset_of(input), input)
            }
            nom::Err::Incomplete(_) => unexpected(s.len(), ""),
        })?;

    let rest = rest.trim_start();
    if !rest.is_empty() {
        return Err(unexpected(offset_of(rest), rest));
    }

    raw_nodes
        .into_iter()
        .map(|raw| -> Result<Node, ParseError> {
            let mut multiplier = match raw.count {
                None => 1,
                Some(digits) => parse_count(digits)
                    .map_err(|kind| ParseError::new(offset_in(s, digits), kind))?,
            };
            if raw.prime {
                multiplier = -multiplier;
            }
            Ok(Node {
                family: raw.family,
                multiplier: Multiplier(multiplier),
            })
        })
        .collect::<Result<_, _>>()
        .map(NodeList)
}

fn raw_node(s: &str) -> IResult<&str, RawNode<'_>> {
    (
        satisfy(|c: char| c.is_ascii_alphabetic()),
        opt(digit1),
        opt(char('\'')),
    )
        .map(|(family, count, prime)| RawNode {
            family,
            count,
            prime: prime.is_some(),
        })
        .parse(s)
}

fn parse_count(digits: &str) -> Result<i32, ParseErrorKind> {
    let n = digits
        .parse::<u32>()
        .ok()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(ParseErrorKind::MultiplierOutOfRange)?;
    match n {
        0 => Err(ParseErrorKind::ZeroMultiplier),
        n => Ok(n),
    }
}

/// Returns the byte offset of `sub` within `s`, which must contain it.
fn offset_in(s: &str, sub: &str) -> usize {
    sub.as_ptr() as usize - s.as_ptr() as usize
}

fn unexpected(offset: usize, rest: &str) -> ParseError {
    let kind = match rest.chars().next() {
        Some(c) => ParseErrorKind::UnexpectedChar(c),
        None => ParseErrorKind::UnexpectedEnd,
    };
    ParseError::new(offset, kind)
}
