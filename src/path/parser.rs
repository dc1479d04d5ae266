use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, satisfy},
    combinator::{eof, map, value},
    error::context,
    multi::{many0, separated_list0},
    sequence::preceded,
};
use nom_language::error::VerboseError;

use super::{Pointer, Segment};

// ""            - allowed - the whole document
// /foo/bar      - allowed - simple path
// foo/bar       - not allowed, missing leading `/`
// /foo//bar     - allowed - empty member name in the middle
// /a~1b         - allowed - decodes to the member "a/b"
// /a~2b         - not allowed - `~` must be followed by `0` or `1`
pub(crate) fn parse_pointer(input: &str) -> IResult<&str, Pointer, VerboseError<&str>> {
    context(
        "expected a path starting with '/' or empty input",
        alt((
            // exactly empty input
            value(Pointer::root(), eof),
            // normal path: starts with '/'
            |i| {
                let (rest, segments) =
                    preceded(char('/'), separated_list0(char('/'), parse_segment)).parse(i)?;
                Ok((rest, Pointer::new(segments)))
            },
        )),
    )
    .parse(input)
}

fn parse_segment(input: &str) -> IResult<&str, Segment, VerboseError<&str>> {
    // One decoded char inside a reference token.
    // - `~` must be escaped (~0 or ~1), so we exclude raw '~' here.
    // - '/' terminates the token.
    let token_char = alt((unescape_json_pointer, satisfy(|c| c != '/' && c != '~')));
    context(
        "reference token",
        map(many0(token_char), |chars: Vec<char>| {
            Segment::Field(chars.into_iter().collect::<String>())
        }),
    )
    .parse(input)
}

fn unescape_json_pointer(input: &str) -> IResult<&str, char, VerboseError<&str>> {
    let (rest, _) = char('~').parse(input)?;
    let (rest, esc) = alt((char('0'), char('1'))).parse(rest)?;

    let decoded_char = match esc {
        '0' => '~',
        _ => '/',
    };

    Ok((rest, decoded_char))
}
