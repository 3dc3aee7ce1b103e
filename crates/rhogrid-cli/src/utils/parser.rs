use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid triple '{0}'. Expected three comma-separated values (e.g., '8,8,5').")]
    InvalidTripleFormat(String),

    #[error("Component '{component}' of '{input}' is not a valid {expected}.")]
    InvalidComponent {
        component: String,
        input: String,
        expected: &'static str,
    },
}

fn parse_triple<T: FromStr>(input: &str, expected: &'static str) -> Result<[T; 3], ParseError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [a, b, c] = parts.as_slice() else {
        return Err(ParseError::InvalidTripleFormat(input.to_string()));
    };
    let component = |part: &str| {
        part.parse::<T>()
            .map_err(|_| ParseError::InvalidComponent {
                component: part.to_string(),
                input: input.to_string(),
                expected,
            })
    };
    Ok([component(*a)?, component(*b)?, component(*c)?])
}

/// Parses a Miller index such as `-3,0,1`.
pub fn parse_triple_i32(input: &str) -> Result<[i32; 3], ParseError> {
    parse_triple(input, "integer")
}

/// Parses a grid extent or offset such as `16,16,8`.
pub fn parse_triple_usize(input: &str) -> Result<[usize; 3], ParseError> {
    parse_triple(input, "non-negative integer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_triple_with_spaces() {
        assert_eq!(parse_triple_i32("-3, 0 ,12"), Ok([-3, 0, 12]));
    }

    #[test]
    fn parses_unsigned_triple() {
        assert_eq!(parse_triple_usize("16,16,8"), Ok([16, 16, 8]));
    }

    #[test]
    fn wrong_component_count_is_a_format_error() {
        assert_eq!(
            parse_triple_i32("1,2"),
            Err(ParseError::InvalidTripleFormat("1,2".to_string()))
        );
        assert!(matches!(
            parse_triple_usize("1,2,3,4"),
            Err(ParseError::InvalidTripleFormat(_))
        ));
    }

    #[test]
    fn negative_extent_is_an_invalid_component() {
        assert_eq!(
            parse_triple_usize("4,-1,4"),
            Err(ParseError::InvalidComponent {
                component: "-1".to_string(),
                input: "4,-1,4".to_string(),
                expected: "non-negative integer",
            })
        );
    }

    #[test]
    fn empty_component_is_rejected() {
        assert!(matches!(
            parse_triple_i32("1,,3"),
            Err(ParseError::InvalidComponent { .. })
        ));
    }
}
