//! Plain-text instance loading.
//!
//! The format is a stream of whitespace-separated non-negative integers:
//!
//! ```text
//! count capacity
//! price_1 weight_1
//! ...
//! price_count weight_count
//! ```
//!
//! Line breaks carry no meaning; only the order of the values does.

use super::error::InstanceError;
use super::types::{Instance, Item};
use std::fs::File;
use std::io::{BufReader, Read};
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

/// Parses an instance from text.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::parse_instance;
///
/// let instance = parse_instance("3 50\n60 10\n100 20\n120 30\n").unwrap();
/// assert_eq!(instance.capacity(), 50);
/// assert_eq!(instance.len(), 3);
/// ```
pub fn parse_instance(text: &str) -> Result<Instance, InstanceError> {
    let mut tokens = text.split_ascii_whitespace().enumerate();

    let count: usize = match tokens.next() {
        Some((i, token)) => parse_token(i, token)?,
        None => return Err(InstanceError::MissingHeader("item count")),
    };
    let capacity: u64 = match tokens.next() {
        Some((i, token)) => parse_token(i, token)?,
        None => return Err(InstanceError::MissingHeader("capacity")),
    };

    let values = tokens
        .map(|(i, token)| parse_token::<u64>(i, token))
        .collect::<Result<Vec<_>, _>>()?;

    let expected = count.checked_mul(2);
    if expected != Some(values.len()) {
        return Err(InstanceError::ItemCountMismatch {
            declared: count,
            expected: expected.unwrap_or(usize::MAX),
            found: values.len(),
        });
    }

    let items = values
        .chunks_exact(2)
        .map(|pair| Item::new(pair[0], pair[1]))
        .collect();

    Instance::new(capacity, items)
}

/// Reads an instance from any reader (a file, standard input, a byte slice).
pub fn read_instance<R: Read>(mut reader: R) -> Result<Instance, InstanceError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// Reads an instance from a file.
pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<Instance, InstanceError> {
    let file = File::open(path)?;
    read_instance(BufReader::new(file))
}

impl FromStr for Instance {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instance(s)
    }
}

fn parse_token<T>(index: usize, token: &str) -> Result<T, InstanceError>
where
    T: FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| InstanceError::ParseInt {
        position: index + 1,
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let instance = parse_instance("3 50\n60 10\n100 20\n120 30\n").unwrap();
        assert_eq!(instance.capacity(), 50);
        assert_eq!(
            instance.items(),
            &[Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)]
        );
    }

    #[test]
    fn test_layout_is_free_form() {
        let a = parse_instance("2 7 1 2 3 4").unwrap();
        let b = parse_instance("  2\n7\n\n1\t2\r\n3 4\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_instance() {
        let instance = parse_instance("0 10").unwrap();
        assert!(instance.is_empty());
        assert_eq!(instance.capacity(), 10);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse_instance(""),
            Err(InstanceError::MissingHeader("item count"))
        ));
        assert!(matches!(
            parse_instance("3"),
            Err(InstanceError::MissingHeader("capacity"))
        ));
    }

    #[test]
    fn test_too_few_values() {
        let err = parse_instance("3 50 60 10 100 20").unwrap_err();
        match err {
            InstanceError::ItemCountMismatch {
                declared,
                expected,
                found,
            } => {
                assert_eq!(declared, 3);
                assert_eq!(expected, 6);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_many_values() {
        assert!(matches!(
            parse_instance("1 50 60 10 100"),
            Err(InstanceError::ItemCountMismatch { found: 3, .. })
        ));
    }

    #[test]
    fn test_garbage_and_negative_tokens() {
        match parse_instance("2 10 5 x 1 1").unwrap_err() {
            InstanceError::ParseInt {
                position, token, ..
            } => {
                assert_eq!(position, 4);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            parse_instance("1 -5 1 1"),
            Err(InstanceError::ParseInt { position: 2, .. })
        ));
    }

    #[test]
    fn test_zero_weight_rejected() {
        assert!(matches!(
            parse_instance("2 10 5 1 7 0"),
            Err(InstanceError::ZeroWeight { index: 1 })
        ));
    }

    #[test]
    fn test_read_from_reader_and_from_str() {
        let text = "2 5\n3 2\n4 3\n";
        let from_reader = read_instance(text.as_bytes()).unwrap();
        let from_str: Instance = text.parse().unwrap();
        assert_eq!(from_reader, from_str);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_instance("/nonexistent/u-knapsack/instance.txt").unwrap_err();
        assert!(matches!(err, InstanceError::Io(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = parse_instance("2 10 1 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "declared 2 items but found 2 price/weight values (expected 4)"
        );
    }
}
