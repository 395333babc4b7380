use nom::{
    character::complete::space0, combinator::all_consuming, sequence::delimited, IResult,
};

use crate::error::MixError;

fn parse_value(s: &str) -> IResult<&str, i64> {
    all_consuming(delimited(space0, nom::character::complete::i64, space0))(s)
}

/// Parse one signed integer per line, in input order.
///
/// Each line holds a single integer, optionally padded with spaces or tabs.
/// Trailing blank lines are ignored; any other line that does not match
/// fails with [`MixError::Parse`] carrying its 1-based line number.
pub fn parse_values(s: &str) -> Result<Vec<i64>, MixError> {
    s.trim_end()
        .lines()
        .enumerate()
        .map(|(i, line)| {
            parse_value(line)
                .map(|(_, value)| value)
                .map_err(|_| MixError::Parse {
                    line: i + 1,
                    text: line.to_owned(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_values;
    use crate::MixError;

    #[test]
    fn test_parse_values() {
        let values = parse_values("1\n2\n-3\n3\n-2\n0\n4\n").unwrap();
        assert_eq!(values, vec![1, 2, -3, 3, -2, 0, 4]);
    }

    #[test]
    fn test_parse_crlf() {
        assert_eq!(parse_values("5\r\n-7\r\n0\r\n").unwrap(), vec![5, -7, 0]);
    }

    #[test]
    fn test_parse_padded() {
        assert_eq!(parse_values(" 3\t\n\t-4 \n0").unwrap(), vec![3, -4, 0]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_values("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_values("\n\n").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_error_reports_line() {
        assert_eq!(
            parse_values("1\nabc\n0"),
            Err(MixError::Parse {
                line: 2,
                text: "abc".to_owned()
            })
        );
        assert!(matches!(
            parse_values("1\n2x\n0"),
            Err(MixError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_values("1\n\n0"),
            Err(MixError::Parse { line: 2, .. })
        ));
    }
}
