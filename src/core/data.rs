//! Line-oriented point collector.
//!
//! Every input line yields exactly one point:
//! * two or more numbers -> the first two are `(x, y)`
//! * one number          -> `(line index, number)`
//! * no numbers          -> `(line index, trimmed length)`
//!
//! Identical points are merged into a multiplicity counter.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
    str::FromStr,
};

use rust_decimal::Decimal;

use crate::core::error::GraphError;

// --- Point Set ---

/// `y -> (x -> multiplicity)`, both levels sorted ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    buckets: BTreeMap<Decimal, BTreeMap<Decimal, u64>>,
}

impl PointSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `(x, y)`.
    pub fn insert(&mut self, x: Decimal, y: Decimal) {
        *self.buckets.entry(y).or_default().entry(x).or_insert(0) += 1;
    }

    #[must_use]
    pub fn count(&self, x: Decimal, y: Decimal) -> Option<u64> {
        self.buckets.get(&y)?.get(&x).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct `(x, y)` pairs.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    /// Sum of all multiplicities, i.e. the number of lines collected.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.buckets.values().flat_map(BTreeMap::values).sum()
    }

    /// Ascending `(y, x, count)`.
    pub fn iter(&self) -> impl Iterator<Item = (Decimal, Decimal, u64)> + '_ {
        self.buckets
            .iter()
            .flat_map(|(&y, xs)| xs.iter().map(move |(&x, &n)| (y, x, n)))
    }

    /// One entry per distinct y value.
    pub fn buckets(&self) -> impl Iterator<Item = (&Decimal, &BTreeMap<Decimal, u64>)> {
        self.buckets.iter()
    }

    /// Flat parallel `(xs, ys)`, one entry per distinct point.
    #[must_use]
    pub fn columns(&self) -> (Vec<Decimal>, Vec<Decimal>) {
        self.iter().map(|(y, x, _)| (x, y)).unzip()
    }
}

impl FromIterator<(Decimal, Decimal)> for PointSet {
    fn from_iter<I: IntoIterator<Item = (Decimal, Decimal)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (x, y) in iter {
            set.insert(x, y);
        }
        set
    }
}

/// Debug dump: `{y: {x: n, ...}, ...}`.
impl Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (y, xs)) in self.buckets.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{y}: {{")?;
            for (j, (x, n)) in xs.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{x}: {n}")?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

// --- Token Classification ---

/// Outcome of best-effort numeric detection on one whitespace-separated field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Number(Decimal),
    Word,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn number(self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(n),
            Self::Word => None,
        }
    }
}

/// Plain (`-1.5`, `.5`) or scientific (`2.5e-3`) decimals are numbers.
/// Anything a finite decimal cannot hold (`NaN`, `inf`, 1e40) is a word.
#[must_use]
pub fn classify(field: &str) -> Token {
    let field = normalize_unicode_minus(field);
    Decimal::from_str(&field)
        .or_else(|_| Decimal::from_scientific(&field))
        .map_or(Token::Word, Token::Number)
}

/// U+2212 MINUS SIGN shows up in copy-pasted data; treat it as `-`.
#[inline]
#[must_use]
pub fn normalize_unicode_minus(s: &str) -> std::borrow::Cow<'_, str> {
    if s.contains('\u{2212}') {
        s.replace('\u{2212}', "-").into()
    } else {
        s.into()
    }
}

// --- Line Policy ---

/// Turn one line (1-based `index`) into an `(x, y)` pair.  Never fails.
#[must_use]
pub fn parse_line(line: &str, index: usize) -> (Decimal, Decimal) {
    let line = line.trim();
    let mut numbers = line
        .split_whitespace()
        .map(classify)
        .filter_map(Token::number);

    match (numbers.next(), numbers.next()) {
        (Some(x), Some(y)) => (x, y),
        (Some(y), None) => (Decimal::from(index), y),
        _ => (Decimal::from(index), Decimal::from(line.chars().count())),
    }
}

/// Collect already-split lines.
pub fn collect_lines<I, S>(lines: I) -> PointSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| parse_line(line.as_ref(), i + 1))
        .collect()
}

// --- Stream ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read every line of `src`.  Only I/O failures are errors; bad UTF-8 is
/// decoded lossily so the line still counts.
pub fn read_points<R: Read>(src: R) -> Result<PointSet, GraphError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut points = PointSet::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        let (x, y) = parse_line(&String::from_utf8_lossy(&buf), line_no);
        points.insert(x, y);
    }

    tracing::debug!(
        lines = line_no,
        distinct = points.distinct_len(),
        "collected points"
    );
    Ok(points)
}

pub fn read_points_from_path(path: &str) -> Result<PointSet, GraphError> {
    if path == "-" {
        read_points(std::io::stdin().lock())
    } else {
        read_points(std::fs::File::open(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn classify_accepts_plain_and_scientific_decimals() {
        assert_eq!(classify("42"), Token::Number(d("42")));
        assert_eq!(classify("-1.5"), Token::Number(d("-1.5")));
        assert_eq!(classify("1e3"), Token::Number(d("1000")));
        assert_eq!(classify("2.5E-2"), Token::Number(d("0.025")));
    }

    #[test]
    fn classify_rejects_words_without_failing() {
        assert_eq!(classify("hello"), Token::Word);
        assert_eq!(classify("1,000"), Token::Word);
        assert_eq!(classify("NaN"), Token::Word);
        assert_eq!(classify("$5"), Token::Word);
    }

    #[test]
    fn unicode_minus_is_a_minus() {
        assert_eq!(classify("\u{2212}7"), Token::Number(d("-7")));
    }

    #[test]
    fn two_numbers_are_x_then_y() {
        assert_eq!(parse_line("  3   4  9", 17), (d("3"), d("4")));
    }

    #[test]
    fn words_between_numbers_are_skipped() {
        assert_eq!(parse_line("t= 3 ms 4", 1), (d("3"), d("4")));
    }

    #[test]
    fn single_number_uses_line_index_for_x() {
        assert_eq!(parse_line("count: 12", 5), (d("5"), d("12")));
    }

    #[test]
    fn no_numbers_uses_trimmed_length() {
        assert_eq!(parse_line("hello", 1), (d("1"), d("5")));
        assert_eq!(parse_line("   hi there \t", 3), (d("3"), d("8")));
        assert_eq!(parse_line("", 2), (d("2"), d("0")));
    }

    #[test]
    fn repeated_points_increment_multiplicity() {
        let points = collect_lines(["1 2", "3 4", "1 2"]);
        assert_eq!(points.count(d("1"), d("2")), Some(2));
        assert_eq!(points.count(d("3"), d("4")), Some(1));
        assert_eq!(points.distinct_len(), 2);
        assert_eq!(points.total(), 3);
    }

    #[test]
    fn equal_values_with_different_scale_share_a_key() {
        let points = collect_lines(["1 2", "1.0 2.00"]);
        assert_eq!(points.distinct_len(), 1);
        assert_eq!(points.count(d("1"), d("2")), Some(2));
    }

    #[test]
    fn dump_format_is_nested_and_sorted() {
        let points = collect_lines(["3 4", "1 2", "1 2", "0 2"]);
        assert_eq!(points.to_string(), "{2: {0: 1, 1: 2}, 4: {3: 1}}");
        assert_eq!(PointSet::new().to_string(), "{}");
    }

    #[test]
    fn columns_are_parallel() {
        let points = collect_lines(["5 1", "2 1", "0 9"]);
        let (xs, ys) = points.columns();
        assert_eq!(xs, vec![d("2"), d("5"), d("0")]);
        assert_eq!(ys, vec![d("1"), d("1"), d("9")]);
    }

    #[test]
    fn reader_handles_crlf_and_missing_final_newline() {
        let points = read_points("1 2\r\nabc\r\n7".as_bytes()).unwrap();
        assert_eq!(points.count(d("1"), d("2")), Some(1));
        assert_eq!(points.count(d("2"), d("3")), Some(1));
        assert_eq!(points.count(d("3"), d("7")), Some(1));
        assert_eq!(points.total(), 3);
    }

    #[test]
    fn reader_keeps_lines_with_invalid_utf8() {
        let points = read_points(&b"\xff\xfe 4\n"[..]).unwrap();
        assert_eq!(points.count(d("1"), d("4")), Some(1));
    }

    #[test]
    fn empty_stream_is_an_empty_set() {
        let points = read_points(std::io::empty()).unwrap();
        assert!(points.is_empty());
        assert_eq!(points.total(), 0);
    }
}
