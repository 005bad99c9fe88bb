//! DIMACS CNF parser and writer for the trisat solvers.
//!
//! The parser is line oriented: every line that is not empty, a comment or a problem line holds
//! exactly one clause. The terminating `0` of a clause line is optional.

use std::{borrow::Borrow, io, mem::replace};

use trisat_formula::{CnfFormula, Lit, Var};

use anyhow::Error;
use thiserror::Error;

/// Possible errors while parsing a DIMACS CNF formula.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("line {}: Expected a literal but found '{}'", line, token)]
    InvalidLiteral { line: usize, token: String },
    #[error("line {}: Literal 0 may only terminate a clause", line)]
    ZeroLiteral { line: usize },
    #[error("line {}: Literal is too large: {}", line, literal)]
    LiteralTooLarge { line: usize, literal: String },
    #[error("line {}: Invalid header syntax: {}", line, header)]
    InvalidHeader { line: usize, header: String },
    #[error("line {}: Duplicate header: {}", line, header)]
    DuplicateHeader { line: usize, header: String },
    #[error(
        "Formula has {} variables while the header specifies {} variables",
        var_count,
        header_var_count
    )]
    VarCount {
        var_count: usize,
        header_var_count: usize,
    },
    #[error(
        "Formula has {} clauses while the header specifies {} clauses",
        clause_count,
        header_clause_count
    )]
    ClauseCount {
        clause_count: usize,
        header_clause_count: usize,
    },
    #[error("Parser invoked after a previous error")]
    PreviousError,
}

/// Variable and clause count present in a DIMACS CNF header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DimacsHeader {
    pub var_count: usize,
    pub clause_count: usize,
}

/// Parser for DIMACS CNF files.
///
/// This parser can consume the input in chunks while also producing the parsed result in chunks.
/// Chunk boundaries may fall anywhere, including inside a line.
#[derive(Default)]
pub struct DimacsParser {
    formula: CnfFormula,
    partial_clause: Vec<Lit>,
    partial_line: Vec<u8>,
    header: Option<DimacsHeader>,

    line_number: usize,
    var_count: usize,
    clause_count: usize,

    error: bool,
}

impl DimacsParser {
    /// Create a new DIMACS CNF parser.
    pub fn new() -> DimacsParser {
        DimacsParser {
            line_number: 1,
            ..DimacsParser::default()
        }
    }

    /// Parse the given input.
    ///
    /// Header counts are not checked, call [`check_header`](DimacsParser::check_header) on a
    /// parser obtained through [`parse_incremental`](DimacsParser::parse_incremental) for that.
    pub fn parse(input: impl io::Read) -> Result<CnfFormula, Error> {
        Ok(Self::parse_incremental(input, |_| Ok(()))?.take_formula())
    }

    /// Parse the given input incrementally.
    ///
    /// The callback is invoked repeatedly with a reference to the parser. The callback can process
    /// the formula incrementally by calling [`take_formula`](DimacsParser::take_formula) on the
    /// passed argument.
    pub fn parse_incremental(
        input: impl io::Read,
        mut callback: impl FnMut(&mut DimacsParser) -> Result<(), Error>,
    ) -> Result<DimacsParser, Error> {
        use io::BufRead;

        let mut buffer = io::BufReader::new(input);
        let mut parser = Self::new();

        loop {
            let data = buffer.fill_buf()?;
            if data.is_empty() {
                break;
            }
            parser.parse_chunk(data)?;
            let len = data.len();
            buffer.consume(len);

            callback(&mut parser)?;
        }
        parser.eof()?;
        callback(&mut parser)?;

        Ok(parser)
    }

    /// Parse a chunk of input.
    ///
    /// After parsing the last chunk call the [`eof`](DimacsParser::eof) method.
    ///
    /// If this method returns an error, the parser is in an invalid state and cannot parse further
    /// chunks.
    pub fn parse_chunk(&mut self, chunk: &[u8]) -> Result<(), ParserError> {
        if self.error {
            return Err(ParserError::PreviousError);
        }
        for &byte in chunk.iter() {
            if byte == b'\n' {
                self.finish_line()?;
                self.line_number += 1;
            } else {
                self.partial_line.push(byte);
            }
        }
        Ok(())
    }

    /// Finish parsing the input.
    ///
    /// Parses a final line that is not terminated by a newline.
    pub fn eof(&mut self) -> Result<(), ParserError> {
        if self.error {
            return Err(ParserError::PreviousError);
        }
        if !self.partial_line.is_empty() {
            self.finish_line()?;
        }
        Ok(())
    }

    /// Verifies the header information when present.
    ///
    /// Does nothing when the input doesn't contain a header. Header counts are informational, so
    /// callers usually only report the returned error.
    pub fn check_header(&self) -> Result<(), ParserError> {
        if let Some(header) = self.header {
            if self.var_count != header.var_count {
                return Err(ParserError::VarCount {
                    var_count: self.var_count,
                    header_var_count: header.var_count,
                });
            }

            if self.clause_count != header.clause_count {
                return Err(ParserError::ClauseCount {
                    clause_count: self.clause_count,
                    header_clause_count: header.clause_count,
                });
            }
        }

        Ok(())
    }

    /// Returns the subformula of everything parsed since the last call to this method.
    ///
    /// The variable count of the returned formula is the variable count of everything parsed so
    /// far.
    pub fn take_formula(&mut self) -> CnfFormula {
        let mut new_formula = CnfFormula::new();
        new_formula.set_var_count(self.var_count);
        let mut formula = replace(&mut self.formula, new_formula);
        formula.set_var_count(self.var_count);
        formula
    }

    /// Return the DIMACS CNF header data if present.
    pub fn header(&self) -> Option<DimacsHeader> {
        self.header
    }

    /// Number of clauses parsed.
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    /// Number of variables in the parsed formula.
    pub fn var_count(&self) -> usize {
        self.var_count
    }

    fn finish_line(&mut self) -> Result<(), ParserError> {
        let bytes = replace(&mut self.partial_line, vec![]);
        let line = String::from_utf8_lossy(&bytes);
        let result = self.parse_line(line.trim());
        if result.is_err() {
            self.error = true;
        }
        result
    }

    fn parse_line(&mut self, line: &str) -> Result<(), ParserError> {
        if line.is_empty() || line.starts_with('c') {
            return Ok(());
        }
        if line.starts_with('p') {
            return self.parse_header_line(line);
        }

        self.partial_clause.clear();

        let mut tokens = line.split_whitespace().peekable();
        while let Some(token) = tokens.next() {
            let number: isize = token.parse().map_err(|_| ParserError::InvalidLiteral {
                line: self.line_number,
                token: token.to_owned(),
            })?;

            if number == 0 {
                if tokens.peek().is_some() {
                    return Err(ParserError::ZeroLiteral {
                        line: self.line_number,
                    });
                }
                break;
            }

            match Lit::try_from_dimacs(number) {
                Some(lit) => self.partial_clause.push(lit),
                None => {
                    return Err(ParserError::LiteralTooLarge {
                        line: self.line_number,
                        literal: token.to_owned(),
                    })
                }
            }
        }

        if self.partial_clause.is_empty() {
            return Ok(());
        }

        for &lit in self.partial_clause.iter() {
            self.var_count = self.var_count.max(lit.index() + 1);
        }
        self.formula.add_clause(&self.partial_clause);
        self.clause_count += 1;

        Ok(())
    }

    /// Parses a problem line.
    ///
    /// Only `p cnf <vars> <clauses>` lines are interpreted, other problem lines are skipped.
    fn parse_header_line(&mut self, line: &str) -> Result<(), ParserError> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() < 4 || fields[1] != "cnf" {
            return Ok(());
        }

        if self.header.is_some() {
            return Err(ParserError::DuplicateHeader {
                line: self.line_number,
                header: line.to_owned(),
            });
        }

        let invalid_header = || ParserError::InvalidHeader {
            line: self.line_number,
            header: line.to_owned(),
        };

        let var_count: usize = fields[2].parse().map_err(|_| invalid_header())?;
        let clause_count: usize = fields[3].parse().map_err(|_| invalid_header())?;

        if var_count > Var::max_count() {
            return Err(ParserError::LiteralTooLarge {
                line: self.line_number,
                literal: fields[2].to_owned(),
            });
        }

        self.header = Some(DimacsHeader {
            var_count,
            clause_count,
        });

        Ok(())
    }
}

/// Write a DIMACS CNF header.
///
/// Can be used with [`write_dimacs_clauses`] to implement incremental writing.
pub fn write_dimacs_header(target: &mut impl io::Write, header: DimacsHeader) -> io::Result<()> {
    writeln!(
        target,
        "p cnf {var_count} {clause_count}",
        var_count = header.var_count,
        clause_count = header.clause_count
    )
}

/// Write an iterator of clauses as headerless DIMACS CNF.
///
/// Can be used with [`write_dimacs_header`] to implement incremental writing.
pub fn write_dimacs_clauses(
    target: &mut impl io::Write,
    clauses: impl IntoIterator<Item = impl IntoIterator<Item = impl Borrow<Lit>>>,
) -> io::Result<()> {
    for clause in clauses.into_iter() {
        for lit in clause.into_iter() {
            itoa::write(&mut *target, lit.borrow().to_dimacs())?;
            target.write_all(b" ")?;
        }
        target.write_all(b"0\n")?;
    }
    Ok(())
}

/// Write a formula as DIMACS CNF.
///
/// Use [`write_dimacs_header`] and [`write_dimacs_clauses`] to implement incremental writing.
pub fn write_dimacs(target: &mut impl io::Write, formula: &CnfFormula) -> io::Result<()> {
    write_dimacs_header(
        &mut *target,
        DimacsHeader {
            var_count: formula.var_count(),
            clause_count: formula.len(),
        },
    )?;
    write_dimacs_clauses(&mut *target, formula.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::Error;
    use proptest::{test_runner::TestCaseError, *};

    use trisat_formula::{cnf::strategy::*, cnf_formula};

    #[test]
    fn odd_whitespace() -> Result<(), Error> {
        let parsed = DimacsParser::parse(
            b"c leading comment\np  cnf  4   3  \n  1  2 3 \n\t-4 0\r\n\n 2\nccomment  \n" as &[_],
        )?;

        let expected = cnf_formula![
            1, 2, 3;
            -4;
            2;
        ];

        assert_eq!(parsed, expected);

        Ok(())
    }

    #[test]
    fn one_clause_per_line() -> Result<(), Error> {
        let parsed = DimacsParser::parse(b"1 -2 0\n0\n-1\n3 3 -1 0" as &[_])?;

        let expected = cnf_formula![
            1, -2;
            -1;
            3, 3, -1;
        ];

        assert_eq!(parsed, expected);

        Ok(())
    }

    #[test]
    fn header_is_informational() -> Result<(), Error> {
        let parser = DimacsParser::parse_incremental(b"p cnf 9 5\n1 2 0\n" as &[_], |_| Ok(()))?;

        assert_eq!(
            parser.header(),
            Some(DimacsHeader {
                var_count: 9,
                clause_count: 5
            })
        );
        assert_eq!(parser.var_count(), 2);
        assert_eq!(parser.clause_count(), 1);

        match parser.check_header() {
            Err(ParserError::VarCount {
                var_count: 2,
                header_var_count: 9,
            }) => (),
            other => panic!("Unexpected header check result {:?}", other),
        }

        Ok(())
    }

    #[test]
    fn header_check_counts_clauses() -> Result<(), Error> {
        let parser =
            DimacsParser::parse_incremental(b"p cnf 2 3\n1 2 0\n-2 0\n" as &[_], |_| Ok(()))?;

        match parser.check_header() {
            Err(ParserError::ClauseCount {
                clause_count: 2,
                header_clause_count: 3,
            }) => (),
            other => panic!("Unexpected header check result {:?}", other),
        }

        let parser = DimacsParser::parse_incremental(b"p cnf 2 1\n1 -2 0\n" as &[_], |_| Ok(()))?;
        parser.check_header()?;

        Ok(())
    }

    #[test]
    fn other_problem_lines_are_skipped() -> Result<(), Error> {
        let parsed = DimacsParser::parse(b"p sat 3\np cnf\n1 0\n" as &[_])?;
        assert_eq!(parsed, cnf_formula![1;]);
        Ok(())
    }

    #[test]
    fn chunk_boundaries_inside_lines() -> Result<(), Error> {
        let mut parser = DimacsParser::new();
        parser.parse_chunk(b"p cnf 3 2\n1 -")?;
        parser.parse_chunk(b"2 0\n-3")?;
        parser.parse_chunk(b"1 0")?;
        parser.eof()?;

        assert_eq!(parser.take_formula(), cnf_formula![1, -2; -31;]);

        Ok(())
    }

    macro_rules! expect_error {
        ( $input:expr, $( $cases:tt )* ) => {
            match DimacsParser::parse($input as &[_]) {
                Ok(parsed) => panic!("Expected error but got {:?}", parsed),
                Err(err) => match err.downcast_ref() {
                    Some(casted_err) => match casted_err {
                        $( $cases )*,
                        _ => panic!("Unexpected error {:?}", casted_err),
                    },
                    None => panic!("Unexpected error type {:?}", err),
                }
            }
        };
    }

    #[test]
    fn invalid_headers() {
        expect_error!(b"p cnf foo bar", ParserError::InvalidHeader { .. } => ());
        expect_error!(b"p cnf -3 -6", ParserError::InvalidHeader { .. } => ());
        expect_error!(b"p cnf 4 18446744073709551616", ParserError::InvalidHeader { .. } => ());

        expect_error!(
            format!("p cnf {} 4", Var::max_count() + 1).as_bytes(),
            ParserError::LiteralTooLarge { .. } => ()
        );

        expect_error!(
            b"p cnf 1 2\np cnf 1 2\n",
            ParserError::DuplicateHeader { line: 2, .. } => ()
        );
    }

    #[test]
    fn syntax_errors() {
        expect_error!(
            b"1 2 ?foo",
            ParserError::InvalidLiteral { line: 1, .. } => ()
        );

        expect_error!(
            b"1 0\n1 2 - 3 0",
            ParserError::InvalidLiteral { line: 2, .. } => ()
        );

        expect_error!(
            b"1 2 --3 0",
            ParserError::InvalidLiteral { .. } => ()
        );

        expect_error!(
            b"%\n0\n",
            ParserError::InvalidLiteral { .. } => ()
        );
    }

    #[test]
    fn zero_inside_clause() {
        expect_error!(
            b"1 0 2 0",
            ParserError::ZeroLiteral { line: 1 } => ()
        );
    }

    #[test]
    fn literal_too_large() {
        expect_error!(
            format!("1 {} 2 0", Var::max_var().to_dimacs() + 1).as_bytes(),
            ParserError::LiteralTooLarge { .. } => ()
        );

        assert_eq!(
            DimacsParser::parse(format!("1 {} 2 0", Var::max_var().to_dimacs()).as_bytes())
                .unwrap(),
            cnf_formula![
                1, Var::max_var().to_dimacs(), 2;
            ]
        );
    }

    #[test]
    fn no_parsing_after_error() {
        let mut parser = DimacsParser::new();
        assert!(parser.parse_chunk(b"1 x 0\n").is_err());
        match parser.parse_chunk(b"1 0\n") {
            Err(ParserError::PreviousError) => (),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn roundtrip(input in cnf_formula(1..100usize, 0..1000, 1..10)) {
            let mut buf = vec![];

            write_dimacs(&mut buf, &input)?;

            let parsed = DimacsParser::parse(&buf[..]).map_err(|e| TestCaseError::fail(e.to_string()))?;

            prop_assert_eq!(parsed, input);
        }
    }
}
