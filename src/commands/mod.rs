use crate::error::InstructionError;
use crate::models::SongId;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

// Whitespace is ASCII only: space, \t, \n, \v, \f and \r
lazy_static! {
    static ref NEW_RE: Regex = Regex::new(r"^(?-u:\s)*NEW(?-u:\s)+([0-9]+)(?-u:\s)*$").unwrap();
    static ref TOP_RE: Regex = Regex::new(r"^(?-u:\s)*TOP(?-u:\s)*$").unwrap();
    // Up to nine significant digits per song id, leading zeros allowed
    static ref VOTE_RE: Regex =
        Regex::new(r"^(?-u:\s)*(0*[0-9]{1,9}(?-u:\s)+)*0*[0-9]{1,9}(?-u:\s)*$").unwrap();
    static ref BLANK_RE: Regex = Regex::new(r"^(?-u:\s)*$").unwrap();
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    CloseRound,
    Standings,
    Vote,
    Blank,
}

// A classified line with its payload parsed, ready for the contest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    CloseRound(SongId),
    Standings,
    Vote(Vec<SongId>),
    Blank,
}

// First matching grammar wins, in the order NEW, TOP, vote, blank
pub fn classify(line: &str) -> Option<InstructionKind> {
    if NEW_RE.is_match(line) {
        Some(InstructionKind::CloseRound)
    } else if TOP_RE.is_match(line) {
        Some(InstructionKind::Standings)
    } else if VOTE_RE.is_match(line) {
        Some(InstructionKind::Vote)
    } else if BLANK_RE.is_match(line) {
        Some(InstructionKind::Blank)
    } else {
        None
    }
}

pub fn parse(line: &str) -> Result<Instruction, InstructionError> {
    match classify(line).ok_or(InstructionError::Unrecognized)? {
        InstructionKind::CloseRound => parse_bound(line).map(Instruction::CloseRound),
        InstructionKind::Standings => Ok(Instruction::Standings),
        InstructionKind::Vote => parse_ballot(line).map(Instruction::Vote),
        InstructionKind::Blank => Ok(Instruction::Blank),
    }
}

/// Extracts the roster bound from a `NEW <n>` line.
///
/// Range checks against the current contest happen when the round is closed.
pub fn parse_bound(line: &str) -> Result<SongId, InstructionError> {
    let digits = NEW_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(InstructionError::Unrecognized)?;

    digits
        .parse::<SongId>()
        .map_err(|_| InstructionError::MalformedBound(digits.to_string()))
}

/// Splits a vote line into song ids, in line order.
///
/// Rejects a line that names the same song twice; eligibility is checked by the contest.
pub fn parse_ballot(line: &str) -> Result<Vec<SongId>, InstructionError> {
    let mut seen = HashSet::new();
    let mut ballot = Vec::new();

    for token in line.split(is_separator).filter(|token| !token.is_empty()) {
        let song = token
            .parse::<SongId>()
            .map_err(|_| InstructionError::MalformedSongId(token.to_string()))?;

        if !seen.insert(song) {
            return Err(InstructionError::DuplicateVote(song));
        }
        ballot.push(song);
    }

    Ok(ballot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_kind() {
        assert_eq!(classify("NEW 10"), Some(InstructionKind::CloseRound));
        assert_eq!(classify("  NEW\t0  "), Some(InstructionKind::CloseRound));
        assert_eq!(classify("TOP"), Some(InstructionKind::Standings));
        assert_eq!(classify(" TOP "), Some(InstructionKind::Standings));
        assert_eq!(classify("1 2 3"), Some(InstructionKind::Vote));
        assert_eq!(classify("  007  "), Some(InstructionKind::Vote));
        assert_eq!(classify(""), Some(InstructionKind::Blank));
        assert_eq!(classify(" \t "), Some(InstructionKind::Blank));
    }

    #[test]
    fn test_classify_rejects_garbage() {
        assert_eq!(classify("NEW"), None);
        assert_eq!(classify("NEW -3"), None);
        assert_eq!(classify("NEW 3 4"), None);
        assert_eq!(classify("TOP 3"), None);
        assert_eq!(classify("top"), None);
        assert_eq!(classify("1, 2"), None);
        assert_eq!(classify("-1"), None);
        assert_eq!(classify("hello"), None);
        // Ten significant digits is too long for a song id
        assert_eq!(classify("1234567890"), None);
        assert_eq!(classify("000123456789"), Some(InstructionKind::Vote));
    }

    #[test]
    fn test_only_ascii_whitespace_separates() {
        // No-break space between ids, em space alone on a line
        assert_eq!(classify("1\u{a0}2"), None);
        assert_eq!(classify("\u{2003}"), None);
        assert_eq!(classify("TOP\u{2003}"), None);
        assert_eq!(classify("NEW\u{a0}3"), None);
        assert_eq!(parse("\u{2003}"), Err(InstructionError::Unrecognized));

        // Vertical tab and form feed are still whitespace
        assert_eq!(classify("1\x0B2\x0C3"), Some(InstructionKind::Vote));
        assert_eq!(parse_ballot("1\x0B2\x0C3\r"), Ok(vec![1, 2, 3]));
        assert_eq!(classify("\x0B\r"), Some(InstructionKind::Blank));
    }

    #[test]
    fn test_parse_dispatches() {
        assert_eq!(parse("NEW 5"), Ok(Instruction::CloseRound(5)));
        assert_eq!(parse("TOP"), Ok(Instruction::Standings));
        assert_eq!(parse(" 3  1 "), Ok(Instruction::Vote(vec![3, 1])));
        assert_eq!(parse(""), Ok(Instruction::Blank));
        assert_eq!(parse("VOTE 1"), Err(InstructionError::Unrecognized));
    }

    #[test]
    fn test_parse_bound_overflow() {
        assert_eq!(
            parse_bound("NEW 99999999999999999999999"),
            Err(InstructionError::MalformedBound("99999999999999999999999".to_string()))
        );
        assert_eq!(parse_bound("NEW 0042"), Ok(42));
    }

    #[test]
    fn test_parse_ballot_duplicates() {
        assert_eq!(parse_ballot("4 2 4"), Err(InstructionError::DuplicateVote(4)));
        // Leading zeros name the same song
        assert_eq!(parse_ballot("01 1"), Err(InstructionError::DuplicateVote(1)));
        assert_eq!(parse_ballot("0 12"), Ok(vec![0, 12]));
    }
}
