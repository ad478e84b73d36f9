//! Parses the solver's statement grammar:
//! `statement = rank , { ">" , rank } ; rank = token , { "=" , token } ; token = UPPER , [ UPPER ] ;`

use bl_core::statement::{RankGroup, Statement, Token};
use bl_core::CandidateId;

use crate::errors::StatementError;

fn parse_token(raw: &str) -> Result<Token, StatementError> {
    let bytes = raw.as_bytes();
    let valid_len = matches!(bytes.len(), 1 | 2);
    let all_upper = raw.chars().all(|ch| ch.is_ascii_uppercase());
    if !valid_len || !all_upper {
        return Err(StatementError::MalformedToken(raw.to_string()));
    }

    if bytes.len() == 1 {
        Ok(Token::Plurality(CandidateId::new(raw)))
    } else {
        let ahead = CandidateId::new(&raw[0..1]);
        let behind = CandidateId::new(&raw[1..2]);
        Ok(Token::Pairwise(ahead, behind))
    }
}

pub fn parse_statement(input: &str) -> Result<Statement, StatementError> {
    if input.trim().is_empty() {
        return Err(StatementError::EmptyStatement);
    }

    let mut ranks = Vec::new();
    for (index, rank_str) in input.split('>').enumerate() {
        if rank_str.trim().is_empty() {
            return Err(StatementError::EmptyRankGroup(index));
        }

        let mut tokens = Vec::new();
        for token_str in rank_str.split('=') {
            tokens.push(parse_token(token_str.trim())?);
        }
        ranks.push(RankGroup(tokens));
    }

    Ok(Statement::new(ranks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairwise_and_plurality_tokens() {
        let statement = parse_statement("AB>CD>BD>AD>BC>AC").unwrap();
        assert_eq!(statement.ranks.len(), 6);
    }

    #[test]
    fn parses_within_rank_equality() {
        let statement = parse_statement("AB=CD>BC").unwrap();
        assert_eq!(statement.ranks[0].0.len(), 2);
    }

    #[test]
    fn rejects_lowercase_token() {
        assert_eq!(
            parse_statement("ab>cd"),
            Err(StatementError::MalformedToken("ab".to_string()))
        );
    }

    #[test]
    fn rejects_empty_statement() {
        assert_eq!(parse_statement("   "), Err(StatementError::EmptyStatement));
    }

    #[test]
    fn rejects_empty_rank_group() {
        assert_eq!(
            parse_statement("AB>>CD"),
            Err(StatementError::EmptyRankGroup(1))
        );
    }
}
