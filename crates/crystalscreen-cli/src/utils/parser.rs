use crystalscreen::core::models::fragment::{Fragment, FragmentCounts};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid fragment pair '{0}'. Expected 'label=count' (e.g., 'cooh=1').")]
    InvalidPairFormat(String),

    #[error("Unknown fragment label '{0}'. Run with -vv to see the vocabulary.")]
    UnknownLabel(String),

    #[error("Invalid count in '{0}'. Expected a non-negative integer.")]
    InvalidCount(String),
}

/// Parses repeated `label=count` arguments into a fragment map.
///
/// Unlike the library's lenient label path, an unknown label is an error
/// here so a typo does not silently distort the estimate.
pub fn parse_fragment_pairs(pairs: &[String]) -> Result<FragmentCounts, ParseError> {
    let mut counts = FragmentCounts::new();
    for pair in pairs {
        let (label, count) = pair
            .split_once('=')
            .ok_or_else(|| ParseError::InvalidPairFormat(pair.clone()))?;
        let fragment = Fragment::from_label(label).ok_or_else(|| {
            let known: Vec<&str> = Fragment::all().map(|f| f.label()).collect();
            debug!("known fragment labels: {}", known.join(", "));
            ParseError::UnknownLabel(label.trim().to_string())
        })?;
        let count: u32 = count
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidCount(pair.clone()))?;
        counts.add(fragment, count);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_pairs_accumulate_counts() {
        let pairs = vec!["cooh=1".to_string(), "ch3=2".to_string()];
        let counts = parse_fragment_pairs(&pairs).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.count(Fragment::CarboxylicAcid), 1);
    }

    #[test]
    fn aliases_and_case_are_normalized() {
        let pairs = vec!["COOH=1".to_string()];
        let counts = parse_fragment_pairs(&pairs).unwrap();
        assert_eq!(counts.count(Fragment::CarboxylicAcid), 1);
    }

    #[test]
    fn missing_equals_sign_is_rejected() {
        let pairs = vec!["cooh".to_string()];
        assert_eq!(
            parse_fragment_pairs(&pairs),
            Err(ParseError::InvalidPairFormat("cooh".to_string()))
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        let pairs = vec!["plutonium=1".to_string()];
        assert_eq!(
            parse_fragment_pairs(&pairs),
            Err(ParseError::UnknownLabel("plutonium".to_string()))
        );
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let pairs = vec!["cooh=lots".to_string()];
        assert_eq!(
            parse_fragment_pairs(&pairs),
            Err(ParseError::InvalidCount("cooh=lots".to_string()))
        );
    }
}
