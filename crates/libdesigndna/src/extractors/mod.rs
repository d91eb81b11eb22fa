//! Regex-based pattern extractors.
//!
//! Each extractor scans the full input independently and builds its
//! frequency map (or discovery-ordered set) fresh per call. There is no
//! tokenizer behind these: the regexes, plus the manual parenthesis
//! balancing in `gradients`, are the whole acceptance definition.

pub mod colors;
pub mod fonts;
pub mod gradients;
pub mod layout;
