pub mod chain_match;
