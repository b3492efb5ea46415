pub mod corpus;
pub mod words;
