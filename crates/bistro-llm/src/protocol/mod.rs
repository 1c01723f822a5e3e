//! Wire formats of upstream language model APIs

pub mod openai;
