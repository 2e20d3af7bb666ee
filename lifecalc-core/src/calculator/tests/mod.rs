use super::*;
mod accumulate;
mod quotient;
