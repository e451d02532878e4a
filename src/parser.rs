// reference
// Aho, Sethi, Ullman. Compilers: Principles, Techniques, and Tools, 3.9
// "From a regular expression to a DFA"

// syntax (operators by precedence, highest first)
//
// star      = operand '*'
// concat    = operand '.' operand   ('.' is inserted, never typed)
// union     = operand '|' operand
// group     = '(' root ')'
// symbol    = [0-9A-Za-z]
//
// The expression is compiled as '(' root ')' '#', where '#' is the
// reserved end marker.

pub(crate) mod ast;
mod builder;
mod expand;
mod parser;
mod postfix;
mod validate;

pub(crate) use ast::SyntaxTree;
pub(crate) use parser::Parser;
