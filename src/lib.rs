pub mod convert;
pub mod error;
pub mod eval;
pub mod repl;
pub mod scan;
pub mod test_impls;
pub mod validate;
pub mod vars;

pub use crate::convert::{convert, to_postfix};
pub use crate::error::RpnError;
pub use crate::eval::{apply, evaluate};
pub use crate::repl::{classify, expression, Line, Outcome, Session, State};
pub use crate::scan::{scan, Operator, Token};
pub use crate::validate::{valid_characters, valid_parentheses, validate};
pub use crate::vars::{Binding, Var, Variables};
