//! Row type introspection.
//!
//! A row type passed to the engine describes itself through [`Model`]. The
//! resolver accepts a record directly or behind exactly one pointer
//! (`Box`, `Rc`, `Arc`) and rejects everything else before any query runs.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::PaginationError;

/// Table a record type is stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableBinding {
    pub table: &'static str,
    pub primary_key: &'static str,
}

impl TableBinding {
    pub const fn new(table: &'static str, primary_key: &'static str) -> Self {
        Self { table, primary_key }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Record(TableBinding),
    Reference(Box<Shape>),
    Scalar(&'static str),
}

impl Shape {
    fn describe(&self) -> String {
        match self {
            Shape::Record(binding) => format!("record `{}`", binding.table),
            Shape::Reference(inner) => format!("reference to {}", inner.describe()),
            Shape::Scalar(name) => format!("`{}`", name),
        }
    }
}

pub trait Model: Sized {
    /// Row type loaded from the database.
    type Record;

    fn shape() -> Shape;

    fn from_record(record: Self::Record) -> Self;
}

pub fn resolve<D: Model>() -> Result<TableBinding, PaginationError> {
    resolve_shape(D::shape())
}

fn resolve_shape(shape: Shape) -> Result<TableBinding, PaginationError> {
    let elem = match shape {
        Shape::Reference(inner) => *inner,
        shape => shape,
    };

    match elem {
        Shape::Record(binding) => Ok(binding),
        other => Err(PaginationError::InvalidModelType(other.describe())),
    }
}

macro_rules! reference_model {
    ($($pointer:ident),*) => {
        $(
            impl<M: Model> Model for $pointer<M> {
                type Record = M::Record;

                fn shape() -> Shape {
                    Shape::Reference(Box::new(M::shape()))
                }

                fn from_record(record: Self::Record) -> Self {
                    $pointer::new(M::from_record(record))
                }
            }
        )*
    };
}

reference_model!(Box, Rc, Arc);

macro_rules! scalar_model {
    ($($scalar:ty),*) => {
        $(
            impl Model for $scalar {
                type Record = $scalar;

                fn shape() -> Shape {
                    Shape::Scalar(stringify!($scalar))
                }

                fn from_record(record: Self::Record) -> Self {
                    record
                }
            }
        )*
    };
}

scalar_model!(
    bool, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64, char,
    String
);

/// Binds a struct to its table:
///
/// ```
/// struct User {
///     id: i64,
/// }
///
/// pagination::model!(User => "users", "id");
/// ```
#[macro_export]
macro_rules! model {
    ($record:ty => $table:expr, $primary_key:expr) => {
        impl $crate::model::Model for $record {
            type Record = $record;

            fn shape() -> $crate::model::Shape {
                $crate::model::Shape::Record($crate::model::TableBinding::new(
                    $table,
                    $primary_key,
                ))
            }

            fn from_record(record: Self::Record) -> Self {
                record
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Account {
        id: i64,
    }

    crate::model!(Account => "accounts", "id");

    const ACCOUNTS: TableBinding = TableBinding::new("accounts", "id");

    #[test]
    fn test_resolve_record() {
        assert_eq!(resolve::<Account>().unwrap(), ACCOUNTS);
    }

    #[test]
    fn test_resolve_reference_to_record() {
        assert_eq!(resolve::<Box<Account>>().unwrap(), ACCOUNTS);
        assert_eq!(resolve::<Rc<Account>>().unwrap(), ACCOUNTS);
        assert_eq!(resolve::<Arc<Account>>().unwrap(), ACCOUNTS);
    }

    #[test]
    fn test_resolve_rejects_scalars() {
        let err = resolve::<i64>().unwrap_err();
        assert!(matches!(err, PaginationError::InvalidModelType(_)));

        let err = resolve::<Box<String>>().unwrap_err();
        assert!(matches!(err, PaginationError::InvalidModelType(_)));
    }

    #[test]
    fn test_resolve_rejects_double_reference() {
        let err = resolve::<Box<Box<Account>>>().unwrap_err();

        match err {
            PaginationError::InvalidModelType(found) => {
                assert_eq!(found, "reference to record `accounts`")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reference_wraps_record() {
        let account = <Box<Account>>::from_record(Account { id: 7 });
        assert_eq!(*account, Account { id: 7 });
    }
}
