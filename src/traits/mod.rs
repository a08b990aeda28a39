mod cursor;
mod queryable;
mod statement;

pub use cursor::RowCursor;
pub use queryable::Queryable;
pub use statement::Statement;
