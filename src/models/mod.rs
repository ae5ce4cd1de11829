mod statement;

pub use statement::Statement;
