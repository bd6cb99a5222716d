use rowbind_types::ScanTarget;

/// A cursor positioned on one row of a tabular result.
///
/// The mapper asks for the column names, then hands back one target per
/// column, in the same order, to be filled from the current row. Errors are
/// the source's own and are returned to the caller untouched.
pub trait RowSource {
    type Error;

    /// Column names of the current result, in result order.
    fn columns(&self) -> Result<Vec<String>, Self::Error>;

    /// Fills `targets[i]` from column `i` of the current row.
    ///
    /// On error some targets may already be written; the mapper restores
    /// them.
    fn populate(&mut self, targets: &mut [ScanTarget<'_>]) -> Result<(), Self::Error>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    type Error = S::Error;

    fn columns(&self) -> Result<Vec<String>, Self::Error> {
        (**self).columns()
    }

    fn populate(&mut self, targets: &mut [ScanTarget<'_>]) -> Result<(), Self::Error> {
        (**self).populate(targets)
    }
}
