//! Thread-local inspector pooling.
//!
//! Building a parser means loading the grammar, which is wasted work when
//! done per request. Each thread lazily builds one [`TreeInspector`] and
//! reuses it; the `&mut` closure access serializes use of the underlying
//! parser within the thread.

use crate::service::TreeInspector;
use crate::ts::TreeSitterError;
use std::cell::RefCell;

thread_local! {
    static INSPECTOR: RefCell<Option<TreeInspector>> = const { RefCell::new(None) };
}

/// Execute a function with this thread's pooled inspector.
///
/// On first call per thread, creates a new inspector. Subsequent calls
/// reuse the same instance, avoiding grammar re-initialization.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use cst_inspector::pool::with_inspector;
///
/// let tree = with_inspector(|inspector| inspector.parse("let x = 1;"))??;
/// assert_eq!(tree.label, "program");
/// # Ok(())
/// # }
/// ```
pub fn with_inspector<F, R>(f: F) -> Result<R, TreeSitterError>
where
    F: FnOnce(&mut TreeInspector) -> R,
{
    INSPECTOR.with(|cell| {
        let mut opt = cell.borrow_mut();
        if opt.is_none() {
            *opt = Some(TreeInspector::new()?);
        }
        Ok(f(opt.as_mut().expect("inspector was just initialized above")))
    })
}
