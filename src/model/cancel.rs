use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for scheduled loops and deferred callbacks.
///
/// Child tokens observe their parent: cancelling the page-level token stops
/// every loop derived from it, while a child can be cancelled on its own.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Rc<Cell<bool>>,
    parent: Option<Rc<CancelToken>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(&self) -> CancelToken {
        CancelToken {
            flag: Rc::new(Cell::new(false)),
            parent: Some(Rc::new(self.clone())),
        }
    }

    pub fn cancel(&self) {
        self.flag.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.get() || self.parent.as_ref().is_some_and(|p| p.is_cancelled())
    }
}
