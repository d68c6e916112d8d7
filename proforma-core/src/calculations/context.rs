use crate::actuals::{ActualsProvider, ActualsTable};
use crate::inputs::LineItemStore;
use crate::models::{PropertyAssumptions, Timeline};

/// Everything the engines read: current inputs, historical actuals and the
/// property assumptions. Borrowed for the duration of a calculation, so
/// every accessor sees one consistent state.
#[derive(Clone, Copy)]
pub struct ProjectionContext<'a> {
    store: &'a LineItemStore,
    actuals: &'a dyn ActualsProvider,
    assumptions: &'a PropertyAssumptions,
}

impl<'a> ProjectionContext<'a> {
    pub fn new(
        store: &'a LineItemStore,
        actuals: &'a dyn ActualsProvider,
        assumptions: &'a PropertyAssumptions,
    ) -> Self {
        Self {
            store,
            actuals,
            assumptions,
        }
    }

    pub fn timeline(&self) -> &'a Timeline {
        self.store.timeline()
    }

    pub fn store(&self) -> &'a LineItemStore {
        self.store
    }

    pub fn actuals(&self) -> ActualsTable<'a> {
        ActualsTable::new(self.store.timeline(), self.actuals)
    }

    pub fn assumptions(&self) -> &'a PropertyAssumptions {
        self.assumptions
    }
}
