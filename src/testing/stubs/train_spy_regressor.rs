use crate::core::rows::Row;
use crate::evaluation::VariableSummary;
use crate::regressors::Regressor;
use std::cell::RefCell;
use std::rc::Rc;

/// Regressor that records the target of every training call and predicts 0.
pub struct TrainSpyRegressor {
    targets: Rc<RefCell<Vec<f64>>>,
}

#[derive(Clone)]
pub struct TrainSpyHandle {
    targets: Rc<RefCell<Vec<f64>>>,
}

impl TrainSpyRegressor {
    pub fn new() -> (Self, TrainSpyHandle) {
        let targets = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                targets: Rc::clone(&targets),
            },
            TrainSpyHandle { targets },
        )
    }
}

impl TrainSpyHandle {
    pub fn count(&self) -> usize {
        self.targets.borrow().len()
    }

    pub fn targets(&self) -> Vec<f64> {
        self.targets.borrow().clone()
    }
}

impl Regressor for TrainSpyRegressor {
    fn train_on_row(&mut self, _predictors: &Row, target: f64) {
        self.targets.borrow_mut().push(target);
    }

    fn predict_row(&self, _predictors: &Row) -> f64 {
        0.0
    }

    fn variable_summaries(&self) -> Vec<VariableSummary> {
        Vec::new()
    }
}
