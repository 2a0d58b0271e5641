use std::rc::Rc;
use yew::Reducible;

use crate::config::Labels;
use crate::model::PAGE_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    Http(u16),
    Network,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerPhase {
    /// Idle, more results may exist.
    Ready,
    Loading,
    /// Last request failed; the user may retry.
    Failed(Failure),
    /// Endpoint answered without a results grid. Terminal, control stays disabled.
    Exhausted,
    /// A short page arrived. Terminal, control is hidden.
    Finished,
}

/// Load-more state: the running offset plus where the control is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    pub skip: u64,
    pub phase: PagerPhase,
}

pub enum PagerAction {
    Begin,
    Loaded { added: usize },
    NoGrid,
    HttpFailed(u16),
    NetworkFailed,
}

impl Pager {
    pub fn new(skip: u64) -> Self {
        Self {
            skip,
            phase: PagerPhase::Ready,
        }
    }

    pub fn can_request(&self) -> bool {
        matches!(self.phase, PagerPhase::Ready | PagerPhase::Failed(_))
    }

    pub fn disabled(&self) -> bool {
        !self.can_request()
    }

    pub fn hidden(&self) -> bool {
        self.phase == PagerPhase::Finished
    }

    pub fn label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self.phase {
            PagerPhase::Ready | PagerPhase::Finished => &labels.load_more,
            PagerPhase::Loading => &labels.loading,
            PagerPhase::Exhausted => &labels.no_more,
            PagerPhase::Failed(Failure::Http(_)) => &labels.http_error,
            PagerPhase::Failed(Failure::Network) => &labels.network_error,
        }
    }
}

impl Reducible for Pager {
    type Action = PagerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PagerAction::*;
        let mut new = (*self).clone();
        match action {
            Begin => {
                if !self.can_request() {
                    return self;
                }
                new.phase = PagerPhase::Loading;
            }
            // Completion actions only count while a request is outstanding.
            _ if self.phase != PagerPhase::Loading => return self,
            Loaded { added } => {
                new.skip = new.skip.saturating_add(added as u64);
                new.phase = if added == 0 || added < PAGE_SIZE {
                    PagerPhase::Finished
                } else {
                    PagerPhase::Ready
                };
            }
            NoGrid => new.phase = PagerPhase::Exhausted,
            HttpFailed(status) => new.phase = PagerPhase::Failed(Failure::Http(status)),
            NetworkFailed => new.phase = PagerPhase::Failed(Failure::Network),
        }
        Rc::new(new)
    }
}
